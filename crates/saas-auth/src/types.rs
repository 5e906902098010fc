// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core type definitions shared by the authorization engine.
//!
//! - **ID newtypes**: Type-safe wrappers around UUIDs for each entity kind
//!   ([`UserId`], [`OrgId`], [`ProjectId`], [`InviteId`], [`MemberId`])
//! - **Roles**: The closed set of membership roles ([`Role`]) that select a rule set
//!
//! All ID types implement transparent serde serialization (as UUID strings) and
//! provide conversion to/from [`uuid::Uuid`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::AuthzError;

// =============================================================================
// ID Newtypes
// =============================================================================

macro_rules! define_id_type {
	($name:ident, $doc:expr) => {
		#[doc = $doc]
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
		#[serde(transparent)]
		pub struct $name(Uuid);

		impl $name {
			/// Create a new ID from a UUID.
			pub fn new(id: Uuid) -> Self {
				Self(id)
			}

			/// Generate a new random ID.
			pub fn generate() -> Self {
				Self(Uuid::new_v4())
			}

			/// Get the inner UUID value.
			pub fn into_inner(self) -> Uuid {
				self.0
			}

			/// Get a reference to the inner UUID.
			pub fn as_uuid(&self) -> &Uuid {
				&self.0
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				write!(f, "{}", self.0)
			}
		}

		impl FromStr for $name {
			type Err = uuid::Error;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Uuid::parse_str(s).map(Self)
			}
		}

		impl From<Uuid> for $name {
			fn from(id: Uuid) -> Self {
				Self(id)
			}
		}

		impl From<$name> for Uuid {
			fn from(id: $name) -> Self {
				id.0
			}
		}
	};
}

define_id_type!(UserId, "Unique identifier for a user.");
define_id_type!(OrgId, "Unique identifier for an organization.");
define_id_type!(ProjectId, "Unique identifier for a project.");
define_id_type!(InviteId, "Unique identifier for an invite.");
define_id_type!(MemberId, "Unique identifier for an organization membership.");

// =============================================================================
// Roles
// =============================================================================

/// Membership role within an organization.
///
/// Every variant has a rule set in [`crate::rbac::permissions`]; the match
/// there is exhaustive, so adding a variant without rules does not compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
	/// Full control over the organization and everything in it.
	Admin,
	/// Works on projects and invites; owns the projects they create.
	Member,
	/// Read access to billing information only.
	Billing,
}

impl Role {
	/// Returns all available roles.
	pub fn all() -> &'static [Role] {
		&[Role::Admin, Role::Member, Role::Billing]
	}

	/// Wire name of the role, as stored on memberships.
	pub fn as_str(&self) -> &'static str {
		match self {
			Role::Admin => "ADMIN",
			Role::Member => "MEMBER",
			Role::Billing => "BILLING",
		}
	}
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Role {
	type Err = AuthzError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Role::all()
			.iter()
			.copied()
			.find(|role| role.as_str() == s)
			.ok_or_else(|| AuthzError::Configuration(format!("permissions for role {s} not found")))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn id_display_matches_uuid() {
		let uuid = Uuid::new_v4();
		let id = UserId::new(uuid);
		assert_eq!(id.to_string(), uuid.to_string());
		assert_eq!(Uuid::from(id), uuid);
		assert_eq!(uuid.to_string().parse::<UserId>().unwrap(), id);
		assert!("not-a-uuid".parse::<UserId>().is_err());
	}

	#[test]
	fn id_serializes_transparently() {
		let uuid = Uuid::new_v4();
		let json = serde_json::to_string(&ProjectId::new(uuid)).unwrap();
		assert_eq!(json, format!("\"{uuid}\""));
	}

	#[test]
	fn role_wire_names() {
		assert_eq!(Role::Admin.to_string(), "ADMIN");
		assert_eq!(
			serde_json::to_string(&Role::Billing).unwrap(),
			"\"BILLING\""
		);
		let parsed: Role = serde_json::from_str("\"MEMBER\"").unwrap();
		assert_eq!(parsed, Role::Member);
	}

	#[test]
	fn role_parses_every_known_name() {
		for role in Role::all() {
			assert_eq!(role.as_str().parse::<Role>().unwrap(), *role);
		}
	}

	#[test]
	fn unknown_role_is_a_configuration_error() {
		let err = "OWNER".parse::<Role>().unwrap_err();
		assert!(matches!(err, AuthzError::Configuration(_)));
		assert!(err.to_string().contains("OWNER"));
	}

	#[test]
	fn role_names_are_case_sensitive() {
		assert!("admin".parse::<Role>().is_err());
	}
}
