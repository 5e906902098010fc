// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Handler-level authorization checks.
//!
//! Handlers build an [`Ability`] for the acting member and call
//! [`Authorizer::ensure`] before reading or mutating anything. Denials are
//! logged with the user id and the action, never with resource contents.

use saas_auth::{get_ability_for, get_cached_ability_for, Ability, Action, Role, Subject, UserId};
use saas_server_config::{AuthzConfig, DenialStatus};
use tracing::instrument;

use crate::error::ApiError;

#[derive(Debug, Clone, Default)]
pub struct Authorizer {
	config: AuthzConfig,
}

impl Authorizer {
	pub fn new(config: AuthzConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &AuthzConfig {
		&self.config
	}

	/// Ability of `user_id` acting with `role`.
	pub fn ability_for(&self, user_id: UserId, role: Role) -> Ability {
		if self.config.cache_rule_sets {
			get_cached_ability_for(user_id, role)
		} else {
			get_ability_for(user_id, role)
		}
	}

	/// Fails with the configured denial error unless `ability` permits `action` on `subject`.
	#[instrument(
		level = "debug",
		skip(self, ability, subject, message),
		fields(user_id = %ability.user().id, role = %ability.user().role, action = %action)
	)]
	pub fn ensure<'a>(
		&self,
		ability: &Ability,
		action: Action,
		subject: impl Into<Subject<'a>>,
		message: &str,
	) -> Result<(), ApiError> {
		let subject = subject.into();
		if ability.can(action, subject) {
			tracing::debug!(subject = %subject.subject_type(), "authorization check passed");
			Ok(())
		} else {
			tracing::info!(subject = %subject.subject_type(), "authorization denied");
			Err(self.denial(message))
		}
	}

	pub fn denial(&self, message: &str) -> ApiError {
		match self.config.denial_status {
			DenialStatus::Unauthorized => ApiError::Unauthorized(message.to_string()),
			DenialStatus::Forbidden => ApiError::Forbidden(message.to_string()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use saas_auth::{OrgId, OrganizationAttrs, SubjectType};

	fn forbidding() -> Authorizer {
		Authorizer::new(AuthzConfig {
			denial_status: DenialStatus::Forbidden,
			..Default::default()
		})
	}

	#[test]
	fn test_allowed_operation_passes() {
		let authorizer = Authorizer::default();
		let ability = authorizer.ability_for(UserId::generate(), Role::Billing);
		assert!(authorizer
			.ensure(&ability, Action::Get, SubjectType::Billing, "no billing")
			.is_ok());
	}

	#[test]
	fn test_denial_defaults_to_unauthorized() {
		let authorizer = Authorizer::default();
		let ability = authorizer.ability_for(UserId::generate(), Role::Member);
		let err = authorizer
			.ensure(&ability, Action::Get, SubjectType::Billing, "no billing")
			.unwrap_err();
		assert_eq!(err, ApiError::Unauthorized("no billing".to_string()));
	}

	#[test]
	fn test_denial_status_is_configurable() {
		let authorizer = forbidding();
		let user = UserId::generate();
		let ability = authorizer.ability_for(user, Role::Member);
		let org = OrganizationAttrs::new(OrgId::generate(), user);
		let err = authorizer
			.ensure(&ability, Action::Delete, &org, "cannot shut down")
			.unwrap_err();
		assert_eq!(err, ApiError::Forbidden("cannot shut down".to_string()));
	}

	#[test]
	fn test_cached_and_uncached_abilities_agree() {
		let user = UserId::generate();
		let cached = Authorizer::default();
		let fresh = Authorizer::new(AuthzConfig {
			cache_rule_sets: false,
			..Default::default()
		});
		for role in Role::all() {
			assert_eq!(cached.ability_for(user, *role), fresh.ability_for(user, *role));
		}
	}
}
