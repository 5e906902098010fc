// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Resolution of the acting user's membership in an organization.
//!
//! Every organization-scoped request starts here: the role used to build the
//! ability comes from the membership, never from the client.

use async_trait::async_trait;
use saas_auth::{MemberId, OrgId, OrganizationAttrs, Role, UserId};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::ApiError;

/// A user's membership of one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
	pub id: MemberId,
	pub user_id: UserId,
	pub organization_id: OrgId,
	pub role: Role,
}

/// The organization as seen by request handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationSnapshot {
	pub slug: String,
	pub name: String,
	pub attrs: OrganizationAttrs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMembership {
	pub organization: OrganizationSnapshot,
	pub membership: Membership,
}

#[async_trait]
pub trait MembershipStore: Send + Sync {
	/// Membership of `user_id` in the organization called `org_slug`, if any.
	async fn find_membership(
		&self,
		user_id: &UserId,
		org_slug: &str,
	) -> Result<Option<ResolvedMembership>, ApiError>;

	/// Number of members of `org_id` holding any role other than `excluded`.
	async fn count_members_excluding(&self, org_id: &OrgId, excluded: Role) -> Result<u64, ApiError>;

	async fn count_projects(&self, org_id: &OrgId) -> Result<u64, ApiError>;
}

/// Looks up the acting user's membership, rejecting non-members.
#[instrument(level = "debug", skip(store), fields(user_id = %user_id, org_slug = %org_slug))]
pub async fn resolve_membership<S>(
	store: &S,
	user_id: &UserId,
	org_slug: &str,
) -> Result<ResolvedMembership, ApiError>
where
	S: MembershipStore + ?Sized,
{
	match store.find_membership(user_id, org_slug).await? {
		Some(resolved) => {
			tracing::debug!(role = %resolved.membership.role, "membership resolved");
			Ok(resolved)
		}
		None => {
			tracing::info!("user is not a member of the organization");
			Err(ApiError::Unauthorized(
				"You're not a member of this organization.".to_string(),
			))
		}
	}
}
