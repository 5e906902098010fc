// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Organization ownership transfer.

use saas_auth::{Ability, Role, UserId};
use serde::Serialize;
use tracing::instrument;

use crate::authorize::Authorizer;
use crate::error::ApiError;
use crate::membership::{MembershipStore, OrganizationSnapshot};
use crate::operations::{authorize_operation, Operation};

/// Changes to apply once a transfer has been validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OwnershipTransfer {
	pub new_owner_id: UserId,
	/// The new owner is promoted to this role.
	pub promoted_role: Role,
}

#[instrument(
	level = "debug",
	skip(authorizer, ability, store, organization),
	fields(org_slug = %organization.slug, target = %target_user_id)
)]
pub async fn plan_ownership_transfer<S>(
	authorizer: &Authorizer,
	ability: &Ability,
	store: &S,
	organization: &OrganizationSnapshot,
	target_user_id: UserId,
) -> Result<OwnershipTransfer, ApiError>
where
	S: MembershipStore + ?Sized,
{
	authorize_operation(
		authorizer,
		ability,
		Operation::TransferOrganization(&organization.attrs),
	)?;

	if store
		.find_membership(&target_user_id, &organization.slug)
		.await?
		.is_none()
	{
		return Err(ApiError::BadRequest(
			"Target user is not a member of this organization.".to_string(),
		));
	}

	Ok(OwnershipTransfer {
		new_owner_id: target_user_id,
		promoted_role: Role::Admin,
	})
}
