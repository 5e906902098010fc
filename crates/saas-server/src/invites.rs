// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Invite creation rules.

use saas_auth::{Ability, OrganizationAttrs};

use crate::authorize::Authorizer;
use crate::error::ApiError;
use crate::operations::{authorize_operation, Operation};

/// Domain part of an e-mail address.
pub fn email_domain(email: &str) -> Result<&str, ApiError> {
	match email.trim().split_once('@') {
		Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
			Ok(domain)
		}
		_ => Err(ApiError::BadRequest(format!("Invalid e-mail address: {email}"))),
	}
}

/// Rejects invites that auto-attach would make redundant.
pub fn validate_invite_email(organization: &OrganizationAttrs, email: &str) -> Result<(), ApiError> {
	let domain = email_domain(email)?;
	let joins_automatically = organization.should_attach_users_by_domain
		&& organization
			.domain
			.as_deref()
			.is_some_and(|d| d.eq_ignore_ascii_case(domain));

	if joins_automatically {
		return Err(ApiError::BadRequest(format!(
			"Users with \"{domain}\" domain will join your organization automatically on login."
		)));
	}
	Ok(())
}

/// Permission check followed by the e-mail rule, in the order the API applies them.
pub fn authorize_invite(
	authorizer: &Authorizer,
	ability: &Ability,
	organization: &OrganizationAttrs,
	email: &str,
) -> Result<(), ApiError> {
	authorize_operation(authorizer, ability, Operation::CreateInvite)?;
	validate_invite_email(organization, email)
}
