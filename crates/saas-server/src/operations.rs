// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The permission check performed by each organization-scoped API operation.
//!
//! Instance checks carry the loaded resource so that ownership conditions can
//! apply; type checks gate listing and creation before anything is loaded.

use saas_auth::{
	Ability, Action, InviteAttrs, OrganizationAttrs, ProjectAttrs, Subject, SubjectType,
};

use crate::authorize::Authorizer;
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation<'a> {
	GetOrganization(&'a OrganizationAttrs),
	UpdateOrganization(&'a OrganizationAttrs),
	ShutdownOrganization(&'a OrganizationAttrs),
	TransferOrganization(&'a OrganizationAttrs),
	CreateProject,
	ListProjects,
	GetProject(&'a ProjectAttrs),
	UpdateProject(&'a ProjectAttrs),
	DeleteProject(&'a ProjectAttrs),
	CreateInvite,
	ListInvites,
	RevokeInvite(&'a InviteAttrs),
	ListMembers,
	UpdateMember,
	RemoveMember,
	GetBilling,
}

impl<'a> Operation<'a> {
	pub fn action(&self) -> Action {
		match self {
			Operation::GetOrganization(_)
			| Operation::ListProjects
			| Operation::GetProject(_)
			| Operation::ListInvites
			| Operation::ListMembers
			| Operation::GetBilling => Action::Get,
			Operation::UpdateOrganization(_) | Operation::UpdateProject(_) | Operation::UpdateMember => {
				Action::Update
			}
			Operation::ShutdownOrganization(_)
			| Operation::DeleteProject(_)
			| Operation::RevokeInvite(_)
			| Operation::RemoveMember => Action::Delete,
			Operation::TransferOrganization(_) => Action::TransferOwnership,
			Operation::CreateProject | Operation::CreateInvite => Action::Create,
		}
	}

	pub fn subject(&self) -> Subject<'a> {
		match *self {
			Operation::GetOrganization(org)
			| Operation::UpdateOrganization(org)
			| Operation::ShutdownOrganization(org)
			| Operation::TransferOrganization(org) => Subject::Organization(org),
			Operation::GetProject(project)
			| Operation::UpdateProject(project)
			| Operation::DeleteProject(project) => Subject::Project(project),
			Operation::RevokeInvite(invite) => Subject::Invite(invite),
			Operation::CreateProject | Operation::ListProjects => Subject::Type(SubjectType::Project),
			Operation::CreateInvite | Operation::ListInvites => Subject::Type(SubjectType::Invite),
			Operation::ListMembers | Operation::UpdateMember | Operation::RemoveMember => {
				Subject::Type(SubjectType::User)
			}
			Operation::GetBilling => Subject::Type(SubjectType::Billing),
		}
	}

	/// Message returned to the client when the check fails.
	pub fn denial_message(&self) -> &'static str {
		match self {
			Operation::GetOrganization(_) => "You're not allowed to see this organization.",
			Operation::UpdateOrganization(_) => "You do not have permission to update this organization",
			Operation::ShutdownOrganization(_) => {
				"You do not have permission to shutdown this organization"
			}
			Operation::TransferOrganization(_) => {
				"You are not allowed to transfer this organization ownership."
			}
			Operation::CreateProject => "You're not allowed to create a new project.",
			Operation::ListProjects => "You're not allowed to see organization project.",
			Operation::GetProject(_) => "You're not allowed to see this project.",
			Operation::UpdateProject(_) => "You're not allowed to update this project.",
			Operation::DeleteProject(_) => "You're not allowed to delete this project.",
			Operation::CreateInvite => "You're not allowed to create invites.",
			Operation::ListInvites => "You're not allowed to get organization invites.",
			Operation::RevokeInvite(_) => "You're not allowed to delete an invite.",
			Operation::ListMembers => "You're not allowed to see this organization members.",
			Operation::UpdateMember => "You're not allowed to update this member.",
			Operation::RemoveMember => "You're not allowed to delete this member.",
			Operation::GetBilling => "You are not allowed to get organization billing information",
		}
	}
}

/// Runs the permission check of `operation` for `ability`.
pub fn authorize_operation(
	authorizer: &Authorizer,
	ability: &Ability,
	operation: Operation<'_>,
) -> Result<(), ApiError> {
	authorizer.ensure(
		ability,
		operation.action(),
		operation.subject(),
		operation.denial_message(),
	)
}
