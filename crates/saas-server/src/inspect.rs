// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Offline inspection of role permissions, backing the `saas-authz` tool.

use saas_auth::{
	Action, InviteAttrs, InviteId, OrgId, OrganizationAttrs, ProjectAttrs, ProjectId, Role, Rule,
	Subject, SubjectType, UserAttrs, UserId,
};
use serde::Serialize;

use crate::authorize::Authorizer;

/// A single question: may `role` perform `action` on `subject`?
///
/// Without `owner`/`author` the subject is a bare type tag. With them an
/// instance is synthesized so that ownership conditions can apply.
#[derive(Debug, Clone)]
pub struct CheckRequest {
	pub role: Role,
	pub action: Action,
	pub subject: SubjectType,
	pub user: Option<UserId>,
	pub owner: Option<UserId>,
	pub author: Option<UserId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
	pub role: Role,
	pub action: Action,
	pub subject: SubjectType,
	pub instance: bool,
	pub allowed: bool,
	/// Display form of the deciding rule.
	pub rule: Option<String>,
}

pub fn check(authorizer: &Authorizer, request: &CheckRequest) -> CheckOutcome {
	let user_id = request.user.unwrap_or_else(UserId::generate);
	let ability = authorizer.ability_for(user_id, request.role);

	let organization_id = OrgId::generate();
	let organization;
	let project;
	let invite;
	let user;
	let subject: Subject<'_> = match (request.subject, request.owner, request.author) {
		(SubjectType::Organization, Some(owner_id), _) => {
			organization = OrganizationAttrs::new(organization_id, owner_id);
			Subject::Organization(&organization)
		}
		(SubjectType::Project, Some(owner_id), _) => {
			project = ProjectAttrs {
				id: ProjectId::generate(),
				owner_id,
				organization_id,
			};
			Subject::Project(&project)
		}
		(SubjectType::Invite, _, Some(author_id)) => {
			invite = InviteAttrs {
				id: InviteId::generate(),
				organization_id,
				author_id,
			};
			Subject::Invite(&invite)
		}
		(SubjectType::User, Some(id), _) => {
			user = UserAttrs { id };
			Subject::User(&user)
		}
		(tag, _, _) => Subject::Type(tag),
	};

	let decision = ability.decide(request.action, subject);
	CheckOutcome {
		role: request.role,
		action: request.action,
		subject: request.subject,
		instance: subject.is_instance(),
		allowed: decision.allowed,
		rule: ability.rule_for(&decision).map(Rule::to_string),
	}
}
