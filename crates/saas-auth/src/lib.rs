// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authorization engine for organizations, projects, members, invites and billing.
//!
//! Request handlers resolve the acting user's role from their membership, build
//! an [`Ability`] with [`get_ability_for`] and gate the operation with
//! [`Ability::cannot`] before touching any data:
//!
//! ```
//! use saas_auth::{get_ability_for, Action, ProjectAttrs, Role, SubjectType, UserId, OrgId, ProjectId};
//!
//! let user_id = UserId::generate();
//! let ability = get_ability_for(user_id, Role::Member);
//!
//! let project = ProjectAttrs {
//! 	id: ProjectId::generate(),
//! 	owner_id: user_id,
//! 	organization_id: OrgId::generate(),
//! };
//! assert!(ability.can(Action::Delete, &project));
//! assert!(ability.cannot(Action::Get, SubjectType::Billing));
//! ```
//!
//! Decisions are pure and synchronous. A denial is a plain `false`; only caller
//! or deployment defects are reported through [`AuthzError`].

pub mod error;
pub mod rbac;
pub mod types;
pub mod user;

pub use error::{AuthzError, Result};
pub use rbac::{
	cached_rules_for_role, permission_matrix, rules_for, rules_for_role, rules_for_role_name,
	warm_rule_cache, Ability, Action, Condition, Decision, Effect, InviteAttrs, MatrixEntry,
	OrganizationAttrs, ProjectAttrs, Rule, RuleSet, Subject, SubjectType, UserAttrs,
};
pub use types::{InviteId, MemberId, OrgId, ProjectId, Role, UserId};
pub use user::AuthUser;

/// Builds the ability of `user_id` acting with `role`, from a freshly built rule set.
pub fn get_ability_for(user_id: UserId, role: Role) -> Ability {
	let user = AuthUser::new(user_id, role);
	Ability::new(user, rules_for(&user))
}

/// Like [`get_ability_for`], sharing the process-wide rule set of `role`.
pub fn get_cached_ability_for(user_id: UserId, role: Role) -> Ability {
	Ability::new(AuthUser::new(user_id, role), cached_rules_for_role(role))
}
