// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Role rule-set registry.
//!
//! Each role maps to a function returning its rules in declaration order. The
//! dispatch is an exhaustive `match` over [`Role`], so a role without rules is
//! a compile error. The only runtime failure left is a role *name* that does not
//! parse, which [`rules_for_role_name`] reports as a configuration error.

use super::rule::{Action, Condition, RuleSet};
use super::subject::SubjectType;
use crate::error::Result;
use crate::{AuthUser, Role};

use Action::*;

/// Rules for the acting user's role.
pub fn rules_for(user: &AuthUser) -> RuleSet {
	rules_for_role(user.role)
}

/// Rules for a role. Rule sets depend on the role alone; user-specific checks
/// are expressed as conditions evaluated at decision time.
pub fn rules_for_role(role: Role) -> RuleSet {
	match role {
		Role::Admin => admin(),
		Role::Member => member(),
		Role::Billing => billing(),
	}
}

/// Rules for a stored role name.
pub fn rules_for_role_name(name: &str) -> Result<RuleSet> {
	let role: Role = name.parse()?;
	Ok(rules_for_role(role))
}

fn admin() -> RuleSet {
	RuleSet::builder().allow(&[Manage], SubjectType::All).build()
}

fn member() -> RuleSet {
	RuleSet::builder()
		.allow(&[Get], SubjectType::User)
		.allow(&[Get, Create], SubjectType::Project)
		.allow_when(&[Update, Delete], SubjectType::Project, Condition::Owner)
		.allow(&[Get], SubjectType::Organization)
		.deny(&[Delete], SubjectType::Organization)
		.deny(&[TransferOwnership], SubjectType::Organization)
		.allow(&[Get, Create], SubjectType::Invite)
		.deny(&[Get], SubjectType::Billing)
		.build()
}

fn billing() -> RuleSet {
	RuleSet::builder().allow(&[Get], SubjectType::Billing).build()
}
