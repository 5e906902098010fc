// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Role-based access control.
//!
//! - [`subject`]: subject type tags and resource snapshots
//! - [`rule`]: rules, conditions and ordered rule sets
//! - [`permissions`]: the per-role rule tables
//! - [`ability`]: the decision engine
//! - [`cache`]: per-role memo of rule sets
//! - [`matrix`]: tabular view of the rule tables

pub mod ability;
pub mod cache;
pub mod matrix;
pub mod permissions;
pub mod rule;
pub mod subject;

pub use ability::{Ability, Decision};
pub use cache::{cached_rules_for_role, warm_rule_cache};
pub use matrix::{permission_matrix, MatrixEntry};
pub use permissions::{rules_for, rules_for_role, rules_for_role_name};
pub use rule::{Action, Condition, Effect, Rule, RuleSet, RuleSetBuilder};
pub use subject::{
	InviteAttrs, OrganizationAttrs, ProjectAttrs, Subject, SubjectType, UserAttrs,
};
