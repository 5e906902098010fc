// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Process-wide memo of rule sets, keyed by role.
//!
//! Each role gets one write-once cell. After the first read of a role its cell
//! is immutable, so concurrent readers need no locking and every ability built
//! from the cache shares the same rule storage.

use std::sync::OnceLock;

use tracing::debug;

use super::permissions::rules_for_role;
use super::rule::RuleSet;
use crate::Role;

static ADMIN_RULES: OnceLock<RuleSet> = OnceLock::new();
static MEMBER_RULES: OnceLock<RuleSet> = OnceLock::new();
static BILLING_RULES: OnceLock<RuleSet> = OnceLock::new();

fn cell(role: Role) -> &'static OnceLock<RuleSet> {
	match role {
		Role::Admin => &ADMIN_RULES,
		Role::Member => &MEMBER_RULES,
		Role::Billing => &BILLING_RULES,
	}
}

/// Cached rules for `role`, built on first use.
pub fn cached_rules_for_role(role: Role) -> RuleSet {
	cell(role)
		.get_or_init(|| {
			debug!(role = %role, "caching rule set");
			rules_for_role(role)
		})
		.clone()
}

/// Builds every role's rule set up front.
pub fn warm_rule_cache() {
	for role in Role::all() {
		let rules = cached_rules_for_role(*role);
		debug!(role = %role, rules = rules.len(), "rule set ready");
	}
}
