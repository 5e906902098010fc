// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Permission decision engine.
//!
//! An [`Ability`] pairs one user with an ordered [`RuleSet`] and answers
//! `can` / `cannot` queries:
//!
//! 1. Resolve the subject type of the queried subject
//! 2. Scan the rules from last declared to first
//! 3. The first rule whose action, subject type and condition match decides:
//!    `allow` grants, `deny` refuses
//! 4. No matching rule refuses (fail-closed)
//!
//! A later rule therefore overrides an earlier one for the same case. Evaluation
//! never mutates the ability, so one value can be shared freely across threads.

use serde::Serialize;
use tracing::{debug, instrument};

use super::rule::{Action, Effect, Rule, RuleSet};
use super::subject::{Subject, SubjectType};
use crate::error::Result;
use crate::AuthUser;

/// Outcome of a decision, with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision {
	pub allowed: bool,
	/// Index into the rule set of the deciding rule; `None` when nothing matched.
	pub matched_rule: Option<usize>,
}

/// Queryable permissions of one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ability {
	user: AuthUser,
	rules: RuleSet,
}

impl Ability {
	/// Wraps `rules` unchanged. Contradictory rules are legal; order resolves them.
	pub fn new(user: AuthUser, rules: impl Into<RuleSet>) -> Self {
		Self {
			user,
			rules: rules.into(),
		}
	}

	pub fn user(&self) -> &AuthUser {
		&self.user
	}

	pub fn rules(&self) -> &[Rule] {
		&self.rules
	}

	/// Returns true if the user may perform `action` on `subject`.
	pub fn can<'a>(&self, action: Action, subject: impl Into<Subject<'a>>) -> bool {
		self.decide(action, subject.into()).allowed
	}

	/// Logical negation of [`Ability::can`].
	pub fn cannot<'a>(&self, action: Action, subject: impl Into<Subject<'a>>) -> bool {
		!self.can(action, subject)
	}

	/// Evaluates a query given as wire names, e.g. `("get", "Billing")`.
	///
	/// Unknown names are caller defects and are returned as errors rather
	/// than treated as a denial.
	pub fn can_tagged(&self, action: &str, subject: &str) -> Result<bool> {
		let action: Action = action.parse()?;
		let subject_type: SubjectType = subject.parse()?;
		Ok(self.can(action, subject_type))
	}

	/// Runs the reverse-scan match and reports which rule decided.
	#[instrument(
		level = "debug",
		skip(self, subject),
		fields(
			user_id = %self.user.id,
			role = %self.user.role,
			action = %action,
			subject_type = %subject.subject_type(),
		)
	)]
	pub fn decide(&self, action: Action, subject: Subject<'_>) -> Decision {
		let matched = self
			.rules
			.iter()
			.enumerate()
			.rev()
			.find(|(_, rule)| rule.matches(&self.user, action, &subject));

		let decision = match matched {
			Some((index, rule)) => Decision {
				allowed: rule.effect == Effect::Allow,
				matched_rule: Some(index),
			},
			None => Decision {
				allowed: false,
				matched_rule: None,
			},
		};

		debug!(
			allowed = decision.allowed,
			matched_rule = ?decision.matched_rule,
			"authorization decision"
		);

		decision
	}

	/// The rule that produced `decision`, if any.
	pub fn rule_for(&self, decision: &Decision) -> Option<&Rule> {
		decision.matched_rule.and_then(|i| self.rules.get(i))
	}
}
