// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Rules and ordered rule sets.
//!
//! A [`Rule`] is one `(effect, action, subject type, condition)` declaration.
//! A [`RuleSet`] is an immutable, ordered list of rules; order is significant
//! because the last matching rule decides (see [`crate::Ability`]).
//!
//! Conditions are plain data rather than closures so rule sets are `Send + Sync`,
//! comparable in tests and serializable for logging and the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;
use std::sync::Arc;

use super::subject::{Subject, SubjectType};
use crate::error::AuthzError;
use crate::AuthUser;

/// Whether a matching rule grants or refuses the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
	Allow,
	Deny,
}

/// Actions that can be performed on subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
	/// Wildcard: a rule for `manage` matches every action.
	Manage,
	Create,
	Get,
	Update,
	Delete,
	TransferOwnership,
}

impl Action {
	/// Returns all actions, `Manage` first.
	pub fn all() -> &'static [Action] {
		&[
			Action::Manage,
			Action::Create,
			Action::Get,
			Action::Update,
			Action::Delete,
			Action::TransferOwnership,
		]
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Action::Manage => "manage",
			Action::Create => "create",
			Action::Get => "get",
			Action::Update => "update",
			Action::Delete => "delete",
			Action::TransferOwnership => "transfer_ownership",
		}
	}
}

impl fmt::Display for Action {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Action {
	type Err = AuthzError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Action::all()
			.iter()
			.copied()
			.find(|a| a.as_str() == s)
			.ok_or_else(|| AuthzError::UnrecognizedAction(s.to_string()))
	}
}

/// Attribute check a rule applies to concrete instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
	/// The instance's `owner_id` is the acting user.
	Owner,
	/// The instance's `author_id` is the acting user.
	Author,
	/// The instance is the acting user.
	Itself,
}

impl Condition {
	/// Evaluates the condition. Bare type tags and instances without the
	/// attribute never satisfy it.
	pub fn evaluate(&self, user: &AuthUser, subject: &Subject<'_>) -> bool {
		if !subject.is_instance() {
			return false;
		}

		let attr = match self {
			Condition::Owner => subject.owner_id(),
			Condition::Author => subject.author_id(),
			Condition::Itself => subject.user_id(),
		};

		attr == Some(user.id)
	}
}

/// A single permission declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
	pub effect: Effect,
	pub action: Action,
	pub subject: SubjectType,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub condition: Option<Condition>,
}

impl Rule {
	/// An unconditioned `allow` rule.
	pub fn allow(action: Action, subject: SubjectType) -> Self {
		Self {
			effect: Effect::Allow,
			action,
			subject,
			condition: None,
		}
	}

	/// An unconditioned `deny` rule.
	pub fn deny(action: Action, subject: SubjectType) -> Self {
		Self {
			effect: Effect::Deny,
			action,
			subject,
			condition: None,
		}
	}

	/// Builder: restrict the rule to instances satisfying `condition`.
	pub fn when(mut self, condition: Condition) -> Self {
		self.condition = Some(condition);
		self
	}

	/// Returns true if this rule applies to `action` on `subject` for `user`.
	pub fn matches(&self, user: &AuthUser, action: Action, subject: &Subject<'_>) -> bool {
		if self.action != action && self.action != Action::Manage {
			return false;
		}

		if self.subject != subject.subject_type() && self.subject != SubjectType::All {
			return false;
		}

		match self.condition {
			None => true,
			Some(condition) => condition.evaluate(user, subject),
		}
	}
}

impl fmt::Display for Rule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let effect = match self.effect {
			Effect::Allow => "allow",
			Effect::Deny => "deny",
		};
		write!(f, "{effect} {} {}", self.action, self.subject)?;
		if let Some(condition) = self.condition {
			write!(f, " when {condition:?}")?;
		}
		Ok(())
	}
}

/// Immutable ordered list of rules, cheap to clone and share across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet(Arc<[Rule]>);

impl RuleSet {
	/// Starts an empty rule set.
	pub fn builder() -> RuleSetBuilder {
		RuleSetBuilder::default()
	}

	pub fn as_slice(&self) -> &[Rule] {
		&self.0
	}
}

impl Deref for RuleSet {
	type Target = [Rule];

	fn deref(&self) -> &[Rule] {
		&self.0
	}
}

impl From<Vec<Rule>> for RuleSet {
	fn from(rules: Vec<Rule>) -> Self {
		Self(rules.into())
	}
}

impl FromIterator<Rule> for RuleSet {
	fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

/// Consuming builder that appends rules in declaration order.
///
/// Action slices expand to one rule per action, in slice order.
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
	rules: Vec<Rule>,
}

impl RuleSetBuilder {
	pub fn allow(self, actions: &[Action], subject: SubjectType) -> Self {
		self.push(actions, |a| Rule::allow(a, subject))
	}

	pub fn allow_when(self, actions: &[Action], subject: SubjectType, condition: Condition) -> Self {
		self.push(actions, |a| Rule::allow(a, subject).when(condition))
	}

	pub fn deny(self, actions: &[Action], subject: SubjectType) -> Self {
		self.push(actions, |a| Rule::deny(a, subject))
	}

	pub fn deny_when(self, actions: &[Action], subject: SubjectType, condition: Condition) -> Self {
		self.push(actions, |a| Rule::deny(a, subject).when(condition))
	}

	pub fn build(self) -> RuleSet {
		RuleSet::from(self.rules)
	}

	fn push(mut self, actions: &[Action], make: impl Fn(Action) -> Rule) -> Self {
		self.rules.extend(actions.iter().copied().map(make));
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rbac::subject::{InviteAttrs, ProjectAttrs, UserAttrs};
	use crate::{InviteId, OrgId, ProjectId, Role, UserId};

	fn member() -> AuthUser {
		AuthUser::new(UserId::generate(), Role::Member)
	}

	fn project_owned_by(owner_id: UserId) -> ProjectAttrs {
		ProjectAttrs {
			id: ProjectId::generate(),
			owner_id,
			organization_id: OrgId::generate(),
		}
	}

	mod matching {
		use super::*;

		#[test]
		fn exact_action_and_subject_match() {
			let user = member();
			let rule = Rule::allow(Action::Get, SubjectType::Project);
			let subject = Subject::Type(SubjectType::Project);
			assert!(rule.matches(&user, Action::Get, &subject));
			assert!(!rule.matches(&user, Action::Update, &subject));
			assert!(!rule.matches(&user, Action::Get, &Subject::Type(SubjectType::Invite)));
		}

		#[test]
		fn manage_matches_every_action() {
			let user = member();
			let rule = Rule::allow(Action::Manage, SubjectType::Billing);
			let subject = Subject::Type(SubjectType::Billing);
			for action in Action::all() {
				assert!(rule.matches(&user, *action, &subject));
			}
		}

		#[test]
		fn querying_manage_does_not_match_specific_rules() {
			let user = member();
			let rule = Rule::allow(Action::Get, SubjectType::Project);
			assert!(!rule.matches(&user, Action::Manage, &Subject::Type(SubjectType::Project)));
		}

		#[test]
		fn all_matches_every_subject_type() {
			let user = member();
			let rule = Rule::deny(Action::Delete, SubjectType::All);
			for t in SubjectType::all() {
				assert!(rule.matches(&user, Action::Delete, &Subject::Type(*t)));
			}
		}

		#[test]
		fn unconditioned_rule_matches_instances() {
			let user = member();
			let project = project_owned_by(UserId::generate());
			let rule = Rule::allow(Action::Get, SubjectType::Project);
			assert!(rule.matches(&user, Action::Get, &Subject::from(&project)));
		}
	}

	mod conditions {
		use super::*;

		#[test]
		fn owner_condition_requires_ownership() {
			let user = member();
			let rule = Rule::allow(Action::Update, SubjectType::Project).when(Condition::Owner);
			let own = project_owned_by(user.id);
			let other = project_owned_by(UserId::generate());
			assert!(rule.matches(&user, Action::Update, &Subject::from(&own)));
			assert!(!rule.matches(&user, Action::Update, &Subject::from(&other)));
		}

		#[test]
		fn conditioned_rule_never_matches_bare_tag() {
			let user = member();
			let rule = Rule::allow(Action::Update, SubjectType::Project).when(Condition::Owner);
			assert!(!rule.matches(&user, Action::Update, &Subject::Type(SubjectType::Project)));
		}

		#[test]
		fn author_condition() {
			let user = member();
			let invite = InviteAttrs {
				id: InviteId::generate(),
				organization_id: OrgId::generate(),
				author_id: user.id,
			};
			assert!(Condition::Author.evaluate(&user, &Subject::from(&invite)));
			assert!(!Condition::Owner.evaluate(&user, &Subject::from(&invite)));
		}

		#[test]
		fn itself_condition() {
			let user = member();
			let me = UserAttrs { id: user.id };
			let someone = UserAttrs {
				id: UserId::generate(),
			};
			assert!(Condition::Itself.evaluate(&user, &Subject::from(&me)));
			assert!(!Condition::Itself.evaluate(&user, &Subject::from(&someone)));
		}
	}

	mod rule_sets {
		use super::*;

		#[test]
		fn builder_preserves_declaration_order() {
			let rules = RuleSet::builder()
				.allow(&[Action::Get, Action::Create], SubjectType::Project)
				.deny(&[Action::Delete], SubjectType::Organization)
				.build();

			assert_eq!(
				rules.as_slice(),
				&[
					Rule::allow(Action::Get, SubjectType::Project),
					Rule::allow(Action::Create, SubjectType::Project),
					Rule::deny(Action::Delete, SubjectType::Organization),
				]
			);
		}

		#[test]
		fn conditioned_builders_attach_condition_to_each_action() {
			let rules = RuleSet::builder()
				.allow_when(
					&[Action::Update, Action::Delete],
					SubjectType::Project,
					Condition::Owner,
				)
				.build();
			assert_eq!(rules.len(), 2);
			assert!(rules.iter().all(|r| r.condition == Some(Condition::Owner)));
		}

		#[test]
		fn clones_share_storage() {
			let rules = RuleSet::builder()
				.allow(&[Action::Manage], SubjectType::All)
				.build();
			let copy = rules.clone();
			assert!(std::ptr::eq(rules.as_slice(), copy.as_slice()));
		}
	}

	#[test]
	fn action_wire_names_round_trip() {
		for action in Action::all() {
			assert_eq!(action.as_str().parse::<Action>().unwrap(), *action);
		}
		assert_eq!(
			serde_json::to_string(&Action::TransferOwnership).unwrap(),
			"\"transfer_ownership\""
		);
	}

	#[test]
	fn unknown_action_is_rejected() {
		assert_eq!(
			"publish".parse::<Action>().unwrap_err(),
			AuthzError::UnrecognizedAction("publish".to_string())
		);
	}

	#[test]
	fn rule_display() {
		let rule = Rule::allow(Action::Update, SubjectType::Project).when(Condition::Owner);
		assert_eq!(rule.to_string(), "allow update Project when Owner");
		assert_eq!(
			Rule::deny(Action::Manage, SubjectType::All).to_string(),
			"deny manage all"
		);
	}
}
