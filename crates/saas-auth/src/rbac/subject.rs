// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Subjects that permissions are checked against.
//!
//! A subject is either a bare [`SubjectType`] tag ("any project") or a concrete
//! resource snapshot ("this project"). Snapshots carry only the attributes that
//! rule conditions read:
//!
//! - [`OrganizationAttrs`]: owner, e-mail domain and auto-attach flag
//! - [`ProjectAttrs`]: owner and parent organization
//! - [`InviteAttrs`]: author and organization
//! - [`UserAttrs`]: the user's own id
//!
//! Billing has no attributes and is only ever checked as a tag.
//!
//! The subject type of an instance comes from the [`Subject`] variant chosen at
//! construction, never from the shape of the data.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AuthzError;
use crate::{InviteId, OrgId, ProjectId, UserId};

/// Closed set of subject type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubjectType {
	User,
	Organization,
	Project,
	Invite,
	Billing,
	/// Matches every subject type when used in a rule.
	#[serde(rename = "all")]
	All,
}

impl SubjectType {
	/// Returns all subject types, `All` last.
	pub fn all() -> &'static [SubjectType] {
		&[
			SubjectType::User,
			SubjectType::Organization,
			SubjectType::Project,
			SubjectType::Invite,
			SubjectType::Billing,
			SubjectType::All,
		]
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			SubjectType::User => "User",
			SubjectType::Organization => "Organization",
			SubjectType::Project => "Project",
			SubjectType::Invite => "Invite",
			SubjectType::Billing => "Billing",
			SubjectType::All => "all",
		}
	}
}

impl fmt::Display for SubjectType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SubjectType {
	type Err = AuthzError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		SubjectType::all()
			.iter()
			.copied()
			.find(|t| t.as_str() == s)
			.ok_or_else(|| AuthzError::UnrecognizedSubject(s.to_string()))
	}
}

/// Organization snapshot used for authorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationAttrs {
	pub id: OrgId,
	pub owner_id: UserId,
	pub domain: Option<String>,
	pub should_attach_users_by_domain: bool,
}

impl OrganizationAttrs {
	pub fn new(id: OrgId, owner_id: UserId) -> Self {
		Self {
			id,
			owner_id,
			domain: None,
			should_attach_users_by_domain: false,
		}
	}

	/// Builder: set the e-mail domain and whether matching users join automatically.
	pub fn with_domain(mut self, domain: impl Into<String>, attach_users: bool) -> Self {
		self.domain = Some(domain.into());
		self.should_attach_users_by_domain = attach_users;
		self
	}
}

/// Project snapshot used for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAttrs {
	pub id: ProjectId,
	pub owner_id: UserId,
	pub organization_id: OrgId,
}

/// Invite snapshot used for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteAttrs {
	pub id: InviteId,
	pub organization_id: OrgId,
	pub author_id: UserId,
}

/// User snapshot used for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAttrs {
	pub id: UserId,
}

/// Something a permission is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject<'a> {
	/// A bare type tag. Conditioned rules never match it.
	Type(SubjectType),
	Organization(&'a OrganizationAttrs),
	Project(&'a ProjectAttrs),
	Invite(&'a InviteAttrs),
	User(&'a UserAttrs),
}

impl<'a> Subject<'a> {
	/// Resolves the subject type tag.
	pub fn subject_type(&self) -> SubjectType {
		match self {
			Subject::Type(t) => *t,
			Subject::Organization(_) => SubjectType::Organization,
			Subject::Project(_) => SubjectType::Project,
			Subject::Invite(_) => SubjectType::Invite,
			Subject::User(_) => SubjectType::User,
		}
	}

	/// Returns true if this is a concrete instance rather than a bare tag.
	pub fn is_instance(&self) -> bool {
		!matches!(self, Subject::Type(_))
	}

	/// Owner of the instance, for subjects that have one.
	pub fn owner_id(&self) -> Option<UserId> {
		match self {
			Subject::Organization(org) => Some(org.owner_id),
			Subject::Project(project) => Some(project.owner_id),
			_ => None,
		}
	}

	/// Author of the instance, for subjects that have one.
	pub fn author_id(&self) -> Option<UserId> {
		match self {
			Subject::Invite(invite) => Some(invite.author_id),
			_ => None,
		}
	}

	/// Id of a user instance.
	pub fn user_id(&self) -> Option<UserId> {
		match self {
			Subject::User(user) => Some(user.id),
			_ => None,
		}
	}
}

impl From<SubjectType> for Subject<'_> {
	fn from(t: SubjectType) -> Self {
		Subject::Type(t)
	}
}

impl<'a> From<&'a OrganizationAttrs> for Subject<'a> {
	fn from(org: &'a OrganizationAttrs) -> Self {
		Subject::Organization(org)
	}
}

impl<'a> From<&'a ProjectAttrs> for Subject<'a> {
	fn from(project: &'a ProjectAttrs) -> Self {
		Subject::Project(project)
	}
}

impl<'a> From<&'a InviteAttrs> for Subject<'a> {
	fn from(invite: &'a InviteAttrs) -> Self {
		Subject::Invite(invite)
	}
}

impl<'a> From<&'a UserAttrs> for Subject<'a> {
	fn from(user: &'a UserAttrs) -> Self {
		Subject::User(user)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn project(owner_id: UserId) -> ProjectAttrs {
		ProjectAttrs {
			id: ProjectId::generate(),
			owner_id,
			organization_id: OrgId::generate(),
		}
	}

	#[test]
	fn instances_resolve_to_their_variant() {
		let owner = UserId::generate();
		let org = OrganizationAttrs::new(OrgId::generate(), owner);
		let project = project(owner);
		let invite = InviteAttrs {
			id: InviteId::generate(),
			organization_id: org.id,
			author_id: owner,
		};
		let user = UserAttrs { id: owner };

		assert_eq!(Subject::from(&org).subject_type(), SubjectType::Organization);
		assert_eq!(Subject::from(&project).subject_type(), SubjectType::Project);
		assert_eq!(Subject::from(&invite).subject_type(), SubjectType::Invite);
		assert_eq!(Subject::from(&user).subject_type(), SubjectType::User);
	}

	#[test]
	fn tags_resolve_to_themselves() {
		for t in SubjectType::all() {
			let subject = Subject::from(*t);
			assert_eq!(subject.subject_type(), *t);
			assert!(!subject.is_instance());
		}
	}

	#[test]
	fn string_tags_parse() {
		assert_eq!("Project".parse::<SubjectType>().unwrap(), SubjectType::Project);
		assert_eq!("all".parse::<SubjectType>().unwrap(), SubjectType::All);
		assert_eq!("Billing".parse::<SubjectType>().unwrap(), SubjectType::Billing);
	}

	#[test]
	fn unknown_string_tag_is_unrecognized() {
		let err = "Workspace".parse::<SubjectType>().unwrap_err();
		assert_eq!(err, AuthzError::UnrecognizedSubject("Workspace".to_string()));
		assert!("project".parse::<SubjectType>().is_err());
	}

	#[test]
	fn attribute_accessors() {
		let owner = UserId::generate();
		let project = project(owner);
		let subject = Subject::from(&project);
		assert_eq!(subject.owner_id(), Some(owner));
		assert_eq!(subject.author_id(), None);
		assert_eq!(subject.user_id(), None);
		assert_eq!(Subject::Type(SubjectType::Project).owner_id(), None);
	}

	#[test]
	fn subject_type_serde_names() {
		assert_eq!(serde_json::to_string(&SubjectType::All).unwrap(), "\"all\"");
		assert_eq!(
			serde_json::to_string(&SubjectType::Organization).unwrap(),
			"\"Organization\""
		);
	}

	#[test]
	fn organization_domain_builder() {
		let org = OrganizationAttrs::new(OrgId::generate(), UserId::generate())
			.with_domain("acme.com", true);
		assert_eq!(org.domain.as_deref(), Some("acme.com"));
		assert!(org.should_attach_users_by_domain);
	}
}
