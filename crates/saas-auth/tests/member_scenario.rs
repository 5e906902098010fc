// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! End-to-end decisions for one member across owned and foreign resources.

use saas_auth::{
	get_ability_for, get_cached_ability_for, Action, AuthzError, OrgId, OrganizationAttrs,
	ProjectAttrs, ProjectId, Role, SubjectType, UserId,
};

struct Fixture {
	user: UserId,
	own_project: ProjectAttrs,
	foreign_project: ProjectAttrs,
	organization: OrganizationAttrs,
}

fn fixture() -> Fixture {
	let user = UserId::generate();
	let other = UserId::generate();
	let org_id = OrgId::generate();

	Fixture {
		user,
		own_project: ProjectAttrs {
			id: ProjectId::generate(),
			owner_id: user,
			organization_id: org_id,
		},
		foreign_project: ProjectAttrs {
			id: ProjectId::generate(),
			owner_id: other,
			organization_id: org_id,
		},
		// The member holds the organization's owner field.
		organization: OrganizationAttrs::new(org_id, user),
	}
}

#[test]
fn member_deletes_own_project_only() {
	let f = fixture();
	let ability = get_ability_for(f.user, Role::Member);

	assert!(!ability.cannot(Action::Delete, &f.own_project));
	assert!(ability.cannot(Action::Delete, &f.foreign_project));
}

#[test]
fn member_cannot_transfer_organization_they_own() {
	let f = fixture();
	let ability = get_ability_for(f.user, Role::Member);

	assert!(ability.cannot(Action::TransferOwnership, &f.organization));
}

#[test]
fn cached_ability_makes_the_same_decisions() {
	let f = fixture();
	let ability = get_cached_ability_for(f.user, Role::Member);

	assert!(ability.can(Action::Update, &f.own_project));
	assert!(ability.cannot(Action::Update, &f.foreign_project));
	assert!(ability.cannot(Action::TransferOwnership, &f.organization));
}

#[test]
fn billing_member_sees_billing_but_no_projects() {
	let f = fixture();
	let ability = get_ability_for(f.user, Role::Billing);

	assert!(ability.can(Action::Get, SubjectType::Billing));
	assert!(ability.cannot(Action::Get, &f.own_project));
	assert!(ability.cannot(Action::Get, &f.foreign_project));
}

#[test]
fn admin_manages_everything() {
	let f = fixture();
	let ability = get_ability_for(UserId::generate(), Role::Admin);

	for action in Action::all() {
		assert!(ability.can(*action, &f.own_project));
		assert!(ability.can(*action, &f.foreign_project));
		assert!(ability.can(*action, &f.organization));
	}
}

#[test]
fn defects_are_errors() {
	assert!(matches!(
		"OWNER".parse::<Role>(),
		Err(AuthzError::Configuration(_))
	));

	let ability = get_ability_for(UserId::generate(), Role::Admin);
	assert!(matches!(
		ability.can_tagged("get", "Repository"),
		Err(AuthzError::UnrecognizedSubject(_))
	));
}
