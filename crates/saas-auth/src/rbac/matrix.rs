// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Role × action × subject type overview, evaluated against bare type tags.
//!
//! Conditioned rules never match a bare tag, so an entry reads as "allowed for
//! any instance of this type". Ownership-dependent grants show up as denied.

use serde::Serialize;

use super::ability::Ability;
use super::permissions::rules_for_role;
use super::rule::Action;
use super::subject::SubjectType;
use crate::{AuthUser, Role, UserId};

/// One cell of the permission matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatrixEntry {
	pub role: Role,
	pub action: Action,
	pub subject: SubjectType,
	pub allowed: bool,
}

/// Evaluates every (role, action, subject type) combination.
pub fn permission_matrix() -> Vec<MatrixEntry> {
	let mut entries = Vec::new();
	for role in Role::all() {
		// Unconditioned decisions do not depend on the user id.
		let ability = Ability::new(
			AuthUser::new(UserId::new(uuid::Uuid::nil()), *role),
			rules_for_role(*role),
		);
		for action in Action::all() {
			for subject in SubjectType::all() {
				entries.push(MatrixEntry {
					role: *role,
					action: *action,
					subject: *subject,
					allowed: ability.can(*action, *subject),
				});
			}
		}
	}
	entries
}
