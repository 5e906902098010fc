// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The acting user as seen by the authorization engine.

use serde::{Deserialize, Serialize};

use crate::{Role, UserId};

/// Identity and role of the user a decision is made for.
///
/// Resolved once per request from the membership of the target organization
/// and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthUser {
	pub id: UserId,
	pub role: Role,
}

impl AuthUser {
	pub fn new(id: UserId, role: Role) -> Self {
		Self { id, role }
	}
}
