// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AuthzError>;

/// Defects raised by the authorization engine.
///
/// None of these is a permission decision. A denied action is a plain `false`
/// from [`crate::Ability::can`]; these variants mean the caller or the
/// deployment is wrong and should surface as an internal error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthzError {
	/// A role value has no registered rule set.
	#[error("configuration error: {0}")]
	Configuration(String),

	/// A subject tag outside the closed subject type set.
	#[error("unrecognized subject: {0}")]
	UnrecognizedSubject(String),

	/// An action name outside the closed action set.
	#[error("unrecognized action: {0}")]
	UnrecognizedAction(String),
}
