// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authorization configuration section.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// HTTP status returned when an operation is not permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DenialStatus {
	/// 401, as the public API has always answered.
	#[default]
	Unauthorized,
	/// 403.
	Forbidden,
}

impl DenialStatus {
	pub fn as_u16(&self) -> u16 {
		match self {
			DenialStatus::Unauthorized => 401,
			DenialStatus::Forbidden => 403,
		}
	}
}

impl fmt::Display for DenialStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DenialStatus::Unauthorized => write!(f, "unauthorized"),
			DenialStatus::Forbidden => write!(f, "forbidden"),
		}
	}
}

impl FromStr for DenialStatus {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"unauthorized" | "401" => Ok(DenialStatus::Unauthorized),
			"forbidden" | "403" => Ok(DenialStatus::Forbidden),
			other => Err(format!("unknown denial status '{other}'")),
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AuthzConfigLayer {
	pub cache_rule_sets: Option<bool>,
	pub denial_status: Option<DenialStatus>,
}

impl AuthzConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.cache_rule_sets.is_some() {
			self.cache_rule_sets = other.cache_rule_sets;
		}
		if other.denial_status.is_some() {
			self.denial_status = other.denial_status;
		}
	}

	pub fn finalize(self) -> AuthzConfig {
		AuthzConfig {
			cache_rule_sets: self.cache_rule_sets.unwrap_or(true),
			denial_status: self.denial_status.unwrap_or_default(),
		}
	}
}

/// Authorization configuration (runtime, fully resolved).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthzConfig {
	/// Share one rule set per role across requests instead of rebuilding it.
	pub cache_rule_sets: bool,
	pub denial_status: DenialStatus,
}

impl Default for AuthzConfig {
	fn default() -> Self {
		Self {
			cache_rule_sets: true,
			denial_status: DenialStatus::Unauthorized,
		}
	}
}
