// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Billing price configuration.

use serde::{Deserialize, Serialize};

const DEFAULT_SEAT_PRICE: u64 = 10;
const DEFAULT_PROJECT_PRICE: u64 = 20;

/// Billing configuration (runtime, fully resolved).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillingConfig {
	/// Price per billable member.
	pub seat_price: u64,
	/// Price per project.
	pub project_price: u64,
}

impl Default for BillingConfig {
	fn default() -> Self {
		Self {
			seat_price: DEFAULT_SEAT_PRICE,
			project_price: DEFAULT_PROJECT_PRICE,
		}
	}
}

/// Billing configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BillingConfigLayer {
	pub seat_price: Option<u64>,
	pub project_price: Option<u64>,
}

impl BillingConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.seat_price.is_some() {
			self.seat_price = other.seat_price;
		}
		if other.project_price.is_some() {
			self.project_price = other.project_price;
		}
	}

	pub fn finalize(self) -> BillingConfig {
		BillingConfig {
			seat_price: self.seat_price.unwrap_or(DEFAULT_SEAT_PRICE),
			project_price: self.project_price.unwrap_or(DEFAULT_PROJECT_PRICE),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_prices() {
		let config = BillingConfigLayer::default().finalize();
		assert_eq!(config.seat_price, 10);
		assert_eq!(config.project_price, 20);
	}

	#[test]
	fn test_custom_prices() {
		let layer: BillingConfigLayer = toml::from_str("seat_price = 15\n").unwrap();
		let config = layer.finalize();
		assert_eq!(config.seat_price, 15);
		assert_eq!(config.project_price, 20);
	}
}
