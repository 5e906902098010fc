// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Organization billing summary.

use saas_auth::{Ability, OrgId, Role};
use saas_server_config::BillingConfig;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::authorize::Authorizer;
use crate::error::ApiError;
use crate::membership::MembershipStore;
use crate::operations::{authorize_operation, Operation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
	pub amount: u64,
	pub unit: u64,
	pub price: u64,
}

impl LineItem {
	pub fn new(amount: u64, unit: u64) -> Self {
		Self {
			amount,
			unit,
			price: amount.saturating_mul(unit),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingSummary {
	pub seats: LineItem,
	pub projects: LineItem,
	pub total: u64,
}

impl BillingSummary {
	/// Billing-role members do not occupy a seat.
	pub fn compute(config: &BillingConfig, seats: u64, projects: u64) -> Self {
		let seats = LineItem::new(seats, config.seat_price);
		let projects = LineItem::new(projects, config.project_price);
		Self {
			seats,
			projects,
			total: seats.price.saturating_add(projects.price),
		}
	}
}

/// Billing summary of `org_id`, readable only by roles allowed to get billing.
#[instrument(level = "debug", skip(authorizer, ability, store, config), fields(org_id = %org_id))]
pub async fn organization_billing<S>(
	authorizer: &Authorizer,
	ability: &Ability,
	store: &S,
	config: &BillingConfig,
	org_id: &OrgId,
) -> Result<BillingSummary, ApiError>
where
	S: MembershipStore + ?Sized,
{
	authorize_operation(authorizer, ability, Operation::GetBilling)?;

	let seats = store.count_members_excluding(org_id, Role::Billing).await?;
	let projects = store.count_projects(org_id).await?;
	Ok(BillingSummary::compute(config, seats, projects))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::InMemoryMembershipStore;
	use saas_auth::UserId;

	#[test]
	fn test_compute_with_default_prices() {
		let summary = BillingSummary::compute(&BillingConfig::default(), 3, 2);
		assert_eq!(summary.seats, LineItem { amount: 3, unit: 10, price: 30 });
		assert_eq!(summary.projects, LineItem { amount: 2, unit: 20, price: 40 });
		assert_eq!(summary.total, 70);
	}

	#[test]
	fn test_serializes_like_the_api() {
		let summary = BillingSummary::compute(&BillingConfig::default(), 1, 0);
		let json = serde_json::to_value(summary).unwrap();
		assert_eq!(json["seats"]["price"], 10);
		assert_eq!(json["projects"]["amount"], 0);
		assert_eq!(json["total"], 10);
	}

	async fn seeded_store() -> (InMemoryMembershipStore, OrgId, UserId, UserId) {
		let store = InMemoryMembershipStore::new();
		let admin = UserId::generate();
		let accountant = UserId::generate();
		let org = store.add_organization("acme", "Acme", admin).await;
		store.add_member(&org, admin, Role::Admin).await;
		store.add_member(&org, UserId::generate(), Role::Member).await;
		store.add_member(&org, accountant, Role::Billing).await;
		store.add_projects(&org, 4).await;
		(store, org.attrs.id, admin, accountant)
	}

	#[tokio::test]
	async fn test_billing_member_sees_summary_without_own_seat() {
		let (store, org_id, _, accountant) = seeded_store().await;
		let authorizer = Authorizer::default();
		let ability = authorizer.ability_for(accountant, Role::Billing);

		let summary = organization_billing(&authorizer, &ability, &store, &BillingConfig::default(), &org_id)
			.await
			.unwrap();
		assert_eq!(summary.seats.amount, 2);
		assert_eq!(summary.projects.price, 80);
		assert_eq!(summary.total, 100);
	}

	#[tokio::test]
	async fn test_member_is_denied() {
		let (store, org_id, _, _) = seeded_store().await;
		let authorizer = Authorizer::default();
		let ability = authorizer.ability_for(UserId::generate(), Role::Member);

		let err = organization_billing(&authorizer, &ability, &store, &BillingConfig::default(), &org_id)
			.await
			.unwrap_err();
		assert_eq!(
			err,
			ApiError::Unauthorized("You are not allowed to get organization billing information".to_string())
		);
	}
}
