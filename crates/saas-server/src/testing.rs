// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! In-memory membership store for tests and local tooling.

use std::collections::HashMap;

use async_trait::async_trait;
use saas_auth::{MemberId, OrgId, OrganizationAttrs, Role, UserId};
use tokio::sync::RwLock;

use crate::error::ApiError;
use crate::membership::{Membership, MembershipStore, OrganizationSnapshot, ResolvedMembership};

#[derive(Default)]
struct Inner {
	organizations: HashMap<String, OrganizationSnapshot>,
	members: Vec<Membership>,
	projects: HashMap<OrgId, u64>,
}

#[derive(Default)]
pub struct InMemoryMembershipStore {
	inner: RwLock<Inner>,
}

impl InMemoryMembershipStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub async fn add_organization(&self, slug: &str, name: &str, owner_id: UserId) -> OrganizationSnapshot {
		self
			.insert_organization(OrganizationSnapshot {
				slug: slug.to_string(),
				name: name.to_string(),
				attrs: OrganizationAttrs::new(OrgId::generate(), owner_id),
			})
			.await
	}

	pub async fn insert_organization(&self, organization: OrganizationSnapshot) -> OrganizationSnapshot {
		let mut inner = self.inner.write().await;
		inner
			.organizations
			.insert(organization.slug.clone(), organization.clone());
		organization
	}

	pub async fn add_member(&self, organization: &OrganizationSnapshot, user_id: UserId, role: Role) -> Membership {
		let membership = Membership {
			id: MemberId::generate(),
			user_id,
			organization_id: organization.attrs.id,
			role,
		};
		let mut inner = self.inner.write().await;
		inner
			.members
			.retain(|m| !(m.user_id == user_id && m.organization_id == organization.attrs.id));
		inner.members.push(membership.clone());
		membership
	}

	pub async fn add_projects(&self, organization: &OrganizationSnapshot, count: u64) {
		let mut inner = self.inner.write().await;
		*inner.projects.entry(organization.attrs.id).or_default() += count;
	}
}

#[async_trait]
impl MembershipStore for InMemoryMembershipStore {
	async fn find_membership(
		&self,
		user_id: &UserId,
		org_slug: &str,
	) -> Result<Option<ResolvedMembership>, ApiError> {
		let inner = self.inner.read().await;
		let Some(organization) = inner.organizations.get(org_slug) else {
			return Ok(None);
		};
		Ok(inner
			.members
			.iter()
			.find(|m| m.user_id == *user_id && m.organization_id == organization.attrs.id)
			.map(|membership| ResolvedMembership {
				organization: organization.clone(),
				membership: membership.clone(),
			}))
	}

	async fn count_members_excluding(&self, org_id: &OrgId, excluded: Role) -> Result<u64, ApiError> {
		let inner = self.inner.read().await;
		Ok(inner
			.members
			.iter()
			.filter(|m| m.organization_id == *org_id && m.role != excluded)
			.count() as u64)
	}

	async fn count_projects(&self, org_id: &OrgId) -> Result<u64, ApiError> {
		let inner = self.inner.read().await;
		Ok(inner.projects.get(org_id).copied().unwrap_or(0))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_re_adding_member_replaces_role() {
		let store = InMemoryMembershipStore::new();
		let user = UserId::generate();
		let org = store.add_organization("acme", "Acme", user).await;
		store.add_member(&org, user, Role::Member).await;
		store.add_member(&org, user, Role::Billing).await;

		let resolved = store.find_membership(&user, "acme").await.unwrap().unwrap();
		assert_eq!(resolved.membership.role, Role::Billing);
		assert_eq!(
			store.count_members_excluding(&org.attrs.id, Role::Admin).await.unwrap(),
			1
		);
	}

	#[tokio::test]
	async fn test_membership_is_scoped_to_organization() {
		let store = InMemoryMembershipStore::new();
		let user = UserId::generate();
		let acme = store.add_organization("acme", "Acme", user).await;
		store.add_organization("globex", "Globex", UserId::generate()).await;
		store.add_member(&acme, user, Role::Admin).await;

		assert!(store.find_membership(&user, "globex").await.unwrap().is_none());
	}
}
