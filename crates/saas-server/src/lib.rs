// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Request-side authorization for the SaaS API.
//!
//! - [`membership`]: resolving the acting user's role in an organization
//! - [`authorize`]: turning decisions into API errors
//! - [`operations`]: the check each API operation performs
//! - [`billing`], [`invites`], [`transfer`]: operation rules beyond the permission check
//! - [`inspect`]: offline permission queries

pub mod authorize;
pub mod billing;
pub mod error;
pub mod inspect;
pub mod invites;
pub mod logging;
pub mod membership;
pub mod operations;
pub mod testing;
pub mod transfer;

pub use authorize::Authorizer;
pub use billing::{organization_billing, BillingSummary, LineItem};
pub use error::{ApiError, ErrorResponse};
pub use invites::{authorize_invite, validate_invite_email};
pub use membership::{
	resolve_membership, Membership, MembershipStore, OrganizationSnapshot, ResolvedMembership,
};
pub use operations::{authorize_operation, Operation};
pub use saas_server_config::ServerConfig;
pub use transfer::{plan_ownership_transfer, OwnershipTransfer};
