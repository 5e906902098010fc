// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod authz;
mod billing;
mod logging;

pub use authz::{AuthzConfig, AuthzConfigLayer, DenialStatus};
pub use billing::{BillingConfig, BillingConfigLayer};
pub use logging::{LogFormat, LoggingConfig, LoggingConfigLayer};
