// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Policies: per-category predicates that gate what the application offers.
//!
//! Bundles declare policies in the `policies` category with a `category`
//! field naming what they constrain (`action`, `view`, ...). A
//! [`PolicyProvider`] collects the policies for one category out of the
//! resolved `policies[]` aggregate and allows a candidate only when all of
//! them do.

pub mod action;
pub mod copy;
pub mod policy;

pub use action::{ACTION_CATEGORY, ActionContext, ActionMetadata, ActionPolicy};
pub use copy::CopyPolicy;
pub use policy::{Policy, PolicyEntry, PolicyProvider};

use mct_extension::ImplementationCatalog;

/// Adds the built-in policy implementations to `catalog`.
pub fn register_implementations(catalog: &mut ImplementationCatalog) {
    copy::register(catalog);
}
