// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for MCT.
//!
//! Provides the shared error type, object types, and the [`DomainObject`]
//! trait that views, policies, and table configuration operate on.

pub mod error;
pub mod object;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::MctError;
pub use object::{DomainObject, MemoryObject, Mutator};
pub use types::{Model, ObjectType};
