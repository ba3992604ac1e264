// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Representations of domain objects.
//!
//! A [`Representer`] holds the `representations` and `views` extensions and
//! resolves a key for a domain object to a [`RepresentationDefinition`]. A
//! [`Representation`] is one live binding point: it refreshes its
//! [`RepresentationState`] when the key, object, or object modification time
//! changes, and keeps the object's gestures attached while it lives.

pub mod definition;
pub mod gesture;
pub mod representation;
pub mod representer;

pub use definition::{BundleOrigin, RepresentationDefinition, Template};
pub use gesture::{GestureHandle, GestureService, NoGestures};
pub use representation::{Representation, RepresentationState};
pub use representer::Representer;
