// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for MCT integration tests.
//!
//! # Components
//!
//! - [`MockObject`] - Domain object with scripted capabilities and call recording
//! - [`fixtures`] - Ready-made object types and models

pub mod fixtures;
pub mod mock_object;

pub use mock_object::MockObject;
