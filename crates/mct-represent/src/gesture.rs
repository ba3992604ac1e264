// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gesture attachment seam.

use std::sync::Arc;

use mct_core::DomainObject;

/// Attached gestures; detached by [`GestureHandle::destroy`].
pub trait GestureHandle: Send {
    fn destroy(&mut self);
}

/// Attaches named gestures (drag, drop, menu, ...) for a domain object.
pub trait GestureService: Send + Sync {
    fn attach(&self, object: &Arc<dyn DomainObject>, gestures: &[String])
    -> Box<dyn GestureHandle>;
}

/// A gesture service that attaches nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoGestures;

struct Detached;

impl GestureHandle for Detached {
    fn destroy(&mut self) {}
}

impl GestureService for NoGestures {
    fn attach(&self, _: &Arc<dyn DomainObject>, _: &[String]) -> Box<dyn GestureHandle> {
        Box::new(Detached)
    }
}
