//! vi-style modal editing
//!
//! The engine sits between the host's key handling and a `BufferHandle`.
//! It decides whether a key press is a Normal mode command and, if so, turns
//! it into calls on the handle.

pub mod action;
pub mod dispatcher;
pub mod edit;
pub mod mode;
pub mod motion;
pub mod pending;

pub use action::{Action, Edit, Motion};
pub use dispatcher::ViEngine;
pub use mode::{Mode, ModeState, Pending, cursor_shape_for};
