//! This module constitutes the core, headless, and backend-agnostic part of
//! the editor: the text buffer, the editable text area with its cursor, the
//! key type, and the host's command dispatch.

pub mod app;
pub mod buffer;
pub mod dispatcher;
pub mod handle;
pub mod input;
pub mod textarea;
pub mod utf8;
