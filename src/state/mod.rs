//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `editor`, `form`, `pagination`) as
//! plain structs with pure transitions, so pages wrap them in signals and
//! tests exercise them without a browser.

pub mod editor;
pub mod form;
pub mod pagination;
pub mod session;
