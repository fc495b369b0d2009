//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `browser` isolates web APIs behind native stubs; `format` is pure display
//! logic used by cards and the reading view.

pub mod browser;
pub mod format;
