//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session_provider` and `guards` wrap the router; the rest render page
//! chrome and read shared state from Leptos context.

pub mod editor_form;
pub mod form_feedback;
pub mod guards;
pub mod nav_bar;
pub mod pager;
pub mod post_card;
pub mod session_provider;
