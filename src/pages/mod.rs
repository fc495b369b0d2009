//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped loading and submission and delegates
//! rendering details to `components`. Network flows are factored into plain
//! async functions so they can be driven against a scripted transport.

pub mod create_blog;
pub mod edit_blog;
pub mod home;
pub mod my_blogs;
pub mod sign_in;
pub mod sign_up;
pub mod single_blog;
pub mod view_all;
