//! Client-side route paths.
//!
//! `SIGN_IN` and `SIGN_UP` are public; every other route requires a session.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const HOME: &str = "/";
pub const SIGN_IN: &str = "/signin";
pub const SIGN_UP: &str = "/signup";
pub const CREATE_BLOG: &str = "/create/blog";
pub const MY_BLOGS: &str = "/my-blogs";
pub const VIEW_BLOGS: &str = "/view/blogs";

/// Reading view for one post.
pub fn blog(id: &str) -> String {
    format!("/blogs/{id}")
}

/// Edit screen for one post.
pub fn edit_blog(id: &str) -> String {
    format!("/edit/blog/{id}")
}
