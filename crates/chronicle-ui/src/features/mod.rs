//! Feature slices; each owns its state, API calls and views.

pub mod auth;
pub mod categories;
pub mod comments;
pub mod dashboard;
pub mod permissions;
pub mod posts;
pub mod pricing;
pub mod roles;
pub mod users;
