//! Cross-feature state primitives.

pub mod list;
pub mod query;
pub mod store;
pub mod toast;
