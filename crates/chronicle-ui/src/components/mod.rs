//! Shared presentational components.

pub(crate) mod pagination;
pub(crate) mod search;
pub(crate) mod shell;
pub(crate) mod toast;
