//! Role administration slice.

use crate::core::list::{Keyed, ListState};
use chronicle_api_models::Role;

impl Keyed for Role {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Roles slice of the app store. Edit forms load their record into local
/// component state, so the slice only caches the list page.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct RolesState {
    /// Cached page of roles.
    pub list: ListState<Role>,
}
