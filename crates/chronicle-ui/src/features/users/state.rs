//! User administration slice.

use crate::core::list::{Keyed, ListState};
use chronicle_api_models::User;

impl Keyed for User {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Users slice of the app store. Edit forms load their record into local
/// component state, so the slice only caches the list page.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct UsersState {
    /// Cached page of users.
    pub list: ListState<User>,
}
