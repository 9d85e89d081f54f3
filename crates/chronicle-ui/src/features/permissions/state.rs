//! Permission administration slice.

use crate::core::list::{Keyed, ListState};
use chronicle_api_models::Permission;

impl Keyed for Permission {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Permissions slice of the app store. Edit forms load their record into
/// local component state, so the slice caches the list page and the
/// unpaged catalog.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PermissionsState {
    /// Cached page of permissions.
    pub list: ListState<Permission>,
    /// Full catalog used by the role form checkboxes; fetched unpaged.
    pub catalog: Vec<Permission>,
}
