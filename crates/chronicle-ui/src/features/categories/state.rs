//! Category administration slice.

use crate::core::list::{Keyed, ListState};
use chronicle_api_models::Category;

impl Keyed for Category {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Categories slice of the app store. Edit forms load their record into
/// local component state, so the slice caches the list page and the
/// unpaged catalog.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CategoriesState {
    /// Cached page of categories.
    pub list: ListState<Category>,
    /// Full catalog used by the post form select; fetched unpaged.
    pub catalog: Vec<Category>,
}
