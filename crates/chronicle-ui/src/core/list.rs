//! Generic entity-list slice shared by every CRUD feature.
//!
//! # Design
//! - One shape for all entities so reducers stay predictable.
//! - Pending/fulfilled/rejected transitions toggle a loading flag and a
//!   single display-string error, never both at once.
//! - Delete fulfillment adjusts the cached page locally instead of
//!   re-fetching; the count can drift under concurrent mutation elsewhere.

use chronicle_api_models::{PageData, PageInfo};

/// Anything with a stable server-assigned id.
pub trait Keyed {
    /// Server-assigned id of the record.
    fn key(&self) -> i64;
}

/// Cached page of one entity type plus its fetch status.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    /// Records of the current page.
    pub items: Vec<T>,
    /// Pagination facts for the cached page.
    pub page: PageInfo,
    /// Whether a fetch or mutation is in flight.
    pub loading: bool,
    /// Display message for the last failed operation.
    pub error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: PageInfo::default(),
            loading: false,
            error: None,
        }
    }
}

impl<T> ListState<T> {
    /// Enter the pending state for a fetch or mutation.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record a failed operation and its display message.
    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Replace the cached page with a fetched one.
    pub fn finish(&mut self, page: PageData<T>) {
        self.loading = false;
        self.error = None;
        self.items = page.items;
        self.page = page.page;
    }
}

impl<T: Keyed> ListState<T> {
    /// Drop a deleted record from the cached page and decrement the total.
    ///
    /// This is the optimistic client-side adjustment: no re-fetch happens,
    /// so `total_elements` mirrors server truth only for a single operator.
    pub fn remove(&mut self, key: i64) {
        let before = self.items.len();
        self.items.retain(|item| item.key() != key);
        if self.items.len() < before {
            self.page.total_elements = self.page.total_elements.saturating_sub(1);
        }
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::{Keyed, ListState};
    use chronicle_api_models::{PageData, PageInfo};

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: i64,
    }

    impl Keyed for Row {
        fn key(&self) -> i64 {
            self.id
        }
    }

    fn ten_rows() -> ListState<Row> {
        let mut state = ListState::default();
        state.finish(PageData {
            items: (1..=10).map(|id| Row { id }).collect(),
            page: PageInfo {
                size: 10,
                number: 0,
                total_elements: 42,
                total_pages: 5,
            },
        });
        state
    }

    #[test]
    fn transitions_toggle_loading_and_error() {
        let mut state: ListState<Row> = ListState::default();
        state.begin();
        assert!(state.loading);
        assert_eq!(state.error, None);
        state.fail("boom".to_string());
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("boom"));
        state.begin();
        assert_eq!(state.error, None, "pending clears the previous error");
    }

    #[test]
    fn delete_filters_and_decrements_total_without_refetch() {
        let mut state = ten_rows();
        state.remove(4);
        assert_eq!(state.items.len(), 9);
        assert_eq!(state.page.total_elements, 41);
        assert!(state.items.iter().all(|row| row.id != 4));
    }

    #[test]
    fn deleting_an_unknown_key_leaves_the_total_alone() {
        let mut state = ten_rows();
        state.remove(999);
        assert_eq!(state.items.len(), 10);
        assert_eq!(state.page.total_elements, 42);
    }
}
