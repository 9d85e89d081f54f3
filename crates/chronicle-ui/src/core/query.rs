//! List-fetch query parameters and their wire encoding.

use chronicle_api_models::PostType;
use urlencoding::encode;

/// Pagination/sort/search parameters shared by the admin list endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    /// Zero-based page number.
    pub page: u32,
    /// Page size.
    pub size: u32,
    /// Sort field.
    pub sort_by: String,
    /// Sort direction (`asc` or `desc`).
    pub sort_dir: String,
    /// Search filter, empty for none.
    pub search: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: 10,
            sort_by: "id".to_string(),
            sort_dir: "asc".to_string(),
            search: String::new(),
        }
    }
}

impl ListQuery {
    /// Encode as the query string the auth-service endpoints expect.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        format!(
            "page={}&size={}&sortBy={}&sortDir={}&search={}",
            self.page,
            self.size,
            encode(&self.sort_by),
            encode(&self.sort_dir),
            encode(&self.search)
        )
    }
}

/// Query parameters for the public post feed, which names its sort
/// direction parameter differently and filters by visibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostQuery {
    /// Zero-based page number.
    pub page: u32,
    /// Page size.
    pub size: u32,
    /// Sort field.
    pub sort_by: String,
    /// Sort direction (`asc` or `desc`).
    pub direction: String,
    /// Search filter, empty for none.
    pub search: String,
    /// Optional visibility filter.
    pub kind: Option<PostType>,
}

impl Default for PostQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: 10,
            sort_by: "createdAt".to_string(),
            direction: "desc".to_string(),
            search: String::new(),
            kind: None,
        }
    }
}

impl PostQuery {
    /// Encode as the query string the blog-service endpoints expect.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut query = format!(
            "page={}&size={}&sortBy={}&direction={}&search={}",
            self.page,
            self.size,
            encode(&self.sort_by),
            encode(&self.direction),
            encode(&self.search)
        );
        if let Some(kind) = self.kind {
            query.push_str(match kind {
                PostType::Public => "&type=PUBLIC",
                PostType::Private => "&type=PRIVATE",
            });
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::{ListQuery, PostQuery};
    use chronicle_api_models::PostType;

    #[test]
    fn list_query_encodes_search_terms() {
        let query = ListQuery {
            page: 2,
            search: "ada byron".to_string(),
            ..ListQuery::default()
        };
        assert_eq!(
            query.to_query_string(),
            "page=2&size=10&sortBy=id&sortDir=asc&search=ada%20byron"
        );
    }

    #[test]
    fn post_query_appends_visibility_filter() {
        let query = PostQuery {
            kind: Some(PostType::Public),
            ..PostQuery::default()
        };
        assert!(query.to_query_string().ends_with("&type=PUBLIC"));
        let bare = PostQuery::default();
        assert!(!bare.to_query_string().contains("type="));
    }
}
