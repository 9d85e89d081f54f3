//! Post slices for the public feed and the author's own posts.

use crate::core::list::{Keyed, ListState};
use chronicle_api_models::Post;

impl Keyed for Post {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Posts slice of the app store.
///
/// The public feed and the signed-in author's posts are cached separately
/// so browsing does not clobber the admin list. Vote and bookmark results
/// come back as a full post and are folded into whichever copies are live.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PostsState {
    /// Public feed page.
    pub feed: ListState<Post>,
    /// Signed-in author's posts page.
    pub mine: ListState<Post>,
    /// Post open in the detail or edit view.
    pub current: Option<Post>,
}

impl PostsState {
    /// Stash the post being viewed or edited.
    pub fn set_current(&mut self, post: Post) {
        self.current = Some(post);
    }

    /// Drop the detail record when leaving the page.
    pub fn clear_current(&mut self) {
        self.current = None;
    }

    /// Fold a mutated post (vote, bookmark, view bump) into every cached
    /// copy that shares its id.
    pub fn upsert(&mut self, post: Post) {
        for item in self.feed.items.iter_mut() {
            if item.id == post.id {
                *item = post.clone();
            }
        }
        for item in self.mine.items.iter_mut() {
            if item.id == post.id {
                *item = post.clone();
            }
        }
        if self.current.as_ref().is_some_and(|cur| cur.id == post.id) {
            self.current = Some(post);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PostsState;
    use chronicle_api_models::{Category, PageData, PageInfo, Post, PostType};

    fn post(id: i64, vote_count: i64) -> Post {
        Post {
            id,
            title: format!("post {id}"),
            excerpt: String::new(),
            content: String::new(),
            author_id: 1,
            author_name: "Ada".to_string(),
            category: Category {
                id: 1,
                name: "General".to_string(),
                description: String::new(),
                created_at: None,
            },
            image: String::new(),
            kind: PostType::Public,
            view_count: 0,
            vote_count,
            comment_count: 0,
            is_bookmarked: false,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn feed_of(posts: Vec<Post>) -> PostsState {
        let mut state = PostsState::default();
        let total = posts.len() as u64;
        state.feed.finish(PageData {
            items: posts,
            page: PageInfo {
                size: 10,
                number: 0,
                total_elements: total,
                total_pages: 1,
            },
        });
        state
    }

    #[test]
    fn upsert_replaces_the_matching_feed_item() {
        let mut state = feed_of(vec![post(1, 0), post(2, 0)]);
        state.upsert(post(2, 5));
        assert_eq!(state.feed.items[0].vote_count, 0);
        assert_eq!(state.feed.items[1].vote_count, 5);
    }

    #[test]
    fn upsert_refreshes_the_open_detail_record() {
        let mut state = feed_of(vec![post(1, 0)]);
        state.set_current(post(1, 0));
        state.upsert(post(1, 3));
        assert_eq!(state.current.as_ref().map(|p| p.vote_count), Some(3));
    }

    #[test]
    fn upsert_leaves_other_records_alone() {
        let mut state = feed_of(vec![post(1, 0)]);
        state.set_current(post(9, 0));
        state.upsert(post(1, 3));
        assert_eq!(state.current.as_ref().map(|p| p.id), Some(9));
        assert_eq!(state.current.as_ref().map(|p| p.vote_count), Some(0));
    }
}
