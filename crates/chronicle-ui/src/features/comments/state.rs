//! Per-post comment forest and its two structural edits.
//!
//! # Design
//! - The forest is rebuilt functionally on every edit; nodes are owned by
//!   the slice, never shared.
//! - Insert walks depth-first and stops at the first id match (server ids
//!   are unique).
//! - A reply whose parent is not in the forest (deleted concurrently, or on
//!   an unloaded page) is dropped rather than surfaced at top level.

use chronicle_api_models::Comment;

/// Comments slice of the app store.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CommentsState {
    /// Top-level comment trees for the currently viewed post.
    pub comments: Vec<Comment>,
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// Display message for the last failed operation.
    pub error: Option<String>,
}

impl CommentsState {
    /// Enter the pending state for a fetch.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record a failed operation.
    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Replace the forest with a freshly fetched one.
    pub fn finish(&mut self, comments: Vec<Comment>) {
        self.loading = false;
        self.error = None;
        self.comments = comments;
    }

    /// Drop the forest when leaving a post page.
    pub fn clear(&mut self) {
        self.comments.clear();
        self.error = None;
    }

    /// Attach a newly created comment without re-fetching.
    ///
    /// Top-level comments are prepended. Replies are prepended to their
    /// parent's reply list, located by depth-first search. A reply whose
    /// parent id matches nothing currently loaded is discarded and the
    /// forest left unchanged.
    pub fn insert(&mut self, comment: Comment) {
        match comment.parent_id {
            None => self.comments.insert(0, comment),
            Some(parent_id) => {
                attach_reply(&mut self.comments, comment, parent_id);
            }
        }
    }

    /// Remove a comment at any depth along with its entire reply subtree.
    pub fn remove(&mut self, id: i64) {
        self.comments = remove_node(std::mem::take(&mut self.comments), id);
    }
}

/// Depth-first search for `parent_id`; returns the reply back to the caller
/// when no node at or below this level matches.
fn attach_reply(nodes: &mut [Comment], reply: Comment, parent_id: i64) -> Option<Comment> {
    let mut pending = reply;
    for node in nodes.iter_mut() {
        if node.id == parent_id {
            node.replies.insert(0, pending);
            return None;
        }
        match attach_reply(&mut node.replies, pending, parent_id) {
            None => return None,
            Some(unattached) => pending = unattached,
        }
    }
    Some(pending)
}

/// Rebuild the forest without `id`, recursing into surviving reply lists.
fn remove_node(nodes: Vec<Comment>, id: i64) -> Vec<Comment> {
    nodes
        .into_iter()
        .filter(|node| node.id != id)
        .map(|mut node| {
            node.replies = remove_node(std::mem::take(&mut node.replies), id);
            node
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::CommentsState;
    use chronicle_api_models::Comment;

    fn comment(id: i64, parent_id: Option<i64>, replies: Vec<Comment>) -> Comment {
        Comment {
            id,
            content: format!("comment {id}"),
            author_id: 1,
            author_name: "Ada".to_string(),
            post_id: 10,
            parent_id,
            replies,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn ids(nodes: &[Comment]) -> Vec<i64> {
        nodes.iter().map(|node| node.id).collect()
    }

    #[test]
    fn insert_attaches_a_reply_under_its_parent() {
        let mut state = CommentsState {
            comments: vec![comment(1, None, vec![])],
            ..CommentsState::default()
        };
        state.insert(comment(2, Some(1), vec![]));
        assert_eq!(ids(&state.comments), vec![1]);
        assert_eq!(ids(&state.comments[0].replies), vec![2]);
    }

    #[test]
    fn insert_prepends_top_level_comments() {
        let mut state = CommentsState {
            comments: vec![comment(1, None, vec![])],
            ..CommentsState::default()
        };
        state.insert(comment(3, None, vec![]));
        assert_eq!(ids(&state.comments), vec![3, 1]);
    }

    #[test]
    fn replies_are_prepended_within_their_parent() {
        let mut state = CommentsState {
            comments: vec![comment(1, None, vec![comment(2, Some(1), vec![])])],
            ..CommentsState::default()
        };
        state.insert(comment(5, Some(1), vec![]));
        assert_eq!(ids(&state.comments[0].replies), vec![5, 2]);
    }

    #[test]
    fn insert_reaches_deeply_nested_parents() {
        let deep = comment(3, Some(2), vec![]);
        let mid = comment(2, Some(1), vec![deep]);
        let mut state = CommentsState {
            comments: vec![comment(1, None, vec![mid])],
            ..CommentsState::default()
        };
        state.insert(comment(9, Some(3), vec![]));
        let level3 = &state.comments[0].replies[0].replies[0];
        assert_eq!(ids(&level3.replies), vec![9]);
    }

    #[test]
    fn insert_with_unknown_parent_drops_the_comment() {
        let mut state = CommentsState {
            comments: vec![comment(1, None, vec![])],
            ..CommentsState::default()
        };
        let before = state.comments.clone();
        state.insert(comment(7, Some(404), vec![]));
        assert_eq!(state.comments, before, "forest must be unchanged");
    }

    #[test]
    fn remove_discards_the_whole_subtree() {
        let leaf = comment(3, Some(2), vec![]);
        let mid = comment(2, Some(1), vec![leaf]);
        let mut state = CommentsState {
            comments: vec![comment(1, None, vec![mid])],
            ..CommentsState::default()
        };
        state.remove(2);
        assert_eq!(ids(&state.comments), vec![1]);
        assert!(state.comments[0].replies.is_empty());
    }

    #[test]
    fn remove_handles_top_level_nodes() {
        let mid = comment(2, Some(1), vec![]);
        let mut state = CommentsState {
            comments: vec![comment(1, None, vec![mid])],
            ..CommentsState::default()
        };
        state.remove(1);
        assert!(state.comments.is_empty());
    }
}
