//! App-wide yewdux store slices.
//!
//! # Design
//! - One store holds every shared slice so reducers stay plain `&mut`
//!   functions and views subscribe through selectors.
//! - Slices mirror the feature layout; no view owns server data.

use yewdux::store::Store;

use crate::core::toast::ToastState;
use crate::features::auth::state::AuthState;
use crate::features::categories::state::CategoriesState;
use crate::features::comments::state::CommentsState;
use crate::features::permissions::state::PermissionsState;
use crate::features::posts::state::PostsState;
use crate::features::pricing::state::PricingState;
use crate::features::roles::state::RolesState;
use crate::features::users::state::UsersState;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Session, bootstrap and route gating.
    pub auth: AuthState,
    /// User administration.
    pub users: UsersState,
    /// Role administration.
    pub roles: RolesState,
    /// Permission administration.
    pub permissions: PermissionsState,
    /// Category administration.
    pub categories: CategoriesState,
    /// Public feed plus the author's own posts.
    pub posts: PostsState,
    /// Comment forest for the open post.
    pub comments: CommentsState,
    /// Plans, subscription and checkout.
    pub pricing: PricingState,
    /// Transient notifications.
    pub toasts: ToastState,
}
