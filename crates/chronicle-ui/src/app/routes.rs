//! Routing definitions for the Chronicle UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/posts/:id")]
    PostDetail { id: i64 },
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/pricing")]
    Pricing,
    #[at("/checkout/:plan_id")]
    Checkout { plan_id: i64 },
    #[at("/admin")]
    AdminDashboard,
    #[at("/admin/users")]
    Users,
    #[at("/admin/users/new")]
    UserCreate,
    #[at("/admin/users/:id")]
    UserEdit { id: i64 },
    #[at("/admin/roles")]
    Roles,
    #[at("/admin/roles/new")]
    RoleCreate,
    #[at("/admin/roles/:id")]
    RoleEdit { id: i64 },
    #[at("/admin/permissions")]
    Permissions,
    #[at("/admin/permissions/new")]
    PermissionCreate,
    #[at("/admin/permissions/:id")]
    PermissionEdit { id: i64 },
    #[at("/admin/categories")]
    Categories,
    #[at("/admin/categories/new")]
    CategoryCreate,
    #[at("/admin/categories/:id")]
    CategoryEdit { id: i64 },
    #[at("/admin/posts")]
    Posts,
    #[at("/admin/posts/new")]
    PostCreate,
    #[at("/admin/posts/:id")]
    PostEdit { id: i64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}
