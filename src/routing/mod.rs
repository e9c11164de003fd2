//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation target ("/home", "/home/books?x=1", ...)
//!     → matcher.rs (normalize to canonical path)
//!     → router.rs (table lookup, redirect alias)
//!     → view.rs (load page on first use, reuse afterwards)
//!     → Return: Resolution or NotFound
//!
//! Route Compilation (at startup):
//!     Route tree (route.rs)
//!     → Join child paths onto parents
//!     → Validate names, paths, redirects
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Exact segment matching, no wildcards or parameters
//! - Deterministic: same input always resolves to the same view

pub mod matcher;
pub mod route;
pub mod router;
pub mod view;

pub use route::Route;
pub use router::{Resolution, RouteTable, RouteTableError, RoutingError};
pub use view::LazyView;

use crate::views::{
    BookManagePage, BorrowManagePage, FineManagePage, HomePage, LoginPage, ReaderManagePage,
    ReturnManagePage,
};

/// The console's navigation tree.
pub fn library_routes() -> Vec<Route> {
    vec![
        Route::new("/", "Login").view(LazyView::of::<LoginPage>()),
        Route::new("/home", "Home")
            .view(LazyView::of::<HomePage>())
            // bare /home shows the reader screen instead of an empty layout
            .redirect("/home/readers")
            .child(Route::new("readers", "ReaderManage").view(LazyView::of::<ReaderManagePage>()))
            .child(Route::new("books", "BookManage").view(LazyView::of::<BookManagePage>()))
            .child(Route::new("borrow", "BorrowManage").view(LazyView::of::<BorrowManagePage>()))
            .child(Route::new("return", "ReturnManage").view(LazyView::of::<ReturnManagePage>()))
            .child(Route::new("fines", "FineManage").view(LazyView::of::<FineManagePage>())),
    ]
}

/// Compile the console's navigation tree.
pub fn library_table() -> Result<RouteTable, RouteTableError> {
    RouteTable::new(library_routes())
}
