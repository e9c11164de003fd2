//! Mountable pages.
//!
//! # Data Flow
//! ```text
//! routing::LazyView (first resolution)
//!     → loader builds the page once
//!     → Page::load(&LibraryApi) fetches what the page shows
//!     → Screen (rendered as text)
//! ```
//!
//! Pages never report request failures themselves; the gateway already has.

pub mod books;
pub mod borrow;
pub mod fines;
pub mod home;
pub mod login;
pub mod readers;
pub mod returns;
pub mod screen;

use std::fmt;

use async_trait::async_trait;

use crate::api::LibraryApi;
use crate::gateway::RequestError;

pub use books::BookManagePage;
pub use borrow::BorrowManagePage;
pub use fines::FineManagePage;
pub use home::HomePage;
pub use login::LoginPage;
pub use readers::ReaderManagePage;
pub use returns::ReturnManagePage;
pub use screen::Screen;

/// A page the console can mount.
#[async_trait]
pub trait Page: Send + Sync + fmt::Debug {
    /// Heading shown above the page.
    fn title(&self) -> &'static str;

    /// Fetch what the page shows.
    async fn load(&self, api: &LibraryApi) -> Result<Screen, RequestError>;
}
