//! The `/home` layout: navigation menu shown above every management page.

use async_trait::async_trait;

use crate::api::LibraryApi;
use crate::gateway::RequestError;
use crate::views::{Page, Screen};

/// Menu entries, in display order.
pub const MENU: &[(&str, &str)] = &[
    ("Readers", "/home/readers"),
    ("Books", "/home/books"),
    ("Borrowing", "/home/borrow"),
    ("Returns", "/home/return"),
    ("Fines", "/home/fines"),
];

#[derive(Debug, Default)]
pub struct HomePage;

#[async_trait]
impl Page for HomePage {
    fn title(&self) -> &'static str {
        "Library management"
    }

    async fn load(&self, _api: &LibraryApi) -> Result<Screen, RequestError> {
        let mut screen = Screen::new(self.title()).columns(["Menu", "Path"]);
        for (label, path) in MENU {
            screen.row([*label, *path]);
        }
        Ok(screen)
    }
}
