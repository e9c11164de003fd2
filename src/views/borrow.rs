use std::collections::HashMap;

use async_trait::async_trait;

use crate::api::LibraryApi;
use crate::gateway::RequestError;
use crate::views::{Page, Screen};

/// Copies and whether they can be lent right now.
#[derive(Debug, Default)]
pub struct BorrowManagePage;

#[async_trait]
impl Page for BorrowManagePage {
    fn title(&self) -> &'static str {
        "Borrowing"
    }

    async fn load(&self, api: &LibraryApi) -> Result<Screen, RequestError> {
        let (inventory, books) = tokio::join!(api.list_inventory(), api.list_books());
        let (inventory, books) = (inventory?, books?);
        let titles: HashMap<&str, &str> = books
            .iter()
            .map(|b| (b.isbn.as_str(), b.title.as_str()))
            .collect();

        let mut screen = Screen::new(self.title()).columns(["Copy", "ISBN", "Title", "Status"]);
        for item in &inventory {
            screen.row([
                item.id.to_string(),
                item.isbn.clone(),
                titles.get(item.isbn.as_str()).copied().unwrap_or("?").to_string(),
                (if item.is_on_loan() { "on loan" } else { "available" }).to_string(),
            ]);
        }

        Ok(screen.note("Lend a copy with: library-console borrow --card <card_id> --copy <copy_id>"))
    }
}
