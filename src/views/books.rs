use std::collections::HashMap;

use async_trait::async_trait;

use crate::api::LibraryApi;
use crate::gateway::RequestError;
use crate::views::{Page, Screen};

#[derive(Debug, Default)]
pub struct BookManagePage;

#[async_trait]
impl Page for BookManagePage {
    fn title(&self) -> &'static str {
        "Books"
    }

    async fn load(&self, api: &LibraryApi) -> Result<Screen, RequestError> {
        // both calls run to completion so each failure is reported
        let (books, publishers) = tokio::join!(api.list_books(), api.list_publishers());
        let (books, publishers) = (books?, publishers?);
        let publisher_names: HashMap<i64, &str> = publishers
            .iter()
            .map(|p| (p.id, p.name.as_str()))
            .collect();

        let mut screen = Screen::new(self.title())
            .columns(["ISBN", "Title", "Author", "Publisher", "Price", "In stock"]);
        for book in &books {
            let publisher = publisher_names
                .get(&book.publisher_id)
                .map(|name| name.to_string())
                .unwrap_or_else(|| format!("#{}", book.publisher_id));
            screen.row([
                book.isbn.clone(),
                book.title.clone(),
                book.author.clone(),
                publisher,
                book.price.map(|p| format!("{:.2}", p)).unwrap_or_default(),
                book.stock_qty.to_string(),
            ]);
        }
        Ok(screen)
    }
}
