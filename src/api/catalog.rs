//! Publishers, books and physical copies.

use crate::api::models::{Ack, Book, BookDraft, InventoryDraft, InventoryItem, Publisher, PublisherDraft};
use crate::api::{encode_segment, LibraryApi};
use crate::gateway::RequestError;

/// Largest price the backend's DECIMAL(10, 2) column holds.
pub const MAX_BOOK_PRICE: f64 = 99_999_999.0;

impl LibraryApi {
    pub async fn list_publishers(&self) -> Result<Vec<Publisher>, RequestError> {
        self.gateway.get("/publishers/").await
    }

    pub async fn create_publisher(&self, draft: &PublisherDraft) -> Result<Publisher, RequestError> {
        self.gateway.post("/publishers/", draft).await
    }

    pub async fn update_publisher(
        &self,
        id: i64,
        draft: &PublisherDraft,
    ) -> Result<Publisher, RequestError> {
        self.gateway.put(&format!("/publishers/{}", id), draft).await
    }

    pub async fn delete_publisher(&self, id: i64) -> Result<Ack, RequestError> {
        self.gateway.delete(&format!("/publishers/{}", id)).await
    }

    pub async fn list_books(&self) -> Result<Vec<Book>, RequestError> {
        self.gateway.get("/books/").await
    }

    pub async fn create_book(&self, draft: &BookDraft) -> Result<Book, RequestError> {
        self.check_price(draft)?;
        self.gateway.post("/books/", draft).await
    }

    /// Update the book identified by `isbn`; the draft's own ISBN is ignored
    /// by the backend.
    pub async fn update_book(&self, isbn: &str, draft: &BookDraft) -> Result<Book, RequestError> {
        self.check_price(draft)?;
        self.gateway
            .put(&format!("/books/{}", encode_segment(isbn)), draft)
            .await
    }

    pub async fn delete_book(&self, isbn: &str) -> Result<Ack, RequestError> {
        self.gateway
            .delete(&format!("/books/{}", encode_segment(isbn)))
            .await
    }

    pub async fn list_inventory(&self) -> Result<Vec<InventoryItem>, RequestError> {
        self.gateway.get("/inventory/").await
    }

    /// Register a new physical copy of an existing book.
    pub async fn add_inventory(&self, isbn: &str) -> Result<InventoryItem, RequestError> {
        let draft = InventoryDraft { isbn: isbn.to_string() };
        self.gateway.post("/inventory/", &draft).await
    }

    /// Correct the ISBN recorded for a copy.
    pub async fn update_inventory(&self, id: i64, isbn: &str) -> Result<InventoryItem, RequestError> {
        let draft = InventoryDraft { isbn: isbn.to_string() };
        self.gateway.put(&format!("/inventory/{}", id), &draft).await
    }

    pub async fn delete_inventory(&self, id: i64) -> Result<Ack, RequestError> {
        self.gateway.delete(&format!("/inventory/{}", id)).await
    }

    fn check_price(&self, draft: &BookDraft) -> Result<(), RequestError> {
        match draft.price {
            Some(price) if price > MAX_BOOK_PRICE => Err(self
                .gateway
                .reject(format!("价格数值过大 (最大允许 {})", MAX_BOOK_PRICE as u64))),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::gateway::{ChannelNotifier, Gateway, GatewayConfig};

    fn draft(price: Option<f64>) -> BookDraft {
        BookDraft {
            isbn: "9787544253994".into(),
            title: "百年孤独".into(),
            author: "加西亚·马尔克斯".into(),
            publisher_id: 2,
            price,
        }
    }

    #[test]
    fn test_price_limit_boundary() {
        let (notifier, mut rx) = ChannelNotifier::new();
        let config = GatewayConfig::new("http://127.0.0.1:8000", Duration::from_secs(5)).unwrap();
        let api = LibraryApi::new(Gateway::new(config, Arc::new(notifier)).unwrap());

        assert!(api.check_price(&draft(Some(99_999_999.0))).is_ok());
        assert!(api.check_price(&draft(None)).is_ok());
        // the backend accepts these, so the console does too
        assert!(api.check_price(&draft(Some(0.0))).is_ok());
        assert!(api.check_price(&draft(Some(-5.0))).is_ok());
        assert!(rx.try_recv().is_err());

        let err = api.check_price(&draft(Some(99_999_999.01))).unwrap_err();
        assert_eq!(err.message(), "价格数值过大 (最大允许 99999999)");
        assert_eq!(rx.try_recv().unwrap().message, err.message());
        assert!(rx.try_recv().is_err());
    }
}
