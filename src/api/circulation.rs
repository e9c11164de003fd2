//! Borrowing and returning copies.

use crate::api::models::{Ack, BorrowRecord, BorrowRequest, ReturnRequest};
use crate::api::LibraryApi;
use crate::gateway::RequestError;

impl LibraryApi {
    /// Lend a copy to a reader.
    pub async fn borrow(&self, card_id: i64, inventory_id: i64) -> Result<Ack, RequestError> {
        let request = BorrowRequest { card_id, inventory_id };
        let ack: Ack = self.gateway.post("/borrow/", &request).await?;
        tracing::info!(card_id, inventory_id, "Copy lent");
        Ok(ack)
    }

    /// Take a copy back. The backend computes any overdue or damage fine and
    /// describes it in the acknowledgement.
    pub async fn return_book(&self, inventory_id: i64, is_damaged: bool) -> Result<Ack, RequestError> {
        let request = ReturnRequest { inventory_id, is_damaged };
        let ack: Ack = self.gateway.post("/return/", &request).await?;
        tracing::info!(inventory_id, is_damaged, "Copy returned");
        Ok(ack)
    }

    /// Every loan a reader has had, open or closed.
    pub async fn borrow_records(&self, card_id: i64) -> Result<Vec<BorrowRecord>, RequestError> {
        self.gateway.get(&format!("/borrow_records/{}", card_id)).await
    }
}
