use crate::api::models::{Ack, Reader, ReaderDraft};
use crate::api::LibraryApi;
use crate::gateway::RequestError;

impl LibraryApi {
    /// Readers with their unpaid fine counts.
    pub async fn list_readers(&self) -> Result<Vec<Reader>, RequestError> {
        self.gateway.get("/readers/").await
    }

    pub async fn create_reader(&self, draft: &ReaderDraft) -> Result<Reader, RequestError> {
        self.gateway.post("/readers/", draft).await
    }

    pub async fn update_reader(
        &self,
        card_id: i64,
        draft: &ReaderDraft,
    ) -> Result<Reader, RequestError> {
        self.gateway.put(&format!("/readers/{}", card_id), draft).await
    }

    pub async fn delete_reader(&self, card_id: i64) -> Result<Ack, RequestError> {
        self.gateway.delete(&format!("/readers/{}", card_id)).await
    }
}
