use crate::api::models::{Ack, Fine};
use crate::api::LibraryApi;
use crate::gateway::RequestError;

impl LibraryApi {
    /// All fines, newest first.
    pub async fn all_fines(&self) -> Result<Vec<Fine>, RequestError> {
        self.gateway.get("/fines/all").await
    }

    pub async fn fines_for(&self, card_id: i64) -> Result<Vec<Fine>, RequestError> {
        self.gateway.get(&format!("/fines/{}", card_id)).await
    }

    /// Mark a fine as paid. Paying twice is acknowledged, not an error.
    pub async fn pay_fine(&self, fine_id: i64) -> Result<Ack, RequestError> {
        self.gateway
            .post_empty(&format!("/fines/pay/{}", fine_id))
            .await
    }
}
