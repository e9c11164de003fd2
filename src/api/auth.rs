use crate::api::models::{Credentials, LoginReceipt};
use crate::api::LibraryApi;
use crate::gateway::RequestError;

impl LibraryApi {
    /// Exchange credentials with the backend.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginReceipt, RequestError> {
        let receipt: LoginReceipt = self.gateway.post("/login/", credentials).await?;
        tracing::info!(user_id = receipt.user_id, "Signed in");
        Ok(receipt)
    }
}
