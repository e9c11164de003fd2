use async_trait::async_trait;

use crate::api::LibraryApi;
use crate::gateway::RequestError;
use crate::views::{Page, Screen};

#[derive(Debug, Default)]
pub struct LoginPage;

#[async_trait]
impl Page for LoginPage {
    fn title(&self) -> &'static str {
        "Library administration login"
    }

    async fn load(&self, _api: &LibraryApi) -> Result<Screen, RequestError> {
        Ok(Screen::new(self.title())
            .note("Sign in with: library-console login --username <name> --password <password>")
            .note("Then open /home to manage the library."))
    }
}
