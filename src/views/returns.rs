use async_trait::async_trait;

use crate::api::LibraryApi;
use crate::gateway::RequestError;
use crate::views::{Page, Screen};

/// Copies currently out on loan.
#[derive(Debug, Default)]
pub struct ReturnManagePage;

#[async_trait]
impl Page for ReturnManagePage {
    fn title(&self) -> &'static str {
        "Returns"
    }

    async fn load(&self, api: &LibraryApi) -> Result<Screen, RequestError> {
        let inventory = api.list_inventory().await?;

        let mut screen = Screen::new(self.title()).columns(["Copy", "ISBN"]);
        for item in inventory.iter().filter(|item| item.is_on_loan()) {
            screen.row([item.id.to_string(), item.isbn.clone()]);
        }

        Ok(screen.note("Take a copy back with: library-console return --copy <copy_id> [--damaged]"))
    }
}
