use async_trait::async_trait;

use crate::api::LibraryApi;
use crate::gateway::RequestError;
use crate::views::{Page, Screen};

#[derive(Debug, Default)]
pub struct ReaderManagePage;

#[async_trait]
impl Page for ReaderManagePage {
    fn title(&self) -> &'static str {
        "Readers"
    }

    async fn load(&self, api: &LibraryApi) -> Result<Screen, RequestError> {
        let readers = api.list_readers().await?;

        let mut screen = Screen::new(self.title())
            .columns(["Card", "Name", "Category", "Borrowed", "Unpaid fines"]);
        for reader in &readers {
            screen.row([
                reader.card_id.to_string(),
                reader.name.clone(),
                reader.category.clone(),
                reader.borrowed_count.to_string(),
                reader.unpaid_fine_count.to_string(),
            ]);
        }

        let blocked = readers.iter().filter(|r| r.unpaid_fine_count > 0).count();
        if blocked > 0 {
            screen = screen.note(format!("{} reader(s) cannot borrow until fines are paid.", blocked));
        }
        Ok(screen)
    }
}
