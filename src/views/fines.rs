use async_trait::async_trait;

use crate::api::LibraryApi;
use crate::gateway::RequestError;
use crate::views::{Page, Screen};

#[derive(Debug, Default)]
pub struct FineManagePage;

#[async_trait]
impl Page for FineManagePage {
    fn title(&self) -> &'static str {
        "Fines"
    }

    async fn load(&self, api: &LibraryApi) -> Result<Screen, RequestError> {
        let mut fines = api.all_fines().await?;
        // unpaid first; the backend already sorts newest first within each group
        fines.sort_by_key(|fine| fine.is_paid());

        let outstanding: f64 = fines
            .iter()
            .filter(|fine| !fine.is_paid())
            .map(|fine| fine.amount)
            .sum();

        let mut screen = Screen::new(self.title())
            .columns(["ID", "Card", "Amount", "Status", "Remark"]);
        for fine in &fines {
            screen.row([
                fine.id.to_string(),
                fine.card_id.to_string(),
                format!("{:.2}", fine.amount),
                (if fine.is_paid() { "paid" } else { "unpaid" }).to_string(),
                fine.remark.clone().unwrap_or_default(),
            ]);
        }

        Ok(screen.note(format!("Outstanding: ￥{:.2}", outstanding)))
    }
}
