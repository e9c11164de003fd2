//! Records exchanged with the library backend.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Inventory status codes used by the backend.
pub const STATUS_ON_LOAN: i32 = 0;
pub const STATUS_ON_SHELF: i32 = 1;

/// Username/password pair for the credential exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful login answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginReceipt {
    pub message: String,
    pub user_id: i64,
}

/// Plain acknowledgement (`{"message": "..."}`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ack {
    pub message: String,
}

/// Fields an operator may set on a reader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReaderDraft {
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reader {
    pub card_id: i64,
    pub name: String,
    pub category: String,
    pub borrowed_count: i64,
    #[serde(default)]
    pub unpaid_fine_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublisherDraft {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publisher {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDraft {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publisher_id: i64,
    #[serde(default)]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publisher_id: i64,
    #[serde(default)]
    pub price: Option<f64>,
    pub stock_qty: i64,
}

/// One physical copy of a book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub isbn: String,
    pub status: i32,
}

impl InventoryItem {
    pub fn is_on_loan(&self) -> bool {
        self.status == STATUS_ON_LOAN
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryDraft {
    pub isbn: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorrowRequest {
    pub card_id: i64,
    pub inventory_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnRequest {
    pub inventory_id: i64,
    #[serde(default)]
    pub is_damaged: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorrowRecord {
    pub id: i64,
    pub card_id: i64,
    pub inventory_id: i64,
    pub borrow_date: NaiveDateTime,
    #[serde(default)]
    pub return_date: Option<NaiveDateTime>,
}

impl BorrowRecord {
    pub fn is_open(&self) -> bool {
        self.return_date.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fine {
    pub id: i64,
    pub card_id: i64,
    pub amount: f64,
    /// 0 = unpaid, 1 = paid.
    pub is_paid: i32,
    #[serde(default)]
    pub remark: Option<String>,
}

impl Fine {
    pub fn is_paid(&self) -> bool {
        self.is_paid != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reader_without_fine_count() {
        let reader: Reader = serde_json::from_value(json!({
            "card_id": 7,
            "name": "韩梅梅",
            "category": "teacher",
            "borrowed_count": 2
        }))
        .unwrap();
        assert_eq!(reader.unpaid_fine_count, 0);
    }

    #[test]
    fn test_borrow_record_dates() {
        let record: BorrowRecord = serde_json::from_value(json!({
            "id": 1,
            "card_id": 7,
            "inventory_id": 12,
            "borrow_date": "2024-03-01T09:30:00.123456",
            "return_date": null
        }))
        .unwrap();
        assert!(record.is_open());
        assert_eq!(record.borrow_date.to_string(), "2024-03-01 09:30:00.123456");
    }

    #[test]
    fn test_status_helpers() {
        let item = InventoryItem { id: 1, isbn: "9787020002207".into(), status: STATUS_ON_LOAN };
        assert!(item.is_on_loan());

        let fine = Fine { id: 1, card_id: 7, amount: 2.5, is_paid: 1, remark: None };
        assert!(fine.is_paid());
    }
}
