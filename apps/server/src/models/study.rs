use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyInstance {
    pub instance_id: i32,
    pub crop_name: String,
    pub study_id: i32,
    pub instance_number: i32,
    #[serde(default)]
    pub location_id: Option<i32>,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub has_field_layout: bool,
    #[serde(default)]
    pub has_experimental_design: bool,
    #[serde(default)]
    pub has_measurements: bool,
}

/// Query parameters of the instance listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyInstanceSearch {
    pub instance_number: Option<i32>,
    pub location_id: Option<i32>,
}

impl StudyInstanceSearch {
    pub fn matches(&self, instance: &StudyInstance) -> bool {
        self.instance_number
            .map_or(true, |n| instance.instance_number == n)
            && self
                .location_id
                .map_or(true, |l| instance.location_id == Some(l))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Withdrawal,
    Deposit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// Inventory transaction attached to a study entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyTransaction {
    pub transaction_id: i32,
    pub crop_name: String,
    pub study_id: i32,
    pub entry_no: i32,
    pub designation: String,
    pub lot_id: i32,
    pub unit_name: String,
    pub amount: f64,
    pub transaction_type: TransactionType,
    pub status: TransactionStatus,
    pub created_by_username: String,
    pub created_date: DateTime<Utc>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudyTransactionsSearch {
    pub transaction_ids: Vec<i32>,
    pub entry_numbers: Vec<i32>,
    /// Case-insensitive substring match.
    pub designation: Option<String>,
    pub statuses: Vec<TransactionStatus>,
    pub transaction_types: Vec<TransactionType>,
    pub lot_ids: Vec<i32>,
    pub created_by_username: Option<String>,
}

impl StudyTransactionsSearch {
    pub fn matches(&self, tx: &StudyTransaction) -> bool {
        fn within<T: PartialEq>(allowed: &[T], value: &T) -> bool {
            allowed.is_empty() || allowed.contains(value)
        }

        within(&self.transaction_ids, &tx.transaction_id)
            && within(&self.entry_numbers, &tx.entry_no)
            && within(&self.statuses, &tx.status)
            && within(&self.transaction_types, &tx.transaction_type)
            && within(&self.lot_ids, &tx.lot_id)
            && self.designation.as_deref().map_or(true, |d| {
                tx.designation.to_lowercase().contains(&d.to_lowercase())
            })
            && self
                .created_by_username
                .as_deref()
                .map_or(true, |u| tx.created_by_username == u)
    }
}
