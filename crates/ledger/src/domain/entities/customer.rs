//! Customer - Snapshot of a record owned by the customer service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Customer as returned by the remote lookup. Never persisted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
