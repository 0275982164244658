use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::UserSummary;

/// One line in the admin's activity log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityLogEntry {
    pub id: String,
    pub actor: UserSummary,
    pub action: String,
    pub timestamp: DateTime<Utc>,
}
