use chrono::{NaiveDate, Utc};
use uuid::Uuid;

/// Fresh record id in the fixture style, e.g. `sr-1f0c9a2b`.
pub fn new_id(prefix: &str) -> String {
    let simple = Uuid::new_v4().simple().to_string();
    format!("{prefix}-{}", &simple[..8])
}

/// Today's date in UTC, used to stamp new records.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
