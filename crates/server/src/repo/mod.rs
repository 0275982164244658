//! One module per entity. Every read and write of the [`MockStore`] goes
//! through these functions; views never touch the collections directly.
//!
//! [`MockStore`]: crate::store::MockStore

pub mod activity;
pub mod feedback;
pub mod issue;
pub mod mentor;
pub mod session;
pub mod session_report;
pub mod student;
pub mod user;

use shared_types::AppError;

fn not_found(entity: &str, id: &str) -> AppError {
    AppError::not_found(format!("{entity} {id} not found"))
}
