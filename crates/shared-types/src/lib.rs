pub mod error;
pub mod feature_flags;

// Mentoring domain modules
pub mod activity;
pub mod advisor;
pub mod career;
pub mod common;
pub mod feedback;
pub mod issue;
pub mod mentor;
pub mod session;
pub mod student;
pub mod user;

pub use error::*;
pub use feature_flags::*;

pub use activity::*;
pub use advisor::*;
pub use career::*;
pub use common::*;
pub use feedback::*;
pub use issue::*;
pub use mentor::*;
pub use session::*;
pub use student::*;
pub use user::*;
