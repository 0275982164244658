// Standalone components
pub mod alert;
pub mod badge;
pub mod button;
pub mod card;
pub mod chart;
pub mod data_table;
pub mod form_select;
pub mod rich_text;
pub mod skeleton;
pub mod star_rating;
pub mod stat_card;
pub mod textarea;

// Primitive wrappers
pub mod alert_dialog;
pub mod avatar;
pub mod dialog;
pub mod progress;
pub mod slider;
pub mod tabs;
pub mod toast;

// Layout
pub mod sidebar;

pub use alert::*;
pub use alert_dialog::*;
pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use chart::*;
pub use data_table::*;
pub use dialog::*;
pub use form_select::*;
pub use progress::*;
pub use rich_text::*;
pub use sidebar::*;
pub use skeleton::*;
pub use slider::*;
pub use star_rating::*;
pub use stat_card::*;
pub use tabs::*;
pub use textarea::*;
pub use toast::*;
