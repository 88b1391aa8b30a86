// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod input;
pub mod page_header;
pub mod skeleton;
pub mod stat_card;

// Primitive wrappers
pub mod avatar;
pub mod calendar;
pub mod dropdown_menu;
pub mod separator;
pub mod toast;

// Layout
pub mod sidebar;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use calendar::*;
pub use card::*;
pub use data_table::*;
pub use dropdown_menu::*;
pub use input::*;
pub use page_header::*;
pub use separator::*;
pub use sidebar::*;
pub use skeleton::*;
pub use stat_card::*;
pub use toast::*;
