pub mod auth;
pub mod clinical;
pub mod config;
pub mod error;
pub mod role;

pub use auth::*;
pub use clinical::*;
pub use config::*;
pub use error::*;
pub use role::*;
