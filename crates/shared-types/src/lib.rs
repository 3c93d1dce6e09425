pub mod config;
pub mod requests;
pub mod role;
pub mod user;

pub use config::*;
pub use requests::*;
pub use role::*;
pub use user::*;
