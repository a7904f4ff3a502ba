pub mod auth;
pub mod dashboard;
pub mod error;
pub mod guard;
pub mod menu;
pub mod profile;
pub mod requests;

pub use auth::*;
pub use dashboard::*;
pub use error::*;
pub use guard::*;
pub use menu::*;
pub use profile::*;
pub use requests::*;
