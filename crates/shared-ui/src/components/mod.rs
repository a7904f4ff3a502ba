// Standalone components; no behavioral primitives needed for this app.
pub mod alert;
pub mod avatar;
pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod label;
pub mod page_header;
pub mod separator;
pub mod skeleton;

// Navigation chrome; depends on nothing above.
pub mod navbar;
pub mod sidebar;

// Re-exports for convenience
pub use alert::*;
pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use input::*;
pub use label::*;
pub use navbar::*;
pub use page_header::*;
pub use separator::*;
pub use skeleton::*;
pub use sidebar::*;
