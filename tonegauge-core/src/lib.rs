pub mod config;
pub mod error;
pub mod gauge;
pub mod navigation;
pub mod severity;
pub mod text;
pub mod types;

// Keep the public surface small and intentional.
pub use config::*;
pub use error::*;
pub use gauge::*;
pub use navigation::*;
pub use severity::*;
pub use text::*;
pub use types::*;
