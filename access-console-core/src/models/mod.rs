pub mod history;
pub mod identifiable;
pub mod user;

// Re-exports
pub use history::*;
pub use identifiable::*;
pub use user::*;
