pub mod list_controller;
pub mod state;

pub use list_controller::*;
pub use state::*;
