pub mod page;
pub mod state;

pub use page::*;
pub use state::*;
