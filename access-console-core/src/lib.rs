pub mod filter;
pub mod models;
pub mod pagination;
pub mod utils;

pub use filter::*;
pub use models::*;
pub use pagination::*;
