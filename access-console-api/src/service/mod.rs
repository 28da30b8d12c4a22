pub mod fetcher;
pub mod reporter;
pub mod sink;

pub use fetcher::*;
pub use reporter::*;
pub use sink::*;
