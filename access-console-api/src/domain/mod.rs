pub mod criteria;
pub mod status_filter;

pub use criteria::*;
pub use status_filter::*;
