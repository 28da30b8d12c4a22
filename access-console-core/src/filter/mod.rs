pub mod filterable;
pub mod profile;
pub mod record_filter;

pub use filterable::*;
pub use profile::*;
pub use record_filter::*;
