pub mod history_entry;

pub use history_entry::*;
