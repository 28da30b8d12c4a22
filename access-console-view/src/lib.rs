pub mod config;
pub mod controller;
pub mod logging;
pub mod messages;

pub use config::ConsoleConfig;
pub use controller::{FetchTicket, HistoryListController, ListController, ListStatus, RosterListController};
pub use messages::TransientMessage;

#[cfg(test)]
pub mod test_helper;
