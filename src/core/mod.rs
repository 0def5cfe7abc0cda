pub mod del;
pub mod list;
pub mod log;
pub mod save;
pub mod stats;
