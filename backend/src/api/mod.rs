pub mod search;
pub mod server;
pub mod views;
