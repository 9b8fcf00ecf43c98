pub mod action;
pub mod ci;
pub mod config;
pub mod logging;
pub mod version;
