pub mod client;
pub mod config;
pub mod error;
pub mod llm;
pub mod quiz;
pub mod server;
pub mod session;

pub use error::{Error, Result};
