//! `stockroom-cli` — interactive shoe inventory menu.
//!
//! The binary wires a [`Session`] to stdin/stdout and the `inventory.txt`
//! file; everything here is generic over the reader, writer and backing
//! source so whole sessions can be driven from tests.

pub mod config;
pub mod console;
pub mod menu;
pub mod operations;
pub mod session;

pub use config::AppConfig;
pub use console::Console;
pub use menu::{MenuChoice, MenuState};
pub use session::Session;
