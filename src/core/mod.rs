//! core/mod.rs
//!
//! The brain of the app:
//! - Session state + result types (plain data, no GUI)
//! - Append cover art to ID3 tags (metadata IO)
//! - Run a batch over many files and summarize it
//!
//! The GUI only calls in here; nothing in `core` knows about iced or dialogs,
//! so every piece can be tested without a display.

pub mod batch;
pub mod error;
pub mod tags;
pub mod types;
