pub mod actors;
pub mod cli;
pub mod debounce;
pub mod error;
pub mod github;
pub mod theme;
pub mod tui;
pub mod types;
pub mod view;

pub use error::{PinboardError, Result};
