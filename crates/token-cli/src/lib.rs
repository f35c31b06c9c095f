pub mod command;
pub mod error;
pub mod metadata;
pub mod settings;

pub use error::{FailureKind, Result, TokenCliError};
