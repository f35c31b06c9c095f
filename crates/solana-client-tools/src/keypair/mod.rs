//! Keypair loading from a JSON byte-array file.
//!
//! An explicit `--keypair /path/to/key.json` wins; otherwise the configured
//! path is read, which defaults to `my_wallet.json` in the working directory.
//!
//! # Example
//!
//! ```ignore
//! use token22_solana_client_tools::keypair::try_load_keypair;
//!
//! // Reads ./my_wallet.json
//! let keypair = try_load_keypair(None)?;
//! ```

mod error;
mod loader;
mod source;

pub use error::KeypairLoadError;
pub use loader::{
    DEFAULT_KEYPAIR_PATH, KeypairLoadResult, load_keypair, parse_keypair_json,
    read_keypair_from_path, try_load_keypair,
};
pub use source::KeypairSource;
