use std::{fmt, path::PathBuf};

/// Where a keypair was read from. Logged at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeypairSource {
    /// Path given with `--keypair`
    CliArgument(PathBuf),
    /// Configured path, `my_wallet.json` unless overridden
    DefaultPath(PathBuf),
}

impl KeypairSource {
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::CliArgument(path) | Self::DefaultPath(path) => path,
        }
    }
}

impl fmt::Display for KeypairSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CliArgument(path) => write!(f, "--keypair ({})", path.display()),
            Self::DefaultPath(path) => write!(f, "configured path ({})", path.display()),
        }
    }
}
