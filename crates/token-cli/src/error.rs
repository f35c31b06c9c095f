use std::process::ExitCode;

use config::ConfigError;
use strum::Display;
use thiserror::Error;
use token22_solana_client_tools::keypair::KeypairLoadError;

pub type Result<T, E = TokenCliError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum TokenCliError {
    #[error(transparent)]
    Keypair(#[from] KeypairLoadError),

    #[error("Missing parameter: token2022 address is required")]
    MissingArgument,

    #[error("Invalid token2022 address {address}: {message}")]
    InvalidAddress { address: String, message: String },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid setting {name}: {message}")]
    InvalidSetting { name: &'static str, message: String },

    #[error("Network failure: {0:#}")]
    Network(anyhow::Error),
}

/// Coarse classification of a failed run, used for exit codes and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum FailureKind {
    FileNotFound,
    ParseError,
    MissingArgument,
    InvalidAddress,
    NetworkFailure,
    Configuration,
}

impl TokenCliError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Keypair(err) if err.is_not_found() => FailureKind::FileNotFound,
            Self::Keypair(_) => FailureKind::ParseError,
            Self::MissingArgument => FailureKind::MissingArgument,
            Self::InvalidAddress { .. } => FailureKind::InvalidAddress,
            Self::Config(_) | Self::InvalidSetting { .. } => FailureKind::Configuration,
            Self::Network(_) => FailureKind::NetworkFailure,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self.kind() {
            FailureKind::NetworkFailure => 1,
            FailureKind::MissingArgument | FailureKind::InvalidAddress => 2,
            FailureKind::FileNotFound => 3,
            FailureKind::ParseError => 4,
            FailureKind::Configuration => 5,
        }
    }
}

impl From<&TokenCliError> for ExitCode {
    fn from(err: &TokenCliError) -> Self {
        ExitCode::from(err.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;

    #[test]
    fn test_missing_argument_message() {
        assert_eq!(
            TokenCliError::MissingArgument.to_string(),
            "Missing parameter: token2022 address is required"
        );
    }

    #[test]
    fn test_keypair_errors_split_by_kind() {
        let not_found = TokenCliError::from(KeypairLoadError::FileReadError {
            path: "my_wallet.json".to_string(),
            message: "No such file or directory".to_string(),
        });
        assert_eq!(not_found.kind(), FailureKind::FileNotFound);
        assert_eq!(not_found.exit_code(), 3);

        let malformed = TokenCliError::from(KeypairLoadError::InvalidJsonFormat {
            origin: "my_wallet.json".to_string(),
            message: "expected value".to_string(),
        });
        assert_eq!(malformed.kind(), FailureKind::ParseError);
        assert_eq!(malformed.exit_code(), 4);
    }

    #[test]
    fn test_network_failure_keeps_context() {
        let err = TokenCliError::Network(anyhow!("connection refused").context("Failed to send"));
        assert_eq!(err.kind(), FailureKind::NetworkFailure);
        assert_eq!(err.exit_code(), 1);
        assert_eq!(
            err.to_string(),
            "Network failure: Failed to send: connection refused"
        );
    }

    #[test]
    fn test_failure_kind_display() {
        assert_eq!(FailureKind::FileNotFound.to_string(), "file-not-found");
        assert_eq!(FailureKind::NetworkFailure.to_string(), "network-failure");
    }
}
