use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use token22_solana_client_tools::{keypair::DEFAULT_KEYPAIR_PATH, rpc::DEFAULT_SOLANA_URL};

use crate::{
    error::{Result, TokenCliError},
    metadata::{SPL_TOKEN_2022_PROGRAM_ID, TokenStandard},
};

/// Prefix of environment overrides, e.g. `TOKEN22__MINT__AMOUNT=250`.
pub const ENV_PREFIX: &str = "TOKEN22";

/// Settings shared by both tools.
///
/// Sources, lowest precedence first: built-in defaults, the optional TOML file
/// given with `--config`, `TOKEN22__*` environment variables, then `--url` and
/// `--keypair` on the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Tracing filter used when `RUST_LOG` is not set.
    pub log: String,

    /// JSON RPC URL or moniker.
    pub rpc_url: String,

    /// JSON array keypair file.
    pub keypair_path: PathBuf,

    /// Token program owning the mint.
    pub token_program_id: String,

    pub metadata: MetadataSettings,

    pub mint: MintSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataSettings {
    pub name: String,
    pub symbol: String,
    /// Off-chain JSON metadata.
    pub uri: String,
    /// Royalty in basis points; 100 is 1%.
    pub seller_fee_basis_points: u16,
    pub decimals: Option<u8>,
    pub is_mutable: bool,
    pub token_standard: TokenStandard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintSettings {
    /// Raw token units, not adjusted for decimals.
    pub amount: u64,
    pub token_standard: TokenStandard,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log: "info".to_string(),
            rpc_url: DEFAULT_SOLANA_URL.to_string(),
            keypair_path: PathBuf::from(DEFAULT_KEYPAIR_PATH),
            token_program_id: SPL_TOKEN_2022_PROGRAM_ID.to_string(),
            metadata: MetadataSettings::default(),
            mint: MintSettings::default(),
        }
    }
}

impl Default for MetadataSettings {
    fn default() -> Self {
        Self {
            name: "My Token 2022".to_string(),
            symbol: String::new(),
            uri: "https://example.com".to_string(),
            seller_fee_basis_points: 100,
            decimals: None,
            is_mutable: true,
            token_standard: TokenStandard::Fungible,
        }
    }
}

impl Default for MintSettings {
    fn default() -> Self {
        Self {
            amount: 100,
            // Differs from the creation standard; see `Settings::token_standard_mismatch`.
            token_standard: TokenStandard::NonFungible,
        }
    }
}

impl Settings {
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        Self::build(config_path, Environment::with_prefix(ENV_PREFIX))
    }

    fn build(config_path: Option<&Path>, environment: Environment) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings: Self = builder
            .add_source(environment.separator("__").try_parsing(true))
            .build()?
            .try_deserialize()?;

        settings.validate()?;

        Ok(settings)
    }

    pub fn token_program_id(&self) -> Result<Pubkey> {
        Pubkey::from_str(&self.token_program_id).map_err(|e| TokenCliError::InvalidSetting {
            name: "token_program_id",
            message: e.to_string(),
        })
    }

    /// Creation and minting should agree on the token standard; they do not by
    /// default.
    pub fn token_standard_mismatch(&self) -> Option<(TokenStandard, TokenStandard)> {
        (self.metadata.token_standard != self.mint.token_standard)
            .then_some((self.metadata.token_standard, self.mint.token_standard))
    }

    fn validate(&self) -> Result<()> {
        self.token_program_id()?;

        if self.metadata.seller_fee_basis_points > 10_000 {
            return Err(TokenCliError::InvalidSetting {
                name: "metadata.seller_fee_basis_points",
                message: format!(
                    "{} exceeds 10000 basis points",
                    self.metadata.seller_fee_basis_points
                ),
            });
        }

        if self.metadata.name.is_empty() {
            return Err(ConfigError::Message("metadata.name must not be empty".to_string()).into());
        }

        Ok(())
    }
}
