pub mod create_metadata;
pub mod mint;

use std::{path::PathBuf, process::ExitCode};

use clap::Args;
use solana_sdk::{signature::Keypair, signer::Signer};
use token22_solana_client_tools::{
    keypair::load_keypair,
    payer::{SolanaPayerOptions, SolanaSignerOptions},
    rpc::{SolanaConnection, SolanaConnectionOptions},
};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    error::{Result, TokenCliError},
    settings::Settings,
};

#[derive(Debug, Args, Clone, Default)]
pub struct CommonOptions {
    /// TOML settings file. Defaults apply for anything it leaves out.
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub solana_payer_options: SolanaPayerOptions,
}

impl CommonOptions {
    /// Load settings and apply the `--url` override.
    pub fn try_load_settings(&self) -> Result<Settings> {
        let mut settings = Settings::new(self.config.as_deref())?;

        if let Some(ref url) = self
            .solana_payer_options
            .connection_options
            .solana_url_or_moniker
        {
            settings.rpc_url = url.clone();
        }

        Ok(settings)
    }

    pub fn signer_options(&self) -> &SolanaSignerOptions {
        &self.solana_payer_options.signer_options
    }
}

/// Build the RPC connection. Nothing is sent over the network here.
pub fn try_connect(settings: &Settings) -> Result<SolanaConnection> {
    SolanaConnection::try_from(SolanaConnectionOptions {
        solana_url_or_moniker: Some(settings.rpc_url.clone()),
    })
    .map_err(|e| TokenCliError::InvalidSetting {
        name: "rpc_url",
        message: format!("{e:#}"),
    })
}

/// Load the signer from `--keypair`, else from the configured keypair path.
pub fn try_load_signer(
    signer_options: &SolanaSignerOptions,
    settings: &Settings,
) -> Result<Keypair> {
    let result = load_keypair(
        signer_options.keypair_path.clone(),
        settings.keypair_path.clone(),
    )?;

    info!(source = %result.source, pubkey = %result.keypair.pubkey(), "loaded signer");

    Ok(result.keypair)
}

/// Logs go to stderr. Stdout only carries the printed results.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .init();
}

/// Log a failed run and map it to the process exit code.
pub fn report_failure(err: &TokenCliError) -> ExitCode {
    error!(kind = %err.kind(), "{err}");
    ExitCode::from(err)
}
