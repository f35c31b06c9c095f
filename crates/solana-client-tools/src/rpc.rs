use std::ops::Deref;

use anyhow::{Context, Error, Result, bail};
use async_trait::async_trait;
use clap::Args;
use mockall::automock;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::{hash::Hash, signature::Signature, transaction::VersionedTransaction};
use url::Url;

/// Endpoint used when neither the command line nor the settings name one.
pub const DEFAULT_SOLANA_URL: &str = "https://api.devnet.solana.com";

#[derive(Debug, Args, Clone, Default)]
pub struct SolanaConnectionOptions {
    /// URL for Solana's JSON RPC or moniker (or their first letter):
    /// [mainnet-beta, testnet, devnet, localhost].
    #[arg(long = "url", short = 'u', value_name = "URL_OR_MONIKER")]
    pub solana_url_or_moniker: Option<String>,
}

/// Result of a simulated transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationOutcome {
    pub logs: Vec<String>,
    pub units_consumed: Option<u64>,
}

/// The network round trips a command needs. Everything a command submits goes
/// through this trait so tests can count calls against a mock.
#[automock]
#[async_trait]
pub trait TransactionSender: Send + Sync {
    fn url(&self) -> String;

    async fn latest_blockhash(&self) -> Result<Hash>;

    /// Submit and block until the transaction reaches the connection's
    /// commitment level.
    async fn send_and_confirm(&self, transaction: &VersionedTransaction) -> Result<Signature>;

    async fn simulate(&self, transaction: &VersionedTransaction) -> Result<SimulationOutcome>;
}

pub struct SolanaConnection {
    pub rpc_client: RpcClient,
    pub rpc_url: Url,
}

impl SolanaConnection {
    pub fn try_new_with_commitment(
        url_or_moniker: &str,
        commitment_config: CommitmentConfig,
    ) -> Result<Self> {
        let rpc_url = Url::parse(normalize_to_solana_url_if_moniker(url_or_moniker))
            .with_context(|| format!("Invalid RPC URL: {url_or_moniker}"))?;

        match rpc_url.scheme() {
            "http" | "https" => {}
            scheme => bail!("Invalid RPC URL scheme: {scheme}"),
        }

        Ok(Self {
            rpc_client: RpcClient::new_with_commitment(rpc_url.to_string(), commitment_config),
            rpc_url,
        })
    }
}

impl TryFrom<SolanaConnectionOptions> for SolanaConnection {
    type Error = Error;

    fn try_from(opts: SolanaConnectionOptions) -> Result<Self> {
        let SolanaConnectionOptions {
            solana_url_or_moniker: url_or_moniker,
        } = opts;

        let url_or_moniker = url_or_moniker.as_deref().unwrap_or(DEFAULT_SOLANA_URL);

        Self::try_new_with_commitment(url_or_moniker, CommitmentConfig::confirmed())
    }
}

#[async_trait]
impl TransactionSender for SolanaConnection {
    fn url(&self) -> String {
        self.rpc_url.to_string()
    }

    async fn latest_blockhash(&self) -> Result<Hash> {
        self.rpc_client
            .get_latest_blockhash()
            .await
            .context("Failed to fetch latest blockhash")
    }

    async fn send_and_confirm(&self, transaction: &VersionedTransaction) -> Result<Signature> {
        self.rpc_client
            .send_and_confirm_transaction_with_spinner(transaction)
            .await
            .context("Failed to send and confirm transaction")
    }

    async fn simulate(&self, transaction: &VersionedTransaction) -> Result<SimulationOutcome> {
        let simulation_response = self
            .rpc_client
            .simulate_transaction(transaction)
            .await
            .context("Failed to simulate transaction")?;

        if let Some(tx_err) = simulation_response.value.err {
            bail!("Simulation failed: {tx_err:?}");
        }

        Ok(SimulationOutcome {
            logs: simulation_response.value.logs.unwrap_or_default(),
            units_consumed: simulation_response.value.units_consumed,
        })
    }
}

impl Deref for SolanaConnection {
    type Target = RpcClient;

    fn deref(&self) -> &Self::Target {
        &self.rpc_client
    }
}

// Forked from solana-clap-utils.
pub fn normalize_to_solana_url_if_moniker(url_or_moniker: &str) -> &str {
    match url_or_moniker {
        "m" | "mainnet-beta" => "https://api.mainnet-beta.solana.com",
        "t" | "testnet" => "https://api.testnet.solana.com",
        "d" | "devnet" => DEFAULT_SOLANA_URL,
        "l" | "localhost" => "http://localhost:8899",
        url => url,
    }
}
