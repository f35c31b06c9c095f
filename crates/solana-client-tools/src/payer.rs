use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use solana_sdk::{
    compute_budget::ComputeBudgetInstruction,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::VersionedTransaction,
};
use tracing::info;

use crate::{
    rpc::{SolanaConnectionOptions, TransactionSender},
    transaction::try_new_transaction,
};

#[derive(Debug, Args, Clone, Default)]
pub struct SolanaPayerOptions {
    #[command(flatten)]
    pub connection_options: SolanaConnectionOptions,

    #[command(flatten)]
    pub signer_options: SolanaSignerOptions,
}

#[derive(Debug, Args, Clone, Default)]
pub struct SolanaSignerOptions {
    /// Filepath to a keypair. Defaults to `my_wallet.json`.
    #[arg(long = "keypair", short = 'k', value_name = "KEYPAIR")]
    pub keypair_path: Option<PathBuf>,

    /// Set the compute unit price for transaction in increments of 0.000001 lamports per compute
    /// unit.
    #[arg(long, value_name = "MICROLAMPORTS")]
    pub with_compute_unit_price: Option<u64>,

    /// Print verbose output.
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Simulate transaction only.
    #[arg(long)]
    pub dry_run: bool,
}

/// A connection paired with the keypair that signs and pays for every
/// transaction built through it.
pub struct Wallet<S> {
    pub connection: S,
    pub signer: Keypair,
    pub compute_unit_price_ix: Option<Instruction>,
    pub verbose: bool,
    pub dry_run: bool,
}

impl<S: TransactionSender> Wallet<S> {
    pub fn new(connection: S, signer: Keypair, signer_options: &SolanaSignerOptions) -> Self {
        Self {
            connection,
            signer,
            compute_unit_price_ix: signer_options
                .with_compute_unit_price
                .map(ComputeBudgetInstruction::set_compute_unit_price),
            verbose: signer_options.verbose,
            dry_run: signer_options.dry_run,
        }
    }

    pub fn pubkey(&self) -> Pubkey {
        self.signer.pubkey()
    }

    /// Build a transaction paid for by the wallet signer. Additional signers
    /// (a freshly generated mint, for example) sign after the wallet.
    pub async fn new_transaction_with_additional_signers(
        &self,
        instructions: &[Instruction],
        additional_signers: &[&Keypair],
    ) -> Result<VersionedTransaction> {
        let recent_blockhash = self.connection.latest_blockhash().await?;

        let mut signers = Vec::with_capacity(1 + additional_signers.len());
        signers.push(&self.signer);
        signers.extend_from_slice(additional_signers);

        let mut instructions = instructions.to_vec();
        if let Some(ref compute_unit_price_ix) = self.compute_unit_price_ix {
            instructions.push(compute_unit_price_ix.clone());
        }

        try_new_transaction(&instructions, &signers, recent_blockhash)
    }

    pub async fn new_transaction(
        &self,
        instructions: &[Instruction],
    ) -> Result<VersionedTransaction> {
        self.new_transaction_with_additional_signers(instructions, &[])
            .await
    }

    /// Send and confirm, or only simulate when `--dry-run` was given. Returns
    /// the signature of a sent transaction.
    pub async fn send_or_simulate_transaction(
        &self,
        transaction: &VersionedTransaction,
    ) -> Result<Option<Signature>> {
        if self.dry_run {
            let simulation = self.connection.simulate(transaction).await?;

            info!("Simulated program logs:");
            simulation.logs.iter().for_each(|log| {
                info!("  {log}");
            });
            if let Some(units_consumed) = simulation.units_consumed {
                info!("Compute units: {units_consumed}");
            }

            Ok(None)
        } else {
            let tx_sig = self.connection.send_and_confirm(transaction).await?;

            Ok(Some(tx_sig))
        }
    }

    pub fn print_verbose_output(&self, tx_sigs: &[Signature]) {
        if self.verbose {
            info!("Url: {}", self.connection.url());
            info!("Signer: {}", self.signer.pubkey());

            for tx_sig in tx_sigs {
                info!("Transaction: {tx_sig}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use solana_sdk::{hash::Hash, instruction::AccountMeta};

    use super::*;
    use crate::rpc::{MockTransactionSender, SimulationOutcome};

    fn test_instruction(signer: &Pubkey) -> Instruction {
        Instruction::new_with_bytes(
            Pubkey::new_unique(),
            &[0],
            vec![AccountMeta::new(*signer, true)],
        )
    }

    #[tokio::test]
    async fn test_wallet_is_fee_payer_and_first_signer() {
        let mut sender = MockTransactionSender::new();
        sender
            .expect_latest_blockhash()
            .times(1)
            .returning(|| Ok(Hash::new_unique()));

        let signer = Keypair::new();
        let signer_key = signer.pubkey();
        let mint = Keypair::new();
        let wallet = Wallet::new(sender, signer, &SolanaSignerOptions::default());

        let transaction = wallet
            .new_transaction_with_additional_signers(&[test_instruction(&mint.pubkey())], &[&mint])
            .await
            .unwrap();

        assert_eq!(transaction.message.static_account_keys()[0], signer_key);
        assert_eq!(transaction.signatures.len(), 2);
    }

    #[tokio::test]
    async fn test_compute_unit_price_is_appended() {
        let mut sender = MockTransactionSender::new();
        sender
            .expect_latest_blockhash()
            .returning(|| Ok(Hash::new_unique()));

        let signer = Keypair::new();
        let signer_key = signer.pubkey();
        let options = SolanaSignerOptions {
            with_compute_unit_price: Some(5),
            ..Default::default()
        };
        let wallet = Wallet::new(sender, signer, &options);

        let transaction = wallet
            .new_transaction(&[test_instruction(&signer_key)])
            .await
            .unwrap();

        assert_eq!(transaction.message.instructions().len(), 2);
    }

    #[tokio::test]
    async fn test_dry_run_only_simulates() {
        let mut sender = MockTransactionSender::new();
        sender
            .expect_latest_blockhash()
            .returning(|| Ok(Hash::new_unique()));
        sender.expect_send_and_confirm().never();
        sender.expect_simulate().times(1).returning(|_| {
            Ok(SimulationOutcome {
                logs: vec!["Program log: ok".to_string()],
                units_consumed: Some(1_000),
            })
        });

        let signer = Keypair::new();
        let signer_key = signer.pubkey();
        let options = SolanaSignerOptions {
            dry_run: true,
            ..Default::default()
        };
        let wallet = Wallet::new(sender, signer, &options);

        let transaction = wallet
            .new_transaction(&[test_instruction(&signer_key)])
            .await
            .unwrap();
        let tx_sig = wallet
            .send_or_simulate_transaction(&transaction)
            .await
            .unwrap();

        assert!(tx_sig.is_none());
    }

    #[tokio::test]
    async fn test_send_returns_signature() {
        let expected = Signature::from([7; 64]);

        let mut sender = MockTransactionSender::new();
        sender
            .expect_latest_blockhash()
            .returning(|| Ok(Hash::new_unique()));
        sender
            .expect_send_and_confirm()
            .times(1)
            .returning(move |_| Ok(expected));

        let signer = Keypair::new();
        let signer_key = signer.pubkey();
        let wallet = Wallet::new(sender, signer, &SolanaSignerOptions::default());

        let transaction = wallet
            .new_transaction(&[test_instruction(&signer_key)])
            .await
            .unwrap();
        let tx_sig = wallet
            .send_or_simulate_transaction(&transaction)
            .await
            .unwrap();

        assert_eq!(tx_sig, Some(expected));
    }
}
