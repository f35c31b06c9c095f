use clap::Args;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
};
use token22_solana_client_tools::{
    payer::{SolanaSignerOptions, Wallet},
    rpc::TransactionSender,
};
use tracing::info;

use crate::{
    command::{CommonOptions, try_connect, try_load_signer},
    error::{Result, TokenCliError},
    metadata::CreateV1Params,
    settings::Settings,
};

#[derive(Debug, Args, Clone, Default)]
pub struct CreateMetadataCommand {
    #[command(flatten)]
    pub common: CommonOptions,
}

#[derive(Debug)]
pub struct CreateMetadataOutcome {
    pub mint: Pubkey,
    pub params: CreateV1Params,
    /// None for a dry run.
    pub signature: Option<Signature>,
}

impl CreateMetadataCommand {
    pub async fn try_into_execute(self, settings: &Settings) -> Result<CreateMetadataOutcome> {
        let connection = try_connect(settings)?;

        run(connection, self.common.signer_options(), settings).await
    }
}

/// Create a new mint with its metadata account in a single `CreateV1`
/// transaction. Every call generates a new mint.
pub async fn run<S: TransactionSender>(
    connection: S,
    signer_options: &SolanaSignerOptions,
    settings: &Settings,
) -> Result<CreateMetadataOutcome> {
    let token_program_id = settings.token_program_id()?;
    let signer = try_load_signer(signer_options, settings)?;
    let wallet = Wallet::new(connection, signer, signer_options);

    println!("Token owner: {}", wallet.pubkey());

    let mint = Keypair::new();
    let params = create_v1_params(&wallet.pubkey(), &mint.pubkey(), &token_program_id, settings);

    info!(
        mint = %params.mint,
        name = %params.name,
        token_standard = %params.token_standard,
        seller_fee_basis_points = params.seller_fee_basis_points,
        "creating token metadata"
    );

    let transaction = wallet
        .new_transaction_with_additional_signers(&[params.instruction()], &[&mint])
        .await
        .map_err(TokenCliError::Network)?;
    let signature = wallet
        .send_or_simulate_transaction(&transaction)
        .await
        .map_err(TokenCliError::Network)?;

    if let Some(signature) = signature {
        println!("Mint: {}", params.mint);
        println!("Transaction sent: {signature}");
        wallet.print_verbose_output(&[signature]);
    }

    Ok(CreateMetadataOutcome {
        mint: params.mint,
        params,
        signature,
    })
}

pub fn create_v1_params(
    authority: &Pubkey,
    mint: &Pubkey,
    token_program_id: &Pubkey,
    settings: &Settings,
) -> CreateV1Params {
    let metadata = &settings.metadata;

    CreateV1Params {
        mint: *mint,
        authority: *authority,
        payer: *authority,
        name: metadata.name.clone(),
        symbol: metadata.symbol.clone(),
        uri: metadata.uri.clone(),
        seller_fee_basis_points: metadata.seller_fee_basis_points,
        decimals: metadata.decimals,
        is_mutable: metadata.is_mutable,
        spl_token_program: *token_program_id,
        token_standard: metadata.token_standard,
    }
}
