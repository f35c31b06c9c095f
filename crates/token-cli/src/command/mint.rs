use std::str::FromStr;

use clap::Args;
use solana_sdk::{pubkey::Pubkey, signature::Signature};
use spl_associated_token_account_interface::address::get_associated_token_address_with_program_id;
use token22_solana_client_tools::{
    payer::{SolanaSignerOptions, Wallet},
    rpc::TransactionSender,
};
use tracing::{info, warn};

use crate::{
    command::{CommonOptions, try_connect, try_load_signer},
    error::{Result, TokenCliError},
    metadata::MintV1Params,
    settings::Settings,
};

#[derive(Debug, Args, Clone, Default)]
pub struct MintCommand {
    /// Address of the Token-2022 mint to mint from.
    #[arg(value_name = "TOKEN2022_ADDRESS")]
    pub token2022_address: Option<String>,

    #[command(flatten)]
    pub common: CommonOptions,
}

#[derive(Debug)]
pub struct MintOutcome {
    /// Associated token account that received the tokens.
    pub token_account: Pubkey,
    pub params: MintV1Params,
    /// None for a dry run.
    pub signature: Option<Signature>,
}

impl MintCommand {
    pub async fn try_into_execute(self, settings: &Settings) -> Result<MintOutcome> {
        let MintCommand {
            token2022_address,
            common,
        } = self;

        let connection = try_connect(settings)?;

        run(
            connection,
            token2022_address.as_deref(),
            common.signer_options(),
            settings,
        )
        .await
    }
}

/// Mint `settings.mint.amount` units into the signer's associated token
/// account. The address is checked before the keypair is read or anything is
/// sent.
pub async fn run<S: TransactionSender>(
    connection: S,
    token2022_address: Option<&str>,
    signer_options: &SolanaSignerOptions,
    settings: &Settings,
) -> Result<MintOutcome> {
    let mint = try_parse_mint_address(token2022_address)?;
    let token_program_id = settings.token_program_id()?;

    if let Some((created_as, minted_as)) = settings.token_standard_mismatch() {
        warn!(
            %created_as,
            %minted_as,
            "mint token standard differs from the standard tokens are created with"
        );
    }

    let signer = try_load_signer(signer_options, settings)?;
    let wallet = Wallet::new(connection, signer, signer_options);
    let owner = wallet.pubkey();

    println!("Token owner: {owner}");

    let token_account =
        get_associated_token_address_with_program_id(&owner, &mint, &token_program_id);

    let params = MintV1Params {
        mint,
        token: token_account,
        token_owner: owner,
        authority: owner,
        payer: owner,
        amount: settings.mint.amount,
        spl_token_program: token_program_id,
        token_standard: settings.mint.token_standard,
    };

    info!(
        %mint,
        %token_account,
        amount = params.amount,
        token_standard = %params.token_standard,
        "minting tokens"
    );

    let transaction = wallet
        .new_transaction(&[params.instruction()])
        .await
        .map_err(TokenCliError::Network)?;
    let signature = wallet
        .send_or_simulate_transaction(&transaction)
        .await
        .map_err(TokenCliError::Network)?;

    if let Some(signature) = signature {
        println!("Token account: {token_account}");
        println!("Transaction sent: {signature}");
        wallet.print_verbose_output(&[signature]);
    }

    Ok(MintOutcome {
        token_account,
        params,
        signature,
    })
}

pub fn try_parse_mint_address(token2022_address: Option<&str>) -> Result<Pubkey> {
    let address = token2022_address
        .map(str::trim)
        .filter(|address| !address.is_empty())
        .ok_or(TokenCliError::MissingArgument)?;

    Pubkey::from_str(address).map_err(|e| TokenCliError::InvalidAddress {
        address: address.to_string(),
        message: e.to_string(),
    })
}
