//! `CreateV1` and `MintV1` instructions of the Metaplex Token Metadata program.
//!
//! The optional accounts of both instructions depend on the token standard:
//! non-fungible standards carry the master edition PDA, programmable ones the
//! token record PDA.

use mpl_token_metadata::{
    accounts::{MasterEdition, Metadata, TokenRecord},
    instructions::{CreateV1Builder, MintV1Builder},
    types::{Creator, PrintSupply},
};
use serde::{Deserialize, Serialize};
use solana_sdk::{instruction::Instruction, pubkey::Pubkey};
use strum::Display;

/// Token-2022 program, used for every mint created or minted by these tools.
pub const SPL_TOKEN_2022_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TokenStandard {
    NonFungible,
    FungibleAsset,
    Fungible,
    NonFungibleEdition,
    ProgrammableNonFungible,
    ProgrammableNonFungibleEdition,
}

impl TokenStandard {
    pub fn is_non_fungible(self) -> bool {
        matches!(
            self,
            Self::NonFungible
                | Self::NonFungibleEdition
                | Self::ProgrammableNonFungible
                | Self::ProgrammableNonFungibleEdition
        )
    }

    pub fn is_programmable(self) -> bool {
        matches!(
            self,
            Self::ProgrammableNonFungible | Self::ProgrammableNonFungibleEdition
        )
    }
}

impl From<TokenStandard> for mpl_token_metadata::types::TokenStandard {
    fn from(token_standard: TokenStandard) -> Self {
        match token_standard {
            TokenStandard::NonFungible => Self::NonFungible,
            TokenStandard::FungibleAsset => Self::FungibleAsset,
            TokenStandard::Fungible => Self::Fungible,
            TokenStandard::NonFungibleEdition => Self::NonFungibleEdition,
            TokenStandard::ProgrammableNonFungible => Self::ProgrammableNonFungible,
            TokenStandard::ProgrammableNonFungibleEdition => {
                Self::ProgrammableNonFungibleEdition
            }
        }
    }
}

/// Arguments of a `CreateV1` instruction. The authority is also the update
/// authority and the only (verified) creator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateV1Params {
    pub mint: Pubkey,
    pub authority: Pubkey,
    pub payer: Pubkey,
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub seller_fee_basis_points: u16,
    pub decimals: Option<u8>,
    pub is_mutable: bool,
    pub spl_token_program: Pubkey,
    pub token_standard: TokenStandard,
}

impl CreateV1Params {
    pub fn metadata_address(&self) -> Pubkey {
        Metadata::find_pda(&self.mint).0
    }

    pub fn master_edition_address(&self) -> Option<Pubkey> {
        self.token_standard
            .is_non_fungible()
            .then(|| MasterEdition::find_pda(&self.mint).0)
    }

    /// The mint signs this instruction: the program initializes it when the
    /// account does not exist yet.
    pub fn instruction(&self) -> Instruction {
        let mut builder = CreateV1Builder::new();
        builder
            .metadata(self.metadata_address())
            .master_edition(self.master_edition_address())
            .mint(self.mint, true)
            .authority(self.authority)
            .payer(self.payer)
            .update_authority(self.authority, true)
            .spl_token_program(Some(self.spl_token_program))
            .name(self.name.clone())
            .symbol(self.symbol.clone())
            .uri(self.uri.clone())
            .seller_fee_basis_points(self.seller_fee_basis_points)
            .creators(vec![Creator {
                address: self.authority,
                verified: true,
                share: 100,
            }])
            .is_mutable(self.is_mutable)
            .token_standard(self.token_standard.into());

        if let Some(decimals) = self.decimals {
            builder.decimals(decimals);
        }

        if self.token_standard.is_non_fungible() {
            builder.print_supply(PrintSupply::Zero);
        }

        builder.instruction()
    }
}

/// Arguments of a `MintV1` instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintV1Params {
    pub mint: Pubkey,
    pub token: Pubkey,
    pub token_owner: Pubkey,
    pub authority: Pubkey,
    pub payer: Pubkey,
    pub amount: u64,
    pub spl_token_program: Pubkey,
    pub token_standard: TokenStandard,
}

impl MintV1Params {
    pub fn metadata_address(&self) -> Pubkey {
        Metadata::find_pda(&self.mint).0
    }

    pub fn master_edition_address(&self) -> Option<Pubkey> {
        self.token_standard
            .is_non_fungible()
            .then(|| MasterEdition::find_pda(&self.mint).0)
    }

    pub fn token_record_address(&self) -> Option<Pubkey> {
        self.token_standard
            .is_programmable()
            .then(|| TokenRecord::find_pda(&self.mint, &self.token).0)
    }

    pub fn instruction(&self) -> Instruction {
        MintV1Builder::new()
            .token(self.token)
            .token_owner(Some(self.token_owner))
            .metadata(self.metadata_address())
            .master_edition(self.master_edition_address())
            .token_record(self.token_record_address())
            .mint(self.mint)
            .authority(self.authority)
            .payer(self.payer)
            .spl_token_program(self.spl_token_program)
            .amount(self.amount)
            .instruction()
    }
}
