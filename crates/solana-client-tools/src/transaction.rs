use anyhow::{Context, Result, ensure};
use solana_sdk::{
    hash::Hash,
    instruction::Instruction,
    message::{VersionedMessage, v0::Message},
    signature::Keypair,
    signer::Signer,
    transaction::VersionedTransaction,
};

/// Compile and sign a v0 transaction. The first signer pays the fee.
pub fn try_new_transaction(
    instructions: &[Instruction],
    signers: &[&Keypair],
    recent_blockhash: Hash,
) -> Result<VersionedTransaction> {
    ensure!(!signers.is_empty(), "Transaction requires at least one signer");

    let message = Message::try_compile(&signers[0].pubkey(), instructions, &[], recent_blockhash)
        .context("Failed to compile transaction message")?;

    VersionedTransaction::try_new(VersionedMessage::V0(message), signers)
        .context("Failed to create versioned transaction")
}

#[cfg(test)]
mod tests {
    use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey};

    use super::*;

    #[test]
    fn test_first_signer_pays_fee() {
        let payer = Keypair::new();
        let mint = Keypair::new();
        let instruction = Instruction::new_with_bytes(
            Pubkey::new_unique(),
            &[1, 2, 3],
            vec![
                AccountMeta::new(mint.pubkey(), true),
                AccountMeta::new(payer.pubkey(), true),
            ],
        );

        let transaction =
            try_new_transaction(&[instruction], &[&payer, &mint], Hash::new_unique()).unwrap();

        let account_keys = transaction.message.static_account_keys();
        assert_eq!(account_keys[0], payer.pubkey());
        assert_eq!(transaction.signatures.len(), 2);
        assert!(transaction.verify_with_results().iter().all(|ok| *ok));
    }

    #[test]
    fn test_missing_signer_is_rejected() {
        let payer = Keypair::new();
        let mint = Keypair::new();
        let instruction = Instruction::new_with_bytes(
            Pubkey::new_unique(),
            &[],
            vec![AccountMeta::new(mint.pubkey(), true)],
        );

        assert!(try_new_transaction(&[instruction], &[&payer], Hash::new_unique()).is_err());
    }

    #[test]
    fn test_no_signers() {
        assert!(try_new_transaction(&[], &[], Hash::default()).is_err());
    }
}
