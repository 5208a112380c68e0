//! Instruction builders for both programs.
//!
//! Each operation has an args type (discriminator + Borsh payload), an
//! accounts type listing metas in the program's declared order, and a
//! builder returning a ready-to-sign [`Instruction`].

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{InstructionData, ToAccountMetas};
use tracing::debug;

pub mod amm;
pub mod market;

pub use amm::*;
pub use market::*;

pub(crate) fn build<A, D>(name: &'static str, program_id: &Pubkey, accounts: &A, args: &D) -> Instruction
where
    A: ToAccountMetas,
    D: InstructionData,
{
    let accounts = accounts.to_account_metas(None);
    debug!(instruction = name, accounts = accounts.len(), "built instruction");
    Instruction {
        program_id: *program_id,
        accounts,
        data: args.data(),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use solana_sdk::hash::hash;
    use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};

    /// `sha256("global:<name>")[..8]`, the recipe the programs use.
    pub fn global_discriminator(name: &str) -> [u8; 8] {
        let mut out = [0u8; 8];
        out.copy_from_slice(&hash(format!("global:{name}").as_bytes()).to_bytes()[..8]);
        out
    }

    /// `sha256("account:<Name>")[..8]`, the prefix Anchor writes on each record.
    pub fn account_discriminator(name: &str) -> [u8; 8] {
        let mut out = [0u8; 8];
        out.copy_from_slice(&hash(format!("account:{name}").as_bytes()).to_bytes()[..8]);
        out
    }

    /// Asserts keys and `(signer, writable)` flags in order.
    pub fn assert_metas(ix: &Instruction, expected: &[AccountMeta]) {
        assert_eq!(ix.accounts.len(), expected.len(), "account count");
        for (i, (got, want)) in ix.accounts.iter().zip(expected).enumerate() {
            assert_eq!(got, want, "account #{i}");
        }
    }
}
