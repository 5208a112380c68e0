use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{Discriminator, InstructionData};

use crate::instructions::amm::LiquidityAccounts;
use crate::instructions::build;

/// Deposits both tokens and mints LP tokens, failing on chain if fewer than
/// `min_lp_tokens` would be minted.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct AddLiquidity {
    pub doom_amount: u64,
    pub life_amount: u64,
    pub min_lp_tokens: u64,
}

impl Discriminator for AddLiquidity {
    const DISCRIMINATOR: &'static [u8] = &[181, 157, 89, 67, 143, 182, 52, 72];
}

impl InstructionData for AddLiquidity {}

pub fn add_liquidity(program_id: &Pubkey, accounts: &LiquidityAccounts, args: AddLiquidity) -> Instruction {
    build("add_liquidity", program_id, accounts, &args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amm;
    use crate::instructions::test_support::*;

    #[test]
    fn payload_is_three_amounts() {
        let accounts = LiquidityAccounts::new(
            Pubkey::new_unique(),
            &Pubkey::new_unique(),
            &Pubkey::new_unique(),
            &amm::ID,
        );
        let ix = add_liquidity(
            &amm::ID,
            &accounts,
            AddLiquidity {
                doom_amount: 400,
                life_amount: 900,
                min_lp_tokens: 590,
            },
        );

        let mut expected = global_discriminator("add_liquidity").to_vec();
        expected.extend_from_slice(&400u64.to_le_bytes());
        expected.extend_from_slice(&900u64.to_le_bytes());
        expected.extend_from_slice(&590u64.to_le_bytes());
        assert_eq!(ix.data, expected);
        assert_eq!(ix.accounts.len(), 9);
        assert!(ix.accounts[7].is_signer);
    }
}
