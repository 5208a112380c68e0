use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::{Discriminator, InstructionData, ToAccountMetas};
use anchor_spl::token;

use crate::instructions::build;
use crate::pda::{self, PoolAddresses};

/// Swaps `amount_in` of one side for the other at the pool price, less the
/// fixed fee. `doom_to_life` selects the direction.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Swap {
    pub amount_in: u64,
    pub min_amount_out: u64,
    pub doom_to_life: bool,
}

impl Discriminator for Swap {
    const DISCRIMINATOR: &'static [u8] = &[248, 198, 158, 145, 225, 117, 135, 200];
}

impl InstructionData for Swap {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapAccounts {
    pub pool: Pubkey,
    pub pool_doom: Pubkey,
    pub pool_life: Pubkey,
    pub user_doom: Pubkey,
    pub user_life: Pubkey,
    pub user: Pubkey,
}

impl SwapAccounts {
    pub fn new(user: Pubkey, doom_mint: &Pubkey, life_mint: &Pubkey, program_id: &Pubkey) -> Self {
        let pool = PoolAddresses::derive(program_id);
        Self {
            pool: pool.pool,
            pool_doom: pool.doom_vault,
            pool_life: pool.life_vault,
            user_doom: pda::user_token_account(&user, doom_mint),
            user_life: pda::user_token_account(&user, life_mint),
            user,
        }
    }
}

impl ToAccountMetas for SwapAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.pool, false),
            AccountMeta::new(self.pool_doom, false),
            AccountMeta::new(self.pool_life, false),
            AccountMeta::new(self.user_doom, false),
            AccountMeta::new(self.user_life, false),
            AccountMeta::new(self.user, true),
            AccountMeta::new_readonly(token::ID, false),
        ]
    }
}

pub fn swap(program_id: &Pubkey, accounts: &SwapAccounts, args: Swap) -> Instruction {
    build("swap", program_id, accounts, &args)
}
