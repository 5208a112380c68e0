use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::sysvar;
use anchor_lang::{system_program, Discriminator, InstructionData, ToAccountMetas};
use anchor_spl::token;

use crate::instructions::build;
use crate::pda::PoolAddresses;

/// Creates the pool, its LP mint and both reserve vaults.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct InitializePool {}

impl Discriminator for InitializePool {
    const DISCRIMINATOR: &'static [u8] = &[95, 180, 10, 172, 84, 174, 232, 40];
}

impl InstructionData for InitializePool {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitializePoolAccounts {
    pub pool: Pubkey,
    pub doom_mint: Pubkey,
    pub life_mint: Pubkey,
    pub lp_mint: Pubkey,
    pub pool_doom: Pubkey,
    pub pool_life: Pubkey,
    pub authority: Pubkey,
}

impl InitializePoolAccounts {
    pub fn new(authority: Pubkey, doom_mint: Pubkey, life_mint: Pubkey, program_id: &Pubkey) -> Self {
        let pool = PoolAddresses::derive(program_id);
        Self {
            pool: pool.pool,
            doom_mint,
            life_mint,
            lp_mint: pool.lp_mint,
            pool_doom: pool.doom_vault,
            pool_life: pool.life_vault,
            authority,
        }
    }
}

impl ToAccountMetas for InitializePoolAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.pool, false),
            AccountMeta::new_readonly(self.doom_mint, false),
            AccountMeta::new_readonly(self.life_mint, false),
            AccountMeta::new(self.lp_mint, false),
            AccountMeta::new(self.pool_doom, false),
            AccountMeta::new(self.pool_life, false),
            AccountMeta::new(self.authority, true),
            AccountMeta::new_readonly(system_program::ID, false),
            AccountMeta::new_readonly(token::ID, false),
            AccountMeta::new_readonly(sysvar::rent::ID, false),
        ]
    }
}

pub fn initialize_pool(program_id: &Pubkey, accounts: &InitializePoolAccounts) -> Instruction {
    build("initialize_pool", program_id, accounts, &InitializePool {})
}
