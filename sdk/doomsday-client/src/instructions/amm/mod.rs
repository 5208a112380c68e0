use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::AccountMeta;
use anchor_lang::ToAccountMetas;
use anchor_spl::token;

use crate::pda::{self, PoolAddresses};

pub mod initialize_pool;
pub mod add_liquidity;
pub mod remove_liquidity;
pub mod swap;

pub use initialize_pool::*;
pub use add_liquidity::*;
pub use remove_liquidity::*;
pub use swap::*;

/// Accounts shared by `add_liquidity` and `remove_liquidity`, which declare
/// the same list in the same order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LiquidityAccounts {
    pub pool: Pubkey,
    pub lp_mint: Pubkey,
    pub pool_doom: Pubkey,
    pub pool_life: Pubkey,
    pub user_doom: Pubkey,
    pub user_life: Pubkey,
    pub user_lp: Pubkey,
    pub user: Pubkey,
}

impl LiquidityAccounts {
    pub fn new(user: Pubkey, doom_mint: &Pubkey, life_mint: &Pubkey, program_id: &Pubkey) -> Self {
        let pool = PoolAddresses::derive(program_id);
        Self {
            pool: pool.pool,
            lp_mint: pool.lp_mint,
            pool_doom: pool.doom_vault,
            pool_life: pool.life_vault,
            user_doom: pda::user_token_account(&user, doom_mint),
            user_life: pda::user_token_account(&user, life_mint),
            user_lp: pda::user_token_account(&user, &pool.lp_mint),
            user,
        }
    }
}

impl ToAccountMetas for LiquidityAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.pool, false),
            AccountMeta::new(self.lp_mint, false),
            AccountMeta::new(self.pool_doom, false),
            AccountMeta::new(self.pool_life, false),
            AccountMeta::new(self.user_doom, false),
            AccountMeta::new(self.user_life, false),
            AccountMeta::new(self.user_lp, false),
            AccountMeta::new(self.user, true),
            AccountMeta::new_readonly(token::ID, false),
        ]
    }
}
