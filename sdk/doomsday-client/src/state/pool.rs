use anchor_lang::prelude::*;

use crate::constants::SWAP_FEE_BPS;
use crate::errors::LayoutError;
use crate::state::layout::{AccountLayout, LayoutReader};
use crate::utils::math::{self, SwapQuote};

/// DOOM/LIFE constant-product pool.
/// PDA seeds: ["pool"]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiquidityPool {
    pub doom_mint: Pubkey,
    pub life_mint: Pubkey,
    pub doom_reserve: u64,
    pub life_reserve: u64,
    pub lp_mint: Pubkey,
    pub lp_supply: u64,
    pub total_fees_doom: u64,
    pub total_fees_life: u64,
    pub authority: Pubkey,
    pub bump: u8,
    pub is_initialized: bool,
}

impl AccountLayout for LiquidityPool {
    const DISCRIMINATOR: [u8; 8] = [66, 38, 17, 64, 188, 80, 68, 129];
    const LEN: usize = Self::DECODED_LEN;
    const DECODED_LEN: usize = 8 + 32 + 32 + 8 + 8 + 32 + 8 + 8 + 8 + 32 + 1 + 1;

    fn decode(data: &[u8]) -> std::result::Result<Self, LayoutError> {
        let mut r = LayoutReader::for_account(data)?;
        Ok(Self {
            doom_mint: r.read_pubkey()?,
            life_mint: r.read_pubkey()?,
            doom_reserve: r.read_u64()?,
            life_reserve: r.read_u64()?,
            lp_mint: r.read_pubkey()?,
            lp_supply: r.read_u64()?,
            total_fees_doom: r.read_u64()?,
            total_fees_life: r.read_u64()?,
            authority: r.read_pubkey()?,
            bump: r.read_u8()?,
            is_initialized: r.read_bool()?,
        })
    }
}

impl LiquidityPool {
    /// `(reserve_in, reserve_out)` for a swap in the given direction.
    pub fn reserves(&self, doom_to_life: bool) -> (u64, u64) {
        if doom_to_life {
            (self.doom_reserve, self.life_reserve)
        } else {
            (self.life_reserve, self.doom_reserve)
        }
    }

    /// No LP tokens outstanding; the next deposit sets the price.
    pub fn is_empty(&self) -> bool {
        self.lp_supply == 0
    }

    pub fn quote_swap(&self, amount_in: u64, doom_to_life: bool) -> SwapQuote {
        let (reserve_in, reserve_out) = self.reserves(doom_to_life);
        math::quote_swap(amount_in, reserve_in, reserve_out, SWAP_FEE_BPS)
    }

    pub fn quote_deposit(&self, doom_amount: u64, life_amount: u64) -> u64 {
        math::lp_tokens_for_deposit(
            doom_amount,
            life_amount,
            self.doom_reserve,
            self.life_reserve,
            self.lp_supply,
        )
    }

    /// `(doom, life)` returned for burning `lp_amount`.
    pub fn quote_withdrawal(&self, lp_amount: u64) -> (u64, u64) {
        math::withdrawal_for_lp(lp_amount, self.doom_reserve, self.life_reserve, self.lp_supply)
    }
}
