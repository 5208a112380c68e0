use anchor_lang::prelude::*;

use crate::constants::BASIS_POINTS;
use crate::errors::LayoutError;
use crate::state::layout::{AccountLayout, LayoutReader};

/// Global platform configuration.
/// PDA seeds: ["platform_config"]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlatformConfig {
    pub authority: Pubkey,
    /// Only this key may resolve events.
    pub oracle: Pubkey,
    pub fee_basis_points: u16,
    pub paused: bool,
    pub total_doom_fees: u64,
    pub total_life_fees: u64,
    pub total_events: u64,
    pub total_bets: u64,
    pub bump: u8,
}

impl AccountLayout for PlatformConfig {
    const DISCRIMINATOR: [u8; 8] = [160, 78, 128, 0, 248, 83, 230, 160];
    const LEN: usize = Self::DECODED_LEN + 64;
    const DECODED_LEN: usize = 8 + 32 + 32 + 2 + 1 + 8 * 4 + 1;

    fn decode(data: &[u8]) -> std::result::Result<Self, LayoutError> {
        let mut r = LayoutReader::for_account(data)?;
        Ok(Self {
            authority: r.read_pubkey()?,
            oracle: r.read_pubkey()?,
            fee_basis_points: r.read_u16()?,
            paused: r.read_bool()?,
            total_doom_fees: r.read_u64()?,
            total_life_fees: r.read_u64()?,
            total_events: r.read_u64()?,
            total_bets: r.read_u64()?,
            bump: r.read_u8()?,
        })
    }
}

impl PlatformConfig {
    /// Platform fee on `amount`, rounded down.
    pub fn calculate_fee(&self, amount: u64) -> u64 {
        (amount as u128 * self.fee_basis_points as u128 / BASIS_POINTS as u128) as u64
    }
}
