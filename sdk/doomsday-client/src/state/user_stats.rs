use anchor_lang::prelude::*;

use crate::constants::BASIS_POINTS;
use crate::errors::LayoutError;
use crate::state::layout::{AccountLayout, LayoutReader};

/// Lifetime betting statistics for one user.
/// PDA seeds: ["user_stats", user]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserStats {
    pub user: Pubkey,
    pub total_bets: u64,
    pub wins: u64,
    pub losses: u64,
    pub total_wagered: u64,
    pub total_won: u64,
    pub total_lost: u64,
    pub net_profit: i64,
    pub events_created: u64,
    pub first_bet_at: Option<i64>,
    pub last_bet_at: Option<i64>,
    /// Positive while winning, negative while losing.
    pub current_streak: i64,
    pub best_streak: u64,
    pub worst_streak: u64,
    pub bump: u8,
}

impl AccountLayout for UserStats {
    const DISCRIMINATOR: [u8; 8] = [176, 223, 136, 27, 122, 79, 32, 227];
    const LEN: usize = Self::DECODED_LEN + 32;
    const DECODED_LEN: usize = 8 + 32 + 8 * 8 + 9 + 9 + 8 * 3 + 1;

    fn decode(data: &[u8]) -> std::result::Result<Self, LayoutError> {
        let mut r = LayoutReader::for_account(data)?;
        Ok(Self {
            user: r.read_pubkey()?,
            total_bets: r.read_u64()?,
            wins: r.read_u64()?,
            losses: r.read_u64()?,
            total_wagered: r.read_u64()?,
            total_won: r.read_u64()?,
            total_lost: r.read_u64()?,
            net_profit: r.read_i64()?,
            events_created: r.read_u64()?,
            first_bet_at: r.read_option_i64()?,
            last_bet_at: r.read_option_i64()?,
            current_streak: r.read_i64()?,
            best_streak: r.read_u64()?,
            worst_streak: r.read_u64()?,
            bump: r.read_u8()?,
        })
    }
}

impl UserStats {
    /// Wins over all bets placed, in basis points.
    pub fn win_rate_bps(&self) -> u64 {
        if self.total_bets == 0 {
            return 0;
        }
        (self.wins as u128 * BASIS_POINTS as u128 / self.total_bets as u128) as u64
    }

    /// Bets not yet counted as a win or a loss.
    pub fn unsettled_bets(&self) -> u64 {
        self.total_bets
            .saturating_sub(self.wins)
            .saturating_sub(self.losses)
    }
}
