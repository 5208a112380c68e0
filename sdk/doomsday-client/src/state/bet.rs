use anchor_lang::prelude::*;

use crate::errors::LayoutError;
use crate::state::event::{EventStatus, Outcome, PredictionEvent};
use crate::state::layout::{AccountLayout, LayoutReader};

/// A user's single bet on one event.
/// PDA seeds: ["user_bet", event, user]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserBet {
    pub event: Pubkey,
    pub user: Pubkey,
    pub outcome: Outcome,
    pub amount: u64,
    pub placed_at: i64,
    pub claimed: bool,
    pub refunded: bool,
    pub bump: u8,
}

impl AccountLayout for UserBet {
    const DISCRIMINATOR: [u8; 8] = [180, 131, 8, 241, 60, 243, 46, 63];
    const LEN: usize = Self::DECODED_LEN + 32;
    const DECODED_LEN: usize = 8 + 32 + 32 + 1 + 8 + 8 + 1 + 1 + 1;

    fn decode(data: &[u8]) -> std::result::Result<Self, LayoutError> {
        let mut r = LayoutReader::for_account(data)?;
        Ok(Self {
            event: r.read_pubkey()?,
            user: r.read_pubkey()?,
            outcome: Outcome::from_tag(r.read_u8()?)?,
            amount: r.read_u64()?,
            placed_at: r.read_i64()?,
            claimed: r.read_bool()?,
            refunded: r.read_bool()?,
            bump: r.read_u8()?,
        })
    }
}

impl UserBet {
    /// Byte offset of `event`, for memcmp scans.
    pub const EVENT_OFFSET: usize = 8;
    /// Byte offset of `user`, for memcmp scans.
    pub const USER_OFFSET: usize = 8 + 32;

    pub fn is_winner(&self, event: &PredictionEvent) -> bool {
        event.outcome() == Some(self.outcome)
    }

    pub fn is_claimable(&self, event: &PredictionEvent) -> bool {
        self.is_winner(event) && !self.claimed
    }

    pub fn is_refundable(&self, event: &PredictionEvent) -> bool {
        event.status == EventStatus::Cancelled && !self.refunded
    }
}
