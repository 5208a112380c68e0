use anchor_lang::prelude::*;

use crate::constants::{
    DESCRIPTION_CAPACITY, DOOM_VAULT_SEED, LIFE_VAULT_SEED, POOL_DOOM_SEED, POOL_LIFE_SEED,
    TITLE_CAPACITY,
};
use crate::errors::LayoutError;
use crate::state::layout::{AccountLayout, LayoutReader};
use crate::utils::math::{self, PayoutPreview};

/// Side of a market, and of the AMM pair.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Outcome {
    Doom,
    Life,
}

impl Outcome {
    pub fn opposite(self) -> Self {
        match self {
            Outcome::Doom => Outcome::Life,
            Outcome::Life => Outcome::Doom,
        }
    }

    /// Seed tag of the per-event vault holding this side's stakes.
    pub fn vault_seed(self) -> &'static [u8] {
        match self {
            Outcome::Doom => DOOM_VAULT_SEED,
            Outcome::Life => LIFE_VAULT_SEED,
        }
    }

    /// Seed tag of the AMM reserve vault for this side's token.
    pub fn pool_vault_seed(self) -> &'static [u8] {
        match self {
            Outcome::Doom => POOL_DOOM_SEED,
            Outcome::Life => POOL_LIFE_SEED,
        }
    }

    /// Orders `(doom, life)` as `(this side, other side)`.
    pub fn split_pools(self, doom: u64, life: u64) -> (u64, u64) {
        match self {
            Outcome::Doom => (doom, life),
            Outcome::Life => (life, doom),
        }
    }

    pub(crate) fn from_tag(value: u8) -> std::result::Result<Self, LayoutError> {
        match value {
            0 => Ok(Outcome::Doom),
            1 => Ok(Outcome::Life),
            value => Err(LayoutError::InvalidTag {
                field: "outcome",
                value,
            }),
        }
    }
}

/// Lifecycle of an event. A resolved event always carries its outcome.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EventStatus {
    Active,
    Resolved(Outcome),
    Cancelled,
}

impl EventStatus {
    fn from_parts(
        tag: u8,
        outcome: Option<Outcome>,
    ) -> std::result::Result<Self, LayoutError> {
        match (tag, outcome) {
            (0, None) => Ok(EventStatus::Active),
            (1, Some(outcome)) => Ok(EventStatus::Resolved(outcome)),
            (2, None) => Ok(EventStatus::Cancelled),
            (0..=2, _) => Err(LayoutError::InconsistentOutcome),
            (value, _) => Err(LayoutError::InvalidTag {
                field: "status",
                value,
            }),
        }
    }
}

/// A prediction market.
/// PDA seeds: ["event", event_id.to_le_bytes()]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredictionEvent {
    pub event_id: u64,
    pub creator: Pubkey,
    pub title: String,
    pub description: String,
    /// Betting closes at this unix timestamp.
    pub deadline: i64,
    /// The oracle must resolve by this unix timestamp.
    pub resolution_deadline: i64,
    pub status: EventStatus,
    pub doom_pool: u64,
    pub life_pool: u64,
    pub total_bettors: u64,
    pub created_at: i64,
    pub resolved_at: Option<i64>,
    pub doom_vault_bump: u8,
    pub life_vault_bump: u8,
    pub bump: u8,
}

impl AccountLayout for PredictionEvent {
    const DISCRIMINATOR: [u8; 8] = [88, 209, 255, 99, 200, 19, 183, 221];

    // 8 (discriminator)
    // 8 (event_id) + 32 (creator)
    // 4 + 128 (title) + 4 + 512 (description)
    // 8 (deadline) + 8 (resolution_deadline)
    // 1 (status) + 1+1 (outcome option)
    // 8 (doom_pool) + 8 (life_pool) + 8 (total_bettors)
    // 8 (created_at) + 1+8 (resolved_at option)
    // 1 (doom_vault_bump) + 1 (life_vault_bump) + 1 (bump)
    // 64 (padding)
    const LEN: usize = Self::DECODED_LEN + 64;
    const DECODED_LEN: usize = 8
        + 8
        + 32
        + (4 + TITLE_CAPACITY)
        + (4 + DESCRIPTION_CAPACITY)
        + 8 * 2
        + 1
        + 2
        + 8 * 3
        + 8
        + 9
        + 3;

    fn decode(data: &[u8]) -> std::result::Result<Self, LayoutError> {
        let mut r = LayoutReader::for_account(data)?;
        let event_id = r.read_u64()?;
        let creator = r.read_pubkey()?;
        let title = r.read_bounded_string("title", TITLE_CAPACITY)?;
        let description = r.read_bounded_string("description", DESCRIPTION_CAPACITY)?;
        let deadline = r.read_i64()?;
        let resolution_deadline = r.read_i64()?;
        let status_tag = r.read_u8()?;
        let outcome = r.read_option(1, |slot| Outcome::from_tag(slot.read_u8()?))?;
        let status = EventStatus::from_parts(status_tag, outcome)?;

        Ok(Self {
            event_id,
            creator,
            title,
            description,
            deadline,
            resolution_deadline,
            status,
            doom_pool: r.read_u64()?,
            life_pool: r.read_u64()?,
            total_bettors: r.read_u64()?,
            created_at: r.read_i64()?,
            resolved_at: r.read_option_i64()?,
            doom_vault_bump: r.read_u8()?,
            life_vault_bump: r.read_u8()?,
            bump: r.read_u8()?,
        })
    }
}

impl PredictionEvent {
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            EventStatus::Resolved(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn total_pool(&self) -> u64 {
        self.doom_pool.saturating_add(self.life_pool)
    }

    pub fn pool_for(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::Doom => self.doom_pool,
            Outcome::Life => self.life_pool,
        }
    }

    pub fn vault_bump_for(&self, outcome: Outcome) -> u8 {
        match outcome {
            Outcome::Doom => self.doom_vault_bump,
            Outcome::Life => self.life_vault_bump,
        }
    }

    pub fn is_betting_open(&self, now: i64) -> bool {
        self.status == EventStatus::Active && now < self.deadline
    }

    pub fn can_resolve(&self, now: i64) -> bool {
        self.status == EventStatus::Active
            && now >= self.deadline
            && now <= self.resolution_deadline
    }

    /// Implied probability of DOOM in basis points.
    pub fn doom_odds_bps(&self) -> u64 {
        math::odds_bps(self.doom_pool, self.life_pool)
    }

    /// Implied probability of LIFE in basis points.
    pub fn life_odds_bps(&self) -> u64 {
        math::odds_bps(self.life_pool, self.doom_pool)
    }

    /// Preview of a new `wager` on `side` against the current pools. `None`
    /// if the payout would not fit in a `u64`.
    pub fn preview_bet(&self, wager: u64, side: Outcome, fee_bps: u16) -> Option<PayoutPreview> {
        let (chosen, opposing) = side.split_pools(self.doom_pool, self.life_pool);
        math::preview_payout(wager, chosen, opposing, fee_bps)
    }

    /// `(payout, fee)` owed to a bet of `bet_amount` on `bet_outcome` once
    /// resolved. `None` if the event is unresolved or the bet lost.
    pub fn settled_payout(
        &self,
        bet_amount: u64,
        bet_outcome: Outcome,
        fee_bps: u16,
    ) -> Option<(u64, u64)> {
        if self.outcome() != Some(bet_outcome) {
            return None;
        }
        let (winning, losing) = bet_outcome.split_pools(self.doom_pool, self.life_pool);
        math::settled_payout(bet_amount, winning, losing, fee_bps)
    }
}
