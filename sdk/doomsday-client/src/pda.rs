//! Program-derived addresses for both programs.
//!
//! Every function takes the program id so callers can point the SDK at a
//! redeployed copy; `prediction_market::ID` and `amm::ID` are the defaults.

use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;

use crate::constants::*;
use crate::errors::{ClientError, Result};
use crate::state::Outcome;

pub fn platform_config(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PLATFORM_CONFIG_SEED], program_id)
}

pub fn event(event_id: u64, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[EVENT_SEED, &event_id.to_le_bytes()], program_id)
}

pub fn user_bet(event: &Pubkey, user: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[USER_BET_SEED, event.as_ref(), user.as_ref()], program_id)
}

pub fn user_stats(user: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[USER_STATS_SEED, user.as_ref()], program_id)
}

/// Token vault holding one side's stakes for an event.
pub fn event_vault(event: &Pubkey, side: Outcome, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[side.vault_seed(), event.as_ref()], program_id)
}

pub fn pool(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_SEED], program_id)
}

pub fn lp_mint(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[LP_MINT_SEED], program_id)
}

/// Reserve vault for one side of the AMM pair.
pub fn pool_vault(side: Outcome, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[side.pool_vault_seed()], program_id)
}

/// The owner's associated token account for `mint`.
pub fn user_token_account(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(owner, mint)
}

/// Recomputes an address from a stored bump and checks it against `expected`.
pub fn verify_bump(seeds: &[&[u8]], bump: u8, program_id: &Pubkey, expected: &Pubkey) -> Result<()> {
    let bump = [bump];
    let with_bump: Vec<&[u8]> = seeds.iter().copied().chain([&bump[..]]).collect();
    let derived = Pubkey::create_program_address(&with_bump, program_id).ok();
    if derived.as_ref() == Some(expected) {
        Ok(())
    } else {
        Err(ClientError::BumpMismatch {
            expected: *expected,
            derived,
        })
    }
}

/// Every program-owned address tied to one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventAddresses {
    pub event: Pubkey,
    pub event_bump: u8,
    pub doom_vault: Pubkey,
    pub doom_vault_bump: u8,
    pub life_vault: Pubkey,
    pub life_vault_bump: u8,
}

impl EventAddresses {
    pub fn derive(event_id: u64, program_id: &Pubkey) -> Self {
        let (event, event_bump) = event(event_id, program_id);
        let (doom_vault, doom_vault_bump) = event_vault(&event, Outcome::Doom, program_id);
        let (life_vault, life_vault_bump) = event_vault(&event, Outcome::Life, program_id);
        Self {
            event,
            event_bump,
            doom_vault,
            doom_vault_bump,
            life_vault,
            life_vault_bump,
        }
    }

    pub fn vault(&self, side: Outcome) -> Pubkey {
        match side {
            Outcome::Doom => self.doom_vault,
            Outcome::Life => self.life_vault,
        }
    }
}

/// The AMM's singleton addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolAddresses {
    pub pool: Pubkey,
    pub pool_bump: u8,
    pub lp_mint: Pubkey,
    pub doom_vault: Pubkey,
    pub life_vault: Pubkey,
}

impl PoolAddresses {
    pub fn derive(program_id: &Pubkey) -> Self {
        let (pool, pool_bump) = pool(program_id);
        Self {
            pool,
            pool_bump,
            lp_mint: lp_mint(program_id).0,
            doom_vault: pool_vault(Outcome::Doom, program_id).0,
            life_vault: pool_vault(Outcome::Life, program_id).0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{amm, prediction_market};

    #[test]
    fn derivation_is_deterministic() {
        let pid = prediction_market::ID;
        assert_eq!(event(7, &pid), event(7, &pid));
        assert_eq!(
            EventAddresses::derive(7, &pid),
            EventAddresses::derive(7, &pid)
        );
        assert_eq!(PoolAddresses::derive(&amm::ID), PoolAddresses::derive(&amm::ID));
    }

    #[test]
    fn event_id_is_little_endian_seed() {
        let pid = prediction_market::ID;
        let expected = Pubkey::find_program_address(&[b"event", &[1, 0, 0, 0, 0, 0, 0, 0]], &pid);
        assert_eq!(event(1, &pid), expected);
    }

    #[test]
    fn addresses_are_distinct() {
        let pid = prediction_market::ID;
        let user = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let bundle = EventAddresses::derive(1, &pid);

        let addresses = [
            platform_config(&pid).0,
            bundle.event,
            bundle.doom_vault,
            bundle.life_vault,
            event(2, &pid).0,
            user_bet(&bundle.event, &user, &pid).0,
            user_bet(&bundle.event, &other, &pid).0,
            user_stats(&user, &pid).0,
            user_stats(&other, &pid).0,
        ];
        for (i, a) in addresses.iter().enumerate() {
            for b in &addresses[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn pool_addresses_are_distinct_and_program_scoped() {
        let bundle = PoolAddresses::derive(&amm::ID);
        let all = [bundle.pool, bundle.lp_mint, bundle.doom_vault, bundle.life_vault];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_ne!(pool(&amm::ID).0, pool(&prediction_market::ID).0);
    }

    #[test]
    fn bundle_matches_single_derivations() {
        let pid = prediction_market::ID;
        let bundle = EventAddresses::derive(99, &pid);
        assert_eq!((bundle.event, bundle.event_bump), event(99, &pid));
        assert_eq!(
            bundle.vault(Outcome::Life),
            event_vault(&bundle.event, Outcome::Life, &pid).0
        );
    }

    #[test]
    fn stored_bump_is_verified() {
        let pid = prediction_market::ID;
        let (address, bump) = platform_config(&pid);
        assert!(verify_bump(&[PLATFORM_CONFIG_SEED], bump, &pid, &address).is_ok());

        let other = Pubkey::new_unique();
        assert!(matches!(
            verify_bump(&[PLATFORM_CONFIG_SEED], bump, &pid, &other),
            Err(ClientError::BumpMismatch { derived: Some(d), .. }) if d == address
        ));
    }

    #[test]
    fn user_token_account_is_the_associated_account() {
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        assert_eq!(
            user_token_account(&owner, &mint),
            get_associated_token_address(&owner, &mint)
        );
        assert_ne!(user_token_account(&owner, &mint), user_token_account(&mint, &owner));
    }
}
