use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::sysvar;
use anchor_lang::{system_program, Discriminator, InstructionData, ToAccountMetas};
use anchor_spl::token;

use crate::constants::{DESCRIPTION_CAPACITY, TITLE_CAPACITY};
use crate::errors::{ClientError, Result};
use crate::instructions::build;
use crate::pda::{self, EventAddresses};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct CreateEvent {
    pub event_id: u64,
    pub title: String,
    pub description: String,
    pub deadline: i64,
    pub resolution_deadline: i64,
}

impl Discriminator for CreateEvent {
    const DISCRIMINATOR: &'static [u8] = &[49, 219, 29, 203, 22, 98, 100, 87];
}

impl InstructionData for CreateEvent {}

impl CreateEvent {
    /// Applies the program's own argument checks, so a caller can reject an
    /// event before paying for a failed transaction.
    pub fn validate(&self, now: i64) -> Result<()> {
        if self.title.is_empty() || self.title.len() > TITLE_CAPACITY {
            return Err(ClientError::InvalidArgument(format!(
                "title must be 1..={TITLE_CAPACITY} bytes, got {}",
                self.title.len()
            )));
        }
        if self.description.is_empty() || self.description.len() > DESCRIPTION_CAPACITY {
            return Err(ClientError::InvalidArgument(format!(
                "description must be 1..={DESCRIPTION_CAPACITY} bytes, got {}",
                self.description.len()
            )));
        }
        if self.deadline <= now {
            return Err(ClientError::InvalidArgument(
                "deadline must be in the future".into(),
            ));
        }
        if self.resolution_deadline <= self.deadline {
            return Err(ClientError::InvalidArgument(
                "resolution deadline must follow the betting deadline".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CreateEventAccounts {
    pub platform_config: Pubkey,
    pub event: Pubkey,
    pub doom_mint: Pubkey,
    pub life_mint: Pubkey,
    pub doom_vault: Pubkey,
    pub life_vault: Pubkey,
    pub user_stats: Pubkey,
    pub creator: Pubkey,
}

impl CreateEventAccounts {
    pub fn new(
        event_id: u64,
        creator: Pubkey,
        doom_mint: Pubkey,
        life_mint: Pubkey,
        program_id: &Pubkey,
    ) -> Self {
        let event = EventAddresses::derive(event_id, program_id);
        Self {
            platform_config: pda::platform_config(program_id).0,
            event: event.event,
            doom_mint,
            life_mint,
            doom_vault: event.doom_vault,
            life_vault: event.life_vault,
            user_stats: pda::user_stats(&creator, program_id).0,
            creator,
        }
    }
}

impl ToAccountMetas for CreateEventAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new_readonly(self.platform_config, false),
            AccountMeta::new(self.event, false),
            AccountMeta::new_readonly(self.doom_mint, false),
            AccountMeta::new_readonly(self.life_mint, false),
            AccountMeta::new(self.doom_vault, false),
            AccountMeta::new(self.life_vault, false),
            AccountMeta::new(self.user_stats, false),
            AccountMeta::new(self.creator, true),
            AccountMeta::new_readonly(system_program::ID, false),
            AccountMeta::new_readonly(token::ID, false),
            AccountMeta::new_readonly(sysvar::rent::ID, false),
        ]
    }
}

/// Builds `create_event`. Arguments are not validated here; see
/// [`CreateEvent::validate`].
pub fn create_event(program_id: &Pubkey, accounts: &CreateEventAccounts, args: CreateEvent) -> Instruction {
    build("create_event", program_id, accounts, &args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::test_support::*;
    use crate::prediction_market;

    fn args() -> CreateEvent {
        CreateEvent {
            event_id: 7,
            title: "Doom?".into(),
            description: "Yes or no".into(),
            deadline: 1_700_000_000,
            resolution_deadline: 1_700_086_400,
        }
    }

    #[test]
    fn encodes_strings_without_padding() {
        let creator = Pubkey::new_unique();
        let accounts = CreateEventAccounts::new(
            7,
            creator,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            &prediction_market::ID,
        );
        let ix = create_event(&prediction_market::ID, &accounts, args());

        let mut expected = global_discriminator("create_event").to_vec();
        expected.extend_from_slice(&7u64.to_le_bytes());
        expected.extend_from_slice(&5u32.to_le_bytes());
        expected.extend_from_slice(b"Doom?");
        expected.extend_from_slice(&9u32.to_le_bytes());
        expected.extend_from_slice(b"Yes or no");
        expected.extend_from_slice(&1_700_000_000i64.to_le_bytes());
        expected.extend_from_slice(&1_700_086_400i64.to_le_bytes());
        assert_eq!(ix.data, expected);
    }

    #[test]
    fn accounts_follow_program_order() {
        let pid = prediction_market::ID;
        let creator = Pubkey::new_unique();
        let (doom_mint, life_mint) = (Pubkey::new_unique(), Pubkey::new_unique());
        let accounts = CreateEventAccounts::new(7, creator, doom_mint, life_mint, &pid);
        let ix = create_event(&pid, &accounts, args());
        let event = EventAddresses::derive(7, &pid);

        assert_metas(
            &ix,
            &[
                AccountMeta::new_readonly(pda::platform_config(&pid).0, false),
                AccountMeta::new(event.event, false),
                AccountMeta::new_readonly(doom_mint, false),
                AccountMeta::new_readonly(life_mint, false),
                AccountMeta::new(event.doom_vault, false),
                AccountMeta::new(event.life_vault, false),
                AccountMeta::new(pda::user_stats(&creator, &pid).0, false),
                AccountMeta::new(creator, true),
                AccountMeta::new_readonly(system_program::ID, false),
                AccountMeta::new_readonly(token::ID, false),
                AccountMeta::new_readonly(sysvar::rent::ID, false),
            ],
        );
    }

    #[test]
    fn validate_mirrors_program_checks() {
        let now = 1_699_000_000;
        assert!(args().validate(now).is_ok());

        let mut empty_title = args();
        empty_title.title.clear();
        assert!(matches!(empty_title.validate(now), Err(ClientError::InvalidArgument(_))));

        let mut long_title = args();
        long_title.title = "x".repeat(TITLE_CAPACITY + 1);
        assert!(long_title.validate(now).is_err());

        let mut full_title = args();
        full_title.title = "x".repeat(TITLE_CAPACITY);
        assert!(full_title.validate(now).is_ok());

        let mut long_description = args();
        long_description.description = "x".repeat(DESCRIPTION_CAPACITY + 1);
        assert!(long_description.validate(now).is_err());

        assert!(args().validate(1_700_000_000).is_err());

        let mut inverted = args();
        inverted.resolution_deadline = inverted.deadline;
        assert!(inverted.validate(now).is_err());
    }
}
