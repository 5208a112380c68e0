use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::{system_program, Discriminator, InstructionData, ToAccountMetas};
use anchor_spl::token;

use crate::instructions::build;
use crate::pda::{self, EventAddresses};
use crate::state::Outcome;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlaceBet {
    pub outcome: Outcome,
    pub amount: u64,
}

impl Discriminator for PlaceBet {
    const DISCRIMINATOR: &'static [u8] = &[222, 62, 67, 220, 63, 166, 126, 33];
}

impl InstructionData for PlaceBet {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaceBetAccounts {
    pub platform_config: Pubkey,
    pub event: Pubkey,
    pub user_bet: Pubkey,
    pub user_doom_account: Pubkey,
    pub user_life_account: Pubkey,
    pub doom_vault: Pubkey,
    pub life_vault: Pubkey,
    pub user_stats: Pubkey,
    pub user: Pubkey,
}

impl PlaceBetAccounts {
    /// Derives every address, using the user's associated token accounts
    /// for both mints.
    pub fn new(
        event_id: u64,
        user: Pubkey,
        doom_mint: &Pubkey,
        life_mint: &Pubkey,
        program_id: &Pubkey,
    ) -> Self {
        let event = EventAddresses::derive(event_id, program_id);
        Self {
            platform_config: pda::platform_config(program_id).0,
            event: event.event,
            user_bet: pda::user_bet(&event.event, &user, program_id).0,
            user_doom_account: pda::user_token_account(&user, doom_mint),
            user_life_account: pda::user_token_account(&user, life_mint),
            doom_vault: event.doom_vault,
            life_vault: event.life_vault,
            user_stats: pda::user_stats(&user, program_id).0,
            user,
        }
    }
}

impl ToAccountMetas for PlaceBetAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.platform_config, false),
            AccountMeta::new(self.event, false),
            AccountMeta::new(self.user_bet, false),
            AccountMeta::new(self.user_doom_account, false),
            AccountMeta::new(self.user_life_account, false),
            AccountMeta::new(self.doom_vault, false),
            AccountMeta::new(self.life_vault, false),
            AccountMeta::new(self.user_stats, false),
            AccountMeta::new(self.user, true),
            AccountMeta::new_readonly(system_program::ID, false),
            AccountMeta::new_readonly(token::ID, false),
        ]
    }
}

pub fn place_bet(program_id: &Pubkey, accounts: &PlaceBetAccounts, args: PlaceBet) -> Instruction {
    build("place_bet", program_id, accounts, &args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::test_support::*;
    use crate::prediction_market;

    #[test]
    fn payload_is_outcome_tag_then_amount() {
        let pid = prediction_market::ID;
        let accounts = PlaceBetAccounts::new(
            3,
            Pubkey::new_unique(),
            &Pubkey::new_unique(),
            &Pubkey::new_unique(),
            &pid,
        );
        let ix = place_bet(
            &pid,
            &accounts,
            PlaceBet {
                outcome: Outcome::Life,
                amount: 100,
            },
        );

        let mut expected = global_discriminator("place_bet").to_vec();
        expected.push(1);
        expected.extend_from_slice(&100u64.to_le_bytes());
        assert_eq!(ix.data, expected);

        let doom = PlaceBet {
            outcome: Outcome::Doom,
            amount: 1,
        }
        .data();
        assert_eq!(doom[8], 0);
    }

    #[test]
    fn accounts_follow_program_order() {
        let pid = prediction_market::ID;
        let user = Pubkey::new_unique();
        let (doom_mint, life_mint) = (Pubkey::new_unique(), Pubkey::new_unique());
        let accounts = PlaceBetAccounts::new(3, user, &doom_mint, &life_mint, &pid);
        let ix = place_bet(
            &pid,
            &accounts,
            PlaceBet {
                outcome: Outcome::Doom,
                amount: 5,
            },
        );
        let event = EventAddresses::derive(3, &pid);

        assert_metas(
            &ix,
            &[
                AccountMeta::new(pda::platform_config(&pid).0, false),
                AccountMeta::new(event.event, false),
                AccountMeta::new(pda::user_bet(&event.event, &user, &pid).0, false),
                AccountMeta::new(pda::user_token_account(&user, &doom_mint), false),
                AccountMeta::new(pda::user_token_account(&user, &life_mint), false),
                AccountMeta::new(event.doom_vault, false),
                AccountMeta::new(event.life_vault, false),
                AccountMeta::new(pda::user_stats(&user, &pid).0, false),
                AccountMeta::new(user, true),
                AccountMeta::new_readonly(system_program::ID, false),
                AccountMeta::new_readonly(token::ID, false),
            ],
        );
    }
}
