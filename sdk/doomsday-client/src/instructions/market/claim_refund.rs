use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::{Discriminator, InstructionData, ToAccountMetas};
use anchor_spl::token;

use crate::instructions::build;
use crate::pda::{self, EventAddresses};

/// Returns the full stake of a bet on a cancelled event.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClaimRefund {}

impl Discriminator for ClaimRefund {
    const DISCRIMINATOR: &'static [u8] = &[15, 16, 30, 161, 255, 228, 97, 60];
}

impl InstructionData for ClaimRefund {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimRefundAccounts {
    pub event: Pubkey,
    pub user_bet: Pubkey,
    pub user_doom_account: Pubkey,
    pub user_life_account: Pubkey,
    pub doom_vault: Pubkey,
    pub life_vault: Pubkey,
    pub user: Pubkey,
}

impl ClaimRefundAccounts {
    pub fn new(
        event_id: u64,
        user: Pubkey,
        doom_mint: &Pubkey,
        life_mint: &Pubkey,
        program_id: &Pubkey,
    ) -> Self {
        let event = EventAddresses::derive(event_id, program_id);
        Self {
            event: event.event,
            user_bet: pda::user_bet(&event.event, &user, program_id).0,
            user_doom_account: pda::user_token_account(&user, doom_mint),
            user_life_account: pda::user_token_account(&user, life_mint),
            doom_vault: event.doom_vault,
            life_vault: event.life_vault,
            user,
        }
    }
}

impl ToAccountMetas for ClaimRefundAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new_readonly(self.event, false),
            AccountMeta::new(self.user_bet, false),
            AccountMeta::new(self.user_doom_account, false),
            AccountMeta::new(self.user_life_account, false),
            AccountMeta::new(self.doom_vault, false),
            AccountMeta::new(self.life_vault, false),
            AccountMeta::new(self.user, true),
            AccountMeta::new_readonly(token::ID, false),
        ]
    }
}

pub fn claim_refund(program_id: &Pubkey, accounts: &ClaimRefundAccounts) -> Instruction {
    build("claim_refund", program_id, accounts, &ClaimRefund {})
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::test_support::*;
    use crate::prediction_market;

    #[test]
    fn no_platform_config_in_refund() {
        let pid = prediction_market::ID;
        let user = Pubkey::new_unique();
        let (doom_mint, life_mint) = (Pubkey::new_unique(), Pubkey::new_unique());
        let ix = claim_refund(
            &pid,
            &ClaimRefundAccounts::new(8, user, &doom_mint, &life_mint, &pid),
        );
        let event = EventAddresses::derive(8, &pid);

        assert_eq!(ix.data, global_discriminator("claim_refund").to_vec());
        assert_metas(
            &ix,
            &[
                AccountMeta::new_readonly(event.event, false),
                AccountMeta::new(pda::user_bet(&event.event, &user, &pid).0, false),
                AccountMeta::new(pda::user_token_account(&user, &doom_mint), false),
                AccountMeta::new(pda::user_token_account(&user, &life_mint), false),
                AccountMeta::new(event.doom_vault, false),
                AccountMeta::new(event.life_vault, false),
                AccountMeta::new(user, true),
                AccountMeta::new_readonly(token::ID, false),
            ],
        );
    }
}
