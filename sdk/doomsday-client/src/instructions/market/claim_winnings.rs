use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::{Discriminator, InstructionData, ToAccountMetas};
use anchor_spl::token;

use crate::instructions::build;
use crate::pda::{self, EventAddresses};

/// Pays a winning bet its stake plus its share of the losing pool, less the
/// platform fee.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClaimWinnings {}

impl Discriminator for ClaimWinnings {
    const DISCRIMINATOR: &'static [u8] = &[161, 215, 24, 59, 14, 236, 242, 221];
}

impl InstructionData for ClaimWinnings {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimWinningsAccounts {
    pub platform_config: Pubkey,
    pub event: Pubkey,
    pub user_bet: Pubkey,
    pub user_doom_account: Pubkey,
    pub user_life_account: Pubkey,
    pub doom_vault: Pubkey,
    pub life_vault: Pubkey,
    pub doom_fee_account: Pubkey,
    pub life_fee_account: Pubkey,
    pub user_stats: Pubkey,
    pub user: Pubkey,
}

impl ClaimWinningsAccounts {
    /// Fees go to `fee_recipient`'s associated token accounts.
    pub fn new(
        event_id: u64,
        user: Pubkey,
        fee_recipient: &Pubkey,
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
            doom_fee_account: pda::user_token_account(fee_recipient, doom_mint),
            life_fee_account: pda::user_token_account(fee_recipient, life_mint),
            user_stats: pda::user_stats(&user, program_id).0,
            user,
        }
    }
}

impl ToAccountMetas for ClaimWinningsAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.platform_config, false),
            AccountMeta::new_readonly(self.event, false),
            AccountMeta::new(self.user_bet, false),
            AccountMeta::new(self.user_doom_account, false),
            AccountMeta::new(self.user_life_account, false),
            AccountMeta::new(self.doom_vault, false),
            AccountMeta::new(self.life_vault, false),
            AccountMeta::new(self.doom_fee_account, false),
            AccountMeta::new(self.life_fee_account, false),
            AccountMeta::new(self.user_stats, false),
            AccountMeta::new(self.user, true),
            AccountMeta::new_readonly(token::ID, false),
        ]
    }
}

pub fn claim_winnings(program_id: &Pubkey, accounts: &ClaimWinningsAccounts) -> Instruction {
    build("claim_winnings", program_id, accounts, &ClaimWinnings {})
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::test_support::*;
    use crate::prediction_market;

    #[test]
    fn payload_is_discriminator_only() {
        let pid = prediction_market::ID;
        let accounts = ClaimWinningsAccounts::new(
            1,
            Pubkey::new_unique(),
            &Pubkey::new_unique(),
            &Pubkey::new_unique(),
            &Pubkey::new_unique(),
            &pid,
        );
        let ix = claim_winnings(&pid, &accounts);
        assert_eq!(ix.data, global_discriminator("claim_winnings").to_vec());
    }

    #[test]
    fn accounts_follow_program_order() {
        let pid = prediction_market::ID;
        let user = Pubkey::new_unique();
        let treasury = Pubkey::new_unique();
        let (doom_mint, life_mint) = (Pubkey::new_unique(), Pubkey::new_unique());
        let accounts = ClaimWinningsAccounts::new(1, user, &treasury, &doom_mint, &life_mint, &pid);
        let ix = claim_winnings(&pid, &accounts);
        let event = EventAddresses::derive(1, &pid);

        assert_metas(
            &ix,
            &[
                AccountMeta::new(pda::platform_config(&pid).0, false),
                AccountMeta::new_readonly(event.event, false),
                AccountMeta::new(pda::user_bet(&event.event, &user, &pid).0, false),
                AccountMeta::new(pda::user_token_account(&user, &doom_mint), false),
                AccountMeta::new(pda::user_token_account(&user, &life_mint), false),
                AccountMeta::new(event.doom_vault, false),
                AccountMeta::new(event.life_vault, false),
                AccountMeta::new(pda::user_token_account(&treasury, &doom_mint), false),
                AccountMeta::new(pda::user_token_account(&treasury, &life_mint), false),
                AccountMeta::new(pda::user_stats(&user, &pid).0, false),
                AccountMeta::new(user, true),
                AccountMeta::new_readonly(token::ID, false),
            ],
        );
    }
}
