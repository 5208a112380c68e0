use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::{Discriminator, InstructionData, ToAccountMetas};

use crate::instructions::build;
use crate::pda;

/// Authority-only. Moves an active event to Cancelled so bettors can refund.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CancelEvent {}

impl Discriminator for CancelEvent {
    const DISCRIMINATOR: &'static [u8] = &[55, 143, 36, 45, 59, 241, 89, 119];
}

impl InstructionData for CancelEvent {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CancelEventAccounts {
    pub platform_config: Pubkey,
    pub event: Pubkey,
    pub authority: Pubkey,
}

impl CancelEventAccounts {
    pub fn new(event_id: u64, authority: Pubkey, program_id: &Pubkey) -> Self {
        Self {
            platform_config: pda::platform_config(program_id).0,
            event: pda::event(event_id, program_id).0,
            authority,
        }
    }
}

impl ToAccountMetas for CancelEventAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new_readonly(self.platform_config, false),
            AccountMeta::new(self.event, false),
            AccountMeta::new_readonly(self.authority, true),
        ]
    }
}

pub fn cancel_event(program_id: &Pubkey, accounts: &CancelEventAccounts) -> Instruction {
    build("cancel_event", program_id, accounts, &CancelEvent {})
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::test_support::*;
    use crate::prediction_market;

    #[test]
    fn only_event_is_writable() {
        let pid = prediction_market::ID;
        let authority = Pubkey::new_unique();
        let ix = cancel_event(&pid, &CancelEventAccounts::new(4, authority, &pid));

        assert_eq!(ix.data, global_discriminator("cancel_event").to_vec());
        assert_metas(
            &ix,
            &[
                AccountMeta::new_readonly(pda::platform_config(&pid).0, false),
                AccountMeta::new(pda::event(4, &pid).0, false),
                AccountMeta::new_readonly(authority, true),
            ],
        );
    }
}
