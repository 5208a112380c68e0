use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::{Discriminator, InstructionData, ToAccountMetas};

use crate::instructions::build;
use crate::pda;
use crate::state::Outcome;

/// Oracle-only. Accepted between the betting and resolution deadlines.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ResolveEvent {
    pub outcome: Outcome,
}

impl Discriminator for ResolveEvent {
    const DISCRIMINATOR: &'static [u8] = &[184, 55, 78, 47, 114, 38, 50, 90];
}

impl InstructionData for ResolveEvent {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolveEventAccounts {
    pub platform_config: Pubkey,
    pub event: Pubkey,
    pub oracle: Pubkey,
}

impl ResolveEventAccounts {
    pub fn new(event_id: u64, oracle: Pubkey, program_id: &Pubkey) -> Self {
        Self {
            platform_config: pda::platform_config(program_id).0,
            event: pda::event(event_id, program_id).0,
            oracle,
        }
    }
}

impl ToAccountMetas for ResolveEventAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.platform_config, false),
            AccountMeta::new(self.event, false),
            AccountMeta::new_readonly(self.oracle, true),
        ]
    }
}

pub fn resolve_event(program_id: &Pubkey, accounts: &ResolveEventAccounts, args: ResolveEvent) -> Instruction {
    build("resolve_event", program_id, accounts, &args)
}
