use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::{Discriminator, InstructionData, ToAccountMetas};

use crate::instructions::build;
use crate::pda;

/// Authority-only. `None` fields are left unchanged.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdatePlatform {
    pub fee_basis_points: Option<u16>,
    pub new_oracle: Option<Pubkey>,
    pub paused: Option<bool>,
}

impl Discriminator for UpdatePlatform {
    const DISCRIMINATOR: &'static [u8] = &[46, 78, 138, 189, 47, 163, 120, 85];
}

impl InstructionData for UpdatePlatform {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpdatePlatformAccounts {
    pub platform_config: Pubkey,
    pub authority: Pubkey,
}

impl UpdatePlatformAccounts {
    pub fn new(authority: Pubkey, program_id: &Pubkey) -> Self {
        Self {
            platform_config: pda::platform_config(program_id).0,
            authority,
        }
    }
}

impl ToAccountMetas for UpdatePlatformAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.platform_config, false),
            AccountMeta::new_readonly(self.authority, true),
        ]
    }
}

pub fn update_platform(
    program_id: &Pubkey,
    accounts: &UpdatePlatformAccounts,
    args: UpdatePlatform,
) -> Instruction {
    build("update_platform", program_id, accounts, &args)
}
