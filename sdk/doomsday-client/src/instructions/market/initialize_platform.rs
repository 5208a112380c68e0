use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::{system_program, Discriminator, InstructionData, ToAccountMetas};

use crate::instructions::build;
use crate::pda;

/// One-time setup of the platform config; the signer becomes authority and
/// initial oracle.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct InitializePlatform {
    pub fee_basis_points: u16,
}

impl Discriminator for InitializePlatform {
    const DISCRIMINATOR: &'static [u8] = &[119, 201, 101, 45, 75, 122, 89, 3];
}

impl InstructionData for InitializePlatform {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitializePlatformAccounts {
    pub platform_config: Pubkey,
    pub authority: Pubkey,
}

impl InitializePlatformAccounts {
    pub fn new(authority: Pubkey, program_id: &Pubkey) -> Self {
        Self {
            platform_config: pda::platform_config(program_id).0,
            authority,
        }
    }
}

impl ToAccountMetas for InitializePlatformAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.platform_config, false),
            AccountMeta::new(self.authority, true),
            AccountMeta::new_readonly(system_program::ID, false),
        ]
    }
}

pub fn initialize_platform(
    program_id: &Pubkey,
    accounts: &InitializePlatformAccounts,
    args: InitializePlatform,
) -> Instruction {
    build("initialize_platform", program_id, accounts, &args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::test_support::*;
    use crate::prediction_market;

    #[test]
    fn encodes_fee_after_discriminator() {
        let authority = Pubkey::new_unique();
        let accounts = InitializePlatformAccounts::new(authority, &prediction_market::ID);
        let ix = initialize_platform(
            &prediction_market::ID,
            &accounts,
            InitializePlatform {
                fee_basis_points: 200,
            },
        );

        assert_eq!(
            InitializePlatform::DISCRIMINATOR,
            global_discriminator("initialize_platform").as_slice()
        );
        assert_eq!(ix.program_id, prediction_market::ID);
        assert_eq!(&ix.data[..8], InitializePlatform::DISCRIMINATOR);
        assert_eq!(&ix.data[8..], &[200, 0]);
        assert_metas(
            &ix,
            &[
                AccountMeta::new(pda::platform_config(&prediction_market::ID).0, false),
                AccountMeta::new(authority, true),
                AccountMeta::new_readonly(system_program::ID, false),
            ],
        );
    }
}
