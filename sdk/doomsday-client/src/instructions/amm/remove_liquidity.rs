use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{Discriminator, InstructionData};

use crate::instructions::amm::LiquidityAccounts;
use crate::instructions::build;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RemoveLiquidity {
    pub lp_amount: u64,
    pub min_doom: u64,
    pub min_life: u64,
}

impl Discriminator for RemoveLiquidity {
    const DISCRIMINATOR: &'static [u8] = &[80, 85, 209, 72, 24, 206, 177, 108];
}

impl InstructionData for RemoveLiquidity {}

pub fn remove_liquidity(
    program_id: &Pubkey,
    accounts: &LiquidityAccounts,
    args: RemoveLiquidity,
) -> Instruction {
    build("remove_liquidity", program_id, accounts, &args)
}
