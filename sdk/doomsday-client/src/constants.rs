// PDA seeds, must match the programs byte-for-byte.
pub const PLATFORM_CONFIG_SEED: &[u8] = b"platform_config";
pub const EVENT_SEED: &[u8] = b"event";
pub const USER_BET_SEED: &[u8] = b"user_bet";
pub const USER_STATS_SEED: &[u8] = b"user_stats";
pub const DOOM_VAULT_SEED: &[u8] = b"vault_doom";
pub const LIFE_VAULT_SEED: &[u8] = b"vault_life";

pub const POOL_SEED: &[u8] = b"pool";
pub const LP_MINT_SEED: &[u8] = b"lp_mint";
pub const POOL_DOOM_SEED: &[u8] = b"pool_doom";
pub const POOL_LIFE_SEED: &[u8] = b"pool_life";

pub const ANCHOR_DISCRIMINATOR_LEN: usize = 8;
pub const PUBKEY_LEN: usize = 32;

pub const BASIS_POINTS: u64 = 10_000;
pub const MAX_FEE_BPS: u16 = 10_000;

/// Fixed swap fee charged by the AMM program (0.3%).
pub const SWAP_FEE_BPS: u64 = 30;
/// First deposit must mint strictly more LP tokens than this.
pub const MINIMUM_LIQUIDITY: u64 = 1_000;

pub const TITLE_CAPACITY: usize = 128;
pub const DESCRIPTION_CAPACITY: usize = 512;

/// DOOM, LIFE and LP mints all use 9 decimals. Display only.
pub const TOKEN_DECIMALS: u8 = 9;
