//! Client SDK for the Doomsday prediction market and DOOM/LIFE AMM programs.
//!
//! Derives program addresses, decodes account data, builds instructions and
//! reproduces the programs' settlement and pricing arithmetic for previews.

use anchor_lang::prelude::*;

pub mod config;
pub mod constants;
pub mod errors;
pub mod instructions;
pub mod pda;
pub mod reader;
pub mod state;
pub mod utils;

pub use config::ClientConfig;
pub use errors::{ClientError, LayoutError, Result};
pub use reader::{AccountFilter, AccountSource, ChainReader};
pub use state::*;

/// The pari-mutuel prediction market program.
pub mod prediction_market {
    use super::*;

    declare_id!("BMmGykphijTgvB7WMim9UVqi9976iibKf6uYAiGXC7Mc");
}

/// The constant-product DOOM/LIFE AMM program.
pub mod amm {
    use super::*;

    declare_id!("ESVUbV7TzjW8VsZdDTFAq7kobcsmGXL29YFqcPkxB1qe");
}
