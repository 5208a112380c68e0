use std::env;
use std::str::FromStr;

use anchor_lang::prelude::Pubkey;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use tracing::debug;

use crate::errors::{ClientError, Result};
use crate::{amm, prediction_market};

pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";

/// Where and how the SDK reads chain state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub rpc_url: String,
    pub commitment: CommitmentConfig,
    pub prediction_program_id: Pubkey,
    pub amm_program_id: Pubkey,
    /// Re-derive fetched PDAs from their stored bump.
    pub verify_bumps: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            commitment: CommitmentConfig::confirmed(),
            prediction_program_id: prediction_market::ID,
            amm_program_id: amm::ID,
            verify_bumps: true,
        }
    }
}

impl ClientConfig {
    /// Loads `.env` if present, then reads `SOLANA_RPC_URL`,
    /// `SOLANA_COMMITMENT`, `DOOMSDAY_PREDICTION_PROGRAM_ID`,
    /// `DOOMSDAY_AMM_PROGRAM_ID` and `DOOMSDAY_VERIFY_BUMPS`. Unset variables
    /// keep their defaults.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(url) = lookup("SOLANA_RPC_URL") {
            config.rpc_url = url;
        }
        if let Some(level) = lookup("SOLANA_COMMITMENT") {
            config.commitment = CommitmentConfig::from_str(&level)
                .map_err(|_| ClientError::Config(format!("invalid SOLANA_COMMITMENT {level:?}")))?;
        }
        if let Some(id) = lookup("DOOMSDAY_PREDICTION_PROGRAM_ID") {
            config.prediction_program_id = parse_pubkey("DOOMSDAY_PREDICTION_PROGRAM_ID", &id)?;
        }
        if let Some(id) = lookup("DOOMSDAY_AMM_PROGRAM_ID") {
            config.amm_program_id = parse_pubkey("DOOMSDAY_AMM_PROGRAM_ID", &id)?;
        }
        if let Some(flag) = lookup("DOOMSDAY_VERIFY_BUMPS") {
            config.verify_bumps = flag
                .parse()
                .map_err(|_| ClientError::Config(format!("invalid DOOMSDAY_VERIFY_BUMPS {flag:?}")))?;
        }
        debug!(rpc_url = %config.rpc_url, commitment = ?config.commitment.commitment, "loaded client config");
        Ok(config)
    }

    pub fn rpc_client(&self) -> RpcClient {
        RpcClient::new_with_commitment(self.rpc_url.clone(), self.commitment)
    }
}

fn parse_pubkey(key: &str, value: &str) -> Result<Pubkey> {
    Pubkey::from_str(value).map_err(|_| ClientError::Config(format!("invalid {key} {value:?}")))
}
