//! Async reads of program accounts over an [`AccountSource`].

use std::sync::Arc;

use anchor_lang::prelude::Pubkey;
use async_trait::async_trait;
use solana_account_decoder::UiAccountEncoding;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::{RpcAccountInfoConfig, RpcProgramAccountsConfig};
use solana_client::rpc_filter::{Memcmp, RpcFilterType};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::constants::*;
use crate::errors::{ClientError, Result};
use crate::pda;
use crate::state::{
    AccountLayout, LiquidityPool, PlatformConfig, PredictionEvent, UserBet, UserStats,
};

/// Server-side filter for program account scans.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccountFilter {
    DataSize(u64),
    Memcmp { offset: usize, bytes: Vec<u8> },
}

impl AccountFilter {
    pub fn memcmp(offset: usize, bytes: impl Into<Vec<u8>>) -> Self {
        AccountFilter::Memcmp {
            offset,
            bytes: bytes.into(),
        }
    }

    /// Applies the filter locally, with the same semantics as the RPC node.
    pub fn matches(&self, data: &[u8]) -> bool {
        match self {
            AccountFilter::DataSize(size) => data.len() as u64 == *size,
            AccountFilter::Memcmp { offset, bytes } => offset
                .checked_add(bytes.len())
                .and_then(|end| data.get(*offset..end))
                .is_some_and(|window| window == bytes.as_slice()),
        }
    }
}

impl From<&AccountFilter> for RpcFilterType {
    fn from(filter: &AccountFilter) -> Self {
        match filter {
            AccountFilter::DataSize(size) => RpcFilterType::DataSize(*size),
            AccountFilter::Memcmp { offset, bytes } => {
                RpcFilterType::Memcmp(Memcmp::new_base58_encoded(*offset, bytes))
            }
        }
    }
}

/// Raw account access. The RPC client is the production source.
#[async_trait]
pub trait AccountSource: Send + Sync {
    /// Account data, or `None` if no account exists at `address`.
    async fn get_account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>>;

    async fn get_program_accounts(
        &self,
        program_id: &Pubkey,
        filters: &[AccountFilter],
    ) -> Result<Vec<(Pubkey, Vec<u8>)>>;
}

#[async_trait]
impl AccountSource for RpcClient {
    async fn get_account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>> {
        let response = self
            .get_account_with_commitment(address, self.commitment())
            .await?;
        Ok(response.value.map(|account| account.data))
    }

    async fn get_program_accounts(
        &self,
        program_id: &Pubkey,
        filters: &[AccountFilter],
    ) -> Result<Vec<(Pubkey, Vec<u8>)>> {
        let config = RpcProgramAccountsConfig {
            filters: Some(filters.iter().map(RpcFilterType::from).collect()),
            account_config: RpcAccountInfoConfig {
                encoding: Some(UiAccountEncoding::Base64),
                commitment: Some(self.commitment()),
                ..Default::default()
            },
            ..Default::default()
        };
        let accounts = self
            .get_program_accounts_with_config(program_id, config)
            .await?;
        Ok(accounts
            .into_iter()
            .map(|(address, account)| (address, account.data))
            .collect())
    }
}

#[async_trait]
impl<S: AccountSource + ?Sized> AccountSource for Arc<S> {
    async fn get_account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>> {
        (**self).get_account_data(address).await
    }

    async fn get_program_accounts(
        &self,
        program_id: &Pubkey,
        filters: &[AccountFilter],
    ) -> Result<Vec<(Pubkey, Vec<u8>)>> {
        (**self).get_program_accounts(program_id, filters).await
    }
}

/// Typed reads of every record the two programs own.
///
/// Single fetches return `Ok(None)` when the account does not exist. Scans
/// fail as a whole if any matching account does not decode.
pub struct ChainReader<S> {
    source: S,
    prediction_program_id: Pubkey,
    amm_program_id: Pubkey,
    verify_bumps: bool,
}

impl ChainReader<RpcClient> {
    pub fn connect(config: &ClientConfig) -> Self {
        Self::new(config.rpc_client(), config)
    }
}

impl<S: AccountSource> ChainReader<S> {
    pub fn new(source: S, config: &ClientConfig) -> Self {
        Self {
            source,
            prediction_program_id: config.prediction_program_id,
            amm_program_id: config.amm_program_id,
            verify_bumps: config.verify_bumps,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn platform_config(&self) -> Result<Option<PlatformConfig>> {
        let program_id = self.prediction_program_id;
        let (address, _) = pda::platform_config(&program_id);
        let Some(config) = self.fetch::<PlatformConfig>(&address).await? else {
            return Ok(None);
        };
        self.check_bump(&[PLATFORM_CONFIG_SEED], config.bump, &program_id, &address)?;
        Ok(Some(config))
    }

    pub async fn event(&self, event_id: u64) -> Result<Option<PredictionEvent>> {
        let (address, _) = pda::event(event_id, &self.prediction_program_id);
        self.event_at(&address).await
    }

    /// Fetches an event by address; the bump check uses the decoded id.
    pub async fn event_at(&self, address: &Pubkey) -> Result<Option<PredictionEvent>> {
        let Some(event) = self.fetch::<PredictionEvent>(address).await? else {
            return Ok(None);
        };
        self.check_bump(
            &[EVENT_SEED, &event.event_id.to_le_bytes()],
            event.bump,
            &self.prediction_program_id,
            address,
        )?;
        Ok(Some(event))
    }

    pub async fn user_bet(&self, event: &Pubkey, user: &Pubkey) -> Result<Option<UserBet>> {
        let program_id = self.prediction_program_id;
        let (address, _) = pda::user_bet(event, user, &program_id);
        let Some(bet) = self.fetch::<UserBet>(&address).await? else {
            return Ok(None);
        };
        self.check_bump(
            &[USER_BET_SEED, event.as_ref(), user.as_ref()],
            bet.bump,
            &program_id,
            &address,
        )?;
        Ok(Some(bet))
    }

    pub async fn user_stats(&self, user: &Pubkey) -> Result<Option<UserStats>> {
        let program_id = self.prediction_program_id;
        let (address, _) = pda::user_stats(user, &program_id);
        let Some(stats) = self.fetch::<UserStats>(&address).await? else {
            return Ok(None);
        };
        self.check_bump(&[USER_STATS_SEED, user.as_ref()], stats.bump, &program_id, &address)?;
        Ok(Some(stats))
    }

    pub async fn pool(&self) -> Result<Option<LiquidityPool>> {
        let program_id = self.amm_program_id;
        let (address, _) = pda::pool(&program_id);
        let Some(pool) = self.fetch::<LiquidityPool>(&address).await? else {
            return Ok(None);
        };
        self.check_bump(&[POOL_SEED], pool.bump, &program_id, &address)?;
        Ok(Some(pool))
    }

    pub async fn all_events(&self) -> Result<Vec<(Pubkey, PredictionEvent)>> {
        self.scan(self.prediction_program_id, vec![Self::size_filter::<PredictionEvent>()])
            .await
    }

    pub async fn bets_for_user(&self, user: &Pubkey) -> Result<Vec<(Pubkey, UserBet)>> {
        self.scan(
            self.prediction_program_id,
            vec![
                Self::size_filter::<UserBet>(),
                AccountFilter::memcmp(UserBet::USER_OFFSET, user.to_bytes()),
            ],
        )
        .await
    }

    pub async fn bets_for_event(&self, event: &Pubkey) -> Result<Vec<(Pubkey, UserBet)>> {
        self.scan(
            self.prediction_program_id,
            vec![
                Self::size_filter::<UserBet>(),
                AccountFilter::memcmp(UserBet::EVENT_OFFSET, event.to_bytes()),
            ],
        )
        .await
    }

    fn size_filter<T: AccountLayout>() -> AccountFilter {
        AccountFilter::DataSize(T::LEN as u64)
    }

    async fn fetch<T: AccountLayout>(&self, address: &Pubkey) -> Result<Option<T>> {
        let data = self.source.get_account_data(address).await?;
        debug!(%address, found = data.is_some(), "fetched account");
        match data {
            Some(data) => Ok(Some(T::decode(&data)?)),
            None => Ok(None),
        }
    }

    async fn scan<T: AccountLayout>(
        &self,
        program_id: Pubkey,
        filters: Vec<AccountFilter>,
    ) -> Result<Vec<(Pubkey, T)>> {
        let accounts = self
            .source
            .get_program_accounts(&program_id, &filters)
            .await?;
        debug!(
            program = %program_id,
            filters = filters.len(),
            results = accounts.len(),
            "scanned program accounts"
        );
        accounts
            .into_iter()
            .map(|(address, data)| {
                T::decode(&data)
                    .map(|record| (address, record))
                    .map_err(ClientError::from)
            })
            .collect()
    }

    fn check_bump(
        &self,
        seeds: &[&[u8]],
        bump: u8,
        program_id: &Pubkey,
        address: &Pubkey,
    ) -> Result<()> {
        if !self.verify_bumps {
            return Ok(());
        }
        pda::verify_bump(seeds, bump, program_id, address).inspect_err(|err| {
            warn!(%address, bump, error = %err, "stored bump does not derive fetched address");
        })
    }
}
