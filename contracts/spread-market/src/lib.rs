#![no_std]

//! Binary-outcome prediction market over the spread of two price feeds.
//!
//! Participants stake the configured token on whether the oracle-observed
//! spread between two assets will satisfy a predicate against a threshold.
//! Share prices track the vote ratio, a single oracle fetch resolves the
//! outcome once the prediction window closes, and winners pull a
//! proportional payout from the pooled stake.

use soroban_sdk::{contract, contractimpl, Address, Env, Symbol};

pub mod errors;
pub mod events;
pub mod guard;
pub mod markets;
pub mod oracles;
pub mod prediction;
pub mod pricing;
pub mod resolution;
pub mod settlement;
pub mod types;

use errors::Error;
use markets::{MarketCreator, MarketStateManager, MarketUtils};
use prediction::PredictionManager;
use resolution::ResolutionManager;
use settlement::SettlementManager;
use types::{Market, ParticipantRecord, Predicate};

#[contract]
pub struct SpreadMarket;

#[contractimpl]
impl SpreadMarket {
    /// One-time contract configuration: admin, staking token contract and
    /// price-feed oracle contract.
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        oracle: Address,
    ) -> Result<(), Error> {
        if MarketUtils::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        MarketUtils::set_config(&env, &admin, &token, &oracle);
        Ok(())
    }

    /// Create a market comparing `asset_a` against `asset_b`.
    ///
    /// The prediction window opens immediately and closes at
    /// `now + duration_seconds`; the close time is fixed at creation. Both
    /// share prices start at the neutral 50 baseline. The owner becomes an
    /// authorized resolver.
    pub fn create_market(
        env: Env,
        owner: Address,
        market_id: Symbol,
        asset_a: Symbol,
        asset_b: Symbol,
        predicate: Predicate,
        threshold: i128,
        duration_seconds: u64,
    ) -> Result<Symbol, Error> {
        MarketCreator::create_market(
            &env,
            owner,
            market_id,
            asset_a,
            asset_b,
            predicate,
            threshold,
            duration_seconds,
        )
    }

    /// Stake `payment` on `verdict`, buying `shares` shares at the current
    /// quote. One prediction per address per market; the payment must cover
    /// `price(verdict) * shares` at the quote in effect before this vote is
    /// counted.
    pub fn predict(
        env: Env,
        user: Address,
        market_id: Symbol,
        verdict: bool,
        shares: u32,
        payment: i128,
    ) -> Result<(), Error> {
        PredictionManager::process_prediction(&env, user, market_id, verdict, shares, payment)
    }

    /// Fetch the oracle metric and resolve the market. Callable once the
    /// window has closed, by the owner or any participant; exactly one call
    /// succeeds. Returns the resolved outcome.
    pub fn resolve(env: Env, caller: Address, market_id: Symbol) -> Result<bool, Error> {
        ResolutionManager::resolve_market(&env, caller, market_id)
    }

    /// Withdraw the caller's proportional payout from a resolved market.
    /// Returns the amount transferred.
    pub fn withdraw(env: Env, user: Address, market_id: Symbol) -> Result<i128, Error> {
        SettlementManager::process_withdrawal(&env, user, market_id)
    }

    /// Read-only market snapshot. No guards; available in every state.
    pub fn get_market(env: Env, market_id: Symbol) -> Result<Market, Error> {
        MarketStateManager::get_market(&env, &market_id)
    }

    /// Read a participant's ledger record, if any.
    pub fn get_participant(
        env: Env,
        market_id: Symbol,
        user: Address,
    ) -> Result<Option<ParticipantRecord>, Error> {
        let market = MarketStateManager::get_market(&env, &market_id)?;
        Ok(market.participants.get(user))
    }
}
