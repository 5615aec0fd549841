use soroban_sdk::{token, Address, Env, Symbol};

use crate::errors::Error;
use crate::types::{Market, MarketState, ParticipantRecord, Predicate};

// ===== CONFIGURATION KEYS =====

const ADMIN_KEY: &str = "Admin";
const TOKEN_KEY: &str = "TokenID";
const ORACLE_KEY: &str = "OracleID";

// ===== STATE MANAGER =====

/// Storage access for market aggregates.
///
/// Markets are read and written whole under their `Symbol` id. Mutations
/// happen on the in-memory aggregate and are committed with a single
/// `update_market` on the success path, so a failed operation leaves
/// storage untouched.
pub struct MarketStateManager;

impl MarketStateManager {
    pub fn market_exists(env: &Env, market_id: &Symbol) -> bool {
        env.storage().persistent().has(market_id)
    }

    pub fn get_market(env: &Env, market_id: &Symbol) -> Result<Market, Error> {
        env.storage()
            .persistent()
            .get(market_id)
            .ok_or(Error::MarketNotFound)
    }

    pub fn update_market(env: &Env, market_id: &Symbol, market: &Market) {
        env.storage().persistent().set(market_id, market);
    }

    /// Record a participant's prediction: one vote increment, both prices
    /// recomputed, the ledger entry inserted, and the pool grown by the
    /// attached payment.
    pub fn record_prediction(
        market: &mut Market,
        user: Address,
        verdict: bool,
        shares: u32,
        payment: i128,
    ) {
        if verdict {
            market.yes_votes += 1;
        } else {
            market.no_votes += 1;
        }
        market.total_votes += 1;
        crate::pricing::PricingEngine::recompute(market);

        market.participants.set(
            user,
            ParticipantRecord {
                staked_shares: shares,
                verdict,
                withdrawn: false,
            },
        );
        market.total_staked += payment;
        market.pool_remaining += payment;
    }

    /// Flip the market to its terminal state and record the oracle result.
    /// Both result fields are written exactly once.
    pub fn set_resolution(market: &mut Market, result_value: i128, outcome: bool) {
        market.result_value = Some(result_value);
        market.resolved_outcome = Some(outcome);
        market.state = MarketState::Resolved;
    }

    /// Mark a participant's record withdrawn and shrink the remaining pool.
    /// The caller persists the market before performing the transfer.
    pub fn mark_withdrawn(market: &mut Market, user: &Address, payout: i128) {
        if let Some(mut record) = market.participants.get(user.clone()) {
            record.withdrawn = true;
            market.participants.set(user.clone(), record);
        }
        market.pool_remaining -= payout;
    }
}

// ===== VALIDATOR =====

/// Guard checks shared by the entrypoints.
pub struct MarketValidator;

impl MarketValidator {
    pub fn validate_creation_params(
        env: &Env,
        market_id: &Symbol,
        duration_seconds: u64,
    ) -> Result<(), Error> {
        if duration_seconds == 0 {
            return Err(Error::InvalidDuration);
        }
        if MarketStateManager::market_exists(env, market_id) {
            return Err(Error::MarketAlreadyExists);
        }
        Ok(())
    }

    /// A prediction requires an open window, a fresh identity and a
    /// positive share count. The price check happens afterwards against the
    /// quote read before the vote is counted.
    pub fn validate_for_prediction(
        env: &Env,
        market: &Market,
        user: &Address,
        shares: u32,
    ) -> Result<(), Error> {
        match market.lifecycle(env.ledger().timestamp()) {
            MarketState::Active => {}
            MarketState::Resolving | MarketState::Resolved => {
                return Err(Error::MarketClosed);
            }
        }
        if shares == 0 {
            return Err(Error::InvalidShares);
        }
        if market.participants.contains_key(user.clone()) {
            return Err(Error::AlreadyPredicted);
        }
        Ok(())
    }

    /// Resolution is open to the owner and to anyone holding a record.
    pub fn validate_resolver(market: &Market, caller: &Address) -> Result<(), Error> {
        if *caller != market.owner && !market.participants.contains_key(caller.clone()) {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    /// Resolution requires a closed window and no prior success.
    pub fn validate_for_resolution(env: &Env, market: &Market) -> Result<(), Error> {
        match market.lifecycle(env.ledger().timestamp()) {
            MarketState::Active => Err(Error::MarketStillActive),
            MarketState::Resolved => Err(Error::MarketAlreadyResolved),
            MarketState::Resolving => Ok(()),
        }
    }
}

// ===== UTILS =====

/// Instance configuration and token plumbing.
pub struct MarketUtils;

impl MarketUtils {
    pub fn is_initialized(env: &Env) -> bool {
        env.storage().persistent().has(&Symbol::new(env, ADMIN_KEY))
    }

    pub fn set_config(env: &Env, admin: &Address, token: &Address, oracle: &Address) {
        env.storage()
            .persistent()
            .set(&Symbol::new(env, ADMIN_KEY), admin);
        env.storage()
            .persistent()
            .set(&Symbol::new(env, TOKEN_KEY), token);
        env.storage()
            .persistent()
            .set(&Symbol::new(env, ORACLE_KEY), oracle);
    }

    pub fn admin(env: &Env) -> Result<Address, Error> {
        env.storage()
            .persistent()
            .get(&Symbol::new(env, ADMIN_KEY))
            .ok_or(Error::AdminNotSet)
    }

    pub fn oracle_id(env: &Env) -> Result<Address, Error> {
        env.storage()
            .persistent()
            .get(&Symbol::new(env, ORACLE_KEY))
            .ok_or(Error::OracleNotSet)
    }

    /// Client for the configured staking token.
    pub fn token_client(env: &Env) -> Result<token::Client, Error> {
        let token_id: Address = env
            .storage()
            .persistent()
            .get(&Symbol::new(env, TOKEN_KEY))
            .ok_or(Error::TokenNotSet)?;
        Ok(token::Client::new(env, &token_id))
    }
}

// ===== CREATOR =====

/// Constructor-equivalent for new markets.
pub struct MarketCreator;

impl MarketCreator {
    pub fn create_market(
        env: &Env,
        owner: Address,
        market_id: Symbol,
        asset_a: Symbol,
        asset_b: Symbol,
        predicate: Predicate,
        threshold: i128,
        duration_seconds: u64,
    ) -> Result<Symbol, Error> {
        owner.require_auth();

        MarketValidator::validate_creation_params(env, &market_id, duration_seconds)?;

        let market = Market::new(
            env,
            owner.clone(),
            asset_a,
            asset_b,
            predicate,
            threshold,
            duration_seconds,
        );
        MarketStateManager::update_market(env, &market_id, &market);

        crate::events::EventEmitter::emit_market_created(env, &market_id, &market);

        Ok(market_id)
    }
}
