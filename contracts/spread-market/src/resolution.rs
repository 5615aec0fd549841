use soroban_sdk::{Address, Env, Symbol};

use crate::errors::Error;
use crate::events::EventEmitter;
use crate::markets::{MarketStateManager, MarketUtils, MarketValidator};
use crate::oracles::{FeedPairOracle, OracleInterface};

/// The oracle-resolution handshake.
pub struct ResolutionManager;

impl ResolutionManager {
    /// Resolve a market whose prediction window has closed.
    ///
    /// Exactly one call succeeds per market. The oracle is invoked once; an
    /// oracle failure aborts the invocation with no state change, leaving
    /// the market in its window-closed state so `resolve` can be re-invoked
    /// by any authorized caller. The contract never retries on its own.
    pub fn resolve_market(env: &Env, caller: Address, market_id: Symbol) -> Result<bool, Error> {
        caller.require_auth();

        let mut market = MarketStateManager::get_market(env, &market_id)?;
        MarketValidator::validate_resolver(&market, &caller)?;
        MarketValidator::validate_for_resolution(env, &market)?;

        let oracle = FeedPairOracle::new(env, MarketUtils::oracle_id(env)?);
        let result_value = oracle.spread(&market.asset_a, &market.asset_b)?;

        let outcome = market.predicate.evaluate(result_value, market.threshold);
        MarketStateManager::set_resolution(&mut market, result_value, outcome);
        MarketStateManager::update_market(env, &market_id, &market);

        EventEmitter::emit_resolved(env, &market_id, &caller, outcome, result_value);

        Ok(outcome)
    }
}
