use soroban_sdk::{Address, Env, Symbol};

use crate::errors::Error;
use crate::events::EventEmitter;
use crate::markets::{MarketStateManager, MarketUtils, MarketValidator};
use crate::pricing::PricingEngine;

/// Prediction intake: validation, payment, tally update, ledger entry.
pub struct PredictionManager;

impl PredictionManager {
    /// Process a participant's prediction.
    ///
    /// The quote is read before the vote is counted, so the first
    /// participant on each side buys at whatever the pre-vote ratio quotes
    /// (the 50/50 baseline on an empty market). Overpayment is accepted
    /// into the pool.
    pub fn process_prediction(
        env: &Env,
        user: Address,
        market_id: Symbol,
        verdict: bool,
        shares: u32,
        payment: i128,
    ) -> Result<(), Error> {
        user.require_auth();

        let mut market = MarketStateManager::get_market(env, &market_id)?;
        MarketValidator::validate_for_prediction(env, &market, &user, shares)?;

        let cost = PricingEngine::cost(market.quote(verdict), shares);
        if payment < 0 || payment < cost {
            return Err(Error::InsufficientPayment);
        }

        // Stake moves into the pool before the aggregate is committed; a
        // failed transfer aborts the whole invocation.
        let token = MarketUtils::token_client(env)?;
        token.transfer(&user, &env.current_contract_address(), &payment);

        MarketStateManager::record_prediction(&mut market, user.clone(), verdict, shares, payment);
        MarketStateManager::update_market(env, &market_id, &market);

        EventEmitter::emit_predicted(
            env,
            &market_id,
            &user,
            verdict,
            shares,
            payment,
            market.yes_price,
            market.no_price,
        );

        Ok(())
    }
}
