use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::types::Market;

// ===== EVENT TYPES =====

/// Emitted once when a market is created.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketCreatedEvent {
    pub market_id: Symbol,
    pub owner: Address,
    pub asset_a: Symbol,
    pub asset_b: Symbol,
    pub threshold: i128,
    pub end_time: u64,
    pub timestamp: u64,
}

/// Emitted for every accepted prediction.
///
/// Carries the post-vote quotes so listeners can follow the price path
/// without replaying the pricing model.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PredictedEvent {
    pub market_id: Symbol,
    pub participant: Address,
    pub verdict: bool,
    pub shares: u32,
    pub payment: i128,
    pub yes_price: u32,
    pub no_price: u32,
    pub timestamp: u64,
}

/// Emitted once per market, by the single successful `resolve`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedEvent {
    pub market_id: Symbol,
    pub resolver: Address,
    pub outcome: bool,
    pub result_value: i128,
    pub timestamp: u64,
}

/// Emitted after a winning participant's payout transfer completes.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub market_id: Symbol,
    pub participant: Address,
    pub amount: i128,
    pub timestamp: u64,
}

// ===== EMITTER =====

/// Central event emission for the contract. Events are the observable side
/// effects external listeners index; each emitter stamps the ledger
/// timestamp for chronological ordering.
pub struct EventEmitter;

impl EventEmitter {
    pub fn emit_market_created(env: &Env, market_id: &Symbol, market: &Market) {
        let event = MarketCreatedEvent {
            market_id: market_id.clone(),
            owner: market.owner.clone(),
            asset_a: market.asset_a.clone(),
            asset_b: market.asset_b.clone(),
            threshold: market.threshold,
            end_time: market.end_time,
            timestamp: env.ledger().timestamp(),
        };
        env.events().publish((symbol_short!("mkt_crt"),), event);
    }

    pub fn emit_predicted(
        env: &Env,
        market_id: &Symbol,
        participant: &Address,
        verdict: bool,
        shares: u32,
        payment: i128,
        yes_price: u32,
        no_price: u32,
    ) {
        let event = PredictedEvent {
            market_id: market_id.clone(),
            participant: participant.clone(),
            verdict,
            shares,
            payment,
            yes_price,
            no_price,
            timestamp: env.ledger().timestamp(),
        };
        env.events().publish((symbol_short!("predict"),), event);
    }

    pub fn emit_resolved(
        env: &Env,
        market_id: &Symbol,
        resolver: &Address,
        outcome: bool,
        result_value: i128,
    ) {
        let event = ResolvedEvent {
            market_id: market_id.clone(),
            resolver: resolver.clone(),
            outcome,
            result_value,
            timestamp: env.ledger().timestamp(),
        };
        env.events().publish((symbol_short!("resolve"),), event);
    }

    pub fn emit_withdrawn(env: &Env, market_id: &Symbol, participant: &Address, amount: i128) {
        let event = WithdrawnEvent {
            market_id: market_id.clone(),
            participant: participant.clone(),
            amount,
            timestamp: env.ledger().timestamp(),
        };
        env.events().publish((symbol_short!("withdraw"),), event);
    }
}
