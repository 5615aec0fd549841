use soroban_sdk::{contracttype, Address, Env, Map, Symbol};

use crate::pricing::BASELINE_PRICE;

// ===== LIFECYCLE =====

/// Market lifecycle state.
///
/// A market moves through exactly one path: `Active` while the prediction
/// window is open, `Resolving` once the window has closed but no oracle
/// result has been recorded, and `Resolved` after the single successful
/// `resolve` call. `Resolved` is terminal.
///
/// `Resolving` is never written to storage: the stored field only holds
/// `Active` or `Resolved`, and [`Market::lifecycle`] derives `Resolving`
/// from the end-time guard. This keeps the window close automatic (no
/// explicit transition call) while still exposing one coherent enum instead
/// of a pair of booleans.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MarketState {
    /// Prediction window open, accepting predictions
    Active,
    /// Window closed, outcome not yet fetched
    Resolving,
    /// Outcome fetched, withdrawals enabled
    Resolved,
}

// ===== PREDICATE =====

/// Comparison applied to the oracle's spread metric and the market
/// threshold to determine the winning verdict.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Predicate {
    LessThan,
    GreaterThan,
    Equal,
}

impl Predicate {
    /// Evaluate the predicate for an observed metric against the threshold.
    /// `true` means the "yes" side wins.
    pub fn evaluate(&self, value: i128, threshold: i128) -> bool {
        match self {
            Predicate::LessThan => value < threshold,
            Predicate::GreaterThan => value > threshold,
            Predicate::Equal => value == threshold,
        }
    }
}

// ===== LEDGER =====

/// Per-participant ledger entry, created on first (and only) predict.
///
/// A record is immutable except for the `withdrawn` flag, which transitions
/// from `false` to `true` exactly once when the payout is released.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParticipantRecord {
    /// Number of shares purchased
    pub staked_shares: u32,
    /// Predicted verdict
    pub verdict: bool,
    /// Set before the payout transfer, never cleared
    pub withdrawn: bool,
}

// ===== MARKET =====

/// The market aggregate.
///
/// Stored whole under its market id in persistent storage; every operation
/// loads it, mutates it, and writes it back, so a failed operation commits
/// nothing.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Market {
    /// Creator; authorized resolver alongside participants
    pub owner: Address,
    /// First feed of the compared pair
    pub asset_a: Symbol,
    /// Second feed of the compared pair
    pub asset_b: Symbol,
    /// Comparison applied at resolution
    pub predicate: Predicate,
    /// Value the spread metric is compared against
    pub threshold: i128,
    /// Creation timestamp
    pub start_time: u64,
    /// `start_time + duration`, fixed at creation
    pub end_time: u64,
    /// One vote per unique participant; always `yes_votes + no_votes`
    pub total_votes: u32,
    pub yes_votes: u32,
    pub no_votes: u32,
    /// Integer percentage 0-100; see `pricing` for the truncation quirk
    pub yes_price: u32,
    pub no_price: u32,
    /// Set exactly once at resolution
    pub resolved_outcome: Option<bool>,
    /// Raw oracle metric, set exactly once at resolution
    pub result_value: Option<i128>,
    /// Pool balance at resolution time (no predictions after the window)
    pub total_staked: i128,
    /// Pool not yet paid out; solvency guard for withdrawals
    pub pool_remaining: i128,
    /// The market ledger: one record per participant address
    pub participants: Map<Address, ParticipantRecord>,
    /// Stored lifecycle marker; only ever `Active` or `Resolved`
    pub state: MarketState,
}

impl Market {
    /// Create a fresh market with both prices at the neutral baseline.
    pub fn new(
        env: &Env,
        owner: Address,
        asset_a: Symbol,
        asset_b: Symbol,
        predicate: Predicate,
        threshold: i128,
        duration_seconds: u64,
    ) -> Self {
        let start_time = env.ledger().timestamp();
        Market {
            owner,
            asset_a,
            asset_b,
            predicate,
            threshold,
            start_time,
            end_time: start_time + duration_seconds,
            total_votes: 0,
            yes_votes: 0,
            no_votes: 0,
            yes_price: BASELINE_PRICE,
            no_price: BASELINE_PRICE,
            resolved_outcome: None,
            result_value: None,
            total_staked: 0,
            pool_remaining: 0,
            participants: Map::new(env),
            state: MarketState::Active,
        }
    }

    /// Effective lifecycle state at `now`.
    ///
    /// The `Active -> Resolving` transition is a pure time guard; nothing is
    /// written to storage when the window closes.
    pub fn lifecycle(&self, now: u64) -> MarketState {
        if self.state == MarketState::Resolved {
            MarketState::Resolved
        } else if now >= self.end_time {
            MarketState::Resolving
        } else {
            MarketState::Active
        }
    }

    /// Vote tally for one side.
    pub fn votes_for(&self, verdict: bool) -> u32 {
        if verdict {
            self.yes_votes
        } else {
            self.no_votes
        }
    }

    /// Current price quote for one side.
    pub fn quote(&self, verdict: bool) -> u32 {
        if verdict {
            self.yes_price
        } else {
            self.no_price
        }
    }
}
