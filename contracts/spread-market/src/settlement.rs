use soroban_sdk::{Address, Env, Symbol};

use crate::errors::Error;
use crate::events::EventEmitter;
use crate::guard::TransferGuard;
use crate::markets::{MarketStateManager, MarketUtils};
use crate::types::{Market, ParticipantRecord};

// ===== CALCULATOR =====

/// Payout arithmetic for resolved markets. Pure with respect to storage.
pub struct SettlementCalculator;

impl SettlementCalculator {
    /// Compute a participant's payout.
    ///
    /// `payout_per_share = total_staked / votes_on_winning_side`, truncating
    /// integer division; the remainder is an accepted rounding loss that
    /// stays in the pool. The divisor is the vote count (one per winning
    /// participant), not the share count, so
    /// `payout = payout_per_share * staked_shares` can in aggregate exceed
    /// the pool when winners hold many shares each; the `pool_remaining`
    /// check keeps every accepted payout inside the pooled balance.
    ///
    /// A zero divisor is unreachable from `withdraw` (a winning-side caller
    /// is itself a winning vote) but is still guarded explicitly rather
    /// than left as a fatal division.
    pub fn payout(market: &Market, record: &ParticipantRecord) -> Result<i128, Error> {
        let outcome = market.resolved_outcome.ok_or(Error::MarketNotResolved)?;

        if record.withdrawn {
            return Err(Error::AlreadyWithdrawn);
        }
        if record.verdict != outcome {
            return Err(Error::LostPrediction);
        }

        let winning_votes = market.votes_for(outcome);
        if winning_votes == 0 {
            return Err(Error::NoWinningVotes);
        }

        let payout_per_share = market.total_staked / winning_votes as i128;
        let payout = payout_per_share * record.staked_shares as i128;

        if payout > market.pool_remaining {
            return Err(Error::InsufficientPool);
        }

        Ok(payout)
    }
}

// ===== MANAGER =====

/// Pull-based withdrawal processing.
pub struct SettlementManager;

impl SettlementManager {
    /// Withdraw a winning participant's payout.
    ///
    /// Withdrawal pattern: the ledger record is marked withdrawn, the pool
    /// shrunk, and the market persisted strictly before the token transfer,
    /// with the transfer itself held under [`TransferGuard`]. A reentrant
    /// call therefore sees the terminal record and fails with
    /// `AlreadyWithdrawn` before it can reach the transfer.
    pub fn process_withdrawal(env: &Env, user: Address, market_id: Symbol) -> Result<i128, Error> {
        user.require_auth();

        let mut market = MarketStateManager::get_market(env, &market_id)?;
        let record = market
            .participants
            .get(user.clone())
            .ok_or(Error::NotAParticipant)?;

        let payout = SettlementCalculator::payout(&market, &record)?;

        MarketStateManager::mark_withdrawn(&mut market, &user, payout);
        MarketStateManager::update_market(env, &market_id, &market);

        TransferGuard::before_external_call(env)?;
        let token = MarketUtils::token_client(env)?;
        token.transfer(&env.current_contract_address(), &user, &payout);
        TransferGuard::after_external_call(env);

        EventEmitter::emit_withdrawn(env, &market_id, &user, payout);

        Ok(payout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MarketState, Predicate};
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{Env, Symbol};

    fn resolved_market(env: &Env, total_staked: i128, yes_votes: u32, no_votes: u32) -> Market {
        let mut market = Market::new(
            env,
            Address::generate(env),
            Symbol::new(env, "BTC"),
            Symbol::new(env, "ETH"),
            Predicate::GreaterThan,
            100,
            3600,
        );
        market.yes_votes = yes_votes;
        market.no_votes = no_votes;
        market.total_votes = yes_votes + no_votes;
        market.total_staked = total_staked;
        market.pool_remaining = total_staked;
        market.resolved_outcome = Some(true);
        market.result_value = Some(150);
        market.state = MarketState::Resolved;
        market
    }

    fn record(shares: u32, verdict: bool) -> ParticipantRecord {
        ParticipantRecord {
            staked_shares: shares,
            verdict,
            withdrawn: false,
        }
    }

    #[test]
    fn truncating_payout_per_share() {
        let env = Env::default();
        // Pool of 5, three winning votes: floor(5/3) = 1 per share, the
        // remaining 2 units are unrecoverable rounding loss.
        let market = resolved_market(&env, 5, 3, 2);
        assert_eq!(
            SettlementCalculator::payout(&market, &record(1, true)).unwrap(),
            1
        );
    }

    #[test]
    fn payout_scales_with_shares() {
        let env = Env::default();
        let market = resolved_market(&env, 300, 3, 1);
        assert_eq!(
            SettlementCalculator::payout(&market, &record(2, true)).unwrap(),
            200
        );
    }

    #[test]
    fn unresolved_market_rejects_settlement() {
        let env = Env::default();
        let mut market = resolved_market(&env, 100, 1, 1);
        market.resolved_outcome = None;
        market.state = MarketState::Active;
        assert_eq!(
            SettlementCalculator::payout(&market, &record(1, true)),
            Err(Error::MarketNotResolved)
        );
    }

    #[test]
    fn losing_verdict_is_rejected() {
        let env = Env::default();
        let market = resolved_market(&env, 100, 1, 1);
        assert_eq!(
            SettlementCalculator::payout(&market, &record(1, false)),
            Err(Error::LostPrediction)
        );
    }

    #[test]
    fn withdrawn_record_is_rejected() {
        let env = Env::default();
        let market = resolved_market(&env, 100, 1, 1);
        let mut rec = record(1, true);
        rec.withdrawn = true;
        assert_eq!(
            SettlementCalculator::payout(&market, &rec),
            Err(Error::AlreadyWithdrawn)
        );
    }

    #[test]
    fn zero_winning_votes_is_guarded() {
        let env = Env::default();
        let market = resolved_market(&env, 100, 0, 2);
        assert_eq!(
            SettlementCalculator::payout(&market, &record(1, true)),
            Err(Error::NoWinningVotes)
        );
    }

    #[test]
    fn depleted_pool_is_rejected() {
        let env = Env::default();
        // One winning vote but the winner holds 3 shares: per-share is the
        // whole pool, so the multiplied payout overshoots pool_remaining.
        let market = resolved_market(&env, 100, 1, 1);
        assert_eq!(
            SettlementCalculator::payout(&market, &record(3, true)),
            Err(Error::InsufficientPool)
        );
    }
}
