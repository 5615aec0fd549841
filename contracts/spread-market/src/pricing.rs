use crate::types::Market;

/// Prices are integer percentages on a 0-100 scale.
pub const PRICE_SCALE: u32 = 100;

/// Neutral price for both sides while no votes exist.
pub const BASELINE_PRICE: u32 = 50;

/// Dynamic share pricing from vote ratios.
///
/// `price = votes_for_side * 100 / total_votes`, truncating integer
/// division. Because both sides truncate independently, the two prices need
/// not sum to 100 (2 yes / 1 no quotes 66/33). This is a documented property
/// of the pricing model, not a rounding bug; callers and tests rely on it.
pub struct PricingEngine;

impl PricingEngine {
    /// Price for one side given the current tallies. Pure function.
    pub fn price(votes_for_side: u32, total_votes: u32) -> u32 {
        if total_votes == 0 {
            return BASELINE_PRICE;
        }
        (votes_for_side as u64 * PRICE_SCALE as u64 / total_votes as u64) as u32
    }

    /// Recompute both sides from the market's updated tallies. Called after
    /// every vote increment.
    pub fn recompute(market: &mut Market) {
        market.yes_price = Self::price(market.yes_votes, market.total_votes);
        market.no_price = Self::price(market.no_votes, market.total_votes);
    }

    /// Cost of a purchase at the current quote, in pool units.
    pub fn cost(price: u32, shares: u32) -> i128 {
        price as i128 * shares as i128
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_votes_quotes_baseline() {
        assert_eq!(PricingEngine::price(0, 0), BASELINE_PRICE);
    }

    #[test]
    fn single_vote_moves_price_to_extremes() {
        assert_eq!(PricingEngine::price(1, 1), 100);
        assert_eq!(PricingEngine::price(0, 1), 0);
    }

    #[test]
    fn truncation_means_prices_need_not_sum_to_100() {
        // 2 yes / 1 no: 66 + 33 = 99, one point lost to truncation
        let yes = PricingEngine::price(2, 3);
        let no = PricingEngine::price(1, 3);
        assert_eq!(yes, 66);
        assert_eq!(no, 33);
        assert_eq!(yes + no, 99);
    }

    #[test]
    fn even_split_quotes_fifty_fifty() {
        assert_eq!(PricingEngine::price(2, 4), 50);
        assert_eq!(PricingEngine::price(3, 6), 50);
    }

    #[test]
    fn cost_scales_with_shares() {
        assert_eq!(PricingEngine::cost(50, 1), 50);
        assert_eq!(PricingEngine::cost(66, 3), 198);
        assert_eq!(PricingEngine::cost(0, 10), 0);
    }
}
