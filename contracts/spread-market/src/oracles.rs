use soroban_sdk::{contracttype, symbol_short, vec, Address, Env, IntoVal, Symbol};

use crate::errors::Error;

// ===== ORACLE CONTRACT TYPES =====

/// Asset identifier understood by the feed oracle contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FeedAsset {
    Stellar(Address),
    Other(Symbol),
}

/// Price point returned by the feed oracle contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    pub price: i128,
    pub timestamp: u64,
}

// ===== ORACLE BOUNDARY =====

/// The single capability the market needs from an oracle: a numeric
/// comparison of two feeds, fetched once at resolution. The market does not
/// specify the oracle's own protocol; a failure is surfaced to the caller
/// and nothing is retried by the contract.
pub trait OracleInterface {
    fn spread(&self, asset_a: &Symbol, asset_b: &Symbol) -> Result<i128, Error>;
}

/// Cross-contract client for a price-feed oracle exposing `lastprice`.
///
/// The spread metric is `price(asset_a) - price(asset_b)`; either feed
/// returning nothing yields `OracleUnavailable`.
pub struct FeedPairOracle<'a> {
    env: &'a Env,
    contract_id: Address,
}

impl<'a> FeedPairOracle<'a> {
    pub fn new(env: &'a Env, contract_id: Address) -> Self {
        Self { env, contract_id }
    }

    fn lastprice(&self, asset: FeedAsset) -> Option<PriceData> {
        let args = vec![self.env, asset.into_val(self.env)];
        self.env
            .invoke_contract(&self.contract_id, &symbol_short!("lastprice"), args)
    }
}

impl<'a> OracleInterface for FeedPairOracle<'a> {
    fn spread(&self, asset_a: &Symbol, asset_b: &Symbol) -> Result<i128, Error> {
        let price_a = self
            .lastprice(FeedAsset::Other(asset_a.clone()))
            .ok_or(Error::OracleUnavailable)?;
        let price_b = self
            .lastprice(FeedAsset::Other(asset_b.clone()))
            .ok_or(Error::OracleUnavailable)?;

        Ok(price_a.price - price_b.price)
    }
}
