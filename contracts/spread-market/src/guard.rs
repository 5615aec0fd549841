use soroban_sdk::{symbol_short, Env, Symbol};

use crate::errors::Error;

/// Cross-entrypoint guard around outbound token transfers.
///
/// Withdrawals already mark the ledger record terminal and persist the
/// market before transferring, so a reentrant call cannot observe a
/// not-yet-updated record. This lock closes the remaining window: while a
/// transfer is in flight, no entrypoint may start another one. The flag
/// lives in persistent storage.
pub struct TransferGuard;

impl TransferGuard {
    fn key() -> Symbol {
        symbol_short!("xfer_lk")
    }

    /// Returns true while an outbound transfer is in flight.
    pub fn is_locked(env: &Env) -> bool {
        env.storage()
            .persistent()
            .get::<Symbol, bool>(&Self::key())
            .unwrap_or(false)
    }

    /// Take the lock before an outbound transfer. Fails if already held.
    pub fn before_external_call(env: &Env) -> Result<(), Error> {
        if Self::is_locked(env) {
            return Err(Error::ReentrantCall);
        }
        env.storage().persistent().set(&Self::key(), &true);
        Ok(())
    }

    /// Release the lock after the transfer completes.
    pub fn after_external_call(env: &Env) {
        env.storage().persistent().set(&Self::key(), &false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SpreadMarket;
    use soroban_sdk::Env;

    fn with_contract<F: FnOnce()>(env: &Env, f: F) {
        let addr = env.register_contract(None, SpreadMarket);
        env.as_contract(&addr, || {
            f();
        });
    }

    #[test]
    fn lock_cycle_sets_and_clears_flag() {
        let env = Env::default();
        with_contract(&env, || {
            assert!(!TransferGuard::is_locked(&env));

            assert!(TransferGuard::before_external_call(&env).is_ok());
            assert!(TransferGuard::is_locked(&env));

            TransferGuard::after_external_call(&env);
            assert!(!TransferGuard::is_locked(&env));
        });
    }

    #[test]
    fn second_lock_attempt_is_rejected() {
        let env = Env::default();
        with_contract(&env, || {
            assert!(TransferGuard::before_external_call(&env).is_ok());
            let err = TransferGuard::before_external_call(&env).unwrap_err();
            assert_eq!(err, Error::ReentrantCall);

            TransferGuard::after_external_call(&env);
            assert!(TransferGuard::before_external_call(&env).is_ok());
        });
    }
}
