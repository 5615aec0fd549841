use soroban_sdk::contracterror;

/// Error codes for the spread market contract.
///
/// Codes are grouped by category so client applications can bucket failures
/// without matching every variant:
///
/// - **User operation errors (100-199):** authorization, lifecycle and
///   duplicate-action violations raised by `predict`, `resolve` and
///   `withdraw`.
/// - **Oracle errors (200-299):** the external feed-pair oracle did not
///   produce a usable metric.
/// - **Validation errors (300-399):** malformed creation or prediction
///   parameters.
/// - **System errors (400-499):** contract configuration problems.
///
/// Every public entrypoint returns `Result<T, Error>`; an error aborts the
/// invocation with no partial state change.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ===== USER OPERATION ERRORS =====
    /// Caller is not authorized to perform this action
    Unauthorized = 100,
    /// Market not found
    MarketNotFound = 101,
    /// A market already exists under this id
    MarketAlreadyExists = 102,
    /// Market prediction window has closed
    MarketClosed = 103,
    /// Market prediction window is still open
    MarketStillActive = 104,
    /// Market is already resolved
    MarketAlreadyResolved = 105,
    /// Market is not resolved yet
    MarketNotResolved = 106,
    /// Participant already holds a prediction in this market
    AlreadyPredicted = 107,
    /// Participant has already withdrawn their payout
    AlreadyWithdrawn = 108,
    /// Caller holds no prediction in this market
    NotAParticipant = 109,
    /// Participant predicted the losing side
    LostPrediction = 110,
    /// Attached payment is below the share price
    InsufficientPayment = 111,
    /// Payout would exceed the remaining pool balance
    InsufficientPool = 112,

    // ===== ORACLE ERRORS =====
    /// Oracle did not return a usable metric
    OracleUnavailable = 200,
    /// Oracle contract id is not configured
    OracleNotSet = 201,

    // ===== VALIDATION ERRORS =====
    /// Share count must be at least one
    InvalidShares = 300,
    /// Market duration must be at least one second
    InvalidDuration = 301,
    /// Winning side holds no votes
    NoWinningVotes = 302,

    // ===== SYSTEM ERRORS =====
    /// Contract has already been initialized
    AlreadyInitialized = 400,
    /// Admin address is not set (initialization missing)
    AdminNotSet = 401,
    /// Staking token contract id is not configured
    TokenNotSet = 402,
    /// An outbound transfer is already in flight
    ReentrantCall = 403,
}

impl Error {
    /// Human-readable description, suitable for surfacing to users.
    pub fn description(&self) -> &'static str {
        match self {
            Error::Unauthorized => "Caller is not authorized to perform this action",
            Error::MarketNotFound => "Market not found",
            Error::MarketAlreadyExists => "A market already exists under this id",
            Error::MarketClosed => "Market prediction window has closed",
            Error::MarketStillActive => "Market prediction window is still open",
            Error::MarketAlreadyResolved => "Market is already resolved",
            Error::MarketNotResolved => "Market is not resolved yet",
            Error::AlreadyPredicted => "Participant already holds a prediction in this market",
            Error::AlreadyWithdrawn => "Participant has already withdrawn their payout",
            Error::NotAParticipant => "Caller holds no prediction in this market",
            Error::LostPrediction => "Participant predicted the losing side",
            Error::InsufficientPayment => "Attached payment is below the share price",
            Error::InsufficientPool => "Payout would exceed the remaining pool balance",
            Error::OracleUnavailable => "Oracle did not return a usable metric",
            Error::OracleNotSet => "Oracle contract id is not configured",
            Error::InvalidShares => "Share count must be at least one",
            Error::InvalidDuration => "Market duration must be at least one second",
            Error::NoWinningVotes => "Winning side holds no votes",
            Error::AlreadyInitialized => "Contract has already been initialized",
            Error::AdminNotSet => "Admin address is not set",
            Error::TokenNotSet => "Staking token contract id is not configured",
            Error::ReentrantCall => "An outbound transfer is already in flight",
        }
    }

    /// Stable UPPER_SNAKE_CASE identifier for structured logging and
    /// client-side error handling.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Unauthorized => "UNAUTHORIZED",
            Error::MarketNotFound => "MARKET_NOT_FOUND",
            Error::MarketAlreadyExists => "MARKET_ALREADY_EXISTS",
            Error::MarketClosed => "MARKET_CLOSED",
            Error::MarketStillActive => "MARKET_STILL_ACTIVE",
            Error::MarketAlreadyResolved => "MARKET_ALREADY_RESOLVED",
            Error::MarketNotResolved => "MARKET_NOT_RESOLVED",
            Error::AlreadyPredicted => "ALREADY_PREDICTED",
            Error::AlreadyWithdrawn => "ALREADY_WITHDRAWN",
            Error::NotAParticipant => "NOT_A_PARTICIPANT",
            Error::LostPrediction => "LOST_PREDICTION",
            Error::InsufficientPayment => "INSUFFICIENT_PAYMENT",
            Error::InsufficientPool => "INSUFFICIENT_POOL",
            Error::OracleUnavailable => "ORACLE_UNAVAILABLE",
            Error::OracleNotSet => "ORACLE_NOT_SET",
            Error::InvalidShares => "INVALID_SHARES",
            Error::InvalidDuration => "INVALID_DURATION",
            Error::NoWinningVotes => "NO_WINNING_VOTES",
            Error::AlreadyInitialized => "ALREADY_INITIALIZED",
            Error::AdminNotSet => "ADMIN_NOT_SET",
            Error::TokenNotSet => "TOKEN_NOT_SET",
            Error::ReentrantCall => "REENTRANT_CALL",
        }
    }
}
