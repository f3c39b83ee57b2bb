//! Claim sets and timestamp enrichment.

use serde_json::{Map, Value};

/// Arbitrary JSON claims, keyed by claim name.
pub type ClaimSet = Map<String, Value>;

/// Seconds since the Unix epoch.
pub type Timestamp = i64;

/// Lifetime given to tokens that do not carry their own `exp`.
pub const DEFAULT_TTL_SECONDS: i64 = 3600;

/// Issued-at claim name.
pub const ISSUED_AT: &str = "iat";

/// Expiration claim name.
pub const EXPIRATION: &str = "exp";

/// Source of the current time for enrichment.
pub trait Clock: Send + Sync {
    /// Current time in seconds since the Unix epoch.
    fn now(&self) -> Timestamp;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        chrono::Utc::now().timestamp()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

/// Add `iat` and, when `add_expiry` is set, `exp` to a claim set.
///
/// Claims the caller already supplied are never replaced, whatever their
/// value or type. `exp` is `now + DEFAULT_TTL_SECONDS`.
#[must_use]
pub fn enrich(mut claims: ClaimSet, add_expiry: bool, now: Timestamp) -> ClaimSet {
    claims
        .entry(ISSUED_AT)
        .or_insert_with(|| Value::from(now));

    if add_expiry {
        claims
            .entry(EXPIRATION)
            .or_insert_with(|| Value::from(now.saturating_add(DEFAULT_TTL_SECONDS)));
    }

    claims
}
