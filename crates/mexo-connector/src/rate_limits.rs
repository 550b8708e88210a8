//! Rate-limit declarations.
//!
//! Two shared pools (`REQUEST_WEIGHT`, `ORDERS`) bound aggregate usage per
//! minute. Every endpoint has its own generous limit plus linked weights
//! that it draws from the pools. The throttler that enforces this lives in
//! the host; this module only declares and queries the table.

use std::time::Duration;

use crate::constants::{
    ACCOUNTS_PATH_URL, EXCHANGE_INFO_PATH_URL, MAX_REQUEST, MEXO_USER_STREAM_PATH_URL,
    MY_TRADES_PATH_URL, ONE_MINUTE, ORDERS, ORDER_PATH_URL, PING_PATH_URL, REQUEST_WEIGHT,
    SERVER_TIME_PATH_URL, SNAPSHOT_PATH_URL, TICKER_PRICE_CHANGE_PATH_URL,
};
use crate::error::{ConnectorError, ConnectorResult};

/// Weight an endpoint call draws from a shared pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkedLimitWeightPair {
    pub limit_id: &'static str,
    pub weight: u32,
}

impl LinkedLimitWeightPair {
    pub const fn new(limit_id: &'static str, weight: u32) -> Self {
        Self { limit_id, weight }
    }
}

/// One rate-limit entry: a pool or an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub limit_id: &'static str,
    pub limit: u32,
    pub time_interval: Duration,
    pub linked_limits: &'static [LinkedLimitWeightPair],
}

impl RateLimit {
    const fn pool(limit_id: &'static str, limit: u32) -> Self {
        Self {
            limit_id,
            limit,
            time_interval: ONE_MINUTE,
            linked_limits: &[],
        }
    }

    const fn endpoint(
        limit_id: &'static str,
        linked_limits: &'static [LinkedLimitWeightPair],
    ) -> Self {
        Self {
            limit_id,
            limit: MAX_REQUEST,
            time_interval: ONE_MINUTE,
            linked_limits,
        }
    }

    /// A pool is an entry other entries link into; it links to nothing.
    pub fn is_pool(&self) -> bool {
        self.linked_limits.is_empty()
    }
}

pub static RATE_LIMITS: &[RateLimit] = &[
    // Pools
    RateLimit::pool(REQUEST_WEIGHT, 3000),
    RateLimit::pool(ORDERS, 60),
    // Weighted limits
    RateLimit::endpoint(
        TICKER_PRICE_CHANGE_PATH_URL,
        &[LinkedLimitWeightPair::new(REQUEST_WEIGHT, 40)],
    ),
    RateLimit::endpoint(
        EXCHANGE_INFO_PATH_URL,
        &[LinkedLimitWeightPair::new(REQUEST_WEIGHT, 10)],
    ),
    RateLimit::endpoint(
        SNAPSHOT_PATH_URL,
        &[LinkedLimitWeightPair::new(REQUEST_WEIGHT, 50)],
    ),
    RateLimit::endpoint(
        MEXO_USER_STREAM_PATH_URL,
        &[LinkedLimitWeightPair::new(REQUEST_WEIGHT, 1)],
    ),
    RateLimit::endpoint(
        SERVER_TIME_PATH_URL,
        &[LinkedLimitWeightPair::new(REQUEST_WEIGHT, 1)],
    ),
    RateLimit::endpoint(
        PING_PATH_URL,
        &[LinkedLimitWeightPair::new(REQUEST_WEIGHT, 1)],
    ),
    RateLimit::endpoint(
        ACCOUNTS_PATH_URL,
        &[LinkedLimitWeightPair::new(REQUEST_WEIGHT, 10)],
    ),
    RateLimit::endpoint(
        MY_TRADES_PATH_URL,
        &[LinkedLimitWeightPair::new(REQUEST_WEIGHT, 10)],
    ),
    RateLimit::endpoint(
        ORDER_PATH_URL,
        &[
            LinkedLimitWeightPair::new(REQUEST_WEIGHT, 1),
            LinkedLimitWeightPair::new(ORDERS, 1),
        ],
    ),
];

/// Look up an entry by id.
pub fn rate_limit(limit_id: &str) -> Option<&'static RateLimit> {
    RATE_LIMITS.iter().find(|rl| rl.limit_id == limit_id)
}

/// Weight `limit_id` draws from `pool_id`, if linked.
pub fn linked_weight(limit_id: &str, pool_id: &str) -> Option<u32> {
    rate_limit(limit_id)?
        .linked_limits
        .iter()
        .find(|pair| pair.limit_id == pool_id)
        .map(|pair| pair.weight)
}

/// Calls of `limit_id` alone that fit in one interval.
///
/// The smallest of the endpoint's own limit and `pool.limit / weight` over
/// every linked pool.
pub fn effective_budget(limit_id: &str) -> Option<u32> {
    let entry = rate_limit(limit_id)?;
    let mut budget = entry.limit;
    for pair in entry.linked_limits {
        let pool = rate_limit(pair.limit_id)?;
        if pair.weight > 0 {
            budget = budget.min(pool.limit / pair.weight);
        }
    }
    Some(budget)
}

/// Check that ids are unique and every linked id is a declared pool.
pub fn validate_table(table: &[RateLimit]) -> ConnectorResult<()> {
    for (i, entry) in table.iter().enumerate() {
        if table[..i].iter().any(|prev| prev.limit_id == entry.limit_id) {
            return Err(ConnectorError::InvalidRateLimitTable(format!(
                "duplicate limit id {}",
                entry.limit_id
            )));
        }
        for pair in entry.linked_limits {
            let pool = table.iter().find(|rl| rl.limit_id == pair.limit_id);
            match pool {
                Some(pool) if pool.is_pool() => {}
                Some(_) => {
                    return Err(ConnectorError::InvalidRateLimitTable(format!(
                        "{} links to non-pool {}",
                        entry.limit_id, pair.limit_id
                    )))
                }
                None => {
                    return Err(ConnectorError::InvalidRateLimitTable(format!(
                        "{} links to undeclared pool {}",
                        entry.limit_id, pair.limit_id
                    )))
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_table_is_valid() {
        validate_table(RATE_LIMITS).unwrap();
    }

    #[test]
    fn test_pools() {
        let weight = rate_limit(REQUEST_WEIGHT).unwrap();
        assert!(weight.is_pool());
        assert_eq!(weight.limit, 3000);
        assert_eq!(weight.time_interval, ONE_MINUTE);

        let orders = rate_limit(ORDERS).unwrap();
        assert_eq!(orders.limit, 60);
    }

    #[test]
    fn test_order_endpoint_draws_from_both_pools() {
        assert_eq!(linked_weight(ORDER_PATH_URL, REQUEST_WEIGHT), Some(1));
        assert_eq!(linked_weight(ORDER_PATH_URL, ORDERS), Some(1));
        assert_eq!(linked_weight(SNAPSHOT_PATH_URL, ORDERS), None);
    }

    #[test]
    fn test_effective_budget() {
        // 3000 / 40
        assert_eq!(effective_budget(TICKER_PRICE_CHANGE_PATH_URL), Some(75));
        // 3000 / 50
        assert_eq!(effective_budget(SNAPSHOT_PATH_URL), Some(60));
        // ORDERS pool binds before REQUEST_WEIGHT
        assert_eq!(effective_budget(ORDER_PATH_URL), Some(60));
        // 3000 / 1 stays under the endpoint's own 5000
        assert_eq!(effective_budget(PING_PATH_URL), Some(3000));
        assert_eq!(effective_budget("/unknown"), None);
    }

    #[test]
    fn test_validate_rejects_undeclared_pool() {
        static BAD: &[RateLimit] = &[RateLimit::endpoint(
            "/x",
            &[LinkedLimitWeightPair::new("MISSING", 1)],
        )];
        let err = validate_table(BAD).unwrap_err();
        assert!(err.to_string().contains("MISSING"));
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        static BAD: &[RateLimit] = &[RateLimit::pool("P", 1), RateLimit::pool("P", 2)];
        assert!(validate_table(BAD).is_err());
    }
}
