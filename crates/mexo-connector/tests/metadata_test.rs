//! Cross-module checks on the connector metadata.

use mexo_connector::constants::*;
use mexo_connector::rate_limits::{effective_budget, rate_limit, validate_table};
use mexo_connector::web_utils::{private_rest_url, public_rest_url};
use mexo_connector::{credentials, ExchangeOrderStatus, RATE_LIMITS};
use mexo_core::OrderState;

const ENDPOINTS: &[&str] = &[
    TICKER_PRICE_CHANGE_PATH_URL,
    EXCHANGE_INFO_PATH_URL,
    PING_PATH_URL,
    SNAPSHOT_PATH_URL,
    SERVER_TIME_PATH_URL,
    ACCOUNTS_PATH_URL,
    MY_TRADES_PATH_URL,
    ORDER_PATH_URL,
    MEXO_USER_STREAM_PATH_URL,
];

#[test]
fn every_endpoint_is_rate_limited() {
    validate_table(RATE_LIMITS).unwrap();
    for path in ENDPOINTS {
        let entry = rate_limit(path).unwrap_or_else(|| panic!("{path} has no rate limit"));
        assert_eq!(entry.limit, MAX_REQUEST);
        assert_eq!(entry.time_interval, ONE_MINUTE);
        assert!(!entry.is_pool());
    }
    assert_eq!(RATE_LIMITS.len(), ENDPOINTS.len() + 2);
}

#[test]
fn only_order_placement_draws_from_orders_pool() {
    for path in ENDPOINTS {
        let entry = rate_limit(path).unwrap();
        let uses_orders = entry.linked_limits.iter().any(|p| p.limit_id == ORDERS);
        assert_eq!(uses_orders, *path == ORDER_PATH_URL, "{path}");
    }
    assert_eq!(effective_budget(ORDER_PATH_URL), Some(60));
}

#[test]
fn urls_resolve_for_every_domain() {
    for domain in credentials::DOMAINS {
        let url = public_rest_url(SERVER_TIME_PATH_URL, domain.domain);
        assert_eq!(url, format!("https://api.mexo.{}/openapi/v1/time", domain.domain));

        let url = private_rest_url(ORDER_PATH_URL, domain.domain);
        assert!(url.ends_with("/openapi/v1/order"));
    }
}

#[test]
fn failed_statuses_are_terminal() {
    for status in ExchangeOrderStatus::ALL {
        let state = status.order_state();
        match status {
            ExchangeOrderStatus::Rejected | ExchangeOrderStatus::Expired => {
                assert_eq!(state, OrderState::Failed)
            }
            ExchangeOrderStatus::PendingCancel => assert!(state.is_active()),
            _ => {}
        }
    }
}
