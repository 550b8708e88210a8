//! MEXO wire constants.

use std::time::Duration;

pub const DEFAULT_DOMAIN: &str = "io";

pub const HBOT_ORDER_ID_PREFIX: &str = "hummingbot";
pub const MAX_ORDER_ID_LEN: usize = 32;

// URL templates; `{}` is the domain suffix.
pub const REST_URL: &str = "https://api.mexo.{}/openapi/";
pub const WSS_URL: &str = "wss://wsapi.mexo.{}/openapi/quote/ws/v1";
pub const USER_DATA_STREAM_URL: &str = "wss://wsapi.mexo.{}/openapi/ws";

pub const PUBLIC_API_VERSION: &str = "v1";
pub const PRIVATE_API_VERSION: &str = "v1";

// Public endpoints
pub const TICKER_PRICE_CHANGE_PATH_URL: &str = "quote/v1/ticker/24hr";
pub const EXCHANGE_INFO_PATH_URL: &str = "/brokerInfo";
pub const PING_PATH_URL: &str = "/ping";
pub const SNAPSHOT_PATH_URL: &str = "quote/v1/depth";
pub const SERVER_TIME_PATH_URL: &str = "/time";

// Private endpoints
pub const ACCOUNTS_PATH_URL: &str = "/account";
pub const MY_TRADES_PATH_URL: &str = "/myTrades";
pub const ORDER_PATH_URL: &str = "/order";
pub const MEXO_USER_STREAM_PATH_URL: &str = "/userDataStream";

pub const WS_HEARTBEAT_TIME_INTERVAL: Duration = Duration::from_secs(1);

pub const SIDE_BUY: &str = "BUY";
pub const SIDE_SELL: &str = "SELL";

pub const TIME_IN_FORCE_GTC: &str = "GTC";
pub const TIME_IN_FORCE_IOC: &str = "IOC";
pub const TIME_IN_FORCE_FOK: &str = "FOK";

// Rate limit pools
pub const REQUEST_WEIGHT: &str = "REQUEST_WEIGHT";
pub const ORDERS: &str = "ORDERS";

pub const ONE_SECOND: Duration = Duration::from_secs(1);
pub const ONE_MINUTE: Duration = Duration::from_secs(60);
pub const ONE_DAY: Duration = Duration::from_secs(86_400);

/// Per-endpoint ceiling; the pools are what actually bind.
pub const MAX_REQUEST: u32 = 5000;

// Websocket topics
pub const DIFF_TOPIC_TYPE: &str = "diffDepth";
pub const TRADE_TOPIC_TYPE: &str = "trade";

pub const ORDER_NOT_EXIST_ERROR_CODE: i64 = -2013;
pub const ORDER_NOT_EXIST_MESSAGE: &str = "Order does not exist";
pub const UNKNOWN_ORDER_ERROR_CODE: i64 = -2011;
pub const UNKNOWN_ORDER_MESSAGE: &str = "Unknown order sent";
