//! Fee schema and exchange-info helpers.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const CENTRALIZED: bool = true;
pub const EXAMPLE_PAIR: &str = "ZRX-ETH";

/// Percent fees charged by the exchange, as decimal fractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeFeeSchema {
    pub maker_percent_fee_decimal: Decimal,
    pub taker_percent_fee_decimal: Decimal,
    /// Buy-side fee is taken out of the received base asset.
    pub buy_percent_fee_deducted_from_returns: bool,
}

impl TradeFeeSchema {
    /// Fee in quote units for a fill of `notional`.
    pub fn fee_for(&self, notional: Decimal, is_maker: bool) -> Decimal {
        let rate = if is_maker {
            self.maker_percent_fee_decimal
        } else {
            self.taker_percent_fee_decimal
        };
        notional * rate
    }
}

pub const DEFAULT_FEES: TradeFeeSchema = TradeFeeSchema {
    maker_percent_fee_decimal: dec!(0.00075),
    taker_percent_fee_decimal: dec!(0.00095),
    buy_percent_fee_deducted_from_returns: true,
};

/// Whether a trading pair entry from exchange info is open for trading.
pub fn is_exchange_information_valid(exchange_info: &Value) -> bool {
    exchange_info.get("status").and_then(Value::as_str) == Some("TRADING")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trading_status_is_valid() {
        assert!(is_exchange_information_valid(
            &json!({"symbol": "ZRXETH", "status": "TRADING"})
        ));
    }

    #[test]
    fn test_other_or_missing_status_is_invalid() {
        assert!(!is_exchange_information_valid(&json!({"status": "HALT"})));
        assert!(!is_exchange_information_valid(&json!({"symbol": "ZRXETH"})));
        assert!(!is_exchange_information_valid(&json!({"status": 1})));
    }

    #[test]
    fn test_default_fees() {
        assert_eq!(DEFAULT_FEES.maker_percent_fee_decimal, dec!(0.00075));
        assert_eq!(DEFAULT_FEES.taker_percent_fee_decimal, dec!(0.00095));
        assert!(DEFAULT_FEES.buy_percent_fee_deducted_from_returns);
        assert_eq!(DEFAULT_FEES.fee_for(dec!(1000), true), dec!(0.75));
        assert_eq!(DEFAULT_FEES.fee_for(dec!(1000), false), dec!(0.95));
    }
}
