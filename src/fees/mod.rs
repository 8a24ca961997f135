pub mod calculator;
pub mod units;

pub use calculator::{GasFeeCalculator, GasPriceSource};
pub use units::{
    apply_currency, apply_format, parse_quantity, revert_currency, Currency, Format, FormattedFee,
    Speed,
};
