//! Physical Cash Tally
//!
//! Sums denomination x quantity across the drawer, paper and coins
//! separately. Independent of the aggregator; its output feeds the
//! balance classifier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CashClass, DenominationCount};
use crate::util::round_money;

/// Drawer totals split by denomination class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashTally {
    #[serde(with = "rust_decimal::serde::float")]
    pub paper_total: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub coin_total: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub physical_total: Decimal,
}

/// Tally the counted drawer
pub fn tally(denominations: &[DenominationCount]) -> CashTally {
    let mut paper_total = Decimal::ZERO;
    let mut coin_total = Decimal::ZERO;

    for count in denominations {
        match count.class {
            CashClass::Paper => paper_total += count.amount(),
            CashClass::Coin => coin_total += count.amount(),
        }
    }

    CashTally {
        paper_total: round_money(paper_total),
        coin_total: round_money(coin_total),
        physical_total: round_money(paper_total + coin_total),
    }
}
