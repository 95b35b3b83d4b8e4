//! Fuel meter models
//!
//! Two shapes per meter group: a raw form (attendant entry, kept as
//! text so partial input never fails) and a parsed reading (decimals,
//! missing/unparseable entries coerced to zero). The engine only ever
//! sees parsed readings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::util::parse_decimal_lenient;

/// One dispenser counter read at shift start and end
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PumpReading {
    #[serde(with = "rust_decimal::serde::float")]
    pub opening: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub closing: Decimal,
}

impl PumpReading {
    pub fn new(opening: Decimal, closing: Decimal) -> Self {
        Self { opening, closing }
    }

    /// Volume dispensed over the shift (closing minus opening)
    pub fn delta(&self) -> Decimal {
        self.closing - self.opening
    }
}

/// Raw attendant entry for a super pump-pair
///
/// Fields stay `Option<String>` until computation: absence is a modeled
/// case, not a runtime probe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuperMeterForm {
    pub pump1_opening: Option<String>,
    pub pump1_closing: Option<String>,
    pub pump2_opening: Option<String>,
    pub pump2_closing: Option<String>,
    /// GSA calibration draw, deducted from sellable volume
    pub test_draw: Option<String>,
    pub unit_price: Option<String>,
}

impl SuperMeterForm {
    /// Parse to decimals with the missing/unparseable-is-zero policy
    pub fn reading(&self) -> SuperReading {
        SuperReading {
            pumps: [
                PumpReading::new(
                    parse_decimal_lenient(self.pump1_opening.as_deref()),
                    parse_decimal_lenient(self.pump1_closing.as_deref()),
                ),
                PumpReading::new(
                    parse_decimal_lenient(self.pump2_opening.as_deref()),
                    parse_decimal_lenient(self.pump2_closing.as_deref()),
                ),
            ],
            test_draw: parse_decimal_lenient(self.test_draw.as_deref()),
            unit_price: parse_decimal_lenient(self.unit_price.as_deref()),
        }
    }

    pub fn group(&self) -> MeterGroup {
        MeterGroup::Super(self.reading())
    }
}

/// Raw attendant entry for the diesel pump-quad
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DieselMeterForm {
    pub d1_opening: Option<String>,
    pub d1_closing: Option<String>,
    pub d2_opening: Option<String>,
    pub d2_closing: Option<String>,
    pub d3_opening: Option<String>,
    pub d3_closing: Option<String>,
    pub d4_opening: Option<String>,
    pub d4_closing: Option<String>,
    /// Return-to-tank liters, deducted from sellable volume
    pub return_to_tank: Option<String>,
    pub unit_price: Option<String>,
}

impl DieselMeterForm {
    /// Parse to decimals with the missing/unparseable-is-zero policy
    pub fn reading(&self) -> DieselReading {
        let pump = |opening: &Option<String>, closing: &Option<String>| {
            PumpReading::new(
                parse_decimal_lenient(opening.as_deref()),
                parse_decimal_lenient(closing.as_deref()),
            )
        };
        DieselReading {
            pumps: [
                pump(&self.d1_opening, &self.d1_closing),
                pump(&self.d2_opening, &self.d2_closing),
                pump(&self.d3_opening, &self.d3_closing),
                pump(&self.d4_opening, &self.d4_closing),
            ],
            return_to_tank: parse_decimal_lenient(self.return_to_tank.as_deref()),
            unit_price: parse_decimal_lenient(self.unit_price.as_deref()),
        }
    }

    pub fn group(&self) -> MeterGroup {
        MeterGroup::Diesel(self.reading())
    }
}

/// Parsed super pump-pair reading
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SuperReading {
    pub pumps: [PumpReading; 2],
    #[serde(with = "rust_decimal::serde::float")]
    pub test_draw: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
}

/// Parsed diesel pump-quad reading
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DieselReading {
    pub pumps: [PumpReading; 4],
    #[serde(with = "rust_decimal::serde::float")]
    pub return_to_tank: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
}

/// A fuel meter group - the Meter Delta Calculator input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeterGroup {
    Super(SuperReading),
    Diesel(DieselReading),
}

impl MeterGroup {
    pub fn unit_price(&self) -> Decimal {
        match self {
            Self::Super(r) => r.unit_price,
            Self::Diesel(r) => r.unit_price,
        }
    }

    /// Sum of pump deltas before the test-draw / return deduction
    pub fn gross_delta(&self) -> Decimal {
        match self {
            Self::Super(r) => r.pumps.iter().map(PumpReading::delta).sum(),
            Self::Diesel(r) => r.pumps.iter().map(PumpReading::delta).sum(),
        }
    }

    /// Volume deducted from sellable liters (test draw or return-to-tank)
    pub fn deduction(&self) -> Decimal {
        match self {
            Self::Super(r) => r.test_draw,
            Self::Diesel(r) => r.return_to_tank,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_super_form_parses_leniently() {
        let form = SuperMeterForm {
            pump1_opening: Some("100.00".into()),
            pump1_closing: Some("150.00".into()),
            pump2_opening: None,
            pump2_closing: Some("not a number".into()),
            test_draw: Some("5".into()),
            unit_price: Some("10.00".into()),
        };
        let reading = form.reading();
        assert_eq!(reading.pumps[0].delta(), d("50.00"));
        assert_eq!(reading.pumps[1].opening, Decimal::ZERO);
        assert_eq!(reading.pumps[1].closing, Decimal::ZERO);
        assert_eq!(reading.test_draw, d("5"));
        assert_eq!(reading.unit_price, d("10.00"));
    }

    #[test]
    fn test_diesel_form_maps_four_pumps() {
        let form = DieselMeterForm {
            d1_opening: Some("10".into()),
            d1_closing: Some("20".into()),
            d3_opening: Some("5".into()),
            d3_closing: Some("7.5".into()),
            ..Default::default()
        };
        let reading = form.reading();
        assert_eq!(reading.pumps[0].delta(), d("10"));
        assert_eq!(reading.pumps[1].delta(), Decimal::ZERO);
        assert_eq!(reading.pumps[2].delta(), d("2.5"));
        assert_eq!(reading.return_to_tank, Decimal::ZERO);
    }
}
