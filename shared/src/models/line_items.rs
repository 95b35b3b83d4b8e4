//! Credit and collection line items
//!
//! Two disjoint, fixed catalogs of named decimal fields. Entry order is
//! irrelevant and absent fields count as zero, so a partially filled
//! sheet always yields a total.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::util::parse_decimal_lenient;

/// Electronic/credit capture line items (deducted from cash-to-bank)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditField {
    Gcb,
    Momo,
    Tingg,
    Zenith,
    CreditAb,
    CreditCf,
    CreditGc,
    CreditWl,
    CreditZl,
    SocStaffCredit,
    Republic,
    Prudential,
    Adb,
    Stanbic,
    Ecobank,
    Fidelity,
    WaterBill,
    EcgBill,
    Genset,
    ApproveMiscellaneous,
}

impl CreditField {
    /// The full credit catalog
    pub const ALL: [CreditField; 20] = [
        Self::Gcb,
        Self::Momo,
        Self::Tingg,
        Self::Zenith,
        Self::CreditAb,
        Self::CreditCf,
        Self::CreditGc,
        Self::CreditWl,
        Self::CreditZl,
        Self::SocStaffCredit,
        Self::Republic,
        Self::Prudential,
        Self::Adb,
        Self::Stanbic,
        Self::Ecobank,
        Self::Fidelity,
        Self::WaterBill,
        Self::EcgBill,
        Self::Genset,
        Self::ApproveMiscellaneous,
    ];
}

/// Ancillary cash collection line items (added to cash-to-bank)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionField {
    CollectionAb,
    CollectionWl,
    CollectionZl,
    CollectionGc,
    CollectionCv,
    #[serde(rename = "lube_1_liter")]
    Lube1Liter,
    LubeDrum,
    DusterCollection,
}

impl CollectionField {
    /// The full collection catalog
    pub const ALL: [CollectionField; 8] = [
        Self::CollectionAb,
        Self::CollectionWl,
        Self::CollectionZl,
        Self::CollectionGc,
        Self::CollectionCv,
        Self::Lube1Liter,
        Self::LubeDrum,
        Self::DusterCollection,
    ];
}

/// Per-field amounts for one shift section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineItemSet {
    #[serde(default)]
    credit: HashMap<CreditField, Decimal>,
    #[serde(default)]
    collection: HashMap<CollectionField, Decimal>,
}

impl LineItemSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a credit field from raw entry text (invalid/missing -> 0)
    pub fn set_credit_raw(&mut self, field: CreditField, raw: &str) {
        self.credit
            .insert(field, parse_decimal_lenient(Some(raw)));
    }

    pub fn set_credit(&mut self, field: CreditField, amount: Decimal) {
        self.credit.insert(field, amount);
    }

    /// Set a collection field from raw entry text (invalid/missing -> 0)
    pub fn set_collection_raw(&mut self, field: CollectionField, raw: &str) {
        self.collection
            .insert(field, parse_decimal_lenient(Some(raw)));
    }

    pub fn set_collection(&mut self, field: CollectionField, amount: Decimal) {
        self.collection.insert(field, amount);
    }

    /// Amount for a credit field, zero when absent
    pub fn credit(&self, field: CreditField) -> Decimal {
        self.credit.get(&field).copied().unwrap_or(Decimal::ZERO)
    }

    /// Amount for a collection field, zero when absent
    pub fn collection(&self, field: CollectionField) -> Decimal {
        self.collection
            .get(&field)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Sum over the full credit catalog
    pub fn total_credit(&self) -> Decimal {
        CreditField::ALL.iter().map(|f| self.credit(*f)).sum()
    }

    /// Sum over the full collection catalog
    pub fn total_collection(&self) -> Decimal {
        CollectionField::ALL
            .iter()
            .map(|f| self.collection(*f))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_catalogs_are_disjoint_sizes() {
        assert_eq!(CreditField::ALL.len(), 20);
        assert_eq!(CollectionField::ALL.len(), 8);
    }

    #[test]
    fn test_totals_ignore_entry_order() {
        let mut a = LineItemSet::new();
        a.set_credit_raw(CreditField::Gcb, "100.00");
        a.set_credit_raw(CreditField::Momo, "20.00");
        a.set_collection_raw(CollectionField::LubeDrum, "30.00");

        let mut b = LineItemSet::new();
        b.set_collection_raw(CollectionField::LubeDrum, "30.00");
        b.set_credit_raw(CreditField::Momo, "20.00");
        b.set_credit_raw(CreditField::Gcb, "100.00");

        assert_eq!(a.total_credit(), b.total_credit());
        assert_eq!(a.total_collection(), b.total_collection());
        assert_eq!(a.total_credit(), d("120.00"));
    }

    #[test]
    fn test_invalid_entry_counts_as_zero() {
        let mut items = LineItemSet::new();
        items.set_credit_raw(CreditField::Zenith, "50");
        items.set_credit_raw(CreditField::Adb, "oops");
        assert_eq!(items.total_credit(), d("50"));
    }

    #[test]
    fn test_wire_names_match_field_catalog() {
        assert_eq!(
            serde_json::to_string(&CreditField::SocStaffCredit).unwrap(),
            "\"soc_staff_credit\""
        );
        assert_eq!(
            serde_json::to_string(&CollectionField::Lube1Liter).unwrap(),
            "\"lube_1_liter\""
        );
        assert_eq!(
            serde_json::to_string(&CollectionField::DusterCollection).unwrap(),
            "\"duster_collection\""
        );
    }
}
