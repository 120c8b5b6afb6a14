//! Line-item pricing for the selected SKU.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::CatalogEntry;
use crate::errors::PricingError;

/// A fixed cost appended to the proposal as its own line, e.g. testing or
/// logistics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Surcharge {
    pub name: String,
    pub cost: Decimal,
}

impl Surcharge {
    pub fn new(name: impl Into<String>, cost: Decimal) -> Self {
        Self { name: name.into(), cost }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingLine {
    pub item: String,
    pub unit_cost: Decimal,
    pub quantity: u32,
    pub subtotal: Decimal,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    pub lines: Vec<PricingLine>,
    pub total: Decimal,
    pub currency: String,
}

/// Computes the supply line (`unit_price × quantity`), appends each
/// surcharge as its own line and sums all subtotals into the total.
///
/// Invalid inputs are caller-programming errors and surface as
/// `PricingError`, never silently clamped.
pub fn price(
    entry: &CatalogEntry,
    quantity: u32,
    surcharges: &[Surcharge],
    currency: &str,
) -> Result<PricingBreakdown, PricingError> {
    if quantity == 0 {
        return Err(PricingError::InvalidQuantity { quantity });
    }
    if entry.unit_price < Decimal::ZERO {
        return Err(PricingError::NegativeCost {
            item: format!("Supply of {}", entry.sku.0),
            cost: entry.unit_price,
        });
    }

    let mut lines = Vec::with_capacity(1 + surcharges.len());
    lines.push(PricingLine {
        item: format!("Supply of {}", entry.sku.0),
        unit_cost: entry.unit_price,
        quantity,
        subtotal: entry.unit_price * Decimal::from(quantity),
    });

    for surcharge in surcharges {
        if surcharge.cost < Decimal::ZERO {
            return Err(PricingError::NegativeCost {
                item: surcharge.name.clone(),
                cost: surcharge.cost,
            });
        }
        lines.push(PricingLine {
            item: surcharge.name.clone(),
            unit_cost: surcharge.cost,
            quantity: 1,
            subtotal: surcharge.cost,
        });
    }

    let total = lines.iter().map(|line| line.subtotal).sum();
    Ok(PricingBreakdown { lines, total, currency: currency.to_owned() })
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{price, Surcharge};
    use crate::domain::catalog::CatalogEntry;
    use crate::errors::PricingError;

    fn entry(unit_price: Decimal) -> CatalogEntry {
        CatalogEntry::new("SKU-A", unit_price)
    }

    #[test]
    fn worked_example_totals_2_251_500() {
        let breakdown = price(
            &entry(Decimal::from(450)),
            5000,
            &[Surcharge::new("Testing & Logistics", Decimal::from(1500))],
            "USD",
        )
        .expect("valid pricing inputs");

        assert_eq!(breakdown.lines.len(), 2);
        assert_eq!(breakdown.lines[0].subtotal, Decimal::from(2_250_000));
        assert_eq!(breakdown.lines[1].subtotal, Decimal::from(1_500));
        assert_eq!(breakdown.total, Decimal::from(2_251_500));
        assert_eq!(breakdown.currency, "USD");
    }

    #[test]
    fn total_is_linear_in_quantity() {
        let surcharges = [Surcharge::new("Testing & Logistics", Decimal::from(1500))];
        let single = price(&entry(Decimal::from(450)), 100, &surcharges, "USD").expect("q");
        let double = price(&entry(Decimal::from(450)), 200, &surcharges, "USD").expect("2q");

        let surcharge_total: Decimal = surcharges.iter().map(|s| s.cost).sum();
        assert_eq!(double.total - single.total, single.total - surcharge_total);
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let error = price(&entry(Decimal::from(450)), 0, &[], "USD").expect_err("q = 0");
        assert_eq!(error, PricingError::InvalidQuantity { quantity: 0 });
    }

    #[test]
    fn negative_costs_are_surfaced_not_clamped() {
        let negative_price =
            price(&entry(Decimal::from(-1)), 10, &[], "USD").expect_err("negative unit price");
        assert!(matches!(negative_price, PricingError::NegativeCost { .. }));

        let negative_surcharge = price(
            &entry(Decimal::from(450)),
            10,
            &[Surcharge::new("Rebate", Decimal::from(-50))],
            "USD",
        )
        .expect_err("negative surcharge");
        assert!(matches!(
            negative_surcharge,
            PricingError::NegativeCost { ref item, .. } if item == "Rebate"
        ));
    }
}
