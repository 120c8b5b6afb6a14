use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::requirement::RawValue;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SkuId(pub String);

/// One sellable product variant with its datasheet attributes and pricing
/// inputs. Loaded by the excluded ingestion layer; immutable here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub sku: SkuId,
    /// Attribute name → raw value. Ordered map keeps report output stable.
    pub attributes: BTreeMap<String, RawValue>,
    pub unit_price: Decimal,
    /// Internal cost basis, when known; feeds the margin estimate.
    #[serde(default)]
    pub unit_cost: Option<Decimal>,
}

impl CatalogEntry {
    pub fn new(sku: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            sku: SkuId(sku.into()),
            attributes: BTreeMap::new(),
            unit_price,
            unit_cost: None,
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, raw: RawValue) -> Self {
        self.attributes.insert(name.into(), raw);
        self
    }

    pub fn with_unit_cost(mut self, unit_cost: Decimal) -> Self {
        self.unit_cost = Some(unit_cost);
        self
    }

    /// Looks an attribute up by exact name first, then case-insensitively,
    /// since catalog ingestion does not guarantee the tender's casing.
    pub fn attribute(&self, name: &str) -> Option<&RawValue> {
        if let Some(raw) = self.attributes.get(name) {
            return Some(raw);
        }
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, raw)| raw)
    }
}
