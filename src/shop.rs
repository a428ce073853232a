//! The upgrade shop: item catalog with per-purchase cost escalation.
//!
//! Plays the inventory role for the simulation loop. Each run clones the
//! shop it is handed, so price escalation from purchases never leaks across
//! runs or back to the caller.

use serde::Serialize;

/// Each purchase raises that item's price by 15%.
pub const DEFAULT_GROWTH_FACTOR: f64 = 1.15;

/// One purchasable upgrade.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShopItem {
    pub name: String,
    /// Current price, reflecting escalation from purchases in this instance.
    pub cost: f64,
    /// CPS added per unit bought.
    pub cps_gain: f64,
}

/// Ordered upgrade catalog.
///
/// Iteration order is catalog order and is stable across calls on an
/// unmodified shop, so strategies scanning it are deterministic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shop {
    items: Vec<ShopItem>,
    growth_factor: f64,
}

/// Base prices and CPS gains for the standard catalog, cheapest first.
const STANDARD_CATALOG: &[(&str, f64, f64)] = &[
    ("Cursor", 15.0, 0.1),
    ("Grandma", 100.0, 0.5),
    ("Farm", 500.0, 4.0),
    ("Factory", 3_000.0, 10.0),
    ("Mine", 10_000.0, 40.0),
    ("Shipment", 40_000.0, 100.0),
    ("Alchemy Lab", 200_000.0, 400.0),
    ("Portal", 1_666_666.0, 6_666.0),
    ("Time Machine", 123_456_789.0, 98_765.0),
    ("Antimatter Condenser", 3_999_999_999.0, 999_999.0),
];

impl Shop {
    /// The standard ten-item catalog with the default escalation factor.
    pub fn standard() -> Self {
        Self::custom(STANDARD_CATALOG, DEFAULT_GROWTH_FACTOR)
    }

    /// Build a shop from an arbitrary `(name, cost, cps_gain)` catalog.
    pub fn custom(entries: &[(&str, f64, f64)], growth_factor: f64) -> Self {
        Self {
            items: entries
                .iter()
                .map(|&(name, cost, cps_gain)| ShopItem {
                    name: name.to_string(),
                    cost,
                    cps_gain,
                })
                .collect(),
            growth_factor,
        }
    }

    /// Item names in catalog order.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.name.as_str())
    }

    /// Full catalog entries in catalog order.
    pub fn entries(&self) -> &[ShopItem] {
        &self.items
    }

    /// Current price of `name`, or `None` if the shop does not stock it.
    pub fn cost(&self, name: &str) -> Option<f64> {
        self.find(name).map(|item| item.cost)
    }

    /// CPS gained by buying `name`, or `None` if the shop does not stock it.
    pub fn cps_gain(&self, name: &str) -> Option<f64> {
        self.find(name).map(|item| item.cps_gain)
    }

    /// Escalate `name`'s price after a purchase. Unknown names are ignored.
    pub fn record_purchase(&mut self, name: &str) {
        let factor = self.growth_factor;
        if let Some(item) = self.items.iter_mut().find(|item| item.name == name) {
            item.cost *= factor;
        }
    }

    fn find(&self, name: &str) -> Option<&ShopItem> {
        self.items.iter().find(|item| item.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_contents() {
        let shop = Shop::standard();

        assert_eq!(shop.entries().len(), 10);
        assert_eq!(shop.cost("Cursor"), Some(15.0));
        assert_eq!(shop.cps_gain("Cursor"), Some(0.1));
        assert_eq!(shop.cost("Antimatter Condenser"), Some(3_999_999_999.0));
    }

    #[test]
    fn test_unknown_item_lookups_return_none() {
        let shop = Shop::standard();

        assert_eq!(shop.cost("Bicycle"), None);
        assert_eq!(shop.cps_gain("Bicycle"), None);
    }

    #[test]
    fn test_record_purchase_escalates_cost() {
        let mut shop = Shop::standard();

        shop.record_purchase("Cursor");
        assert_eq!(shop.cost("Cursor"), Some(15.0 * 1.15));

        shop.record_purchase("Cursor");
        assert_eq!(shop.cost("Cursor"), Some(15.0 * 1.15 * 1.15));

        // Other items keep their base price.
        assert_eq!(shop.cost("Grandma"), Some(100.0));
    }

    #[test]
    fn test_record_purchase_ignores_unknown_names() {
        let mut shop = Shop::standard();
        let before = shop.clone();

        shop.record_purchase("Bicycle");

        assert_eq!(shop, before);
    }

    #[test]
    fn test_clones_escalate_independently() {
        let original = Shop::standard();
        let mut run_copy = original.clone();

        run_copy.record_purchase("Grandma");

        assert_eq!(original.cost("Grandma"), Some(100.0));
        assert_eq!(run_copy.cost("Grandma"), Some(115.0));
    }

    #[test]
    fn test_iteration_order_is_stable() {
        let shop = Shop::standard();

        let first: Vec<&str> = shop.items().collect();
        let second: Vec<&str> = shop.items().collect();

        assert_eq!(first, second);
        assert_eq!(first[0], "Cursor");
        assert_eq!(first[9], "Antimatter Condenser");
    }

    #[test]
    fn test_custom_catalog() {
        let mut shop = Shop::custom(&[("Widget", 100.0, 1.0)], 2.0);

        assert_eq!(shop.entries().len(), 1);
        assert_eq!(shop.cost("Widget"), Some(100.0));

        shop.record_purchase("Widget");
        assert_eq!(shop.cost("Widget"), Some(200.0));
    }
}
