//! Flattens one order's lines into one [`Item`] per physical unit.
//! Product/location resolution itself is a collaborator concern (see
//! `warehouse-service`); this module only takes already-resolved lines
//! and turns quantities into individual items.

use warehouse_primitives::Item;

/// One resolved order line: a product's physical attributes plus the
/// quantity ordered and its warehouse location, if known.
#[derive(Debug, Clone)]
pub struct OrderLine {
    pub sku: String,
    pub name: String,
    pub w: u32,
    pub d: u32,
    pub h: u32,
    pub weight: f64,
    pub is_fragile: bool,
    pub allow_tipping: bool,
    pub quantity: u32,
    /// `None` when the inventory mapping had no location for this SKU.
    pub location: Option<String>,
}

/// Builds one [`Item`] per unit ordered, named `"{sku}-{index}"`. Lines
/// missing a resolved location are logged and skipped rather than failing
/// the whole order. `picking_order` is left at a placeholder of 1 here;
/// [`crate::picking_order::assign`] fills it in once every item's location
/// is known.
pub fn build_items(lines: &[OrderLine]) -> Vec<Item> {
    let mut items = Vec::new();

    for line in lines {
        let Some(location) = &line.location else {
            log::warn!(
                "skipping order line for sku {}: no inventory location on record",
                line.sku
            );
            continue;
        };

        for index in 0..line.quantity {
            match Item::new(
                format!("{}-{}", line.sku, index),
                line.sku.clone(),
                line.name.clone(),
                line.w,
                line.d,
                line.h,
                line.weight,
                line.is_fragile,
                line.allow_tipping,
                1,
                location.clone(),
            ) {
                Ok(item) => items.push(item),
                Err(err) => log::warn!(
                    "skipping one unit of sku {} ({}): {}",
                    line.sku,
                    line.name,
                    err
                ),
            }
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_quantity_into_distinct_ids() {
        let lines = vec![OrderLine {
            sku: "WIDGET".into(),
            name: "Widget".into(),
            w: 10,
            d: 10,
            h: 10,
            weight: 1.0,
            is_fragile: false,
            allow_tipping: true,
            quantity: 3,
            location: Some("A-01-01".into()),
        }];

        let items = build_items(&lines);
        let ids: Vec<_> = items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids, vec!["WIDGET-0", "WIDGET-1", "WIDGET-2"]);
    }

    #[test]
    fn skips_lines_without_location() {
        let lines = vec![OrderLine {
            sku: "WIDGET".into(),
            name: "Widget".into(),
            w: 10,
            d: 10,
            h: 10,
            weight: 1.0,
            is_fragile: false,
            allow_tipping: true,
            quantity: 3,
            location: None,
        }];

        assert!(build_items(&lines).is_empty());
    }
}
