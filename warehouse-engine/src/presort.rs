//! Stable pre-conditioning sort fed to the single-pallet solver. Purely a
//! search hint: it has no semantic effect on the output as long as the
//! solver runs to feasibility.

use warehouse_primitives::Item;

/// Sorts `items` in place by `(picking_order asc, base_area desc, name asc)`.
pub fn sort(items: &mut [Item]) {
    items.sort_by(|a, b| {
        a.picking_order
            .cmp(&b.picking_order)
            .then_with(|| b.base_area().cmp(&a.base_area()))
            .then_with(|| a.name.cmp(&b.name))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, picking_order: u32, w: u32, d: u32) -> Item {
        Item::new(id, "T", name, w, d, 10, 1.0, false, true, picking_order, "A-01").unwrap()
    }

    #[test]
    fn orders_by_picking_order_then_area_then_name() {
        let mut items = vec![
            item("a", "z", 2, 10, 10),
            item("b", "a", 1, 10, 10),
            item("c", "a", 1, 20, 20),
        ];
        sort(&mut items);
        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }
}
