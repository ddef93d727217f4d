//! Ranks items by warehouse location so that items picked earliest end up
//! lowest on the pallet.

use std::collections::BTreeSet;
use warehouse_primitives::Item;

/// Collects the distinct location codes across `items`, sorts them
/// lexicographically, and assigns each item the rank (`1..N`) of its own
/// location. Lower rank = picked first at the warehouse = must end up
/// lower on the pallet; this inversion is enforced both as a hard support
/// constraint and as a height penalty in the single-pallet solver.
pub fn assign(items: &mut [Item]) {
    let locations: BTreeSet<&str> = items.iter().map(|i| i.location.as_str()).collect();
    let rank: std::collections::HashMap<&str, u32> = locations
        .into_iter()
        .enumerate()
        .map(|(idx, loc)| (loc, (idx + 1) as u32))
        .collect();

    for item in items.iter_mut() {
        if let Some(r) = rank.get(item.location.as_str()) {
            item.picking_order = *r;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, location: &str) -> Item {
        Item::new(id, "T", "n", 10, 10, 10, 1.0, false, true, 1, location).unwrap()
    }

    #[test]
    fn ranks_locations_lexicographically() {
        let mut items = vec![item("a", "B-02"), item("b", "A-01"), item("c", "B-02")];
        assign(&mut items);
        assert_eq!(items[0].picking_order, 2); // B-02
        assert_eq!(items[1].picking_order, 1); // A-01
        assert_eq!(items[2].picking_order, 2); // B-02, same rank as item a
    }
}
