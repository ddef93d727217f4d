//! End-to-end packing scenarios and structural invariants every packing
//! result must satisfy.

use warehouse_engine::{pack_order, solve_pallet};
use warehouse_primitives::{Item, Pallet, PalletSpec, PlacedItem, SolverLimits, SolverWeights, SUPPORT_OVERHANG_TOLERANCE};

fn item(
    id: &str,
    type_id: &str,
    name: &str,
    w: u32,
    d: u32,
    h: u32,
    weight: f64,
    is_fragile: bool,
    allow_tipping: bool,
    picking_order: u32,
) -> Item {
    Item::new(
        id,
        type_id,
        name,
        w,
        d,
        h,
        weight,
        is_fragile,
        allow_tipping,
        picking_order,
        "A-01",
    )
    .unwrap()
}

fn pallet(w: u32, d: u32, h: u32) -> PalletSpec {
    PalletSpec::new(w, d, h).unwrap()
}

/// Containment and pairwise non-overlap, checked directly against one
/// pallet's placed items.
fn assert_contained_and_disjoint(pallet: &PalletSpec, placed: &[PlacedItem]) {
    for p in placed {
        assert!(p.x_end() <= pallet.w, "{} overflows width", p.id);
        assert!(p.y_end() <= pallet.d, "{} overflows depth", p.id);
        assert!(p.z_end() <= pallet.h, "{} overflows height", p.id);
    }

    for i in 0..placed.len() {
        for j in (i + 1)..placed.len() {
            let (a, b) = (&placed[i], &placed[j]);
            let disjoint = a.x_end() <= b.x
                || b.x_end() <= a.x
                || a.y_end() <= b.y
                || b.y_end() <= a.y
                || a.z_end() <= b.z
                || b.z_end() <= a.z;
            assert!(disjoint, "{} and {} overlap", a.id, b.id);
        }
    }
}

/// Every non-floor item rests on some other placed item within the shared
/// overhang tolerance.
fn assert_supported(placed: &[PlacedItem]) {
    for p in placed {
        if p.z == 0 {
            continue;
        }
        let supported = placed.iter().any(|other| {
            other.id != p.id
                && other.z_end() == p.z
                && p.footprint_overlaps(other, SUPPORT_OVERHANG_TOLERANCE)
        });
        assert!(supported, "{} floats at z={}", p.id, p.z);
    }
}

fn above(a: &PlacedItem, b: &PlacedItem) -> bool {
    a.z >= b.z_end()
        && a.footprint_overlaps(b, SUPPORT_OVERHANG_TOLERANCE)
}

/// P5: lower picking_order never ends up above higher picking_order.
fn assert_picking_order(placed: &[PlacedItem]) {
    for a in placed {
        for b in placed {
            if a.id == b.id {
                continue;
            }
            if a.picking_order < b.picking_order {
                assert!(
                    !above(a, b),
                    "{} (order {}) ended up above {} (order {})",
                    a.id,
                    a.picking_order,
                    b.id,
                    b.picking_order
                );
            }
        }
    }
}

#[test]
fn scenario_1_ground_layer_only() {
    let pallet_spec = pallet(100, 100, 100);
    let items: Vec<Item> = (0..4)
        .map(|i| item(&format!("box-{i}"), "T", "box", 45, 45, 20, 5.0, false, true, 1))
        .collect();

    let (placed, unplaced) =
        solve_pallet(&items, &pallet_spec, &SolverWeights::default(), &SolverLimits::default())
            .expect("solve succeeds");

    assert!(unplaced.is_empty());
    assert_eq!(placed.len(), 4);
    assert!(placed.iter().all(|p| p.z == 0), "all four sit on the floor");
    assert_contained_and_disjoint(&pallet_spec, &placed);
}

#[test]
fn scenario_2_upright_enforcement() {
    let pallet_spec = pallet(100, 100, 100);
    let items = vec![item("tall", "T", "tall", 10, 10, 60, 3.0, false, false, 1)];

    let (placed, unplaced) =
        solve_pallet(&items, &pallet_spec, &SolverWeights::default(), &SolverLimits::default())
            .expect("solve succeeds");

    assert!(unplaced.is_empty());
    assert_eq!(placed.len(), 1);
    assert!(!placed[0].tipped, "allow_tipping=false must stay upright");
    assert_eq!(placed[0].h, 60, "upright height equals original height");
}

#[test]
fn scenario_3_aspect_based_forced_tip() {
    let pallet_spec = pallet(100, 100, 40);
    let items = vec![item("tall", "T", "tall", 10, 10, 60, 3.0, false, true, 1)];

    let (placed, unplaced) =
        solve_pallet(&items, &pallet_spec, &SolverWeights::default(), &SolverLimits::default())
            .expect("solve succeeds");

    assert!(unplaced.is_empty());
    assert_eq!(placed.len(), 1);
    assert!(placed[0].tipped, "60cm item cannot stand upright under a 40cm ceiling");
    assert!(placed[0].h <= 40);
}

#[test]
fn scenario_4_fragile_never_below_heavy() {
    let pallet_spec = pallet(100, 100, 100);
    let items = vec![
        item("heavy", "HEAVY", "heavy", 40, 40, 20, 20.0, false, true, 1),
        item("fragile", "FRAGILE", "fragile", 40, 40, 20, 2.0, true, true, 1),
    ];

    let (placed, unplaced) =
        solve_pallet(&items, &pallet_spec, &SolverWeights::default(), &SolverLimits::default())
            .expect("solve succeeds");

    assert!(unplaced.is_empty());
    let heavy = placed.iter().find(|p| p.id == "heavy").unwrap();
    let fragile = placed.iter().find(|p| p.id == "fragile").unwrap();
    assert!(
        !above(heavy, fragile),
        "heavy item must never end up above the fragile one"
    );
    assert_contained_and_disjoint(&pallet_spec, &placed);
}

#[test]
fn scenario_5_pick_order_stacking() {
    let pallet_spec = pallet(100, 100, 100);
    let items = vec![
        item("a1", "T", "box", 40, 40, 20, 5.0, false, true, 1),
        item("a2", "T", "box", 40, 40, 20, 5.0, false, true, 1),
        item("b1", "T", "box", 40, 40, 20, 5.0, false, true, 2),
        item("b2", "T", "box", 40, 40, 20, 5.0, false, true, 2),
    ];

    let (placed, unplaced) =
        solve_pallet(&items, &pallet_spec, &SolverWeights::default(), &SolverLimits::default())
            .expect("solve succeeds");

    assert!(unplaced.is_empty());
    assert_eq!(placed.len(), 4);
    assert_picking_order(&placed);
    assert_contained_and_disjoint(&pallet_spec, &placed);
    assert_supported(&placed);
}

#[test]
fn scenario_6_multi_pallet_overflow() {
    let pallet_spec = pallet(100, 100, 100);
    let items: Vec<Item> = (0..20)
        .map(|i| item(&format!("box-{i}"), "T", "box", 50, 50, 100, 8.0, false, false, 1))
        .collect();

    let pallets: Vec<Pallet> = pack_order(
        items,
        &pallet_spec,
        &SolverWeights::default(),
        &SolverLimits::default(),
    )
    .expect("driver succeeds");

    assert_eq!(pallets.len(), 5, "twenty 4-per-pallet items need five pallets");
    for p in &pallets {
        assert_eq!(p.items.len(), 4);
        assert_contained_and_disjoint(&pallet_spec, &p.items);
    }
}

#[test]
fn invariants_hold_on_a_mixed_batch() {
    let pallet_spec = pallet(100, 100, 150);
    let items = vec![
        item("low", "T", "low", 50, 50, 30, 10.0, false, true, 1),
        item("mid", "T", "mid", 50, 50, 30, 6.0, false, true, 2),
        item("fragile", "FRAGILE", "fragile", 50, 50, 20, 1.0, true, true, 3),
        item("narrow", "T", "narrow", 20, 20, 40, 4.0, false, true, 1),
    ];

    let (placed, unplaced) =
        solve_pallet(&items, &pallet_spec, &SolverWeights::default(), &SolverLimits::default())
            .expect("solve succeeds");

    assert!(unplaced.is_empty(), "all four items fit comfortably on one pallet");
    assert_contained_and_disjoint(&pallet_spec, &placed);
    assert_supported(&placed);
    assert_picking_order(&placed);

    let fragile = placed.iter().find(|p| p.id == "fragile").unwrap();
    assert!(
        placed
            .iter()
            .all(|p| p.id == fragile.id || !above(p, fragile)),
        "nothing may rest above the fragile item"
    );
}

#[test]
fn oversized_item_is_reported_up_front() {
    let pallet_spec = pallet(100, 100, 100);
    let items = vec![item("giant", "T", "giant", 200, 200, 200, 50.0, false, true, 1)];

    let result = pack_order(items, &pallet_spec, &SolverWeights::default(), &SolverLimits::default());
    assert!(result.is_err(), "item larger than the pallet in every pose must be rejected");
}
