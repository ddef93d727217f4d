//! The single-pallet solver — the engine's hard core.
//!
//! Public surface: [`solve_pallet`] and [`item_fits_pallet`]. Everything
//! else (the pose table, the constraint model) is an implementation detail.

mod model;
mod pose;

use warehouse_primitives::{Item, PalletSpec, PlacedItem, SolverLimits, SolverWeights};

use crate::error::Result;
pub use pose::{admissible_poses, Pose};

/// True if `item` fits an otherwise-empty pallet in at least one admissible
/// pose. The multi-pallet driver uses this to detect an "item exceeds
/// pallet" error up front, before ever calling the solver.
pub fn item_fits_pallet(item: &Item, pallet: &PalletSpec) -> bool {
    admissible_poses(item)
        .iter()
        .any(|pose| pose.w <= pallet.w && pose.d <= pallet.d && pose.h <= pallet.h)
}

/// Solves the single-pallet placement problem for `items` against `pallet`,
/// maximizing a weighted objective subject to the hard placement
/// constraints. Returns placed items (sorted bottom-up, front-to-back,
/// left-to-right — an operator-friendly reading order) and the items that
/// did not fit, in their original relative order, ready for the next
/// pallet.
pub fn solve_pallet(
    items: &[Item],
    pallet: &PalletSpec,
    weights: &SolverWeights,
    limits: &SolverLimits,
) -> Result<(Vec<PlacedItem>, Vec<Item>)> {
    if items.is_empty() {
        return Ok((Vec::new(), Vec::new()));
    }

    let placements = model::solve(items, pallet, weights, limits)?;

    let mut placed = Vec::new();
    let mut unplaced = Vec::new();

    for (item, placement) in items.iter().zip(placements.into_iter()) {
        if !placement.packed {
            unplaced.push(item.clone());
            continue;
        }
        let pose = placement
            .pose
            .expect("packed placement always selects exactly one pose");
        placed.push(PlacedItem {
            id: item.id.clone(),
            type_id: item.type_id.clone(),
            name: item.name.clone(),
            location: item.location.clone(),
            picking_order: item.picking_order,
            x: placement.x,
            y: placement.y,
            z: placement.z,
            w: pose.w,
            h: pose.h,
            d: pose.d,
            weight: item.weight,
            tipped: pose.is_tipped(),
        });
    }

    // Operator reading order: bottom-up, front-to-back, left-to-right.
    placed.sort_by(|a, b| (a.z, a.y, a.x).cmp(&(b.z, b.y, b.x)));

    Ok((placed, unplaced))
}
