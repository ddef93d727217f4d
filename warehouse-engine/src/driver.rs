//! Multi-pallet driver: repeatedly solves the current remaining items onto
//! a fresh pallet until none remain or none fit.

use warehouse_primitives::{Item, Pallet, PalletSpec, SolverLimits, SolverWeights};

use crate::error::{EngineError, Result};
use crate::presort;
use crate::solver::{item_fits_pallet, solve_pallet};

/// Packs `items` onto as many pallets as needed.
///
/// Termination: the remaining list becomes empty (success), or a call to
/// the solver returns zero placements despite every remaining item
/// individually fitting an empty pallet — which should be unreachable
/// given the up-front single-item check below, and is treated as a
/// defensive fatal error.
pub fn pack_order(
    items: Vec<Item>,
    pallet: &PalletSpec,
    weights: &SolverWeights,
    limits: &SolverLimits,
) -> Result<Vec<Pallet>> {
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let oversized: Vec<String> = items
        .iter()
        .filter(|item| !item_fits_pallet(item, pallet))
        .map(|item| item.id.clone())
        .collect();
    if !oversized.is_empty() {
        return Err(EngineError::ItemExceedsPallet {
            unplaceable: oversized,
            partial: Vec::new(),
        });
    }

    let mut remaining = items;
    let mut pallets = Vec::new();
    let mut pallet_id: u32 = 1;

    while !remaining.is_empty() {
        // Re-run the pre-sorter before each single-pallet call, not just
        // once up front: the conditioning order otherwise drifts away from
        // (picking_order, -base_area, name) as items get peeled off across
        // pallets.
        presort::sort(&mut remaining);

        let before = remaining.len();
        let (placed, unplaced) = solve_pallet(&remaining, pallet, weights, limits)?;

        if placed.is_empty() {
            log::error!(
                "critical: {} remaining item(s) could not be placed on an empty pallet",
                before
            );
            return Err(EngineError::ItemExceedsPallet {
                unplaceable: remaining.iter().map(|i| i.id.clone()).collect(),
                partial: pallets,
            });
        }

        log::debug!(
            "pallet {}: packed {} of {} remaining item(s)",
            pallet_id,
            placed.len(),
            before
        );

        pallets.push(Pallet {
            pallet_id,
            items: placed,
        });
        remaining = unplaced;
        pallet_id += 1;
    }

    Ok(pallets)
}
