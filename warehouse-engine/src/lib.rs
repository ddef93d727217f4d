//! The pallet-packing engine: turns a flat list of order items into one or
//! more pallets, each obeying the hard constraints and maximizing a
//! weighted objective over density, stability and pick order.
//!
//! The narrow public surface is [`pack_order`] for the common multi-pallet
//! case and [`solve_pallet`] for callers that already manage pallet
//! boundaries themselves (used directly by the single-pallet test
//! scenarios). Everything else — pose selection, the constraint model,
//! presorting — is an internal implementation detail.

mod driver;
mod error;
mod input_builder;
mod picking_order;
mod presort;
mod solver;

pub use driver::pack_order;
pub use error::{EngineError, Result};
pub use input_builder::{build_items, OrderLine};
pub use picking_order::assign as assign_picking_order;
pub use presort::sort as presort_items;
pub use solver::{admissible_poses, item_fits_pallet, solve_pallet, Pose};
