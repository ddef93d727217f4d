//! Core data types shared by the warehouse pallet packing engine and its
//! collaborators: [`Item`], [`PalletSpec`], [`PlacedItem`], [`Pallet`], the
//! tunable [`SolverWeights`]/[`SolverLimits`], and the validation [`Error`].

mod error;
mod item;
mod pallet;
mod weights;

pub use error::{Error, Result};
pub use item::{Item, Orientation, PlacedItem};
pub use pallet::{Pallet, PalletSpec};
pub use weights::{SolverLimits, SolverWeights, SUPPORT_OVERHANG_TOLERANCE};
