use crate::error::{Error, Result};
use crate::item::PlacedItem;
use serde::{Deserialize, Serialize};

/// Fixed pallet footprint and load height, shared across one packing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalletSpec {
    pub w: u32,
    pub d: u32,
    pub h: u32,
}

impl PalletSpec {
    pub fn new(w: u32, d: u32, h: u32) -> Result<Self> {
        if w == 0 {
            return Err(Error::NonPositiveDimension(w as i64));
        }
        if d == 0 {
            return Err(Error::NonPositiveDimension(d as i64));
        }
        if h == 0 {
            return Err(Error::NonPositiveDimension(h as i64));
        }
        Ok(PalletSpec { w, d, h })
    }
}

impl Default for PalletSpec {
    /// The footprint observed throughout the original deployment
    /// (80cm x 120cm footprint, 150cm stacking height).
    fn default() -> Self {
        PalletSpec {
            w: 80,
            d: 120,
            h: 150,
        }
    }
}

/// One pallet's worth of placed items, numbered from 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pallet {
    pub pallet_id: u32,
    pub items: Vec<PlacedItem>,
}
