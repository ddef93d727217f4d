use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A single physical unit to be placed on a pallet.
///
/// Items are value objects: once constructed they are immutable for the
/// duration of one packing call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub type_id: String,
    pub name: String,
    pub w: u32,
    pub d: u32,
    pub h: u32,
    pub weight: f64,
    pub is_fragile: bool,
    pub allow_tipping: bool,
    pub picking_order: u32,
    pub location: String,
}

impl Item {
    /// Builds an item, validating the invariants spelled out in the data
    /// model: positive dimensions, positive weight, positive picking order,
    /// non-empty identity fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        type_id: impl Into<String>,
        name: impl Into<String>,
        w: u32,
        d: u32,
        h: u32,
        weight: f64,
        is_fragile: bool,
        allow_tipping: bool,
        picking_order: u32,
        location: impl Into<String>,
    ) -> Result<Self> {
        let id = id.into();
        let type_id = type_id.into();
        let name = name.into();
        let location = location.into();

        if id.is_empty() {
            return Err(Error::EmptyField("id"));
        }
        if type_id.is_empty() {
            return Err(Error::EmptyField("type_id"));
        }
        if name.is_empty() {
            return Err(Error::EmptyField("name"));
        }
        if location.is_empty() {
            return Err(Error::EmptyField("location"));
        }
        if w == 0 {
            return Err(Error::NonPositiveDimension(w as i64));
        }
        if d == 0 {
            return Err(Error::NonPositiveDimension(d as i64));
        }
        if h == 0 {
            return Err(Error::NonPositiveDimension(h as i64));
        }
        if !(weight > 0.0) {
            return Err(Error::NonPositiveWeight(weight));
        }
        if picking_order == 0 {
            return Err(Error::NonPositivePickingOrder(picking_order as i64));
        }

        Ok(Item {
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
            location,
        })
    }

    /// Original, unrotated volume in cubic centimeters.
    pub fn volume(&self) -> u64 {
        self.w as u64 * self.d as u64 * self.h as u64
    }

    /// Original base footprint (`w * d`), used by the pre-sorter.
    pub fn base_area(&self) -> u64 {
        self.w as u64 * self.d as u64
    }
}

/// Which original axis ended up vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Original `h` vertical (upright, unrotated).
    Upright,
    /// Original `w` vertical (tipped onto its side).
    Side,
    /// Original `d` vertical (tipped onto its front).
    Front,
}

impl Orientation {
    pub fn is_upright(self) -> bool {
        matches!(self, Orientation::Upright)
    }
}

/// An [`Item`] augmented with its placement on a pallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    pub id: String,
    pub type_id: String,
    pub name: String,
    pub location: String,
    pub picking_order: u32,
    pub x: u32,
    pub y: u32,
    pub z: u32,
    /// Effective width after rotation.
    pub w: u32,
    /// Effective height after rotation.
    pub h: u32,
    /// Effective depth after rotation.
    pub d: u32,
    pub weight: f64,
    /// True iff the item rests on a face that is not its original base.
    pub tipped: bool,
}

impl PlacedItem {
    pub fn x_end(&self) -> u32 {
        self.x + self.w
    }
    pub fn y_end(&self) -> u32 {
        self.y + self.d
    }
    pub fn z_end(&self) -> u32 {
        self.z + self.h
    }

    /// Whether this item's footprint overlaps `other`'s footprint, allowing
    /// up to `tolerance` fraction of this item's own edge as overhang on
    /// each axis (the support-overlap tolerance).
    pub fn footprint_overlaps(&self, other: &PlacedItem, tolerance: f64) -> bool {
        let x_slack = (self.w as f64 * tolerance).round() as i64;
        let y_slack = (self.d as f64 * tolerance).round() as i64;

        let self_x0 = self.x as i64 - x_slack;
        let self_x1 = self.x_end() as i64 + x_slack;
        let self_y0 = self.y as i64 - y_slack;
        let self_y1 = self.y_end() as i64 + y_slack;

        let other_x0 = other.x as i64;
        let other_x1 = other.x_end() as i64;
        let other_y0 = other.y as i64;
        let other_y1 = other.y_end() as i64;

        self_x0 < other_x1 && other_x0 < self_x1 && self_y0 < other_y1 && other_y0 < self_y1
    }
}
