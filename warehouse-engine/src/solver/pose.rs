//! The six-way orientation/spin table collapsed into a single "pose" axis:
//! each pose fuses one `orient` choice with one `spin` choice, since an
//! item's raw dimensions are known constants at model-build time and the
//! resulting effective dimensions are therefore *constants per pose*, not
//! variables that need reifying.

use warehouse_primitives::{Item, Orientation};

/// One of the six axis-aligned poses an item can be placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pose {
    pub index: usize,
    pub orient: Orientation,
    pub spin: bool,
    /// Effective width, depth, height once this pose is applied.
    pub w: u32,
    pub d: u32,
    pub h: u32,
}

impl Pose {
    /// True for any pose other than upright-unspun/upright-spun — the
    /// "gap-fill" carrier in the objective.
    pub fn is_tipped(&self) -> bool {
        !self.orient.is_upright()
    }

    /// The item's own base area under this pose (`w' * d'`), used for the
    /// "biggest base area on the bottom" heuristic captured via
    /// same-type-stacking and support scoring.
    pub fn base_area(&self) -> u64 {
        self.w as u64 * self.d as u64
    }

    /// A pose is geometrically inadmissible if its vertical extent is more
    /// than 3x the shorter of its own two base edges. Only consulted for
    /// items that are allowed to tip at all — see [`admissible_poses`].
    pub fn aspect_forbidden(&self) -> bool {
        let shorter_base = self.w.min(self.d);
        if shorter_base == 0 {
            return true;
        }
        self.h > shorter_base.saturating_mul(3)
    }
}

/// Builds the six candidate poses for one item, in a fixed canonical order:
/// upright/unspun, upright/spun, side/unspun, side/spun, front/unspun,
/// front/spun. Index into the returned array is the "pose index" used
/// throughout the solver.
pub fn poses_for(item: &Item) -> [Pose; 6] {
    let (w, d, h) = (item.w, item.d, item.h);
    [
        Pose {
            index: 0,
            orient: Orientation::Upright,
            spin: false,
            w,
            d,
            h,
        },
        Pose {
            index: 1,
            orient: Orientation::Upright,
            spin: true,
            w: d,
            d: w,
            h,
        },
        Pose {
            index: 2,
            orient: Orientation::Side,
            spin: false,
            w: h,
            d,
            h: w,
        },
        Pose {
            index: 3,
            orient: Orientation::Side,
            spin: true,
            w: d,
            d: h,
            h: w,
        },
        Pose {
            index: 4,
            orient: Orientation::Front,
            spin: false,
            w,
            d: h,
            h: d,
        },
        Pose {
            index: 5,
            orient: Orientation::Front,
            spin: true,
            w: h,
            d: w,
            h: d,
        },
    ]
}

/// Which pose indices remain admissible for this item once `allow_tipping`
/// and the aspect limit are applied.
///
/// The aspect limit only ever rules out poses when the item has another
/// pose to fall back to: an item with `allow_tipping == false` has no
/// physical alternative to standing upright, so upright stays admissible
/// for it even when the aspect ratio alone would otherwise forbid it
/// (seed scenario "upright enforcement"). Items that may tip lose any
/// pose, upright included, whose own aspect ratio is out of bounds (seed
/// scenario "aspect-based forced tip").
pub fn admissible_poses(item: &Item) -> Vec<Pose> {
    if !item.allow_tipping {
        return poses_for(item)
            .into_iter()
            .filter(|pose| pose.orient.is_upright())
            .collect();
    }

    poses_for(item)
        .into_iter()
        .filter(|pose| !pose.aspect_forbidden())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(w: u32, d: u32, h: u32, allow_tipping: bool) -> Item {
        Item::new("i", "t", "n", w, d, h, 1.0, false, allow_tipping, 1, "A-01").unwrap()
    }

    #[test]
    fn upright_only_keeps_two_poses() {
        let it = item(40, 40, 30, false);
        let poses = admissible_poses(&it);
        assert_eq!(poses.len(), 2);
        assert!(poses.iter().all(|p| p.orient.is_upright()));
    }

    #[test]
    fn tall_narrow_item_forbids_upright() {
        // h=60 vs min(w,d)=10 -> 60 > 30, upright forbidden.
        let it = item(10, 10, 60, true);
        let poses = admissible_poses(&it);
        assert!(poses.iter().all(|p| !p.orient.is_upright()));
        assert!(!poses.is_empty());
    }

    #[test]
    fn cube_keeps_all_six_poses() {
        let it = item(20, 20, 20, true);
        assert_eq!(admissible_poses(&it).len(), 6);
    }

    #[test]
    fn upright_only_item_stays_upright_even_if_aspect_ratio_is_exceeded() {
        // h=60 vs min(w,d)=10 would forbid upright for a tippable item, but
        // this one cannot tip at all, so upright is its only option.
        let it = item(10, 10, 60, false);
        let poses = admissible_poses(&it);
        assert_eq!(poses.len(), 2);
        assert!(poses.iter().all(|p| p.orient.is_upright() && p.h == 60));
    }
}
