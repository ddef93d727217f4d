/// Tunable weights for the single-pallet solver's objective.
///
/// Every coefficient that would otherwise be a bare literal is named here,
/// with units documented, so it can be passed explicitly into
/// `solve_pallet` instead of read from a global.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverWeights {
    /// Reward per cm^3 of placed volume.
    pub volume_weight: f64,
    /// Penalty per cm of stack height (`max_z`).
    pub max_z_penalty: f64,
    /// Penalty per cm of each item's own `z`.
    pub gravity_weight: f64,
    /// Penalty per cm of `x + y`, pulling items toward the origin corner.
    pub corner_weight: f64,
    /// Flat penalty for every item placed in a tipped orientation whose
    /// sole justification is filling a gap.
    pub gap_fill_penalty: f64,
    /// Penalty per cm of positional drift between consecutive same-name
    /// items (vertical drift counted 4x).
    pub clustering_weight: f64,
    /// Penalty for every pair of same-`type_id` items where one sits
    /// directly above the other.
    pub same_type_stacking_penalty: f64,
    /// Penalty per cm of `z` weighted by how early an item is picked.
    pub location_weight: f64,
}

impl Default for SolverWeights {
    fn default() -> Self {
        SolverWeights {
            volume_weight: 1000.0,
            max_z_penalty: 4580.0,
            gravity_weight: 150.0,
            corner_weight: 2.0,
            gap_fill_penalty: 10_000.0,
            clustering_weight: 1.0,
            same_type_stacking_penalty: 1000.0,
            location_weight: 200.0,
        }
    }
}

/// Resource bounds for one `solve_pallet` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverLimits {
    /// Wall-clock budget for the underlying solver.
    pub timeout_secs: f64,
    /// Parallel search workers handed to the solver backend.
    pub workers: u32,
}

impl Default for SolverLimits {
    fn default() -> Self {
        SolverLimits {
            timeout_secs: 20.0,
            workers: 8,
        }
    }
}

/// Horizontal overhang tolerance for the support relation, expressed as a
/// fraction of the supported item's own edge on each axis.
pub const SUPPORT_OVERHANG_TOLERANCE: f64 = 0.05;
