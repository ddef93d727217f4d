//! Constraint-model construction and solving for one pallet.
//!
//! Packed/origin/pose decision variables are realized as a mixed-integer
//! program solved with `good_lp` over the HiGHS backend. Reified
//! implications (`b ⇒ linear`) and the non-overlap big-OR are encoded with
//! a standard big-M transformation; the big-M constant is sized from the
//! pallet's own envelope, which is always a safe bound since no coordinate
//! or effective dimension can exceed it.

use good_lp::{constraint, highs, variable, Expression, ProblemVariables, Solution, SolverModel, Variable};
use std::collections::HashMap;
use warehouse_primitives::{Item, PalletSpec, SolverLimits, SolverWeights, SUPPORT_OVERHANG_TOLERANCE};

use super::pose::{admissible_poses, Pose};
use crate::error::EngineError;

/// Per-item decision variables plus their admissible poses.
struct ItemVars {
    poses: Vec<Pose>,
    pose_selected: Vec<Variable>,
    packed: Variable,
    x: Variable,
    y: Variable,
    z: Variable,
    on_ground: Variable,
}

/// Decoded solution for one item: where it ended up, and under which pose.
#[derive(Debug, Clone)]
pub struct ItemPlacement {
    pub packed: bool,
    pub x: u32,
    pub y: u32,
    pub z: u32,
    pub pose: Option<Pose>,
}

fn round_u32(v: f64) -> u32 {
    v.round().max(0.0) as u32
}

/// Builds the model for `items` against `pallet`, solves it under `limits`
/// and `weights`, and returns one [`ItemPlacement`] per input item (same
/// order as `items`).
pub fn solve(
    items: &[Item],
    pallet: &PalletSpec,
    weights: &SolverWeights,
    limits: &SolverLimits,
) -> Result<Vec<ItemPlacement>, EngineError> {
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let n = items.len();
    let big_m = (pallet.w + pallet.d + pallet.h) as f64 * 2.0;
    let max_order = items.iter().map(|it| it.picking_order).max().unwrap_or(1);

    let mut vars = ProblemVariables::new();
    let mut item_vars: Vec<ItemVars> = Vec::with_capacity(n);

    for item in items {
        let poses = admissible_poses(item);
        let pose_selected: Vec<Variable> = poses
            .iter()
            .map(|_| vars.add(variable().binary()))
            .collect();
        let packed = vars.add(variable().binary());
        let x = vars.add(variable().min(0.0).max(pallet.w as f64).integer());
        let y = vars.add(variable().min(0.0).max(pallet.d as f64).integer());
        let z = vars.add(variable().min(0.0).max(pallet.h as f64).integer());
        let on_ground = vars.add(variable().binary());

        item_vars.push(ItemVars {
            poses,
            pose_selected,
            packed,
            x,
            y,
            z,
            on_ground,
        });
    }

    let max_z = vars.add(variable().min(0.0).max(pallet.h as f64).integer());

    // Linear expressions for each item's effective dimensions, derived from
    // its pose-selector variables (poses carry constant dimensions, so these
    // stay linear: no reification needed for this part of the model).
    let current_w: Vec<Expression> = item_vars
        .iter()
        .map(|iv| {
            iv.poses
                .iter()
                .zip(&iv.pose_selected)
                .fold(Expression::from(0.0), |acc, (pose, v)| acc + *v * pose.w as f64)
        })
        .collect();
    let current_d: Vec<Expression> = item_vars
        .iter()
        .map(|iv| {
            iv.poses
                .iter()
                .zip(&iv.pose_selected)
                .fold(Expression::from(0.0), |acc, (pose, v)| acc + *v * pose.d as f64)
        })
        .collect();
    let current_h: Vec<Expression> = item_vars
        .iter()
        .map(|iv| {
            iv.poses
                .iter()
                .zip(&iv.pose_selected)
                .fold(Expression::from(0.0), |acc, (pose, v)| acc + *v * pose.h as f64)
        })
        .collect();
    let gap_fill: Vec<Expression> = item_vars
        .iter()
        .map(|iv| {
            iv.poses
                .iter()
                .zip(&iv.pose_selected)
                .filter(|(pose, _)| pose.is_tipped())
                .fold(Expression::from(0.0), |acc, (_, v)| acc + *v)
        })
        .collect();

    let mut constraints = Vec::new();

    for (i, iv) in item_vars.iter().enumerate() {
        // Exactly one pose selected iff packed.
        let pose_sum = iv
            .pose_selected
            .iter()
            .fold(Expression::from(0.0), |acc, v| acc + *v);
        constraints.push(constraint!(pose_sum == iv.packed));

        // Containment: current_w/d/h collapse to 0 when unpacked, so these
        // hold trivially for unplaced items.
        constraints.push(constraint!(iv.x + current_w[i].clone() <= pallet.w as f64));
        constraints.push(constraint!(iv.y + current_d[i].clone() <= pallet.d as f64));
        constraints.push(constraint!(iv.z + current_h[i].clone() <= pallet.h as f64));
        constraints.push(constraint!(max_z >= iv.z + current_h[i].clone()));

        // Floor flag: on_ground_i forces z_i to zero.
        constraints.push(constraint!(iv.z <= big_m * (1.0 - iv.on_ground)));
    }

    // Pairwise non-overlap, picking order, fragility, and support.
    let mut support_pairs: Vec<(usize, usize, Variable)> = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            let (vi, vj) = (&item_vars[i], &item_vars[j]);

            let left = vars.add(variable().binary());
            let right = vars.add(variable().binary());
            let behind = vars.add(variable().binary());
            let front = vars.add(variable().binary());
            let below = vars.add(variable().binary()); // i below j
            let above = vars.add(variable().binary()); // i above j

            constraints.push(constraint!(
                vi.x + current_w[i].clone() <= vj.x + big_m * (1.0 - left)
            ));
            constraints.push(constraint!(
                vj.x + current_w[j].clone() <= vi.x + big_m * (1.0 - right)
            ));
            constraints.push(constraint!(
                vi.y + current_d[i].clone() <= vj.y + big_m * (1.0 - behind)
            ));
            constraints.push(constraint!(
                vj.y + current_d[j].clone() <= vi.y + big_m * (1.0 - front)
            ));
            constraints.push(constraint!(
                vi.z + current_h[i].clone() <= vj.z + big_m * (1.0 - below)
            ));
            constraints.push(constraint!(
                vj.z + current_h[j].clone() <= vi.z + big_m * (1.0 - above)
            ));

            let separated =
                Expression::from(left) + right + behind + front + below + above;
            constraints.push(constraint!(separated >= 1.0));

            // Smaller picking_order never ends up above the larger one.
            if items[i].picking_order < items[j].picking_order {
                constraints.push(constraint!(above == 0.0));
            } else if items[i].picking_order > items[j].picking_order {
                constraints.push(constraint!(below == 0.0));
            }

            // Nothing is placed above a fragile item, and a fragile item is
            // never placed below another.
            if items[j].is_fragile {
                constraints.push(constraint!(above == 0.0));
            }
            if items[i].is_fragile {
                constraints.push(constraint!(below == 0.0));
            }

            // Support candidates: j supports i, and i supports j.
            let supp_j_under_i = vars.add(variable().binary());
            push_support_constraints(
                &mut constraints,
                supp_j_under_i,
                vi,
                vj,
                &current_w[i],
                &current_d[i],
                &current_h[j],
                big_m,
            );
            support_pairs.push((i, j, supp_j_under_i));

            let supp_i_under_j = vars.add(variable().binary());
            push_support_constraints(
                &mut constraints,
                supp_i_under_j,
                vj,
                vi,
                &current_w[j],
                &current_d[j],
                &current_h[i],
                big_m,
            );
            support_pairs.push((j, i, supp_i_under_j));
        }
    }

    // Every packed item is either on the floor or sits on at least one
    // packed supporter.
    let mut support_of: HashMap<usize, Vec<Variable>> = HashMap::new();
    for (supported, _supporter, var) in &support_pairs {
        support_of.entry(*supported).or_default().push(*var);
    }
    for (i, iv) in item_vars.iter().enumerate() {
        let supports = support_of.get(&i).cloned().unwrap_or_default();
        let support_sum = supports
            .into_iter()
            .fold(Expression::from(0.0), |acc, v| acc + v);
        constraints.push(constraint!(iv.on_ground + support_sum >= iv.packed));
    }

    // --- Objective ---
    let mut objective = Expression::from(0.0);

    for (i, item) in items.iter().enumerate() {
        objective += item_vars[i].packed * (item.volume() as f64) * weights.volume_weight;
        objective += item_vars[i].z * (-weights.gravity_weight);
        objective += item_vars[i].x * (-weights.corner_weight);
        objective += item_vars[i].y * (-weights.corner_weight);
        objective += gap_fill[i].clone() * (-weights.gap_fill_penalty);

        let location_coeff =
            -(weights.location_weight) * ((max_order - item.picking_order + 1) as f64);
        objective += item_vars[i].z * location_coeff;
    }
    objective += max_z * (-weights.max_z_penalty);

    for (supported, supporter, var) in &support_pairs {
        if items[*supported].type_id == items[*supporter].type_id {
            objective += *var * (-weights.same_type_stacking_penalty);
        }
    }

    // Clustering: consecutive same-name items in the input order are
    // penalized for positional drift (vertical drift weighted 4x).
    for i in 0..n.saturating_sub(1) {
        if items[i].name != items[i + 1].name {
            continue;
        }
        let abs_dx = vars.add(variable().min(0.0).max(pallet.w as f64).integer());
        let abs_dy = vars.add(variable().min(0.0).max(pallet.d as f64).integer());
        let abs_dz = vars.add(variable().min(0.0).max(pallet.h as f64).integer());
        let (a, b) = (&item_vars[i], &item_vars[i + 1]);
        constraints.push(constraint!(abs_dx >= a.x - b.x));
        constraints.push(constraint!(abs_dx >= b.x - a.x));
        constraints.push(constraint!(abs_dy >= a.y - b.y));
        constraints.push(constraint!(abs_dy >= b.y - a.y));
        constraints.push(constraint!(abs_dz >= a.z - b.z));
        constraints.push(constraint!(abs_dz >= b.z - a.z));

        objective += abs_dx * (-weights.clustering_weight);
        objective += abs_dy * (-weights.clustering_weight);
        objective += abs_dz * (-weights.clustering_weight * 4.0);
    }

    let mut model = vars.maximise(objective).using(highs);
    model.set_time_limit(limits.timeout_secs);
    model.set_threads(limits.workers);
    for c in constraints {
        model = model.with(c);
    }

    let solution = model.solve().map_err(|e| EngineError::SolverFailure(e.to_string()))?;

    let mut placements = Vec::with_capacity(n);
    for iv in &item_vars {
        let is_packed = solution.value(iv.packed) > 0.5;
        if !is_packed {
            placements.push(ItemPlacement {
                packed: false,
                x: 0,
                y: 0,
                z: 0,
                pose: None,
            });
            continue;
        }

        let chosen = iv
            .poses
            .iter()
            .zip(&iv.pose_selected)
            .find(|(_, v)| solution.value(**v) > 0.5)
            .map(|(pose, _)| *pose);

        placements.push(ItemPlacement {
            packed: true,
            x: round_u32(solution.value(iv.x)),
            y: round_u32(solution.value(iv.y)),
            z: round_u32(solution.value(iv.z)),
            pose: chosen,
        });
    }

    Ok(placements)
}

/// Support overlap constraints: `supported` rests on `supporter` when
/// `supp` is true — coplanar tops/bottoms and footprint overlap within
/// `SUPPORT_OVERHANG_TOLERANCE` of the supported item's own edge on each
/// axis.
#[allow(clippy::too_many_arguments)]
fn push_support_constraints(
    constraints: &mut Vec<good_lp::Constraint>,
    supp: Variable,
    supported: &ItemVars,
    supporter: &ItemVars,
    supported_w: &Expression,
    supported_d: &Expression,
    supporter_h: &Expression,
    big_m: f64,
) {
    constraints.push(constraint!(supp <= supported.packed));
    constraints.push(constraint!(supp <= supporter.packed));

    // Coplanarity: supported item's base touches supporter's top.
    constraints.push(constraint!(
        supported.z - (supporter.z + supporter_h.clone()) <= big_m * (1.0 - supp)
    ));
    constraints.push(constraint!(
        (supporter.z + supporter_h.clone()) - supported.z <= big_m * (1.0 - supp)
    ));

    let tol_x = supported_w.clone() * SUPPORT_OVERHANG_TOLERANCE;
    let tol_y = supported_d.clone() * SUPPORT_OVERHANG_TOLERANCE;

    // Footprint overlap, widened by the supported item's own tolerance.
    constraints.push(constraint!(
        supported.x - tol_x.clone() - supporter.x <= big_m * (1.0 - supp)
    ));
    constraints.push(constraint!(
        supporter.x - supported.x - supported_w.clone() - tol_x <= big_m * (1.0 - supp)
    ));
    constraints.push(constraint!(
        supported.y - tol_y.clone() - supporter.y <= big_m * (1.0 - supp)
    ));
    constraints.push(constraint!(
        supporter.y - supported.y - supported_d.clone() - tol_y <= big_m * (1.0 - supp)
    ));
}
