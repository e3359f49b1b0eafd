//! Anisotropic movement-cost model.

use voxnav_core::{Position, VoxelQuery};

use crate::walk;

/// Base cost of an axis-aligned horizontal move.
pub const CARDINAL_COST: f64 = 1.0;

/// Base cost of a diagonal horizontal move (√2, truncated as in the
/// original rules).
pub const DIAGONAL_COST: f64 = 1.414;

/// Surcharge per block of height gained.
pub const CLIMB_COST: f64 = 2.0;

/// Surcharge per block of height lost.
pub const DESCEND_COST: f64 = 1.5;

/// Cost of moving from `from` to the adjacent candidate `to`, or `None`
/// when the move is not permitted.
///
/// Climbing is charged more steeply than descending, and the block under
/// the destination adds its terrain surcharge. Lava never contributes a
/// surcharge: it is excluded as footing outright by the movement rules.
pub fn move_cost<W: VoxelQuery>(world: &W, from: Position, to: Position) -> Option<f64> {
    if !walk::move_permitted(world, from, to) {
        return None;
    }

    let mut cost = if from.x != to.x && from.z != to.z {
        DIAGONAL_COST
    } else {
        CARDINAL_COST
    };

    let dy = to.y - from.y;
    if dy > 0 {
        cost += dy as f64 * CLIMB_COST;
    } else if dy < 0 {
        cost += -dy as f64 * DESCEND_COST;
    }

    cost += world.category(to.down()).surcharge();

    Some(cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxnav_core::BlockCategory;

    fn floored(floor: BlockCategory) -> impl Fn(Position) -> BlockCategory {
        move |p: Position| if p.y <= 0 { floor } else { BlockCategory::Empty }
    }

    #[test]
    fn base_costs() {
        let w = floored(BlockCategory::Solid);
        let a = Position::new(0, 1, 0);
        assert_eq!(move_cost(&w, a, a.shift(1, 0, 0)), Some(1.0));
        assert_eq!(move_cost(&w, a, a.shift(0, 0, -1)), Some(1.0));
        assert_eq!(move_cost(&w, a, a.shift(1, 0, 1)), Some(1.414));
        assert_eq!(move_cost(&w, a, a.shift(-1, 0, 1)), Some(1.414));
    }

    #[test]
    fn vertical_moves_are_asymmetric() {
        // Terraced ground, one step per x coordinate.
        let terrace = |p: Position| {
            if p.y <= p.x {
                BlockCategory::Solid
            } else {
                BlockCategory::Empty
            }
        };
        let lower = Position::new(2, 3, 0);
        let upper = Position::new(3, 4, 0);
        assert_eq!(move_cost(&terrace, lower, upper), Some(3.0));
        assert_eq!(move_cost(&terrace, upper, lower), Some(2.5));

        // A three-block drop off a cliff edge.
        let cliff = |p: Position| {
            let ground = if p.x < 0 { 3 } else { 0 };
            if p.y <= ground {
                BlockCategory::Solid
            } else {
                BlockCategory::Empty
            }
        };
        let cost = move_cost(&cliff, Position::new(-1, 4, 0), Position::new(0, 1, 0));
        assert_eq!(cost, Some(1.0 + 3.0 * DESCEND_COST));
    }

    #[test]
    fn terrain_surcharges_apply_under_the_destination() {
        let a = Position::new(0, 1, 0);
        let b = a.shift(1, 0, 0);
        assert_eq!(move_cost(&floored(BlockCategory::Water), a, b), Some(6.0));
        assert_eq!(move_cost(&floored(BlockCategory::Slowing), a, b), Some(3.0));
        assert_eq!(move_cost(&floored(BlockCategory::Sticky), a, b), Some(4.0));
        assert_eq!(move_cost(&floored(BlockCategory::Slippery), a, b), Some(2.5));
    }

    #[test]
    fn impermissible_moves_have_no_cost() {
        let w = floored(BlockCategory::Solid);
        let a = Position::new(0, 1, 0);
        // Floating destination.
        assert_eq!(move_cost(&w, a, a.shift(1, 1, 0)), None);
        // Lava is not a usable floor at any price.
        assert_eq!(
            move_cost(&floored(BlockCategory::Lava), a, a.shift(1, 0, 0)),
            None
        );
    }
}
