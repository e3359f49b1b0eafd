//! Movement legality rules.
//!
//! Split in two layers: [`standable`] answers "can a walker physically be
//! at this cell", and [`move_permitted`] answers "can it legally get there
//! from an adjacent cell". The corner-cut rule reuses the standability
//! check for the two orthogonal shortcut cells.

use voxnav_core::{Position, VoxelQuery};

/// Maximum upward step, in blocks.
pub const MAX_STEP_UP: i32 = 1;

/// Maximum survivable fall, in blocks.
pub const MAX_FALL: i32 = 3;

/// Whether a walker can occupy `pos`: footing directly below, and both the
/// cell itself and the one above it passable (two blocks of headroom).
pub fn standable<W: VoxelQuery>(world: &W, pos: Position) -> bool {
    world.category(pos.down()).supports_footing()
        && world.category(pos).is_passable()
        && world.category(pos.up()).is_passable()
}

/// Whether the move from `from` to one of its candidate destinations `to`
/// is legal.
pub fn move_permitted<W: VoxelQuery>(world: &W, from: Position, to: Position) -> bool {
    if !standable(world, to) {
        return false;
    }

    let dy = to.y - from.y;
    if dy > MAX_STEP_UP || dy < -MAX_FALL {
        return false;
    }

    let dx = to.x - from.x;
    let dz = to.z - from.z;

    if dx != 0 && dz != 0 {
        // Diagonal moves stay level.
        if dy != 0 {
            return false;
        }
        // Corner-cut prevention: at least one of the two orthogonal
        // shortcut cells must itself be standable, otherwise the move
        // would clip through a solid corner.
        let side_a = Position::new(from.x, from.y, to.z);
        let side_b = Position::new(to.x, from.y, from.z);
        return standable(world, side_a) || standable(world, side_b);
    }

    if dy == MAX_STEP_UP {
        // Step-up: the destination column needs clearance at the walker's
        // original head height and one above it.
        let over = to.at_height(from.y + 1);
        return world.category(over).is_passable() && world.category(over.up()).is_passable();
    }

    if dy < 0 {
        // Fall: the destination column must be clear from the original
        // height down to (exclusive of) the landing cell.
        for y in (to.y + 1)..=from.y {
            if !world.category(to.at_height(y)).is_passable() {
                return false;
            }
        }
        return true;
    }

    // Level move, destination already vetted.
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxnav_core::{BlockCategory, Position};

    // Flat infinite ground: solid at y <= 0, air above.
    fn flat(p: Position) -> BlockCategory {
        if p.y <= 0 {
            BlockCategory::Solid
        } else {
            BlockCategory::Empty
        }
    }

    #[test]
    fn standability_needs_floor_and_headroom() {
        assert!(standable(&flat, Position::new(0, 1, 0)));
        // Floating in the air.
        assert!(!standable(&flat, Position::new(0, 2, 0)));
        // Inside the ground.
        assert!(!standable(&flat, Position::new(0, 0, 0)));

        // A low ceiling right above the walker removes the headroom.
        let cramped = |p: Position| {
            if p.y <= 0 || p.y == 2 {
                BlockCategory::Solid
            } else {
                BlockCategory::Empty
            }
        };
        assert!(!standable(&cramped, Position::new(0, 1, 0)));
    }

    #[test]
    fn water_supports_footing_but_lava_does_not() {
        let pond = |p: Position| {
            if p.y == 0 {
                BlockCategory::Water
            } else {
                BlockCategory::Empty
            }
        };
        assert!(standable(&pond, Position::new(0, 1, 0)));

        let lake_of_fire = |p: Position| {
            if p.y == 0 {
                BlockCategory::Lava
            } else {
                BlockCategory::Empty
            }
        };
        assert!(!standable(&lake_of_fire, Position::new(0, 1, 0)));
    }

    #[test]
    fn level_and_step_moves_on_flat_ground() {
        let a = Position::new(0, 1, 0);
        assert!(move_permitted(&flat, a, a.shift(1, 0, 0)));
        assert!(move_permitted(&flat, a, a.shift(1, 0, 1)));
        // No floor one block up on flat ground.
        assert!(!move_permitted(&flat, a, a.shift(1, 1, 0)));
        // Straight up leads to a floating cell.
        assert!(!move_permitted(&flat, a, a.up()));
    }

    #[test]
    fn climb_and_fall_limits() {
        // A single step of terraced terrain per x coordinate.
        let terrace = |p: Position| {
            if p.y <= p.x {
                BlockCategory::Solid
            } else {
                BlockCategory::Empty
            }
        };
        let on_step = |x: i32| Position::new(x, x + 1, 0);
        assert!(move_permitted(&terrace, on_step(2), on_step(3)));
        assert!(move_permitted(&terrace, on_step(3), on_step(2)));
        // Skipping a terrace level exceeds the climb limit.
        assert!(!move_permitted(
            &terrace,
            on_step(2),
            Position::new(4, 5, 0)
        ));

        // A cliff: high ground for x < 0, low ground otherwise.
        let cliff = |h: i32| {
            move |p: Position| {
                let ground = if p.x < 0 { h } else { 0 };
                if p.y <= ground {
                    BlockCategory::Solid
                } else {
                    BlockCategory::Empty
                }
            }
        };
        let top = |h: i32| Position::new(-1, h + 1, 0);
        let bottom = Position::new(0, 1, 0);
        assert!(move_permitted(&cliff(1), top(1), bottom));
        assert!(move_permitted(&cliff(3), top(3), bottom));
        assert!(!move_permitted(&cliff(4), top(4), bottom));
    }

    #[test]
    fn step_up_requires_headroom() {
        // One raised block at x=1.
        let step = |p: Position| {
            if p.y <= 0 || (p.x == 1 && p.z == 0 && p.y == 1) {
                BlockCategory::Solid
            } else {
                BlockCategory::Empty
            }
        };
        let from = Position::new(0, 1, 0);
        let to = Position::new(1, 2, 0);
        assert!(move_permitted(&step, from, to));

        // The same step with a slab hanging over the destination: the
        // walker's head would clip it.
        let blocked = |p: Position| {
            if p.y <= 0 || (p.x == 1 && p.z == 0 && (p.y == 1 || p.y == 3)) {
                BlockCategory::Solid
            } else {
                BlockCategory::Empty
            }
        };
        assert!(!move_permitted(&blocked, from, to));
    }

    #[test]
    fn fall_path_must_be_clear() {
        // High ground at x < 0; at the landing column an overhang juts out
        // part-way down the drop.
        let overhang = |p: Position| {
            let ground = if p.x < 0 { 3 } else { 0 };
            if p.y <= ground || (p.x == 0 && p.z == 0 && p.y == 3) {
                BlockCategory::Solid
            } else {
                BlockCategory::Empty
            }
        };
        let from = Position::new(-1, 4, 0);
        let to = Position::new(0, 1, 0);
        assert!(!move_permitted(&overhang, from, to));
        // The same drop one row over is unobstructed.
        assert!(move_permitted(
            &overhang,
            Position::new(-1, 4, 1),
            Position::new(0, 1, 1)
        ));
    }

    #[test]
    fn diagonal_moves_never_change_height() {
        let terrace = |p: Position| {
            if p.y <= p.x {
                BlockCategory::Solid
            } else {
                BlockCategory::Empty
            }
        };
        let from = Position::new(2, 3, 0);
        // Cardinal step-up onto x=3 is fine; the diagonal equivalent is not.
        assert!(move_permitted(&terrace, from, Position::new(3, 4, 0)));
        assert!(!move_permitted(&terrace, from, Position::new(3, 4, 1)));
    }

    #[test]
    fn corner_cut_is_rejected_when_both_shortcuts_blocked() {
        // Two full-height solid columns pinching the diagonal between
        // (0,·,0) and (1,·,1).
        let pinch = |p: Position| {
            let column = (p.x == 1 && p.z == 0) || (p.x == 0 && p.z == 1);
            if p.y <= 0 || (column && p.y <= 3) {
                BlockCategory::Solid
            } else {
                BlockCategory::Empty
            }
        };
        let from = Position::new(0, 1, 0);
        let to = Position::new(1, 1, 1);
        assert!(standable(&pinch, to));
        assert!(!move_permitted(&pinch, from, to));

        // Opening either shortcut cell legalizes the diagonal.
        let half_open = |p: Position| {
            if p.y <= 0 || (p.x == 1 && p.z == 0 && p.y <= 3) {
                BlockCategory::Solid
            } else {
                BlockCategory::Empty
            }
        };
        assert!(move_permitted(&half_open, from, to));
    }
}
