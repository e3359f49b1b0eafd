//! Route search over procedurally scattered terrain.
//!
//! Builds a small voxel world with a ridge, a pond, an ice sheet and a
//! lava ditch, then searches for a route across it and prints the result
//! as a top-down map. Run with `RUST_LOG=debug` to see search statistics.

use log::info;
use rand::{Rng, RngExt};
use voxnav_core::{BlockCategory, Position, Volume, VoxelGrid};
use voxnav_paths::PathFinder;

const SIZE: i32 = 32;

fn build_world(rng: &mut impl Rng) -> VoxelGrid {
    let mut g = VoxelGrid::new(Volume::new(
        Position::ZERO,
        Position::new(SIZE, 10, SIZE),
    ));
    g.fill_layer(0, BlockCategory::Solid);

    // A ridge running north-south, two blocks high with a terraced edge
    // so it can be climbed one step at a time.
    for z in 0..SIZE {
        g.set(Position::new(14, 1, z), BlockCategory::Solid);
        g.set(Position::new(15, 1, z), BlockCategory::Solid);
        g.set(Position::new(15, 2, z), BlockCategory::Solid);
        g.set(Position::new(16, 1, z), BlockCategory::Solid);
    }

    // A pond and an ice sheet on the west side.
    g.fill(
        Volume::new(Position::new(3, 0, 4), Position::new(9, 1, 10)),
        BlockCategory::Water,
    );
    g.fill(
        Volume::new(Position::new(2, 0, 14), Position::new(10, 1, 22)),
        BlockCategory::Slippery,
    );

    // A lava ditch on the east side with a two-cell gap left as a ford.
    for z in 0..SIZE {
        if z != 20 && z != 21 {
            g.set(Position::new(24, 0, z), BlockCategory::Lava);
        }
    }

    // Scattered patches of slow and sticky ground.
    for _ in 0..40 {
        let p = Position::new(
            rng.random_range(0..SIZE),
            0,
            rng.random_range(0..SIZE),
        );
        let cat = if rng.random_range(0..2u32) == 0 {
            BlockCategory::Slowing
        } else {
            BlockCategory::Sticky
        };
        if g.get(p) == BlockCategory::Solid {
            g.set(p, cat);
        }
    }

    g
}

fn glyph(g: &VoxelGrid, p: Position, route: &[Position]) -> char {
    if route.iter().any(|r| r.x == p.x && r.z == p.z) {
        return '*';
    }
    match g.get(p) {
        BlockCategory::Water => '~',
        BlockCategory::Lava => '!',
        BlockCategory::Slippery => '-',
        BlockCategory::Slowing => 's',
        BlockCategory::Sticky => 'h',
        _ => {
            if g.get(p.up()).supports_footing() {
                '^'
            } else {
                '.'
            }
        }
    }
}

fn main() {
    env_logger::init();
    let mut rng = rand::rng();
    let world = build_world(&mut rng);

    let start = Position::new(1, 1, 1);
    let goal = Position::new(30, 1, 30);

    let mut finder = PathFinder::new();
    let route = finder.find_path(&world, start, goal);

    if route.is_empty() {
        info!("no route from {start} to {goal}");
        println!("no route found");
        return;
    }
    info!(
        "found a route of {} steps, cost {:.1}",
        route.len(),
        route.cost()
    );

    for z in 0..SIZE {
        let mut line = String::with_capacity(SIZE as usize);
        for x in 0..SIZE {
            line.push(glyph(&world, Position::new(x, 0, z), route.steps()));
        }
        println!("{line}");
    }
    println!(
        "route: {} steps, total cost {:.1} ({} to {})",
        route.len(),
        route.cost(),
        start,
        goal
    );
}
