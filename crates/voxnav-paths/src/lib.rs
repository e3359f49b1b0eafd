//! Route search over voxel terrain.
//!
//! This crate computes walkable routes between two cells of a 3D voxel
//! grid, honoring footing, headroom, step/fall limits, and corner-cut
//! rules, with terrain-dependent movement costs:
//!
//! - **Weighted A\*** search ([`PathFinder::find_path`])
//! - **Movement legality** rules ([`standable`], [`move_permitted`])
//! - **Cost model** ([`move_cost`])
//! - **Candidate moves** ([`candidates`], [`CANDIDATE_OFFSETS`])
//!
//! The world itself stays behind the [`VoxelQuery`] capability from
//! `voxnav-core`; any side-effect-free classification function works,
//! including plain closures. [`PathFinder`] owns and reuses its internal
//! buffers, so repeated queries incur few allocations after warm-up, and
//! each instance is independent: run parallel searches by giving each
//! thread its own finder.
//!
//! An unreachable goal or an exhausted expansion budget yields the empty
//! [`Path`], never an error.

mod astar;
mod cost;
mod distance;
mod finder;
mod neighbors;
mod path;
mod walk;

pub use cost::{CARDINAL_COST, CLIMB_COST, DESCEND_COST, DIAGONAL_COST, move_cost};
pub use distance::manhattan;
pub use finder::{DEFAULT_BUDGET, PathFinder};
pub use neighbors::{CANDIDATE_OFFSETS, candidates};
pub use path::Path;
pub use walk::{MAX_FALL, MAX_STEP_UP, move_permitted, standable};

pub use voxnav_core::{BlockCategory, Position, VoxelQuery};
