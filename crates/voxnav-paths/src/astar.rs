use log::debug;
use voxnav_core::{Position, VoxelQuery};

use crate::distance::manhattan;
use crate::finder::{Node, OpenEntry, PathFinder};
use crate::path::Path;
use crate::{cost, neighbors, walk};

impl PathFinder {
    /// Search for a route from `start` to `goal` using weighted A*.
    ///
    /// Returns the full route including both endpoints, or the empty path
    /// when the goal is unreachable or the expansion budget runs out —
    /// "no route" is an expected outcome, never an error. When
    /// `start == goal` the result is the single-step route `[start]` if
    /// the cell is standable, else the empty path.
    ///
    /// The heuristic is 3D Manhattan distance; with the asymmetric
    /// vertical charges it is not a proven lower bound, so routes are
    /// good-quality rather than guaranteed optimal.
    pub fn find_path<W: VoxelQuery>(&mut self, world: &W, start: Position, goal: Position) -> Path {
        // Fresh state per search; allocations are reused.
        self.nodes.clear();
        self.index.clear();
        self.open.clear();

        if start == goal {
            return if walk::standable(world, start) {
                Path::new(vec![start], 0.0)
            } else {
                Path::empty()
            };
        }

        let h0 = manhattan(start, goal) as f64;
        self.nodes.push(Node {
            pos: start,
            g: 0.0,
            f: h0,
            parent: usize::MAX,
            closed: false,
        });
        self.index.insert(start, 0);
        self.open.push(OpenEntry {
            f: h0,
            pos: start,
            idx: 0,
        });

        let mut expansions = 0usize;
        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut goal_idx = None;

        while let Some(entry) = self.open.pop() {
            let ci = entry.idx;
            // Skip stale duplicates left behind by decrease-key pushes.
            if self.nodes[ci].closed || entry.f > self.nodes[ci].f {
                continue;
            }

            if self.nodes[ci].pos == goal {
                goal_idx = Some(ci);
                break;
            }

            if expansions == self.budget {
                debug!(
                    "search {start} -> {goal} gave up after {} expansions",
                    self.budget
                );
                break;
            }
            expansions += 1;
            self.nodes[ci].closed = true;
            let cur_pos = self.nodes[ci].pos;
            let cur_g = self.nodes[ci].g;

            neighbors::candidates(cur_pos, &mut nbuf);
            for &np in nbuf.iter() {
                let existing = self.index.get(&np).copied();
                if let Some(ni) = existing {
                    if self.nodes[ni].closed {
                        continue;
                    }
                }

                let Some(step) = cost::move_cost(world, cur_pos, np) else {
                    continue;
                };
                let tentative = cur_g + step;

                match existing {
                    None => {
                        let ni = self.nodes.len();
                        let f = tentative + manhattan(np, goal) as f64;
                        self.nodes.push(Node {
                            pos: np,
                            g: tentative,
                            f,
                            parent: ci,
                            closed: false,
                        });
                        self.index.insert(np, ni);
                        self.open.push(OpenEntry { f, pos: np, idx: ni });
                    }
                    Some(ni) if tentative < self.nodes[ni].g => {
                        let f = tentative + manhattan(np, goal) as f64;
                        let n = &mut self.nodes[ni];
                        n.g = tentative;
                        n.f = f;
                        n.parent = ci;
                        self.open.push(OpenEntry { f, pos: np, idx: ni });
                    }
                    Some(_) => {}
                }
            }
        }
        self.nbuf = nbuf;

        let Some(gi) = goal_idx else {
            debug!("no route {start} -> {goal} ({expansions} expansions)");
            return Path::empty();
        };

        // Walk the parent indices back to the start, then flip.
        let mut steps = Vec::new();
        let mut ci = gi;
        while ci != usize::MAX {
            steps.push(self.nodes[ci].pos);
            ci = self.nodes[ci].parent;
        }
        steps.reverse();

        let total = self.nodes[gi].g;
        debug!(
            "route {start} -> {goal}: {} steps, cost {total:.3} ({expansions} expansions)",
            steps.len()
        );
        Path::new(steps, total)
    }
}
