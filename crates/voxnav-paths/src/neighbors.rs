use voxnav_core::Position;

/// The fixed set of 26 candidate move offsets out of a cell.
///
/// Union of: 4 cardinal horizontal moves, 4 horizontal diagonals, straight
/// up and straight down, 4 cardinal step-ups (+1 y), and 12 cardinal
/// step-downs (−1, −2, −3 y). No legality filtering happens here; every
/// candidate is vetted downstream by the movement rules.
pub const CANDIDATE_OFFSETS: [(i32, i32, i32); 26] = [
    // cardinal
    (1, 0, 0),
    (-1, 0, 0),
    (0, 0, 1),
    (0, 0, -1),
    // diagonal
    (1, 0, 1),
    (1, 0, -1),
    (-1, 0, 1),
    (-1, 0, -1),
    // straight vertical
    (0, 1, 0),
    (0, -1, 0),
    // step-up
    (1, 1, 0),
    (-1, 1, 0),
    (0, 1, 1),
    (0, 1, -1),
    // step-down, one to three blocks
    (1, -1, 0),
    (-1, -1, 0),
    (0, -1, 1),
    (0, -1, -1),
    (1, -2, 0),
    (-1, -2, 0),
    (0, -2, 1),
    (0, -2, -1),
    (1, -3, 0),
    (-1, -3, 0),
    (0, -3, 1),
    (0, -3, -1),
];

/// Append all candidate destinations from `p` into `buf`.
///
/// The buffer is cleared first so it can be reused across calls.
pub fn candidates(p: Position, buf: &mut Vec<Position>) {
    buf.clear();
    for &(dx, dy, dz) in CANDIDATE_OFFSETS.iter() {
        buf.push(p.shift(dx, dy, dz));
    }
}
