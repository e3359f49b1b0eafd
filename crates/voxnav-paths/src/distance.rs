use voxnav_core::Position;

/// Manhattan (L1) distance between two voxel positions.
///
/// Used as the search heuristic. With diagonal moves cheaper than two
/// cardinal ones and asymmetric vertical charges it is not a proven lower
/// bound on the true remaining cost, so routes are good but not guaranteed
/// optimal.
#[inline]
pub fn manhattan(a: Position, b: Position) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs() + (a.z - b.z).abs()
}
