//! Marker deconfliction: spreads spatially coincident facility markers apart
//! so each stays individually clickable at high zoom.

use std::f64::consts::PI;

use crate::facility::Facility;

/// Default minimum marker separation, in coordinate degrees.
pub const DEFAULT_MIN_DIST_DEG: f64 = 0.002;

/// Pushes apart every pair of facilities closer than `min_dist_deg`, returning
/// a new collection with only `latitude`/`longitude` changed.
///
/// Distances are plain Euclidean in (longitude, latitude) degree space; this
/// is screen-space deconfliction, not a geodesic computation. A pair closer
/// than the threshold is moved symmetrically along the line connecting the two
/// points so its separation becomes exactly `min_dist_deg`; exactly coincident
/// points, where that line is undefined, are fanned out at an angle derived
/// from the second point's index so clusters split in distinct directions.
///
/// This is a single relaxation pass over all unordered pairs in input order:
/// a point moved to resolve one pair is not re-checked against earlier pairs.
/// For clusters of three or more mutually close points the result is a
/// pairwise local correction, not a guaranteed global minimum separation.
/// That approximation is intentional and adequate for collections in the low
/// hundreds; downstream consumers depend on the single-pass result.
pub fn space_markers(facilities: &[Facility], min_dist_deg: f64) -> Vec<Facility> {
    let mut spaced = facilities.to_vec();
    let n = spaced.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let dx = spaced[i].longitude - spaced[j].longitude;
            let dy = spaced[i].latitude - spaced[j].latitude;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist >= min_dist_deg {
                continue;
            }

            let push = (min_dist_deg - dist) / 2.0;
            let angle = if dist > 0.0 {
                dy.atan2(dx)
            } else {
                // Coincident pair: no connecting line to push along. Fan by
                // the second index so multiple coincident points split at
                // distinct angles.
                2.0 * PI * j as f64 / n as f64
            };

            spaced[i].longitude += angle.cos() * push;
            spaced[i].latitude += angle.sin() * push;
            spaced[j].longitude -= angle.cos() * push;
            spaced[j].latitude -= angle.sin() * push;
        }
    }
    spaced
}

/// [`space_markers`] with the default threshold.
pub fn space_markers_default(facilities: &[Facility]) -> Vec<Facility> {
    space_markers(facilities, DEFAULT_MIN_DIST_DEG)
}
