//! Dense route geometry and distance→position interpolation.
//!
//! A [`Polyline`] is the ordered coordinate sequence returned by a routing
//! provider.  Cumulative segment lengths are precomputed at construction so
//! that [`Polyline::position_at`] is a single forward walk with no repeated
//! haversine evaluation of earlier segments.

use crate::error::{CoreError, CoreResult};
use crate::geo::GeoPoint;

/// An ordered sequence of ≥ 2 geographic points with precomputed cumulative
/// distances.  Immutable once built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polyline {
    points: Vec<GeoPoint>,

    /// `cumulative_m[i]` = distance in metres from `points[0]` to `points[i]`.
    /// Always the same length as `points`; `cumulative_m[0] == 0.0`.
    cumulative_m: Vec<f64>,
}

impl Polyline {
    /// Build a polyline from at least two points.
    pub fn new(points: Vec<GeoPoint>) -> CoreResult<Self> {
        if points.len() < 2 {
            return Err(CoreError::DegenerateGeometry(points.len()));
        }

        let mut cumulative_m = Vec::with_capacity(points.len());
        cumulative_m.push(0.0);
        for pair in points.windows(2) {
            let last = cumulative_m[cumulative_m.len() - 1];
            cumulative_m.push(last + pair[0].distance_m(pair[1]));
        }

        Ok(Self { points, cumulative_m })
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    #[inline]
    pub fn first(&self) -> GeoPoint {
        self.points[0]
    }

    #[inline]
    pub fn last(&self) -> GeoPoint {
        self.points[self.points.len() - 1]
    }

    /// Total length in metres.
    #[inline]
    pub fn total_m(&self) -> f64 {
        self.cumulative_m[self.cumulative_m.len() - 1]
    }

    /// Number of straight-line segments (`points.len() - 1`).
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Interpolated position at `target_m` metres along the polyline, plus
    /// the index of the segment containing that distance.
    ///
    /// Clamping: `target_m <= 0` returns the first vertex (segment 0);
    /// `target_m >= total_m()` returns the last vertex (last segment).
    /// Zero-length segments (duplicate consecutive vertices) are stepped
    /// over so the interpolation ratio never divides by zero.
    pub fn position_at(&self, target_m: f64) -> (GeoPoint, usize) {
        if target_m <= 0.0 {
            return (self.first(), 0);
        }
        if target_m >= self.total_m() {
            return (self.last(), self.segment_count() - 1);
        }

        for i in 0..self.segment_count() {
            let segment_len = self.cumulative_m[i + 1] - self.cumulative_m[i];
            if segment_len <= 0.0 {
                continue;
            }
            // Strict `<` keeps the segment index the greatest index whose
            // cumulative start does not exceed target_m: an exact vertex hit
            // falls through to the following segment at ratio 0.
            if target_m < self.cumulative_m[i + 1] {
                let ratio = (target_m - self.cumulative_m[i]) / segment_len;
                let a = self.points[i];
                let b = self.points[i + 1];
                let position = GeoPoint::new(
                    a.lat + (b.lat - a.lat) * ratio,
                    a.lon + (b.lon - a.lon) * ratio,
                );
                return (position, i);
            }
        }

        // Unreachable given the clamp above; kept as a safe fallback for
        // floating-point edge cases at the very end of the line.
        (self.last(), self.segment_count() - 1)
    }
}
