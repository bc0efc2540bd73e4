use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::CurveLoadError;

/// Knot spacings below this are treated as coincident points
const KNOT_EPSILON: f32 = 1e-4;

/// Consecutive control points closer than this are merged before fitting
const DUPLICATE_DISTANCE: f32 = 1e-4;

/// Knot parameterization for Catmull-Rom segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveType {
    /// Knot spacing = sqrt(chord length). Never forms cusps or loops inside a segment.
    #[default]
    Centripetal,
    /// Knot spacing = chord length
    Chordal,
    /// Equal knot spacing
    Uniform,
}

impl CurveType {
    /// Exponent applied to the squared chord length between neighbours
    const fn knot_power(self) -> f32 {
        match self {
            CurveType::Centripetal => 0.25,
            CurveType::Chordal => 0.5,
            CurveType::Uniform => 0.0,
        }
    }
}

/// Options used when fitting a curve through control points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveOptions {
    pub curve_type: CurveType,
    /// Number of samples in the arc-length lookup table
    pub arc_length_divisions: usize,
}

impl Default for CurveOptions {
    fn default() -> Self {
        Self {
            curve_type: CurveType::default(),
            arc_length_divisions: 200,
        }
    }
}

/// Cubic Hermite polynomial for one span between two control points
#[derive(Debug, Clone, Copy)]
struct CubicSegment {
    c0: Vec3,
    c1: Vec3,
    c2: Vec3,
    c3: Vec3,
}

impl CubicSegment {
    fn hermite(p0: Vec3, p1: Vec3, t0: Vec3, t1: Vec3) -> Self {
        Self {
            c0: p0,
            c1: t0,
            c2: -3.0 * p0 + 3.0 * p1 - 2.0 * t0 - t1,
            c3: 2.0 * p0 - 2.0 * p1 + t0 + t1,
        }
    }

    /// Catmull-Rom span from x1 to x2 with non-uniform knot spacing
    fn catmull_rom(x: [Vec3; 4], dt0: f32, dt1: f32, dt2: f32) -> Self {
        let [x0, x1, x2, x3] = x;
        let t1 = ((x1 - x0) / dt0 - (x2 - x0) / (dt0 + dt1) + (x2 - x1) / dt1) * dt1;
        let t2 = ((x2 - x1) / dt1 - (x3 - x1) / (dt1 + dt2) + (x3 - x2) / dt2) * dt1;
        Self::hermite(x1, x2, t1, t2)
    }

    fn point(&self, w: f32) -> Vec3 {
        self.c0 + w * (self.c1 + w * (self.c2 + w * self.c3))
    }

    fn derivative(&self, w: f32) -> Vec3 {
        self.c1 + w * (2.0 * self.c2 + 3.0 * w * self.c3)
    }
}

/// Cumulative chord lengths sampled at evenly spaced spline parameters
#[derive(Debug, Clone)]
struct ArcLengthTable {
    cumulative: Vec<f32>,
}

impl ArcLengthTable {
    fn new(divisions: usize, sample: impl Fn(f32) -> Vec3) -> Self {
        let divisions = divisions.max(1);
        let mut cumulative = Vec::with_capacity(divisions + 1);
        let mut total = 0.0;
        let mut prev = sample(0.0);
        cumulative.push(0.0);

        for i in 1..=divisions {
            let point = sample(i as f32 / divisions as f32);
            total += point.distance(prev);
            cumulative.push(total);
            prev = point;
        }

        Self { cumulative }
    }

    fn total(&self) -> f32 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Maps a fraction of total length to the spline parameter reaching it
    fn param_for_fraction(&self, u: f32) -> f32 {
        if u <= 0.0 {
            return 0.0;
        }
        if u >= 1.0 {
            return 1.0;
        }

        let target = u * self.total();
        let idx = self.cumulative.partition_point(|&len| len < target);
        if idx == 0 {
            return 0.0;
        }
        if idx >= self.cumulative.len() {
            return 1.0;
        }

        let prev = self.cumulative[idx - 1];
        let next = self.cumulative[idx];
        let span = next - prev;
        let alpha = if span <= 0.0 { 0.0 } else { (target - prev) / span };
        let divisions = (self.cumulative.len() - 1) as f32;
        ((idx - 1) as f32 + alpha) / divisions
    }
}

/// Continuous path through an ordered set of control points.
///
/// Two parameterizations are exposed:
/// - [`CurvePath::point`] takes the raw spline parameter, where each span
///   between distinct consecutive control points covers an equal share of `[0, 1]`.
/// - [`CurvePath::point_at`] takes a fraction of arc length, so equal steps in
///   `u` cover equal distances. Navigation uses this one.
#[derive(Debug, Clone)]
pub struct CurvePath {
    points: Vec<Vec3>,
    /// Control points with consecutive repeats merged; the spans are fitted through these
    knots: Vec<Vec3>,
    segments: Vec<CubicSegment>,
    lengths: ArcLengthTable,
    curve_type: CurveType,
}

impl CurvePath {
    /// Fits a curve through `points` in order.
    ///
    /// Repeated consecutive points are merged first: a span from a point back to
    /// itself would loop the path backwards. Fails if a coordinate is not finite
    /// or fewer than two distinct points are given.
    pub fn from_points(points: Vec<Vec3>, options: &CurveOptions) -> Result<Self, CurveLoadError> {
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(CurveLoadError::Format(format!(
                "control point {} has a non-finite coordinate",
                index
            )));
        }

        let knots = merge_repeats(&points);
        if knots.len() < 2 {
            return Err(CurveLoadError::InsufficientPoints { found: knots.len() });
        }
        if knots.len() < points.len() {
            log::debug!(
                "Merged {} repeated control points",
                points.len() - knots.len()
            );
        }

        let segments = build_segments(&knots, options.curve_type);
        let lengths = ArcLengthTable::new(options.arc_length_divisions, |t| {
            sample_segments(&knots, &segments, t)
        });

        Ok(Self {
            points,
            knots,
            segments,
            lengths,
            curve_type: options.curve_type,
        })
    }

    pub fn control_points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn curve_type(&self) -> CurveType {
        self.curve_type
    }

    /// Approximate total length of the path
    pub fn length(&self) -> f32 {
        self.lengths.total()
    }

    /// Point at raw spline parameter `t` (clamped to `[0, 1]`)
    pub fn point(&self, t: f32) -> Vec3 {
        sample_segments(&self.knots, &self.segments, t)
    }

    /// Point at fraction `u` of the total arc length (clamped to `[0, 1]`)
    pub fn point_at(&self, u: f32) -> Vec3 {
        self.point(self.lengths.param_for_fraction(sanitize(u)))
    }

    /// Unit direction of travel at fraction `u` of the arc length
    pub fn tangent_at(&self, u: f32) -> Vec3 {
        let t = self.lengths.param_for_fraction(sanitize(u));
        let (index, w) = locate(self.segments.len(), t);
        self.segments[index]
            .derivative(w)
            .try_normalize()
            .unwrap_or_else(|| self.chord_direction(index))
    }

    /// Evenly spaced (by arc length) samples, both ends included
    pub fn sample_polyline(&self, divisions: usize) -> Vec<Vec3> {
        let divisions = divisions.max(1);
        (0..=divisions)
            .map(|i| self.point_at(i as f32 / divisions as f32))
            .collect()
    }

    /// Nearest non-degenerate chord direction, searching forward then backward from `index`
    fn chord_direction(&self, index: usize) -> Vec3 {
        let chord = |i: usize| (self.knots[i + 1] - self.knots[i]).try_normalize();
        (index..self.segments.len())
            .chain((0..index).rev())
            .find_map(chord)
            .unwrap_or(Vec3::NEG_Z)
    }
}

fn sanitize(u: f32) -> f32 {
    if u.is_nan() {
        0.0
    } else {
        u.clamp(0.0, 1.0)
    }
}

/// Drops points within `DUPLICATE_DISTANCE` of the previously kept one.
/// The final kept point is always the last input point so the path ends exactly there.
fn merge_repeats(points: &[Vec3]) -> Vec<Vec3> {
    let mut knots: Vec<Vec3> = Vec::with_capacity(points.len());
    for &point in points {
        match knots.last() {
            Some(last) if last.distance(point) <= DUPLICATE_DISTANCE => {}
            _ => knots.push(point),
        }
    }
    if let (Some(kept), Some(&end)) = (knots.last_mut(), points.last()) {
        *kept = end;
    }
    knots
}

/// Segment index and local weight for raw parameter `t`
fn locate(segment_count: usize, t: f32) -> (usize, f32) {
    let scaled = sanitize(t) * segment_count as f32;
    let index = (scaled.floor() as usize).min(segment_count - 1);
    (index, scaled - index as f32)
}

fn sample_segments(points: &[Vec3], segments: &[CubicSegment], t: f32) -> Vec3 {
    let (index, w) = locate(segments.len(), t);
    if w <= 0.0 {
        points[index]
    } else if w >= 1.0 {
        points[index + 1]
    } else {
        segments[index].point(w)
    }
}

fn build_segments(points: &[Vec3], curve_type: CurveType) -> Vec<CubicSegment> {
    let n = points.len();
    let power = curve_type.knot_power();

    (0..n - 1)
        .map(|i| {
            // Open curve: reflect the neighbour across the end point
            let x0 = if i > 0 {
                points[i - 1]
            } else {
                2.0 * points[0] - points[1]
            };
            let x1 = points[i];
            let x2 = points[i + 1];
            let x3 = if i + 2 < n {
                points[i + 2]
            } else {
                2.0 * points[n - 1] - points[n - 2]
            };

            let mut dt0 = x0.distance_squared(x1).powf(power);
            let mut dt1 = x1.distance_squared(x2).powf(power);
            let mut dt2 = x2.distance_squared(x3).powf(power);

            if dt1 < KNOT_EPSILON {
                dt1 = 1.0;
            }
            if dt0 < KNOT_EPSILON {
                dt0 = dt1;
            }
            if dt2 < KNOT_EPSILON {
                dt2 = dt1;
            }

            CubicSegment::catmull_rom([x0, x1, x2, x3], dt0, dt1, dt2)
        })
        .collect()
}
