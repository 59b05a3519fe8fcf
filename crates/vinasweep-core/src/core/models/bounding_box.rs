use nalgebra::{Point3, Vector3};

/// An axis-aligned box in Cartesian space, stored as its minimum and maximum corners.
///
/// The box is immutable once built. Lengths and the center are derived on demand
/// from the two corners, so there is no cached state that could go stale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    min: Point3<f64>,
    max: Point3<f64>,
}

impl BoundingBox {
    /// Builds a box from its corners, reordering per axis so that `min <= max` holds.
    pub fn new(a: Point3<f64>, b: Point3<f64>) -> Self {
        Self {
            min: a.inf(&b),
            max: a.sup(&b),
        }
    }

    /// Builds the box spanned by the per-axis extremes of three coordinate sequences.
    ///
    /// Returns `None` if any of the sequences is empty, since the extremes of an
    /// empty set are undefined.
    pub fn from_extremes(xs: &[f64], ys: &[f64], zs: &[f64]) -> Option<Self> {
        let (xmin, xmax) = extremes(xs)?;
        let (ymin, ymax) = extremes(ys)?;
        let (zmin, zmax) = extremes(zs)?;
        Some(Self {
            min: Point3::new(xmin, ymin, zmin),
            max: Point3::new(xmax, ymax, zmax),
        })
    }

    /// Builds a box of the given edge lengths centered on `center`.
    pub fn centered(center: Point3<f64>, size: Vector3<f64>) -> Self {
        let half = size / 2.0;
        Self::new(center - half, center + half)
    }

    /// The smallest box enclosing both `self` and `other`.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    pub fn min(&self) -> Point3<f64> {
        self.min
    }

    pub fn max(&self) -> Point3<f64> {
        self.max
    }

    /// Edge lengths along x, y and z.
    pub fn lengths(&self) -> Vector3<f64> {
        self.max - self.min
    }

    pub fn center(&self) -> Point3<f64> {
        self.min + self.lengths() / 2.0
    }

    /// Whether `point` lies inside the box or on its boundary.
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        (0..3).all(|axis| self.min[axis] <= point[axis] && point[axis] <= self.max[axis])
    }
}

fn extremes(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}
