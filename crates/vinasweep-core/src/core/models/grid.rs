use super::bounding_box::BoundingBox;
use nalgebra::{Point3, Vector3};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum GridError {
    #[error("Box size must be finite and strictly positive on every axis (got {x}, {y}, {z})")]
    InvalidBoxSize { x: f64, y: f64, z: f64 },
}

/// One search box of the sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    /// Position in the x-outer, y-middle, z-inner enumeration; the job naming key.
    pub index: usize,
    /// Per-axis grid point indices `(i, j, k)`.
    pub ijk: (usize, usize, usize),
    pub center: Point3<f64>,
    pub bbox: BoundingBox,
}

/// Tiles a system box with cells of a fixed size that overlap their neighbours by
/// roughly half their width.
///
/// Along each axis the planner places `ceil(length / (size / 2))` evenly spaced
/// grid points from the axis minimum to the axis maximum, both inclusive, and
/// centers one cell on every point of the Cartesian product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPlanner {
    box_size: Vector3<f64>,
}

impl GridPlanner {
    pub fn new(box_size: Vector3<f64>) -> Result<Self, GridError> {
        if box_size.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err(GridError::InvalidBoxSize {
                x: box_size.x,
                y: box_size.y,
                z: box_size.z,
            });
        }
        Ok(Self { box_size })
    }

    pub fn box_size(&self) -> Vector3<f64> {
        self.box_size
    }

    /// Grid point coordinates along one axis (0 = x, 1 = y, 2 = z).
    pub fn axis_points(&self, system: &BoundingBox, axis: usize) -> Vec<f64> {
        let lo = system.min()[axis];
        let hi = system.max()[axis];
        let stride = self.box_size[axis] / 2.0;
        let count = ((hi - lo) / stride).ceil().max(1.0) as usize;
        linspace(lo, hi, count)
    }

    /// Enumerates every cell covering `system`, in flat-index order.
    pub fn plan(&self, system: &BoundingBox) -> Vec<GridCell> {
        let xs = self.axis_points(system, 0);
        let ys = self.axis_points(system, 1);
        let zs = self.axis_points(system, 2);

        let mut cells = Vec::with_capacity(xs.len() * ys.len() * zs.len());
        for (i, &x) in xs.iter().enumerate() {
            for (j, &y) in ys.iter().enumerate() {
                for (k, &z) in zs.iter().enumerate() {
                    let center = Point3::new(x, y, z);
                    cells.push(GridCell {
                        index: cells.len(),
                        ijk: (i, j, k),
                        center,
                        bbox: BoundingBox::centered(center, self.box_size),
                    });
                }
            }
        }
        cells
    }
}

/// `count` evenly spaced values from `start` to `end` inclusive. A single value
/// collapses to `start`.
fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn system(min: [f64; 3], max: [f64; 3]) -> BoundingBox {
        BoundingBox::new(Point3::from(min), Point3::from(max))
    }

    fn planner(size: f64) -> GridPlanner {
        GridPlanner::new(Vector3::new(size, size, size)).unwrap()
    }

    #[test]
    fn rejects_non_positive_or_non_finite_box_size() {
        assert!(GridPlanner::new(Vector3::new(10.0, 0.0, 10.0)).is_err());
        assert!(GridPlanner::new(Vector3::new(-1.0, 10.0, 10.0)).is_err());
        assert!(GridPlanner::new(Vector3::new(10.0, 10.0, f64::NAN)).is_err());
        assert!(GridPlanner::new(Vector3::new(10.0, 10.0, f64::INFINITY)).is_err());
    }

    #[test]
    fn receptor_ligand_scenario_places_four_points_along_x() {
        let sys = system([0.0, 0.0, 0.0], [20.0, 10.0, 10.0]);
        let xs = planner(10.0).axis_points(&sys, 0);

        let expected = [0.0, 20.0 / 3.0, 40.0 / 3.0, 20.0];
        assert_eq!(xs.len(), 4);
        for (got, want) in xs.iter().zip(expected) {
            assert!((got - want).abs() < EPS, "{got} != {want}");
        }

        let cells = planner(10.0).plan(&sys);
        assert!(cells.iter().all(|c| (c.bbox.lengths().x - 10.0).abs() < EPS));
    }

    #[test]
    fn zero_length_axis_yields_a_single_point() {
        let sys = system([1.5, 0.0, 0.0], [1.5, 10.0, 10.0]);
        assert_eq!(planner(4.0).axis_points(&sys, 0), vec![1.5]);
    }

    #[test]
    fn axis_shorter_than_stride_yields_single_point_at_min() {
        let sys = system([0.0, 0.0, 0.0], [2.0, 2.0, 2.0]);
        assert_eq!(planner(10.0).axis_points(&sys, 1), vec![0.0]);
    }

    #[test]
    fn enumeration_is_x_outer_y_middle_z_inner() {
        let sys = system([0.0, 0.0, 0.0], [10.0, 10.0, 10.0]);
        let cells = planner(10.0).plan(&sys);
        assert_eq!(cells.len(), 8);

        let order: Vec<_> = cells.iter().map(|c| c.ijk).collect();
        assert_eq!(
            order,
            vec![
                (0, 0, 0),
                (0, 0, 1),
                (0, 1, 0),
                (0, 1, 1),
                (1, 0, 0),
                (1, 0, 1),
                (1, 1, 0),
                (1, 1, 1),
            ]
        );
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(cell.index, i);
        }
        assert_eq!(cells[1].center, Point3::new(0.0, 0.0, 10.0));
        assert_eq!(cells[4].center, Point3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn planning_twice_is_element_wise_identical() {
        let sys = system([-12.3, 4.5, 0.1], [31.7, 19.9, 27.4]);
        let p = GridPlanner::new(Vector3::new(12.0, 8.0, 10.0)).unwrap();
        assert_eq!(p.plan(&sys), p.plan(&sys));
    }

    #[test]
    fn cells_cover_every_sampled_point_of_the_system_box() {
        let sys = system([-7.0, 3.0, 0.0], [23.0, 11.5, 41.0]);
        let p = GridPlanner::new(Vector3::new(10.0, 6.0, 12.0)).unwrap();
        let cells = p.plan(&sys);
        let lengths = sys.lengths();

        let steps = 13;
        for a in 0..=steps {
            for b in 0..=steps {
                for c in 0..=steps {
                    let t = Vector3::new(a as f64, b as f64, c as f64) / steps as f64;
                    let point = sys.min() + lengths.component_mul(&t);
                    assert!(
                        cells.iter().any(|cell| cell.bbox.contains(&point)),
                        "point {point:?} is not covered"
                    );
                }
            }
        }
    }

    #[test]
    fn grid_spans_axis_extremes_inclusively() {
        let sys = system([2.0, -4.0, 1.0], [17.0, 9.0, 30.0]);
        let p = planner(6.0);
        for axis in 0..3 {
            let pts = p.axis_points(&sys, axis);
            assert_eq!(pts.first().copied(), Some(sys.min()[axis]));
            assert_eq!(pts.last().copied(), Some(sys.max()[axis]));
            assert!(pts.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
