use nalgebra::{Matrix3, Point3, Vector3};

/// The periodic simulation cell, described by three edge lengths and three
/// angles (the crystallographic convention, lengths in angstroms and angles
/// in degrees).
///
/// The cell matrix and its inverse are computed once at construction so that
/// per-frame distance work is pure matrix arithmetic. All distances in this
/// library are minimum-image distances under this cell.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodicBox {
    lengths: Vector3<f64>,
    angles: Vector3<f64>,
    cell: Matrix3<f64>,
    cell_inv: Matrix3<f64>,
}

impl PeriodicBox {
    /// Creates a cell from lengths `[a, b, c]` and angles `[alpha, beta,
    /// gamma]` in degrees.
    ///
    /// # Return
    ///
    /// Returns `None` if any length is non-positive, any angle is outside
    /// the open interval (0, 180), or the resulting cell is degenerate
    /// (non-invertible).
    pub fn new(lengths: [f64; 3], angles: [f64; 3]) -> Option<Self> {
        if lengths.iter().any(|&l| !(l > 0.0) || !l.is_finite()) {
            return None;
        }
        if angles.iter().any(|&a| !(a > 0.0 && a < 180.0)) {
            return None;
        }

        let [a, b, c] = lengths;
        let [alpha, beta, gamma] = angles;

        // Right angles are handled exactly so rectangular cells carry no
        // trigonometric noise into the cell matrix.
        let cos = |angle: f64| {
            if angle == 90.0 {
                0.0
            } else {
                angle.to_radians().cos()
            }
        };
        let cos_alpha = cos(alpha);
        let cos_beta = cos(beta);
        let cos_gamma = cos(gamma);
        let sin_gamma = if gamma == 90.0 {
            1.0
        } else {
            gamma.to_radians().sin()
        };

        let bx = b * cos_gamma;
        let by = b * sin_gamma;
        let cx = c * cos_beta;
        let cy = c * (cos_alpha - cos_beta * cos_gamma) / sin_gamma;
        let cz_sq = c * c - cx * cx - cy * cy;
        if cz_sq <= 0.0 {
            return None;
        }
        let cz = cz_sq.sqrt();

        let cell = Matrix3::new(
            a, bx, cx, //
            0.0, by, cy, //
            0.0, 0.0, cz,
        );
        let cell_inv = cell.try_inverse()?;

        Some(Self {
            lengths: Vector3::new(a, b, c),
            angles: Vector3::new(angles[0], angles[1], angles[2]),
            cell,
            cell_inv,
        })
    }

    /// Creates a rectangular cell with all angles at 90 degrees.
    pub fn orthorhombic(lengths: [f64; 3]) -> Option<Self> {
        Self::new(lengths, [90.0, 90.0, 90.0])
    }

    /// The edge lengths `[a, b, c]` in angstroms.
    pub fn lengths(&self) -> [f64; 3] {
        self.lengths.into()
    }

    /// The cell angles `[alpha, beta, gamma]` in degrees.
    pub fn angles(&self) -> [f64; 3] {
        self.angles.into()
    }

    /// Converts a Cartesian point into fractional cell coordinates.
    pub fn to_fractional(&self, point: &Point3<f64>) -> Vector3<f64> {
        self.cell_inv * point.coords
    }

    /// Converts fractional cell coordinates back into a Cartesian point.
    pub fn to_cartesian(&self, fractional: &Vector3<f64>) -> Point3<f64> {
        Point3::from(self.cell * fractional)
    }

    /// Fractional coordinates wrapped into the primary image, each component
    /// in `[0, 1)`.
    pub fn wrapped_fractional(&self, point: &Point3<f64>) -> Vector3<f64> {
        self.to_fractional(point).map(|x| x - x.floor())
    }

    /// The displacement from `a` to `b` under the minimum-image convention.
    pub fn min_image_vector(&self, a: &Point3<f64>, b: &Point3<f64>) -> Vector3<f64> {
        let fractional = (self.cell_inv * (b - a)).map(|x| x - x.round());
        self.cell * fractional
    }

    /// The minimum-image distance between `a` and `b`.
    pub fn distance(&self, a: &Point3<f64>, b: &Point3<f64>) -> f64 {
        self.min_image_vector(a, b).norm()
    }

    /// The perpendicular widths of the cell along each axis.
    ///
    /// For a rectangular cell these are just the edge lengths; for a skewed
    /// cell they bound how far apart two points can be while still sharing a
    /// periodic slab, which is what sizes the search grid.
    pub fn perpendicular_widths(&self) -> [f64; 3] {
        let a: Vector3<f64> = self.cell.column(0).into_owned();
        let b: Vector3<f64> = self.cell.column(1).into_owned();
        let c: Vector3<f64> = self.cell.column(2).into_owned();
        let volume = self.cell.determinant().abs();
        [
            volume / b.cross(&c).norm(),
            volume / c.cross(&a).norm(),
            volume / a.cross(&b).norm(),
        ]
    }
}
