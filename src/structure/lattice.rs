use serde::Serialize;

use super::StructureError;

/// Unit cell of a periodic structure.
///
/// The matrix rows are the lattice vectors in Cartesian Å. The orientation
/// follows the common materials-science convention: `c` along z, `a` in the
/// xz plane.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lattice {
    /// Lattice vectors as matrix rows (Å)
    pub matrix: [[f64; 3]; 3],
    /// Periodic boundary conditions along a, b, c
    pub pbc: [bool; 3],
    /// Length of a (Å)
    pub a: f64,
    /// Length of b (Å)
    pub b: f64,
    /// Length of c (Å)
    pub c: f64,
    /// Angle between b and c (°)
    pub alpha: f64,
    /// Angle between a and c (°)
    pub beta: f64,
    /// Angle between a and b (°)
    pub gamma: f64,
    /// Cell volume (Å³)
    pub volume: f64,
}

impl Lattice {
    /// Build a lattice from its six parameters (lengths in Å, angles in degrees).
    pub fn from_parameters(
        a: f64,
        b: f64,
        c: f64,
        alpha: f64,
        beta: f64,
        gamma: f64,
    ) -> Result<Self, StructureError> {
        for (name, length) in [("a", a), ("b", b), ("c", c)] {
            if !length.is_finite() || length <= 0.0 {
                return Err(StructureError::InvalidLattice(format!(
                    "cell length {name} must be positive, got {length}"
                )));
            }
        }
        for (name, angle) in [("alpha", alpha), ("beta", beta), ("gamma", gamma)] {
            if !angle.is_finite() || angle <= 0.0 || angle >= 180.0 {
                return Err(StructureError::InvalidLattice(format!(
                    "cell angle {name} must lie in (0, 180), got {angle}"
                )));
            }
        }

        let (cos_a, cos_b, cos_g) = (
            alpha.to_radians().cos(),
            beta.to_radians().cos(),
            gamma.to_radians().cos(),
        );
        let (sin_a, sin_b) = (alpha.to_radians().sin(), beta.to_radians().sin());

        let metric = 1.0 - cos_a * cos_a - cos_b * cos_b - cos_g * cos_g + 2.0 * cos_a * cos_b * cos_g;
        if metric <= 0.0 {
            return Err(StructureError::InvalidLattice(format!(
                "angles {alpha}/{beta}/{gamma} do not describe a cell"
            )));
        }
        let volume = a * b * c * metric.sqrt();

        let gamma_star = ((cos_a * cos_b - cos_g) / (sin_a * sin_b)).clamp(-1.0, 1.0).acos();
        let matrix = [
            [a * sin_b, 0.0, a * cos_b],
            [
                -b * sin_a * gamma_star.cos(),
                b * sin_a * gamma_star.sin(),
                b * cos_a,
            ],
            [0.0, 0.0, c],
        ];

        Ok(Self {
            matrix,
            pbc: [true; 3],
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
            volume,
        })
    }

    /// Convert fractional coordinates to Cartesian Å
    pub fn cartesian(&self, frac: [f64; 3]) -> [f64; 3] {
        let mut xyz = [0.0; 3];
        for (j, out) in xyz.iter_mut().enumerate() {
            *out = (0..3).map(|i| frac[i] * self.matrix[i][j]).sum();
        }
        xyz
    }
}
