//! Four-vector storage and component index constants.
//!
//! Momentum and position four-vectors share the `[f64; 4]` layout used by the
//! RooTracker `StdHepP4`/`StdHepX4` branches.

/// A (px, py, pz, E) or (x, y, z, t) four-vector.
pub type FourVector = [f64; 4];

/// px component index.
pub const IDX_PX: usize = 0;
/// py component index.
pub const IDX_PY: usize = 1;
/// pz component index.
pub const IDX_PZ: usize = 2;
/// Energy component index.
pub const IDX_E: usize = 3;

/// x component index.
pub const IDX_X: usize = 0;
/// y component index.
pub const IDX_Y: usize = 1;
/// z component index.
pub const IDX_Z: usize = 2;
/// Time component index.
pub const IDX_T: usize = 3;

/// Multiply every component by `factor`.
///
/// A unit change only (MeV → GeV), never a physical transform.
pub fn scaled(p4: &FourVector, factor: f64) -> FourVector {
    [p4[0] * factor, p4[1] * factor, p4[2] * factor, p4[3] * factor]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_applies_to_all_components() {
        let p4 = [100.0, -200.0, 300.0, 1000.0];
        assert_eq!(scaled(&p4, 1.0e-3), [0.1, -0.2, 0.3, 1.0]);
    }

    #[test]
    fn unit_scale_is_identity() {
        let p4 = [1.5, 2.5, 3.5, 4.5];
        assert_eq!(scaled(&p4, 1.0), p4);
    }
}
