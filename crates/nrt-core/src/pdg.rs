//! PDG particle-code helpers.

/// Nuclear (ion) PDG code for a nucleus with `z` protons and `a` nucleons,
/// per the standard 10-digit ion encoding `10LZZZAAAI`.
///
/// ```
/// assert_eq!(nrt_core::nuclear_pdg(6, 12), 1_000_060_120);
/// ```
pub fn nuclear_pdg(z: i32, a: i32) -> i32 {
    1_000_000_000 + z * 10_000 + a * 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carbon_12() {
        assert_eq!(nuclear_pdg(6, 12), 1_000_060_120);
    }

    #[test]
    fn free_proton() {
        assert_eq!(nuclear_pdg(1, 1), 1_000_010_010);
    }

    #[test]
    fn oxygen_16() {
        assert_eq!(nuclear_pdg(8, 16), 1_000_080_160);
    }
}
