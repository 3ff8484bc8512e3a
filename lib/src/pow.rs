//! Compact ("bits") difficulty encoding.

use crate::U256;

/// Decodes a compact difficulty representation into the full target.
///
/// The low 23 bits are the mantissa, bit 23 the sign and the top byte the
/// base-256 exponent. Negative values have no meaning as a target and decode to
/// zero.
pub fn compact_to_target(bits: u32) -> U256 {
    let mantissa = bits & 0x007f_ffff;
    let negative = bits & 0x0080_0000 != 0;
    let exponent = bits >> 24;

    if negative || mantissa == 0 {
        return U256::zero();
    }

    if exponent <= 3 {
        U256::from(mantissa >> (8 * (3 - exponent)))
    } else {
        let shift = 8 * (exponent - 3) as usize;
        if shift >= 256 {
            return U256::MAX;
        }
        let target = U256::from(mantissa);
        // overflow past 256 bits saturates rather than wrapping
        if target.bits() + shift > 256 {
            return U256::MAX;
        }
        target << shift
    }
}
