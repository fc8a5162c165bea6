//! Interpolation table construction.
//!
//! Both the encoder and the decoder build their tables through [`build_palette`]. Every entry is
//! computed with integer arithmetic only, so any two implementations using these formulas agree
//! bit for bit.
//!
//! Code order follows the BC4 format: code 0 is endpoint A, code 1 is endpoint B and codes 2..8
//! hold the interpolants (and, in 6-level mode, the fixed `0` and `255`).

use crate::block::Bc4Mode;

/// Builds the 8-entry interpolation table for the given endpoints.
///
/// `A > B` selects the 8-level table, anything else the 6-level one.
///
/// # Examples
///
/// ```
/// use bc4_codec::palette::build_palette;
///
/// assert_eq!(build_palette(255, 0), [255, 0, 219, 182, 146, 109, 73, 36]);
/// assert_eq!(build_palette(0, 255), [0, 255, 51, 102, 153, 204, 0, 255]);
/// ```
#[inline]
pub fn build_palette(endpoint_a: u8, endpoint_b: u8) -> [u8; 8] {
    match Bc4Mode::from_endpoints(endpoint_a, endpoint_b) {
        Bc4Mode::EightLevel => build_eight_level_palette(endpoint_a, endpoint_b),
        Bc4Mode::SixLevel => build_six_level_palette(endpoint_a, endpoint_b),
    }
}

/// 8 levels: the endpoints plus 6 interpolants at 1/7 steps, rounded to nearest.
#[inline(always)]
#[allow(clippy::identity_op)]
pub fn build_eight_level_palette(endpoint_a: u8, endpoint_b: u8) -> [u8; 8] {
    let a = endpoint_a as u16;
    let b = endpoint_b as u16;
    [
        endpoint_a,                      // bit code 000
        endpoint_b,                      // bit code 001
        ((6 * a + 1 * b + 3) / 7) as u8, // bit code 010
        ((5 * a + 2 * b + 3) / 7) as u8, // bit code 011
        ((4 * a + 3 * b + 3) / 7) as u8, // bit code 100
        ((3 * a + 4 * b + 3) / 7) as u8, // bit code 101
        ((2 * a + 5 * b + 3) / 7) as u8, // bit code 110
        ((1 * a + 6 * b + 3) / 7) as u8, // bit code 111
    ]
}

/// 6 levels: the endpoints plus 4 interpolants at 1/5 steps, then the fixed `0` and `255`.
#[inline(always)]
#[allow(clippy::identity_op)]
pub fn build_six_level_palette(endpoint_a: u8, endpoint_b: u8) -> [u8; 8] {
    let a = endpoint_a as u16;
    let b = endpoint_b as u16;
    [
        endpoint_a,                      // bit code 000
        endpoint_b,                      // bit code 001
        ((4 * a + 1 * b + 2) / 5) as u8, // bit code 010
        ((3 * a + 2 * b + 2) / 5) as u8, // bit code 011
        ((2 * a + 3 * b + 2) / 5) as u8, // bit code 100
        ((1 * a + 4 * b + 2) / 5) as u8, // bit code 101
        0,                               // bit code 110
        255,                             // bit code 111
    ]
}

/// Index of the table entry closest to `value`. Ties resolve to the lowest index.
#[inline(always)]
pub fn nearest_index(palette: &[u8; 8], value: u8) -> (u8, u32) {
    let mut best_index = 0u8;
    let mut best_dist = u32::MAX;
    for (index, &level) in palette.iter().enumerate() {
        let dist = (value as i32 - level as i32).unsigned_abs();
        if dist < best_dist {
            best_dist = dist;
            best_index = index as u8;
        }
    }
    (best_index, best_dist)
}
