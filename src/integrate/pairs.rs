//! integrate::pairs — tanh-sinh abscissa/weight pairs per refinement level.
//!
//! Purpose
//! -------
//! Generate the abscissa-complement and weight arrays used by the quadrature
//! engine at a single refinement level `k`, following Bailey, Jeyabalan & Li
//! (2005, Experimental Mathematics 14(3), 317–329), Section 4.
//!
//! Key behaviors
//! -------------
//! - Level `k` uses the step `h = 2⁻ᵏ` and indices `j < M`,
//!   `M = ⌈6.115 · 2ᵏ⌉`. Level 0 uses every index; later levels use only odd
//!   indices, because the even ones coincide with abscissas of earlier levels.
//! - With `u₁ = (π/2)·cosh(jh)` and `u₂ = (π/2)·sinh(jh)`, the weight is
//!   `wⱼ = u₁ / cosh²(u₂)` and the stored complement is
//!   `1 − xⱼ = 1 / (exp(u₂)·cosh(u₂))`, which equals `1 − tanh(u₂)` without
//!   cancellation near 1.
//! - The level-0 midpoint (`j = 0`) is evaluated once per branch by the
//!   engine, so its weight is halved here.
//!
//! Invariants & assumptions
//! ------------------------
//! - `M` is an empirical bound for `f64`: every index below it has a finite,
//!   non-negligible weight or a complement that is still representable. It
//!   is not valid for extended precision.
//! - Near the end of each level `cosh(u₂)` overflows and the weight rounds to
//!   zero; such points are discarded later by the engine's `minweight` filter.
//! - Pairs are recomputed on every call; nothing is cached.

use ndarray::Array1;
use std::f64::consts::FRAC_PI_2;

/// Empirical growth constant of the index bound `M = ⌈6.115 · 2ᵏ⌉`.
const INDEX_BOUND_FACTOR: f64 = 6.115;

/// LevelPairs — abscissa complements and weights of one refinement level.
///
/// Fields
/// ------
/// - `h`: step size `2⁻ᵏ`.
/// - `xjc`: `1 − xⱼ` for each generated index, on the canonical `(−1, 1)`
///   scale.
/// - `wj`: weight for each generated index (unscaled by the interval).
#[derive(Debug, Clone, PartialEq)]
pub struct LevelPairs {
    pub h: f64,
    pub xjc: Array1<f64>,
    pub wj: Array1<f64>,
}

impl LevelPairs {
    /// Number of generated indices (per branch).
    pub(crate) fn len(&self) -> usize {
        self.xjc.len()
    }
}

/// Index bound `M = ⌈6.115 · 2ᵏ⌉` for level `k`.
#[inline]
pub fn index_bound(k: usize) -> usize {
    (INDEX_BOUND_FACTOR * (k as f64).exp2()).ceil() as usize
}

/// Compute the abscissa-complement/weight pairs of level `k` only.
///
/// Parameters
/// ----------
/// - `k`: `usize`
///   Refinement level; `h = 2⁻ᵏ`.
///
/// Returns
/// -------
/// [`LevelPairs`] with `⌈M⌉` entries for `k = 0` and `⌊M / 2⌋` entries
/// (odd indices) otherwise.
///
/// Panics
/// ------
/// - Never panics.
///
/// Examples
/// --------
/// ```rust
/// use rust_quadrature::integrate::pairs::compute_pairs;
///
/// let level0 = compute_pairs(0);
/// assert_eq!(level0.xjc.len(), 7);
/// assert_eq!(level0.xjc[0], 1.0); // midpoint: x = 0
/// assert_eq!(compute_pairs(1).wj.len(), 6);
/// ```
pub fn compute_pairs(k: usize) -> LevelPairs {
    let h = (-(k as f64)).exp2();
    let bound = index_bound(k);

    let (start, stride) = if k == 0 { (0, 1) } else { (1, 2) };
    let indices: Vec<usize> = (start..bound).step_by(stride).collect();

    let mut xjc = Array1::<f64>::zeros(indices.len());
    let mut wj = Array1::<f64>::zeros(indices.len());
    for (slot, &j) in indices.iter().enumerate() {
        let jh = j as f64 * h;
        let u1 = FRAC_PI_2 * jh.cosh();
        let u2 = FRAC_PI_2 * jh.sinh();
        let cosh_u2 = u2.cosh();
        wj[slot] = u1 / (cosh_u2 * cosh_u2);
        xjc[slot] = 1.0 / (u2.exp() * cosh_u2);
    }

    if k == 0 {
        wj[0] /= 2.0;
    }

    LevelPairs { h, xjc, wj }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Index counts per level and the halved level-0 midpoint weight.
    // - Agreement of the complement formula with 1 − tanh(u₂) where the
    //   naive formula is still accurate.
    // - Nesting: level k+1 abscissas interleave with the union of levels
    //   0..=k.
    // - Graceful overflow at the tail of a level (zero weights, no NaN).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Check the number of generated indices for the first few levels.
    //
    // Given
    // -----
    // - Levels 0..=4 with bounds M = 7, 13, 25, 49, 98.
    //
    // Expect
    // ------
    // - Level 0 yields M entries; level k > 0 yields ⌊M / 2⌋ entries.
    fn compute_pairs_generates_expected_index_counts() {
        assert_eq!(index_bound(0), 7);
        assert_eq!(index_bound(1), 13);
        assert_eq!(index_bound(2), 25);
        assert_eq!(index_bound(3), 49);
        assert_eq!(index_bound(4), 98);

        assert_eq!(compute_pairs(0).len(), 7);
        assert_eq!(compute_pairs(1).len(), 6);
        assert_eq!(compute_pairs(2).len(), 12);
        assert_eq!(compute_pairs(3).len(), 24);
        assert_eq!(compute_pairs(4).len(), 49);

        for k in 0..6 {
            let pairs = compute_pairs(k);
            assert_eq!(pairs.xjc.len(), pairs.len());
            assert_eq!(pairs.wj.len(), pairs.len());
        }
    }

    #[test]
    // Purpose
    // -------
    // The level-0 midpoint is counted twice by the engine, so its weight
    // must be half of (π/2)·cosh(0)/cosh²(0) = π/2.
    //
    // Given
    // -----
    // - Level 0 pairs.
    //
    // Expect
    // ------
    // - h = 1, xjc[0] = 1 (x = 0), wj[0] = π/4.
    fn compute_pairs_halves_level_zero_midpoint_weight() {
        let pairs = compute_pairs(0);

        assert_eq!(pairs.h, 1.0);
        assert_eq!(pairs.xjc[0], 1.0);
        assert_relative_eq!(pairs.wj[0], std::f64::consts::FRAC_PI_4, max_relative = 1e-15);
    }

    #[test]
    // Purpose
    // -------
    // The complement representation matches 1 − tanh(u₂) while the
    // naive subtraction is still well conditioned.
    //
    // Given
    // -----
    // - Level 1 pairs (odd j, h = 1/2) for j h ≤ 1.5.
    //
    // Expect
    // ------
    // - xjc ≈ 1 − tanh((π/2)·sinh(j h)) to 1e-12 relative.
    fn compute_pairs_complement_matches_one_minus_tanh() {
        let pairs = compute_pairs(1);

        for (slot, j) in [1usize, 3].into_iter().enumerate() {
            let u2 = FRAC_PI_2 * (j as f64 * 0.5).sinh();
            assert_relative_eq!(pairs.xjc[slot], 1.0 - u2.tanh(), max_relative = 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Refinement is nested: level k+1 adds exactly the midpoints between
    // consecutive t-grid points of levels 0..=k.
    //
    // Given
    // -----
    // - The union of abscissa complements of levels 0..=2 and those of
    //   level 3.
    //
    // Expect
    // ------
    // - No level-3 complement coincides with an earlier one, and every
    //   level-3 complement at index j equals the one computed directly on
    //   the finer grid, i.e. the union is the full h = 1/8 grid.
    fn compute_pairs_levels_are_nested_refinements() {
        let coarse: Vec<f64> = (0..=2).flat_map(|k| compute_pairs(k).xjc.to_vec()).collect();
        let fine = compute_pairs(3);

        for &x in fine.xjc.iter().filter(|x| **x > 0.0) {
            assert!(!coarse.contains(&x), "level 3 repeated an earlier abscissa {x}");
        }

        // Odd index 2m+1 at level 3 sits at t = (2m+1)/8.
        for (slot, &x) in fine.xjc.iter().enumerate().take(10) {
            let t = (2 * slot + 1) as f64 / 8.0;
            let u2 = FRAC_PI_2 * t.sinh();
            assert_relative_eq!(x, 1.0 / (u2.exp() * u2.cosh()), max_relative = 1e-15);
        }

        // Even indices of level 3 are level-2 points.
        let level2 = compute_pairs(2);
        let u2 = FRAC_PI_2 * (2.0_f64 / 8.0).sinh();
        assert_relative_eq!(level2.xjc[0], 1.0 / (u2.exp() * u2.cosh()), max_relative = 1e-15);
    }

    #[test]
    // Purpose
    // -------
    // The tail of a level may overflow cosh(u₂); this must produce zero
    // weights rather than NaN.
    //
    // Given
    // -----
    // - Level 6 pairs (largest j h ≈ 6.1).
    //
    // Expect
    // ------
    // - Every weight is finite and non-negative; the last one is below
    //   1e-100 (and so would be filtered by the default `minweight`).
    fn compute_pairs_tail_weights_underflow_without_nan() {
        let pairs = compute_pairs(6);

        assert!(pairs.wj.iter().all(|w| w.is_finite() && *w >= 0.0));
        assert!(pairs.xjc.iter().all(|x| !x.is_nan() && *x >= 0.0));
        assert!(pairs.wj[pairs.len() - 1] <= 1e-100);
    }
}
