//! Tiled j/k multiply for square matrices.

use crate::matrix::{Element, Matrix};

/// Cache-blocked matrix multiplication: X += Y * Z.
///
/// Loop nest, outermost first: tile over j, tile over k, full range of i,
/// j within the tile, k within the tile. Tiles are clamped at the matrix
/// edge when N isn't a multiple of `block_size`.
///
/// Each (i, j) cell receives one partial sum per k tile, *added* to what
/// is already there, so `x` must be zeroed first. The summation order
/// differs from [`multiply_naive`](crate::matrix::naive_ijk::multiply_naive):
/// results agree bit-for-bit only when every partial sum is exact, as with
/// the small-integer pattern inputs.
///
/// `block_size == n` gives a single tile; `block_size == 1` adds one
/// product at a time.
///
/// # Panics
///
/// Panics if `block_size` is zero or the three matrices don't share the
/// same dimension.
pub fn multiply_blocked<T: Element>(
    x: &mut Matrix<T>,
    y: &Matrix<T>,
    z: &Matrix<T>,
    block_size: usize,
) {
    let n = x.dim();
    assert!(block_size >= 1, "block size must be at least 1");
    assert_eq!(y.dim(), n, "Y: expected {}x{}, got {}x{}", n, n, y.dim(), y.dim());
    assert_eq!(z.dim(), n, "Z: expected {}x{}, got {}x{}", n, n, z.dim(), z.dim());

    for jj in (0..n).step_by(block_size) {
        let j_end = (jj + block_size).min(n);

        for kk in (0..n).step_by(block_size) {
            let k_end = (kk + block_size).min(n);

            for i in 0..n {
                for j in jj..j_end {
                    let mut partial = T::zero();
                    for k in kk..k_end {
                        partial = partial + y[(i, k)] * z[(k, j)];
                    }
                    x[(i, j)] = x[(i, j)] + partial;
                }
            }
        }
    }
}
