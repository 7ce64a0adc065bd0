use super::{Element, Matrix};

/// Naive matrix multiplication using i-j-k loop order: X = Y * Z.
///
/// This is the textbook triple-loop implementation. It's slow because
/// the innermost loop reads Z with stride `n` (column-wise), causing
/// cache misses on every iteration.
///
/// Each output cell gets its own accumulator, summed with strictly
/// increasing `k`, and then *overwrites* `x[i, j]`.
///
/// # Panics
///
/// Panics if the three matrices don't share the same dimension.
pub fn multiply_naive<T: Element>(x: &mut Matrix<T>, y: &Matrix<T>, z: &Matrix<T>) {
    let n = x.dim();
    assert_eq!(y.dim(), n, "Y: expected {}x{}, got {}x{}", n, n, y.dim(), y.dim());
    assert_eq!(z.dim(), n, "Z: expected {}x{}, got {}x{}", n, n, z.dim(), z.dim());

    for i in 0..n {
        for j in 0..n {
            let mut result = T::zero();
            for k in 0..n {
                result = result + y[(i, k)] * z[(k, j)];
            }
            x[(i, j)] = result;
        }
    }
}
