//! Deterministic input generators.

use super::{Element, Matrix};

/// Fills `m` with `m[i, j] = i * j`.
///
/// No randomness, so two calls on equal-sized matrices give bit-identical
/// results and the naive and blocked runs start from the same inputs.
pub fn generate_pattern<T: Element>(m: &mut Matrix<T>) {
    let n = m.dim();
    for i in 0..n {
        for j in 0..n {
            m.set(i, j, T::from_index_product(i * j));
        }
    }
}

/// Sets every cell of `m` to zero.
pub fn generate_zeros<T: Element>(m: &mut Matrix<T>) {
    m.as_mut_slice().fill(T::zero());
}
