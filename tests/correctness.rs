use tilebench::matrix::Matrix;
use tilebench::matrix::generate::{generate_pattern, generate_zeros};
use tilebench::{multiply_blocked, multiply_naive};

fn pattern(n: usize) -> Matrix<f64> {
    let mut m = Matrix::new(n);
    generate_pattern(&mut m);
    m
}

fn from_rows(n: usize, values: &[f64]) -> Matrix<f64> {
    assert_eq!(values.len(), n * n);
    let mut m = Matrix::new(n);
    for i in 0..n {
        for j in 0..n {
            m.set(i, j, values[i * n + j]);
        }
    }
    m
}

fn assert_matrices_equal(expected: &Matrix<f64>, actual: &Matrix<f64>, name: &str) {
    assert_eq!(expected.dim(), actual.dim(), "{}: dimension mismatch", name);
    let (e, a) = (expected.as_slice(), actual.as_slice());
    for idx in 0..e.len() {
        assert_eq!(
            e[idx], a[idx],
            "{}: mismatch at index {}: expected {}, got {}",
            name, idx, e[idx], a[idx]
        );
    }
}

// ============================================================
// Generators
// ============================================================

#[test]
fn test_pattern_values() {
    let m = pattern(5);
    for i in 0..5 {
        for j in 0..5 {
            assert_eq!(m.get(i, j), (i * j) as f64);
        }
    }
}

#[test]
fn test_pattern_is_deterministic() {
    for n in [1, 4, 17, 64] {
        let a = pattern(n);
        let b = pattern(n);
        let bits_a: Vec<u64> = a.as_slice().iter().map(|v| v.to_bits()).collect();
        let bits_b: Vec<u64> = b.as_slice().iter().map(|v| v.to_bits()).collect();
        assert_eq!(bits_a, bits_b, "pattern_{}", n);
    }
}

#[test]
fn test_zeros_clears_matrix() {
    let mut m = pattern(6);
    generate_zeros(&mut m);
    assert!(m.as_slice().iter().all(|&v| v == 0.0));
}

// ============================================================
// Small known products
// ============================================================

#[test]
fn test_2x2_multiply() {
    let y = from_rows(2, &[1.0, 2.0, 3.0, 4.0]);
    let z = from_rows(2, &[5.0, 6.0, 7.0, 8.0]);

    let mut x_naive = Matrix::new(2);
    let mut x_blocked = Matrix::new(2);

    multiply_naive(&mut x_naive, &y, &z);
    multiply_blocked(&mut x_blocked, &y, &z, 1);

    assert_eq!(x_naive.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    assert_matrices_equal(&x_naive, &x_blocked, "2x2");
}

#[test]
fn test_4x4_pattern_scenario() {
    let y = pattern(4);
    let z = pattern(4);

    let mut x_naive = Matrix::new(4);
    let mut x_blocked = Matrix::new(4);

    multiply_naive(&mut x_naive, &y, &z);
    multiply_blocked(&mut x_blocked, &y, &z, 2);

    // X[i, j] = i * j * (0 + 1 + 4 + 9)
    for i in 0..4 {
        for j in 0..4 {
            assert_eq!(x_naive.get(i, j), 14.0 * (i * j) as f64);
        }
    }
    assert_eq!(x_naive.max_element(), 126.0);
    assert_eq!(x_blocked.max_element(), 126.0);
    assert_matrices_equal(&x_naive, &x_blocked, "4x4_pattern");
}

#[test]
fn test_1x1_multiply() {
    let y = from_rows(1, &[3.0]);
    let z = from_rows(1, &[-2.5]);

    let mut x_naive = Matrix::new(1);
    let mut x_blocked = Matrix::new(1);

    multiply_naive(&mut x_naive, &y, &z);
    multiply_blocked(&mut x_blocked, &y, &z, 8);

    assert_eq!(x_naive.get(0, 0), -7.5);
    assert_eq!(x_blocked.get(0, 0), -7.5);
}

// ============================================================
// Tile boundary tests
// ============================================================

#[test]
fn test_blocked_matches_naive_across_sizes() {
    let test_sizes = [3, 4, 5, 7, 8, 9, 15, 16, 17, 31, 32, 33];
    let block_sizes = [1, 2, 3, 4, 8, 16];

    for size in test_sizes {
        let y = pattern(size);
        let z = pattern(size);

        let mut x_naive = Matrix::new(size);
        multiply_naive(&mut x_naive, &y, &z);

        for bs in block_sizes {
            let mut x_blocked = Matrix::new(size);
            multiply_blocked(&mut x_blocked, &y, &z, bs);

            assert_matrices_equal(&x_naive, &x_blocked, &format!("size_{}_block_{}", size, bs));
            assert_eq!(x_naive.max_element(), x_blocked.max_element());
        }
    }
}

#[test]
fn test_block_size_equal_to_n() {
    for size in [4, 9, 16] {
        let y = pattern(size);
        let z = pattern(size);

        let mut x_naive = Matrix::new(size);
        let mut x_blocked = Matrix::new(size);

        multiply_naive(&mut x_naive, &y, &z);
        multiply_blocked(&mut x_blocked, &y, &z, size);

        assert_matrices_equal(&x_naive, &x_blocked, &format!("single_tile_{}", size));
    }
}

#[test]
fn test_block_size_larger_than_n() {
    let y = pattern(5);
    let z = pattern(5);

    let mut x_naive = Matrix::new(5);
    let mut x_blocked = Matrix::new(5);

    multiply_naive(&mut x_naive, &y, &z);
    multiply_blocked(&mut x_blocked, &y, &z, 64);

    assert_matrices_equal(&x_naive, &x_blocked, "oversized_block");
}

#[test]
fn test_non_pattern_integer_inputs() {
    let size = 13;
    let y_values: Vec<f64> = (0..size * size).map(|i| (i % 10) as f64 - 4.0).collect();
    let z_values: Vec<f64> = (0..size * size).map(|i| (i % 7) as f64).collect();
    let y = from_rows(size, &y_values);
    let z = from_rows(size, &z_values);

    let mut x_naive = Matrix::new(size);
    let mut x_blocked = Matrix::new(size);

    multiply_naive(&mut x_naive, &y, &z);
    multiply_blocked(&mut x_blocked, &y, &z, 4);

    assert_matrices_equal(&x_naive, &x_blocked, "mixed_sign_13");
}

#[test]
fn test_f32_pattern_matches() {
    let mut y = Matrix::<f32>::new(8);
    generate_pattern(&mut y);

    let mut x_naive = Matrix::new(8);
    let mut x_blocked = Matrix::new(8);

    multiply_naive(&mut x_naive, &y, &y);
    multiply_blocked(&mut x_blocked, &y, &y, 3);

    // 7 * 7 * (0 + 1 + ... + 49) = 49 * 140
    assert_eq!(x_naive.max_element(), 6860.0);
    assert_eq!(x_naive, x_blocked);
}

// ============================================================
// Overwrite vs accumulate
// ============================================================

#[test]
fn test_naive_overwrites() {
    let y = pattern(6);
    let z = pattern(6);

    let mut x_clean = Matrix::new(6);
    multiply_naive(&mut x_clean, &y, &z);

    let mut x_dirty = Matrix::new(6);
    for i in 0..6 {
        for j in 0..6 {
            x_dirty.set(i, j, 5.0);
        }
    }
    multiply_naive(&mut x_dirty, &y, &z);

    assert_matrices_equal(&x_clean, &x_dirty, "naive_overwrite");
}

#[test]
fn test_blocked_accumulates() {
    let size = 6;
    let y = pattern(size);
    let z = pattern(size);

    let mut x_naive = Matrix::new(size);
    multiply_naive(&mut x_naive, &y, &z);

    let mut x_blocked = Matrix::new(size);
    for i in 0..size {
        for j in 0..size {
            x_blocked.set(i, j, 5.0);
        }
    }
    multiply_blocked(&mut x_blocked, &y, &z, 4);

    for i in 0..size {
        for j in 0..size {
            assert_eq!(x_blocked.get(i, j), x_naive.get(i, j) + 5.0);
        }
    }
}

// ============================================================
// Precondition violations
// ============================================================

#[test]
#[should_panic(expected = "block size must be at least 1")]
fn test_blocked_rejects_zero_block() {
    let y = pattern(4);
    let mut x = Matrix::new(4);
    multiply_blocked(&mut x, &y, &y, 0);
}

#[test]
#[should_panic(expected = "Y: expected 4x4")]
fn test_naive_rejects_mismatched_dims() {
    let y = pattern(3);
    let z = pattern(4);
    let mut x = Matrix::new(4);
    multiply_naive(&mut x, &y, &z);
}

#[test]
#[should_panic(expected = "Z: expected 4x4")]
fn test_blocked_rejects_mismatched_dims() {
    let y = pattern(4);
    let z = pattern(5);
    let mut x = Matrix::new(4);
    multiply_blocked(&mut x, &y, &z, 2);
}
