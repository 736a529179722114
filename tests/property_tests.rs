//! Property-based tests using proptest.
//!
//! These tests verify invariants and algebraic properties of the matrix
//! type through its public API.

use matriz::prelude::*;
use proptest::prelude::*;

// Strategy for generating small f32 matrices
fn matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<f32>> {
    proptest::collection::vec(-100.0f32..100.0, rows * cols).prop_map(move |data| {
        Matrix::from_vec(rows, cols, data).expect("Test data should be valid")
    })
}

// Strategy for generating small integer matrices (exact arithmetic)
fn int_matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<i64>> {
    proptest::collection::vec(-100i64..100, rows * cols).prop_map(move |data| {
        Matrix::from_vec(rows, cols, data).expect("Test data should be valid")
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn add_is_commutative(a in matrix_strategy(3, 4), b in matrix_strategy(3, 4)) {
        let ab = a.add(&b).expect("same shape");
        let ba = b.add(&a).expect("same shape");
        for i in 0..3 {
            for j in 0..4 {
                prop_assert!((ab.get(i, j) - ba.get(i, j)).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn add_is_associative(
        a in int_matrix_strategy(3, 3),
        b in int_matrix_strategy(3, 3),
        c in int_matrix_strategy(3, 3),
    ) {
        let left = a.add(&b).expect("same shape").add(&c).expect("same shape");
        let right = a.add(&b.add(&c).expect("same shape")).expect("same shape");
        prop_assert_eq!(left, right);
    }

    #[test]
    fn add_assign_matches_add(a in int_matrix_strategy(2, 5), b in int_matrix_strategy(2, 5)) {
        let sum = a.add(&b).expect("same shape");
        let mut compound = a.clone();
        compound.add_assign(&b).expect("same shape");
        prop_assert_eq!(compound, sum);
    }

    #[test]
    fn matmul_distributes_over_add(
        a in int_matrix_strategy(2, 3),
        b in int_matrix_strategy(3, 2),
        c in int_matrix_strategy(3, 2),
    ) {
        // A*(B+C) = A*B + A*C
        let left = a.matmul(&b.add(&c).expect("same shape")).expect("compatible");
        let right = a.matmul(&b).expect("compatible")
            .add(&a.matmul(&c).expect("compatible"))
            .expect("same shape");
        prop_assert_eq!(left, right);
    }

    #[test]
    fn matmul_shape_is_m_by_n(a in int_matrix_strategy(2, 4), b in int_matrix_strategy(4, 3)) {
        let product = a.matmul(&b).expect("compatible");
        prop_assert_eq!(product.shape(), (2, 3));
    }

    #[test]
    fn clone_is_independent(a in int_matrix_strategy(3, 3)) {
        let original = a.get(1, 1);
        let mut b = a.clone();
        b.set(1, 1, original + 1);
        prop_assert_eq!(a.get(1, 1), original);
        prop_assert_eq!(b.get(1, 1), original + 1);
    }

    #[test]
    fn fill_overwrites_every_element(mut a in int_matrix_strategy(4, 2), v in -100i64..100) {
        a.fill(v);
        prop_assert!(a.as_slice().iter().all(|&x| x == v));
        prop_assert_eq!(a.shape(), (4, 2));
    }

    #[test]
    fn take_leaves_source_empty(mut a in int_matrix_strategy(3, 2)) {
        let original = a.clone();
        let taken = a.take();
        prop_assert_eq!(a.shape(), (0, 0));
        prop_assert!(a.is_empty());
        prop_assert_eq!(taken, original);
    }

    #[test]
    fn transpose_is_involutive(a in int_matrix_strategy(3, 5)) {
        prop_assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn equality_is_reflexive(a in int_matrix_strategy(2, 2)) {
        prop_assert_eq!(a.clone(), a);
    }
}

#[test]
fn mismatched_shapes_error_mentions_both_shapes() {
    let a = Matrix::<i32>::zeros(2, 2);
    let b = Matrix::<i32>::zeros(3, 2);
    let err = a.add(&b).expect_err("2x2 + 3x2 must fail");
    assert!(matches!(err, MatrizError::DimensionMismatch { .. }));
    let msg = err.to_string();
    assert!(msg.contains("2x2"));
    assert!(msg.contains("3x2"));
}
