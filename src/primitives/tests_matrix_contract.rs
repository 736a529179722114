// =========================================================================
// FALSIFY-MX: Matrix primitives contract (matriz primitives)
//
// Each test states an algebraic law of the dense matrix type and tries to
// falsify it; failure messages name the violated law.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;

/// FALSIFY-MX-001: Addition is element-wise: (A+B)[i,j] = A[i,j] + B[i,j]
#[test]
fn falsify_mx_001_add_elementwise() {
    let a = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).expect("valid");
    let b = Matrix::from_vec(2, 3, vec![10, 20, 30, 40, 50, 60]).expect("valid");
    let sum = a.add(&b).expect("same shape");

    for i in 0..2 {
        for j in 0..3 {
            assert_eq!(
                sum.get(i, j),
                a.get(i, j) + b.get(i, j),
                "FALSIFIED MX-001: (A+B)[{i},{j}] != A[{i},{j}] + B[{i},{j}]"
            );
        }
    }
}

/// FALSIFY-MX-002: Shape-mismatched addition fails and mutates nothing
#[test]
fn falsify_mx_002_add_mismatch_rejected() {
    let mut a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).expect("valid");
    let b = Matrix::from_vec(2, 3, vec![0; 6]).expect("valid");

    assert!(
        a.add(&b).is_err(),
        "FALSIFIED MX-002: 2x2 + 2x3 did not fail"
    );
    assert!(
        a.add_assign(&b).is_err(),
        "FALSIFIED MX-002: 2x2 += 2x3 did not fail"
    );
    assert_eq!(
        a.as_slice(),
        &[1, 2, 3, 4],
        "FALSIFIED MX-002: failed addition mutated the receiver"
    );
}

/// FALSIFY-MX-003: Matmul shape: (m×k) * (k×n) = (m×n)
#[test]
fn falsify_mx_003_matmul_shape() {
    let a = Matrix::from_vec(2, 3, vec![1; 6]).expect("valid");
    let b = Matrix::from_vec(3, 4, vec![1; 12]).expect("valid");
    let c = a.matmul(&b).expect("compatible dims");

    assert_eq!(
        c.shape(),
        (2, 4),
        "FALSIFIED MX-003: (2x3)*(3x4) shape={:?}, expected (2,4)",
        c.shape()
    );
}

/// FALSIFY-MX-004: Identity matmul: A * I = A
#[test]
fn falsify_mx_004_identity_matmul() {
    let a = Matrix::from_vec(3, 3, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]).expect("valid");
    let eye = Matrix::eye(3);
    let result = a.matmul(&eye).expect("compatible dims");

    assert_eq!(result, a, "FALSIFIED MX-004: A*I != A");
}

/// FALSIFY-MX-005: Matmul is associative: (A*B)*C = A*(B*C)
#[test]
fn falsify_mx_005_matmul_associative() {
    let a = Matrix::from_vec(2, 3, vec![1_i64, -2, 3, 4, 0, -1]).expect("valid");
    let b = Matrix::from_vec(3, 2, vec![2_i64, 1, 0, -3, 5, 2]).expect("valid");
    let c = Matrix::from_vec(2, 2, vec![-1_i64, 4, 2, 3]).expect("valid");

    let left = a
        .matmul(&b)
        .expect("compatible dims")
        .matmul(&c)
        .expect("compatible dims");
    let right = a
        .matmul(&b.matmul(&c).expect("compatible dims"))
        .expect("compatible dims");

    assert_eq!(left, right, "FALSIFIED MX-005: (A*B)*C != A*(B*C)");
}

/// FALSIFY-MX-006: Equality is dimension-aware: same data, other shape => unequal
#[test]
fn falsify_mx_006_eq_dimension_aware() {
    let a = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).expect("valid");
    let b = Matrix::from_vec(3, 2, vec![1, 2, 3, 4, 5, 6]).expect("valid");

    assert_ne!(a, b, "FALSIFIED MX-006: 2x3 == 3x2 with shared data");
}

mod matrix_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    /// FALSIFY-MX-001-prop: Element-wise addition for random matrices
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_mx_001_prop_add_elementwise(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500i64,
        ) {
            let a_data: Vec<i64> = (0..rows * cols).map(|i| i as i64 + seed).collect();
            let b_data: Vec<i64> = (0..rows * cols).map(|i| 7 * i as i64 - seed).collect();
            let a = Matrix::from_vec(rows, cols, a_data).expect("valid");
            let b = Matrix::from_vec(rows, cols, b_data).expect("valid");
            let sum = a.add(&b).expect("same shape");

            for i in 0..rows {
                for j in 0..cols {
                    prop_assert_eq!(
                        sum.get(i, j),
                        a.get(i, j) + b.get(i, j),
                        "FALSIFIED MX-001-prop: (A+B)[{},{}] wrong", i, j
                    );
                }
            }
        }
    }

    /// FALSIFY-MX-005-prop: Associativity for random integer matrices
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn falsify_mx_005_prop_matmul_associative(
            m in 1..=4usize,
            k in 1..=4usize,
            n in 1..=4usize,
            p in 1..=4usize,
            seed in 0..500i64,
        ) {
            let cell = |len: usize, salt: i64| -> Vec<i64> {
                (0..len).map(|i| (i as i64 * 13 + seed + salt) % 10 - 5).collect()
            };
            let a = Matrix::from_vec(m, k, cell(m * k, 1)).expect("valid");
            let b = Matrix::from_vec(k, n, cell(k * n, 2)).expect("valid");
            let c = Matrix::from_vec(n, p, cell(n * p, 3)).expect("valid");

            let left = a.matmul(&b).expect("compatible")
                .matmul(&c).expect("compatible");
            let right = a.matmul(&b.matmul(&c).expect("compatible"))
                .expect("compatible");

            prop_assert_eq!(left, right, "FALSIFIED MX-005-prop: (A*B)*C != A*(B*C)");
        }
    }
}
