use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rmatsim::{ket, Gate, Matrix, MatrixError, Operation, Qubit, Shape};

const EPS: f64 = 1e-6;

fn m(rows: &[&[f64]]) -> Matrix {
    Matrix::from_rows(rows).unwrap()
}

/// Random strictly diagonally dominant (hence invertible) matrix.
fn invertible(n: usize, rng: &mut StdRng) -> Matrix {
    let mut a = Matrix::random(n, n, rng);
    for i in 0..n {
        a[(i, i)] += n as f64 + 1.0;
    }
    a
}

#[test]
fn inverse_is_two_sided() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in 1..=10 {
        let a = invertible(n, &mut rng);
        let inv = a.inverse().unwrap();
        let id = Matrix::identity(n);
        assert!((&a * &inv).unwrap().approx_eq(&id, EPS), "A*A^-1 != I for n={n}");
        assert!((&inv * &a).unwrap().approx_eq(&id, EPS), "A^-1*A != I for n={n}");
    }
}

#[test]
fn multiplication_is_associative() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        let (p, q, r, s) = (
            rng.gen_range(1..6),
            rng.gen_range(1..6),
            rng.gen_range(1..6),
            rng.gen_range(1..6),
        );
        let a = Matrix::random(p, q, &mut rng);
        let b = Matrix::random(q, r, &mut rng);
        let c = Matrix::random(r, s, &mut rng);
        let left = (&(&a * &b).unwrap() * &c).unwrap();
        let right = (&a * &(&b * &c).unwrap()).unwrap();
        assert!(left.approx_eq(&right, 1e-9));
    }
}

#[test]
fn multiplication_is_not_commutative() {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let b = m(&[&[0.0, 1.0], &[1.0, 0.0]]);
    assert_eq!((&a * &b).unwrap(), m(&[&[2.0, 1.0], &[4.0, 3.0]]));
    assert_eq!((&b * &a).unwrap(), m(&[&[3.0, 4.0], &[1.0, 2.0]]));
}

#[test]
fn add_then_sub_round_trips() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..20 {
        let (rows, cols) = (rng.gen_range(1..8), rng.gen_range(1..8));
        let a = Matrix::random(rows, cols, &mut rng);
        let b = Matrix::random(rows, cols, &mut rng);
        let back = (&(&a + &b).unwrap() - &b).unwrap();
        assert!(back.approx_eq(&a, 1e-12));
    }
}

#[test]
fn tensor_product_size_law() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..20 {
        let (mr, nc, pr, qc) = (
            rng.gen_range(0..4),
            rng.gen_range(0..4),
            rng.gen_range(0..4),
            rng.gen_range(0..4),
        );
        let c = Matrix::new(mr, nc).tensor_product(&Matrix::new(pr, qc));
        assert_eq!(c.shape(), Shape::new(mr * pr, nc * qc));
    }
}

#[test]
fn tensor_product_known_value() {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let b = m(&[&[0.0, 1.0], &[1.0, 0.0]]);
    assert_eq!(
        a.tensor_product(&b),
        m(&[
            &[0.0, 1.0, 0.0, 2.0],
            &[1.0, 0.0, 2.0, 0.0],
            &[0.0, 3.0, 0.0, 4.0],
            &[3.0, 0.0, 4.0, 0.0],
        ])
    );
}

#[test]
fn inverse_known_2x2() {
    let inv = m(&[&[1.0, 2.0], &[3.0, 4.0]]).inverse().unwrap();
    assert!(inv.approx_eq(&m(&[&[-2.0, 1.0], &[1.5, -0.5]]), EPS));
}

#[test]
fn inverse_failures() {
    let err = Matrix::new(3, 2).inverse().unwrap_err();
    assert!(matches!(
        err,
        MatrixError::NotSquare {
            op: Operation::Inversion,
            ..
        }
    ));
    assert!(!err.is_singular());

    let err = m(&[&[1.0, 2.0], &[2.0, 4.0]]).inverse().unwrap_err();
    assert!(err.is_singular());
}

#[test]
fn division_matches_multiplication_by_inverse() {
    let mut rng = StdRng::seed_from_u64(9);
    let a = Matrix::random(3, 4, &mut rng);
    let b = invertible(4, &mut rng);
    let expected = (&a * &b.inverse().unwrap()).unwrap();
    assert_eq!((&a / &b).unwrap(), expected);
}

#[test]
fn adding_empty_matrix_fails() {
    let a = Matrix::identity(2);
    let empty = Matrix::default();
    for err in [
        a.try_add(&empty).unwrap_err(),
        empty.try_add(&a).unwrap_err(),
    ] {
        assert!(matches!(
            err,
            MatrixError::ZeroDimension {
                op: Operation::Addition,
                ..
            }
        ));
    }
}

#[test]
fn not_gate_on_zero_state() {
    let q = Qubit::from_matrix(m(&[&[1.0, 0.0]]));
    let not = Gate::from_matrix(m(&[&[0.0, 1.0], &[1.0, 0.0]]));
    assert_eq!(q.apply_gate(&not).unwrap().matrix(), &m(&[&[0.0, 1.0]]));
}

#[test]
fn bell_state_from_composed_gates() {
    // |00> (H ⊗ I) CNOT with row-vector states
    let hi = Gate::hadamard().combine_gates(&Gate::identity());
    let bell = ket("00")
        .unwrap()
        .apply_gate(&hi)
        .unwrap()
        .apply_gate(&Gate::cnot())
        .unwrap();
    let s2 = std::f64::consts::FRAC_1_SQRT_2;
    assert!(bell.matrix().approx_eq(&m(&[&[s2, 0.0, 0.0, s2]]), 1e-9));
}
