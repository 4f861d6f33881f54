#![allow(non_snake_case)]
use densealg::algebra::*;

// a collection of tests to ensure that operands of
// incompatible dimension won't be accepted

fn api_dim_check_data() -> (Vector<f64>, Vector<f64>, Vector<f64>) {
    let mut r = Vector::from_values(vec![1., 2., 3.]).unwrap();
    r.transpose();
    let c = Vector::from_values(vec![4., 5., 6.]).unwrap();
    let c2 = Vector::from_values(vec![7., 8., 9.]).unwrap();
    (r, c, c2)
}

#[test]
fn api_dim_check_working() {
    // This example should work because dimensions are
    // all compatible.  All following checks vary one
    // of these sizes to test dimension checks

    let (r, c, c2) = api_dim_check_data();

    assert!(c.add(&c2).is_ok());
    assert!(c.sub(&c2).is_ok());
    assert_eq!(r.dot(&c), Ok(32.));
}

#[test]
fn api_dim_check_bad_length() {
    let (r, c, _c2) = api_dim_check_data();
    let short = Vector::from_values(vec![1., 2.]).unwrap();

    assert!(matches!(
        c.add(&short),
        Err(AlgebraError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        c.sub(&short),
        Err(AlgebraError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        r.dot(&short),
        Err(AlgebraError::ShapeMismatch { .. })
    ));
}

#[test]
fn api_dim_check_bad_orientation() {
    let (r, c, _c2) = api_dim_check_data();

    assert!(matches!(r.add(&c), Err(AlgebraError::ShapeMismatch { .. })));
    assert!(matches!(c.sub(&r), Err(AlgebraError::ShapeMismatch { .. })));
    assert!(matches!(c.dot(&r), Err(AlgebraError::NotImplemented(_))));
    assert!(matches!(r.dot(&r), Err(AlgebraError::NotImplemented(_))));
}

#[test]
fn api_dim_check_ragged_matrix() {
    let rows: Vec<Vec<f64>> = vec![vec![1., 2.], vec![3.]];
    assert!(matches!(
        Matrix::from_rows(&rows),
        Err(AlgebraError::ShapeMismatch { .. })
    ));

    let rows: Vec<Vec<f64>> = vec![vec![1.], vec![2., 3.]];
    assert!(matches!(
        Matrix::from_rows(&rows),
        Err(AlgebraError::ShapeMismatch { .. })
    ));
}

#[test]
fn api_dim_check_matrix_bounds() {
    let mut A = Matrix::from_rows(&[[1., 2., 3.], [4., 5., 6.]]).unwrap();
    let before = A.clone();

    assert!(matches!(
        A.set(2, 0, 1.),
        Err(AlgebraError::IndexOutOfBounds { .. })
    ));
    assert!(matches!(
        A.set(0, 3, 1.),
        Err(AlgebraError::IndexOutOfBounds { .. })
    ));
    assert_eq!(A, before);
}
