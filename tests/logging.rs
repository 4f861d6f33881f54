use densealg::algebra::*;
use std::io::Write;
use std::sync::{Mutex, Once};

// debug records emitted by the library, in order
static RECORDS: Mutex<Vec<String>> = Mutex::new(Vec::new());
// tests in this binary share the global logger, one capture at a time
static CAPTURE: Mutex<()> = Mutex::new(());
static INIT: Once = Once::new();

fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Trace)
            .format(|buf, record| {
                if record.level() == log::Level::Debug && record.target().starts_with("densealg") {
                    RECORDS.lock().unwrap().push(record.args().to_string());
                }
                writeln!(buf, "{}: {}", record.level(), record.args())
            })
            .try_init();
    });
}

// debug records logged while running `f`
fn rejections(f: impl FnOnce()) -> Vec<String> {
    init_logger();
    let _guard = CAPTURE.lock().unwrap_or_else(|e| e.into_inner());
    RECORDS.lock().unwrap().clear();
    f();
    std::mem::take(&mut *RECORDS.lock().unwrap())
}

#[test]
fn test_nan_results_are_logged() {
    let u = Vector::from_values(vec![f64::INFINITY, 1.]).unwrap();
    let v = Vector::from_values(vec![f64::NEG_INFINITY, 1.]).unwrap();
    let big = Vector::from_values(vec![f64::INFINITY]).unwrap();

    let logged = rejections(|| {
        assert_eq!(u.add(&v), Err(AlgebraError::NotANumber));
        assert_eq!(u.sub(&u), Err(AlgebraError::NotANumber));
        assert_eq!(big.scale(0.), Err(AlgebraError::NotANumber));
        assert_eq!(big.divide(f64::INFINITY), Err(AlgebraError::NotANumber));
    });

    let expected = [
        "Vector::add rejected: Required a numeric value, found NaN",
        "Vector::sub rejected: Required a numeric value, found NaN",
        "Vector::scale rejected: Required a numeric value, found NaN",
        "Vector::divide rejected: Required a numeric value, found NaN",
    ];
    assert_eq!(logged, expected);
}

#[test]
fn test_each_rejection_logged_once() {
    let v = Vector::from_values(vec![1., 2.]).unwrap();
    let mut A = Matrix::from_rows(&[[1.]]).unwrap();

    let logged = rejections(|| {
        assert_eq!(v.divide(0.), Err(AlgebraError::DivisionByZero));
        assert!(v.at(5).is_err());
        assert!(v.slice(1..1).is_err());
        assert_eq!(
            Vector::from_values(vec![f64::NAN]),
            Err(AlgebraError::NotANumber)
        );
        A.transpose();
        assert!(A.set(0, 0, f64::NAN).is_err());
        assert!(A.get(0, 1).is_err());
    });

    let ops: Vec<&str> = logged
        .iter()
        .map(|line| line.split(" rejected: ").next().unwrap())
        .collect();
    assert_eq!(
        ops,
        [
            "Vector::divide",
            "Vector::at",
            "Vector::slice",
            "Vector::from_values",
            "Matrix::set",
            "Matrix::get",
        ]
    );
    assert_eq!(A.get(0, 0), Ok(1.));
}

#[test]
fn test_successful_operations_are_quiet() {
    let u = Vector::from_values(vec![1., 2., 3.]).unwrap();
    let logged = rejections(|| {
        let w = u.add(&u).unwrap().scale(0.5).unwrap();
        assert_eq!(w, u);
        assert_eq!(u.norm(NormType::L1), 6.);
    });
    assert!(logged.is_empty());
}

#[test]
fn test_error_messages() {
    let err = AlgebraError::IndexOutOfBounds { index: 4, bound: 3 };
    assert_eq!(err.to_string(), "Index 4 out of bound 3");

    let err = AlgebraError::ShapeMismatch {
        expected: (3, 1),
        found: (1, 3),
    };
    assert_eq!(
        err.to_string(),
        "Dimension mismatch: expected (3, 1), found (1, 3)"
    );
    assert_eq!(AlgebraError::DivisionByZero.to_string(), "Division by zero");
}
