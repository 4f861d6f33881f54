//! __densealg__ is a small dense linear algebra toolkit providing two value
//! types: a rectangular [`Matrix`](algebra::Matrix) and an arbitrary length
//! [`Vector`](algebra::Vector).
//!
//! ## Features
//!
//! * __Virtual transpose__: a `Matrix` keeps its elements in a single flat
//!   buffer.  Transposing toggles between column-major and row-major
//!   addressing of that buffer in O(1), without moving any data.
//!
//! * __Oriented vectors__: a `Vector` is either a column `(n x 1)` or a
//!   row `(1 x n)`.  The orientation decides shape compatibility for sums
//!   and differences and which products are defined.
//!
//! * __Typed failures__: every fallible operation returns an
//!   [`AlgebraError`](algebra::AlgebraError) and leaves its receiver
//!   untouched on failure.
//!
//! ```
//! use densealg::algebra::*;
//!
//! let mut u = Vector::from_values(vec![1., 2., 3.]).unwrap();
//! let v = Vector::from_values(vec![4., 5., 6.]).unwrap();
//! u.transpose();
//! assert_eq!(u.multiply(&v), Ok(Product::Scalar(32.)));
//!
//! let mut A = Matrix::from_rows(&[[1., 2.], [3., 4.]]).unwrap();
//! A.transpose();
//! assert_eq!(A.get(0, 1), Ok(3.));
//! ```
//!
//! # Logging
//!
//! Construction and orientation changes are reported at `trace` level
//! and rejected operations at `debug` level through the [`log`] facade.
//! No logger is installed by this crate.
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

pub mod algebra;
