//! Types and functions for comparing measured algorithm run times against scaled theoretical
//! complexity curves.
//!
//! ```
//! use asymptote::{ComplexityClass, Measurement, ScaledCurve};
//!
//! let measurements = vec![
//!     Measurement::new(80, 0.0033)?,
//!     Measurement::new(1000, 0.0199)?,
//!     Measurement::new(300000, 0.3153)?,
//! ];
//! let curve = ScaledCurve::calibrate(ComplexityClass::Linear, measurements[2])?;
//! let overlay = curve.overlay(&measurements)?;
//! println!("{}: C = {:e} over {} sizes", curve.class, curve.constant, overlay.sizes.len());
//! # Ok::<(), asymptote::Error>(())
//! ```
//!

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    trivial_casts,
    unused_lifetimes,
    unused_qualifications,
    missing_copy_implementations,
    missing_debug_implementations,
    clippy::cognitive_complexity,
    clippy::missing_const_for_fn,
    clippy::needless_borrow
)]

use std::fmt;

/// An asymptotic growth category describing how an algorithm's run time scales with input size.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ComplexityClass {
    /// O(n): run time grows proportionally with input size.
    Linear,
    /// O(n²): run time grows with the square of input size.
    Quadratic,
    /// O(n log n): run time grows with input size times its base-2 logarithm.
    Linearithmic,
}

impl ComplexityClass {
    /// The smallest input size at which the class's growth function is defined: 1 for `Linear`
    /// and `Quadratic`, 2 for `Linearithmic` (below 2, log₂ is zero or negative).
    pub const fn min_n(self) -> u64 {
        match self {
            ComplexityClass::Linearithmic => 2,
            _ => 1,
        }
    }

    /// Calculate the unscaled growth function at an input size, `f(N)`.
    ///
    /// `f(N)` is `N` for `Linear`, `N²` for `Quadratic`, and `N·log₂(N)` for `Linearithmic`.
    /// Fails with [`Error::Domain`] when `n` falls below [`min_n`](ComplexityClass::min_n).
    pub fn growth(self, n: u64) -> Result<f64> {
        if n < self.min_n() {
            return Err(Error::Domain { class: self, n });
        }
        let x = n as f64;
        Ok(match self {
            ComplexityClass::Linear => x,
            ComplexityClass::Quadratic => x * x,
            ComplexityClass::Linearithmic => x * x.log2(),
        })
    }
}

impl fmt::Display for ComplexityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplexityClass::Linear => write!(f, "O(n)"),
            ComplexityClass::Quadratic => write!(f, "O(n^2)"),
            ComplexityClass::Linearithmic => write!(f, "O(n log n)"),
        }
    }
}

/// A single timing observation: the measured wall-clock time an algorithm took at one input
/// size.
#[derive(Debug, Copy, Clone)]
pub struct Measurement {
    /// The input size, N.
    pub n: u64,
    /// The measured run time at `n`, in milliseconds.
    pub time_ms: f64,
}

impl Measurement {
    /// Create a measurement of an algorithm's run time at a given input size.
    ///
    /// Fails with [`Error::InvalidSize`] when `n` is zero, and with [`Error::InvalidTime`]
    /// when `time_ms` is negative or not finite.
    pub fn new(n: u64, time_ms: f64) -> Result<Measurement> {
        if n == 0 {
            return Err(Error::InvalidSize { n });
        }
        if !time_ms.is_finite() || time_ms < 0.0 {
            return Err(Error::InvalidTime { time_ms });
        }
        Ok(Measurement { n, time_ms })
    }
}

/// Pair parallel sequences of input sizes and measured times into measurements, preserving
/// order.
///
/// Fails with [`Error::LengthMismatch`] when the sequences differ in length, and propagates the
/// per-element validation of [`Measurement::new`].
pub fn pair_measurements(sizes: &[u64], times_ms: &[f64]) -> Result<Vec<Measurement>> {
    if sizes.len() != times_ms.len() {
        return Err(Error::LengthMismatch { sizes: sizes.len(), times: times_ms.len() });
    }
    sizes.iter().zip(times_ms).map(|(&n, &time_ms)| Measurement::new(n, time_ms)).collect()
}

/// A theoretical growth curve scaled onto real time units.
///
/// Calibration derives the proportionality constant from exactly one reference measurement:
/// `C = time / f(N)`. Scaling a known shape through one trusted point is the whole contract;
/// there is no least-squares fit over the full dataset.
#[derive(Debug, Copy, Clone)]
pub struct ScaledCurve {
    /// The complexity class whose growth function the curve follows.
    pub class: ComplexityClass,
    /// The proportionality constant C mapping `f(N)` onto milliseconds.
    pub constant: f64,
}

impl ScaledCurve {
    /// Derive a scaled curve from a single reference measurement, `C = time / f(N)`.
    ///
    /// The reference time is validated the way [`Measurement::new`] validates it, so a
    /// field-constructed measurement cannot smuggle in a negative or non-finite time. The
    /// constant is zero only when the reference time is zero. Fails with [`Error::Domain`]
    /// when the reference size falls below the class's domain floor.
    pub fn calibrate(class: ComplexityClass, reference: Measurement) -> Result<ScaledCurve> {
        if !reference.time_ms.is_finite() || reference.time_ms < 0.0 {
            return Err(Error::InvalidTime { time_ms: reference.time_ms });
        }
        let raw = class.growth(reference.n)?;
        Ok(ScaledCurve { class, constant: reference.time_ms / raw })
    }

    /// Calculate the expected run time at the given input size, `C × f(N)`, in milliseconds.
    pub fn time_at(&self, n: u64) -> Result<f64> {
        Ok(self.constant * self.class.growth(n)?)
    }

    /// Calculate the expected run time at each input size, in order.
    ///
    /// All-or-nothing: the first size below the class's domain floor aborts the whole call
    /// with [`Error::Domain`] naming that size; no partial sequence is returned. The result
    /// has the same length and order as `sizes`, and identical inputs produce bit-identical
    /// output.
    pub fn evaluate(&self, sizes: &[u64]) -> Result<Vec<f64>> {
        sizes.iter().map(|&n| self.time_at(n)).collect()
    }

    /// Pair measurements with the curve's predictions at their sizes, ready for overlay
    /// plotting.
    pub fn overlay(&self, measurements: &[Measurement]) -> Result<Overlay> {
        let sizes: Vec<u64> = measurements.iter().map(|m| m.n).collect();
        let theoretical_ms = self.evaluate(&sizes)?;
        let empirical_ms = measurements.iter().map(|m| m.time_ms).collect();
        Ok(Overlay { sizes, empirical_ms, theoretical_ms })
    }
}

/// Three parallel, same-order sequences ready for a renderer to overlay: the input sizes, the
/// measured times, and the scaled theoretical times.
#[derive(Debug, Clone)]
pub struct Overlay {
    /// The input sizes, in dataset order.
    pub sizes: Vec<u64>,
    /// The measured run time at each size, in milliseconds.
    pub empirical_ms: Vec<f64>,
    /// The scaled theoretical time `C × f(N)` at each size, in milliseconds.
    pub theoretical_ms: Vec<f64>,
}

/// The error type for calibration and curve evaluation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Error {
    /// An input size falls below the domain floor of the selected complexity class.
    Domain {
        /// The complexity class whose growth function was evaluated.
        class: ComplexityClass,
        /// The offending input size.
        n: u64,
    },
    /// An input size is zero.
    InvalidSize {
        /// The offending input size.
        n: u64,
    },
    /// A measured time is negative or not finite.
    InvalidTime {
        /// The offending time, in milliseconds.
        time_ms: f64,
    },
    /// Parallel sequences of input sizes and measured times differ in length.
    LengthMismatch {
        /// The number of input sizes supplied.
        sizes: usize,
        /// The number of measured times supplied.
        times: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Domain { class, n } => {
                write!(
                    f,
                    "input size {} is outside the {} domain: N must be at least {}",
                    n,
                    class,
                    class.min_n()
                )
            }
            Error::InvalidSize { n } => {
                write!(f, "invalid input size: {}. Input sizes must be at least 1", n)
            }
            Error::InvalidTime { time_ms } => {
                write!(
                    f,
                    "invalid measured time: {} ms. Times must be finite and non-negative",
                    time_ms
                )
            }
            Error::LengthMismatch { sizes, times } => {
                write!(f, "length mismatch: {} input sizes but {} measured times", sizes, times)
            }
        }
    }
}

impl std::error::Error for Error {}

/// The result type for calibration and curve evaluation.
pub type Result<T> = std::result::Result<T, Error>;
