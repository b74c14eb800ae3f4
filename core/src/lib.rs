//! Recovery of a secret hidden behind Shamir shares over a prime field.
//!
//! The secret is the constant term of a polynomial over ℤ_p. Given points
//! `(x, y)` on that polynomial, [`reconstruct`] evaluates the Lagrange
//! interpolant at `x = 0`:
//!
//! ```
//! use shamir_core::{reconstruct, verify, Share, Verification};
//!
//! let shares = [Share::new(1, 1494), Share::new(2, 1942), Share::new(3, 491)];
//! let secret = reconstruct(&shares, 2087).unwrap();
//! assert_eq!(secret, 1234);
//! assert_eq!(verify(secret, 1234), Verification::Valid);
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod params;
pub mod reconstruct;
pub mod record;
pub mod share;
pub mod verify;

pub use error::{ShamirError, ShamirResult};
pub use params::ReconstructionPolicy;
pub use reconstruct::{
    interpolate_at, lagrange_coefficients_at_zero, reconstruct,
    SecretReconstructor,
};
pub use record::{RecordError, Report, ShareRecord};
pub use share::{Share, ShareSet};
pub use verify::{verify, Verification};
