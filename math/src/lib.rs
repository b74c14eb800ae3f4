pub mod error;
pub mod modular;
pub mod prelude;
pub mod primality;

pub use error::{MathError, Result};
pub use modular::{mod_inverse, power, Modulus};
pub use primality::is_prime;
