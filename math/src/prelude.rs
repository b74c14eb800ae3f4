pub use crate::{
    error::{MathError, Result},
    modular::{mod_inverse, power, Modulus},
    primality::is_prime,
};
