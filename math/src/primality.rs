//! Primality test for 64-bit moduli.

use prime_factorization::Factorization;

/// Returns `true` iff `n` is prime.
///
/// Exact for every `u64`. Values below 2 are rejected up front.
///
/// # Examples
///
/// ```
/// use math::is_prime;
/// assert!(is_prime(2087));
/// assert!(!is_prime(561)); // Carmichael number
/// ```
pub fn is_prime(n: u64) -> bool {
    n >= 2 && Factorization::run(n).is_prime
}
