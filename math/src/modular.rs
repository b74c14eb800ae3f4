use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MathError, Result};

/// Modulus `p > 1` of a residue ring ℤ_p.
///
/// Residues handled by the methods below live in `[0, p)`. Every product is
/// taken in a `u128` accumulator, so `(p - 1)²` cannot overflow for any `u64`
/// modulus.
///
/// Primality is *not* an invariant of this type: [`Modulus::inverse`] is only
/// meaningful when `p` is prime. See [`crate::is_prime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Modulus(u64);

impl Modulus {
    /// Construct a new modulus iff `value > 1`, an error otherwise.
    pub const fn new(value: u64) -> Result<Self> {
        if value > 1 {
            Ok(Self(value))
        } else {
            Err(MathError::InvalidModulus(value))
        }
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Euclidean reduction of a signed integer into `[0, p)`.
    #[inline]
    pub const fn reduce(&self, value: i128) -> u64 {
        value.rem_euclid(self.0 as i128) as u64
    }

    #[inline]
    pub const fn reduce_u64(&self, value: u64) -> u64 {
        value % self.0
    }

    #[inline]
    pub const fn add(&self, a: u64, b: u64) -> u64 {
        let p = self.0 as u128;
        ((a as u128 % p + b as u128 % p) % p) as u64
    }

    /// `a - b` renormalised into `[0, p)`, also when `b > a`.
    #[inline]
    pub const fn sub(&self, a: u64, b: u64) -> u64 {
        let p = self.0 as u128;
        ((a as u128 % p + p - b as u128 % p) % p) as u64
    }

    #[inline]
    pub const fn mul(&self, a: u64, b: u64) -> u64 {
        ((a as u128 * b as u128) % self.0 as u128) as u64
    }

    #[inline]
    pub const fn neg(&self, a: u64) -> u64 {
        self.sub(0, a)
    }

    /// `base^exp mod p` by square-and-multiply, scanning the exponent from
    /// its most significant bit.
    #[must_use]
    pub const fn pow(&self, base: u64, exp: u64) -> u64 {
        let base = self.reduce_u64(base);
        let mut acc = 1 % self.0;
        let bit_length = u64::BITS - exp.leading_zeros();
        let mut i = 0;
        while i < bit_length {
            acc = self.mul(acc, acc);
            if exp & (1 << (bit_length - 1 - i)) != 0 {
                acc = self.mul(acc, base);
            }
            i += 1;
        }
        acc
    }

    /// Multiplicative inverse by Fermat's little theorem, `a^(p-2) mod p`.
    ///
    /// Fails when `a ≡ 0 (mod p)`. For a composite `p` the returned value is
    /// not an inverse; primality is the caller's responsibility.
    pub const fn inverse(&self, a: u64) -> Result<u64> {
        if self.reduce_u64(a) == 0 {
            return Err(MathError::NotInvertible {
                value: a as i128,
                modulus: self.0,
            });
        }
        Ok(self.pow(a, self.0 - 2))
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for Modulus {
    type Error = MathError;

    fn try_from(value: u64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Modulus> for u64 {
    fn from(modulus: Modulus) -> Self {
        modulus.0
    }
}

/// Compute `base^exponent mod modulus`.
///
/// Negative bases are first normalised into `[0, modulus)`.
///
/// # Examples
///
/// ```
/// assert_eq!(math::power(3, 4, 7).unwrap(), 4);
/// assert_eq!(math::power(-2, 3, 7).unwrap(), 6);
/// ```
pub fn power(base: i128, exponent: u64, modulus: u64) -> Result<u64> {
    let modulus = Modulus::new(modulus)?;
    Ok(modulus.pow(modulus.reduce(base), exponent))
}

/// Compute `a⁻¹ mod modulus` for a prime `modulus`.
///
/// ```
/// assert_eq!(math::mod_inverse(3, 7).unwrap(), 5);
/// assert!(math::mod_inverse(14, 7).is_err());
/// ```
pub fn mod_inverse(a: i128, modulus: u64) -> Result<u64> {
    let m = Modulus::new(modulus)?;
    m.inverse(m.reduce(a))
        .map_err(|_| MathError::NotInvertible { value: a, modulus })
}

#[cfg(test)]
mod tests {
    use num_bigint::{BigInt, BigUint};
    use num_traits::ToPrimitive;
    use proptest::prelude::*;
    use test_strategy::proptest;

    use super::*;

    const PRIMES: [u64; 6] = [
        2,
        7,
        2087,
        8380417,
        4294967291,
        18446744073709551557, // 2^64 - 59
    ];

    fn oracle_pow(base: i128, exponent: u64, modulus: u64) -> u64 {
        let m = BigInt::from(modulus);
        let base = ((BigInt::from(base) % &m) + &m) % &m;
        let base = base.to_biguint().unwrap();
        base.modpow(&BigUint::from(exponent), &BigUint::from(modulus))
            .to_u64()
            .unwrap()
    }

    #[test]
    fn modulus_must_exceed_one() {
        assert_eq!(Modulus::new(0), Err(MathError::InvalidModulus(0)));
        assert_eq!(Modulus::new(1), Err(MathError::InvalidModulus(1)));
        assert_eq!(Modulus::new(2).map(|m| m.value()), Ok(2));
        assert_eq!(power(2, 3, 1), Err(MathError::InvalidModulus(1)));
        assert_eq!(mod_inverse(2, 0), Err(MathError::InvalidModulus(0)));
    }

    #[test]
    fn negative_bases_are_normalised() {
        assert_eq!(power(-2, 3, 7), Ok(6));
        assert_eq!(power(-1, 2, 2087), Ok(1));
        assert_eq!(power(-1, 3, 2087), Ok(2086));
        assert_eq!(power(i128::MIN, 1, 7), Ok(oracle_pow(i128::MIN, 1, 7)));
        assert_eq!(power(-1, 1, 18446744073709551557), Ok(18446744073709551556));
    }

    #[test]
    fn zero_exponent_gives_one() {
        for p in PRIMES {
            assert_eq!(power(0, 0, p), Ok(1));
            assert_eq!(power(12345, 0, p), Ok(1));
        }
    }

    #[test]
    fn fermat_holds_for_known_primes() {
        for p in PRIMES {
            let m = Modulus::new(p).unwrap();
            assert_eq!(m.pow(3, p - 1), 1 % p);
            assert_eq!(m.pow(p - 1, p - 1), 1);
        }
    }

    #[test]
    fn largest_residue_squares_without_overflow() {
        let p = 18446744073709551557;
        let m = Modulus::new(p).unwrap();
        // (p - 1)^2 = (-1)^2 = 1
        assert_eq!(m.mul(p - 1, p - 1), 1);
        assert_eq!(m.pow(p - 1, 2), 1);
        assert_eq!(m.mul(u64::MAX, u64::MAX), oracle_pow(58, 2, p));
    }

    #[test]
    fn subtraction_never_goes_negative() {
        let m = Modulus::new(7).unwrap();
        assert_eq!(m.sub(2, 5), 4);
        assert_eq!(m.sub(0, 6), 1);
        assert_eq!(m.sub(5, 5), 0);
        assert_eq!(m.neg(0), 0);
        assert_eq!(m.neg(3), 4);
        assert_eq!(m.reduce(-15), 6);
    }

    #[test]
    fn inverse_at_field_boundary() {
        for p in PRIMES {
            assert_eq!(mod_inverse(1, p), Ok(1));
            assert_eq!(mod_inverse((p - 1).into(), p), Ok(p - 1));
            assert_eq!(mod_inverse(-1, p), Ok(p - 1));
            assert_eq!(
                mod_inverse(0, p),
                Err(MathError::NotInvertible { value: 0, modulus: p })
            );
        }
    }

    #[test]
    fn multiples_of_the_modulus_are_not_invertible() {
        assert_eq!(
            mod_inverse(-14, 7),
            Err(MathError::NotInvertible {
                value: -14,
                modulus: 7
            })
        );
        assert_eq!(
            mod_inverse(14, 7),
            Err(MathError::NotInvertible {
                value: 14,
                modulus: 7
            })
        );
        let m = Modulus::new(2087).unwrap();
        assert_eq!(
            m.inverse(2087 * 3),
            Err(MathError::NotInvertible {
                value: 6261,
                modulus: 2087
            })
        );
        assert_eq!(m.inverse(0), Err(MathError::NotInvertible { value: 0, modulus: 2087 }));
    }

    #[test]
    fn residues_above_i64_range_are_accepted() {
        let p = 18446744073709551557;
        let half = (p + 1) / 2;
        assert!(half > i64::MAX as u64);
        assert_eq!(mod_inverse(2, p), Ok(half));
        assert_eq!(mod_inverse(half.into(), p), Ok(2));
        assert_eq!(power(half.into(), 2, p), Ok(oracle_pow(half.into(), 2, p)));
    }

    #[test]
    fn serde_rejects_degenerate_modulus() {
        let m: Modulus = serde_json::from_str("2087").unwrap();
        assert_eq!(m.value(), 2087);
        assert_eq!(serde_json::to_string(&m).unwrap(), "2087");
        assert!(serde_json::from_str::<Modulus>("1").is_err());
        assert!(serde_json::from_str::<Modulus>("-5").is_err());
    }

    #[proptest]
    fn power_agrees_with_bigint(
        base: i128,
        exponent: u64,
        #[strategy(2u64..)] modulus: u64,
    ) {
        prop_assert_eq!(power(base, exponent, modulus)?, oracle_pow(base, exponent, modulus));
    }

    #[proptest]
    fn power_is_in_range(base: i128, exponent: u64, #[strategy(2u64..)] modulus: u64) {
        prop_assert!(power(base, exponent, modulus)? < modulus);
    }

    #[proptest]
    fn multiplication_with_inverse_gives_identity(
        #[strategy(0..PRIMES.len())] index: usize,
        a: i128,
    ) {
        let p = PRIMES[index];
        let m = Modulus::new(p)?;
        let residue = m.reduce(a);
        prop_assume!(residue != 0);
        let inv = mod_inverse(a, p)?;
        prop_assert_eq!(m.mul(residue, inv), 1);
    }

    #[proptest]
    fn add_and_sub_are_inverse(
        #[strategy(2u64..)] p: u64,
        a: u64,
        b: u64,
    ) {
        let m = Modulus::new(p)?;
        let sum = m.add(a, b);
        prop_assert!(sum < p);
        prop_assert_eq!(m.sub(sum, b), m.reduce_u64(a));
    }
}
