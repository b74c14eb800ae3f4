use math::prelude::{is_prime, Modulus};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ShamirError, ShamirResult};
use crate::share::Share;

/// Preconditions checked before interpolation.
///
/// The default is [`ReconstructionPolicy::strict`]. Duplicate x-values and an
/// empty share list are rejected under every policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReconstructionPolicy {
    /// Reject shares with `x ≡ 0 (mod p)`.
    pub reject_zero_x: bool,
    /// Reject composite moduli.
    pub require_prime: bool,
    /// Reject `x` or `y` values that are not below the modulus.
    pub require_canonical: bool,
    /// Declared reconstruction threshold. When unset, the threshold is the
    /// number of shares supplied.
    pub threshold: Option<usize>,
}

impl ReconstructionPolicy {
    /// Validate every precondition.
    pub const fn strict() -> Self {
        Self {
            reject_zero_x: true,
            require_prime: true,
            require_canonical: true,
            threshold: None,
        }
    }

    /// Only reject empty or duplicate share sets; values are reduced mod p.
    pub const fn permissive() -> Self {
        Self {
            reject_zero_x: false,
            require_prime: false,
            require_canonical: false,
            threshold: None,
        }
    }

    #[must_use]
    pub const fn with_threshold(self, threshold: usize) -> Self {
        Self {
            threshold: Some(threshold),
            ..self
        }
    }

    /// Check the policy's preconditions against a share list that already
    /// passed [`crate::ShareSet::check`].
    pub(crate) fn validate(
        &self,
        shares: &[Share],
        modulus: Modulus,
    ) -> ShamirResult<()> {
        if let Some(required) = self.threshold {
            if shares.len() < required {
                return Err(ShamirError::BelowThreshold {
                    required,
                    provided: shares.len(),
                });
            }
        }

        let p = modulus.value();
        if self.require_prime && !is_prime(p) {
            return Err(ShamirError::NonPrimeModulus(p));
        }

        for share in shares {
            for value in [share.x, share.y] {
                if value >= p {
                    if self.require_canonical {
                        return Err(ShamirError::OutOfRange { value, modulus: p });
                    }
                    warn!(value, modulus = p, "reducing non-canonical share value");
                }
            }
            if modulus.reduce_u64(share.x) == 0 {
                if self.reject_zero_x {
                    return Err(ShamirError::ZeroX);
                }
                warn!(x = share.x, "share at x = 0 carries the secret in the clear");
            }
        }

        Ok(())
    }
}

impl Default for ReconstructionPolicy {
    fn default() -> Self {
        Self::strict()
    }
}
