use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ShamirError, ShamirResult};

/// A single point `(x, f(x))` on the sharing polynomial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Share {
    pub x: u64,
    pub y: u64,
}

impl Share {
    pub const fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }
}

impl From<(u64, u64)> for Share {
    fn from((x, y): (u64, u64)) -> Self {
        Self::new(x, y)
    }
}

/// Returns the first x-value that occurs twice, scanning in order.
pub(crate) fn first_duplicate(xs: impl IntoIterator<Item = u64>) -> Option<u64> {
    let mut xs = xs.into_iter();
    let mut seen = HashSet::with_capacity(xs.size_hint().0);
    xs.find(|&x| !seen.insert(x))
}

/// A non-empty collection of shares with pairwise distinct x-values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareSet(Vec<Share>);

impl ShareSet {
    pub fn new(shares: Vec<Share>) -> ShamirResult<Self> {
        Self::check(&shares)?;
        Ok(Self(shares))
    }

    /// Validate the share-set invariants without taking ownership.
    ///
    /// An empty slice fails with [`ShamirError::NoShares`], a repeated
    /// x-value with [`ShamirError::DuplicateX`].
    pub fn check(shares: &[Share]) -> ShamirResult<()> {
        if shares.is_empty() {
            return Err(ShamirError::NoShares);
        }
        match first_duplicate(shares.iter().map(|share| share.x)) {
            Some(x) => Err(ShamirError::DuplicateX(x)),
            None => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; a [`ShareSet`] holds at least one share.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Share] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Share> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<Share> {
        self.0
    }
}

impl TryFrom<Vec<Share>> for ShareSet {
    type Error = ShamirError;

    fn try_from(shares: Vec<Share>) -> ShamirResult<Self> {
        Self::new(shares)
    }
}

impl AsRef<[Share]> for ShareSet {
    fn as_ref(&self) -> &[Share] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a ShareSet {
    type Item = &'a Share;
    type IntoIter = std::slice::Iter<'a, Share>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
