//! Message spaces: the finite domains the cipher operates over.
//!
//! A message space is an immutable bijection between some domain of
//! elements and the dense integer range `[0, order)`. The cipher (see
//! [`crate::cipher`]) only ever touches a message space through this
//! trait: it ranks a value down to an integer, runs the FFX permutation
//! on that integer, and unranks the result back up. Integer domains are
//! the only concrete variants implemented here; the trait itself is the
//! seam a future non-integer domain (e.g. a fixed alphabet) would plug
//! into without any change to the Feistel driver.

use num_bigint::{BigInt, BigUint};

use crate::error::{Error, Result};

/// A finite domain with rank/unrank bijections to `[0, order)`.
pub trait MessageSpace {
    /// The type of elements in this message space.
    type Element;

    /// Number of elements in the domain. Always `>= 1`.
    fn order(&self) -> &BigUint;

    /// The largest representable rank, `order - 1`.
    fn max_value(&self) -> BigUint {
        self.order() - 1u32
    }

    /// Map a domain element down to its rank in `[0, order)`.
    ///
    /// Fails with [`Error::OutsideMessageSpace`] when `value` is not a
    /// member of the domain.
    fn rank(&self, value: &Self::Element) -> Result<BigUint>;

    /// Map a rank in `[0, order)` back up to a domain element.
    ///
    /// Fails with [`Error::OutsideMessageSpace`] when `n` is not in
    /// `[0, order)`.
    fn unrank(&self, n: &BigUint) -> Result<Self::Element>;
}

/// A message space over the contiguous integers `[min, max]`.
///
/// `order = max - min + 1`, `rank(v) = v - min`, `unrank(n) = min + n`.
#[derive(Debug, Clone)]
pub struct IntegerRangeMessageSpace {
    min: BigInt,
    max: BigInt,
    order: BigUint,
}

impl IntegerRangeMessageSpace {
    /// Construct a message space over `[min, max]`. Requires `min <= max`.
    pub fn new(min: impl Into<BigInt>, max: impl Into<BigInt>) -> Result<Self> {
        let min = min.into();
        let max = max.into();

        if min > max {
            return Err(Error::illegal(format!(
                "invalid range; min ({min}) must be <= max ({max})"
            )));
        }

        // order = max - min + 1, always non-negative given min <= max
        let order = (&max - &min + 1u32)
            .to_biguint()
            .expect("max - min + 1 is non-negative when min <= max");

        Ok(IntegerRangeMessageSpace { min, max, order })
    }

    pub fn min(&self) -> &BigInt {
        &self.min
    }

    pub fn max(&self) -> &BigInt {
        &self.max
    }
}

impl MessageSpace for IntegerRangeMessageSpace {
    type Element = BigInt;

    fn order(&self) -> &BigUint {
        &self.order
    }

    fn rank(&self, value: &BigInt) -> Result<BigUint> {
        if value < &self.min || value > &self.max {
            return Err(Error::OutsideMessageSpace);
        }

        (value - &self.min)
            .to_biguint()
            .ok_or(Error::OutsideMessageSpace)
    }

    fn unrank(&self, n: &BigUint) -> Result<BigInt> {
        if n >= &self.order {
            return Err(Error::OutsideMessageSpace);
        }

        Ok(&self.min + BigInt::from(n.clone()))
    }
}

/// An [`IntegerRangeMessageSpace`] fixed with `min = 0`.
///
/// The rank of an element equals the element itself.
#[derive(Debug, Clone)]
pub struct IntegerMessageSpace(IntegerRangeMessageSpace);

impl IntegerMessageSpace {
    /// Construct the domain `[0, max]`. Requires `max >= 0`.
    pub fn new(max: impl Into<BigInt>) -> Result<Self> {
        let max = max.into();
        if max < BigInt::from(0) {
            return Err(Error::illegal(format!(
                "invalid max value; must be >= 0, got {max}"
            )));
        }
        Ok(IntegerMessageSpace(IntegerRangeMessageSpace::new(
            0, max,
        )?))
    }
}

impl MessageSpace for IntegerMessageSpace {
    type Element = BigInt;

    fn order(&self) -> &BigUint {
        self.0.order()
    }

    fn rank(&self, value: &BigInt) -> Result<BigUint> {
        self.0.rank(value)
    }

    fn unrank(&self, n: &BigUint) -> Result<BigInt> {
        self.0.unrank(n)
    }
}
