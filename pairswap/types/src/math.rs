use {
    bnum::types::U256,
    serde::{de, ser},
    std::{
        cmp::Ordering,
        fmt::{self, Display},
        str::FromStr,
    },
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    #[error("addition overflow: {a} + {b} > {max}", max = Uint256::MAX)]
    OverflowAdd { a: Uint256, b: Uint256 },

    #[error("subtraction overflow: {a} - {b} < 0")]
    OverflowSub { a: Uint256, b: Uint256 },

    #[error("multiplication overflow: {a} * {b} > {max}", max = Uint256::MAX)]
    OverflowMul { a: Uint256, b: Uint256 },

    #[error("division by zero: {a} / 0")]
    DivisionByZero { a: Uint256 },

    #[error("failed to parse `{input}` into Uint256: {reason}")]
    ParseNumber { input: String, reason: String },
}

pub type MathResult<T> = Result<T, MathError>;

// ---------------------------------- uint256 ----------------------------------

/// A 256-bit unsigned integer.
///
/// Token amounts are 18-decimal fixed point numbers, so intermediate products
/// such as `amount0 * amount1` easily exceed 128 bits. All arithmetic is
/// checked; there is no wrapping or saturating variant on purpose.
///
/// Serialized to JSON as a decimal string, since JSON numbers can't safely
/// represent integers of this size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Uint256(U256);

impl Uint256 {
    pub const MAX: Self = Self(U256::MAX);
    pub const ONE: Self = Self(U256::ONE);
    pub const ZERO: Self = Self(U256::ZERO);

    pub const fn new(value: u128) -> Self {
        Self(U256::from_digits([value as u64, (value >> 64) as u64, 0, 0]))
    }

    pub const fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub const fn is_non_zero(&self) -> bool {
        !self.0.is_zero()
    }

    pub fn checked_add(self, other: Self) -> MathResult<Self> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(MathError::OverflowAdd { a: self, b: other })
    }

    pub fn checked_sub(self, other: Self) -> MathResult<Self> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or(MathError::OverflowSub { a: self, b: other })
    }

    pub fn checked_mul(self, other: Self) -> MathResult<Self> {
        self.0
            .checked_mul(other.0)
            .map(Self)
            .ok_or(MathError::OverflowMul { a: self, b: other })
    }

    /// Floor division.
    pub fn checked_div(self, other: Self) -> MathResult<Self> {
        self.0
            .checked_div(other.0)
            .map(Self)
            .ok_or(MathError::DivisionByZero { a: self })
    }

    /// Compute `self * numerator / denominator`, rounding down.
    pub fn checked_multiply_ratio_floor(
        self,
        numerator: Self,
        denominator: Self,
    ) -> MathResult<Self> {
        self.checked_mul(numerator)?.checked_div(denominator)
    }

    /// Compute the floored square root using the
    /// [Babylonian method](https://en.wikipedia.org/wiki/Methods_of_computing_square_roots#Heron's_method).
    pub fn isqrt(self) -> Self {
        if self.0 < U256::from_digits([2, 0, 0, 0]) {
            return self;
        }

        // Start from a power of two that is no less than the root, so that the
        // sequence decreases monotonically until it converges.
        let mut x0 = U256::ONE << self.0.bits().div_ceil(2);
        let mut x1 = (x0 + self.0 / x0) >> 1u32;

        while x1 < x0 {
            x0 = x1;
            x1 = (x0 + self.0 / x0) >> 1u32;
        }

        Self(x0)
    }
}

impl Default for Uint256 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<u128> for Uint256 {
    fn from(value: u128) -> Self {
        Self::new(value)
    }
}

impl PartialEq<u128> for Uint256 {
    fn eq(&self, other: &u128) -> bool {
        *self == Self::new(*other)
    }
}

impl PartialOrd<u128> for Uint256 {
    fn partial_cmp(&self, other: &u128) -> Option<Ordering> {
        Some(self.cmp(&Self::new(*other)))
    }
}

impl FromStr for Uint256 {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        U256::from_str(s)
            .map(Self)
            .map_err(|err| MathError::ParseNumber {
                input: s.to_string(),
                reason: err.to_string(),
            })
    }
}

impl Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ser::Serialize for Uint256 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> de::Deserialize<'de> for Uint256 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(Uint256Visitor)
    }
}

struct Uint256Visitor;

impl de::Visitor<'_> for Uint256Visitor {
    type Value = Uint256;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string-encoded 256-bit unsigned integer")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Uint256::from_str(v).map_err(E::custom)
    }
}

// ----------------------------------- tests -----------------------------------
