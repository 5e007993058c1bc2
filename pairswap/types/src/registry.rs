use {
    crate::Addr,
    serde::{Deserialize, Serialize},
};

/// An unordered pair of asset addresses, stored in canonical (ascending)
/// order, so that `(a, b)` and `(b, a)` resolve to the same registry entry.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairKey {
    lo: Addr,
    hi: Addr,
}

impl PairKey {
    pub fn new(asset_a: Addr, asset_b: Addr) -> Self {
        if asset_a <= asset_b {
            Self {
                lo: asset_a,
                hi: asset_b,
            }
        } else {
            Self {
                lo: asset_b,
                hi: asset_a,
            }
        }
    }

    pub fn assets(&self) -> (Addr, Addr) {
        (self.lo, self.hi)
    }

    /// Bytes used as salt when deriving the pair's address.
    pub fn to_salt(&self) -> Vec<u8> {
        let mut salt = Vec::with_capacity(Addr::LENGTH * 2);
        salt.extend_from_slice(self.lo.as_ref());
        salt.extend_from_slice(self.hi.as_ref());
        salt
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Create a pair for the two assets.
    /// Responds with the pair's address as data.
    CreatePair { asset_a: Addr, asset_b: Addr },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    /// Look up the pair of two assets, in either order.
    /// Returns: `Addr` (the zero address if there isn't one)
    Pair { asset_a: Addr, asset_b: Addr },
    /// Enumerate all pairs.
    /// Returns: `Vec<PairResponse>`
    Pairs {
        start_after: Option<PairKey>,
        limit: Option<u32>,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PairResponse {
    pub key: PairKey,
    pub pair: Addr,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_order_independent() {
        let (a, b) = (Addr::mock(2), Addr::mock(1));

        assert_eq!(PairKey::new(a, b), PairKey::new(b, a));
        assert_eq!(PairKey::new(a, b).assets(), (b, a));
        assert_eq!(PairKey::new(a, b).to_salt(), PairKey::new(b, a).to_salt());
    }
}
