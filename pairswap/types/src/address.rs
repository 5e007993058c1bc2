use {
    crate::{StdError, StdResult},
    ripemd::Ripemd160,
    serde::{de, ser},
    sha2::{Digest, Sha256},
    std::{
        fmt::{self, Debug, Display},
        str::FromStr,
    },
};

/// An account or contract address.
///
/// Addresses are of 20-byte length, in lowercase hex encoding with the `0x`
/// prefix. The all-zero address is reserved: it marks the absence of an
/// address (e.g. an unknown pair), and is the counterparty of mints and burns
/// in transfer events.
#[derive(Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Addr([u8; Self::LENGTH]);

impl Addr {
    pub const LENGTH: usize = 20;
    pub const ZERO: Self = Self([0; Self::LENGTH]);

    pub const fn is_zero(&self) -> bool {
        let mut i = 0;
        while i < Self::LENGTH {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Compute a contract address as:
    ///
    /// ```plain
    /// address := ripemd160(sha256(deployer_addr | salt))
    /// ```
    ///
    /// where `|` means byte concatenation. The result only depends on its
    /// inputs, so the address of a contract can be known before it's created.
    pub fn derive(deployer: Addr, salt: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(deployer.0);
        hasher.update(salt);
        let hash = Ripemd160::digest(hasher.finalize());

        let mut bytes = [0; Self::LENGTH];
        bytes.copy_from_slice(hash.as_slice());
        Self(bytes)
    }

    /// Generate a mock address for use in testing.
    pub const fn mock(index: u8) -> Self {
        let mut bytes = [0; Self::LENGTH];
        bytes[Self::LENGTH - 1] = index;
        Self(bytes)
    }
}

impl AsRef<[u8]> for Addr {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Addr {
    type Err = StdError;

    fn from_str(s: &str) -> StdResult<Self> {
        let hex_str = s
            .strip_prefix("0x")
            .ok_or_else(|| StdError::invalid_address(s, "missing `0x` prefix"))?;

        let bytes =
            hex::decode(hex_str).map_err(|err| StdError::invalid_address(s, err.to_string()))?;

        let array = bytes
            .try_into()
            .map_err(|_| StdError::invalid_address(s, "address must be 20 bytes"))?;

        Ok(Self(array))
    }
}

impl Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Debug for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Addr({self})")
    }
}

impl ser::Serialize for Addr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> de::Deserialize<'de> for Addr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(AddrVisitor)
    }
}

struct AddrVisitor;

impl de::Visitor<'_> for AddrVisitor {
    type Value = Addr;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a 20-byte address in hex encoding with the `0x` prefix")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Addr::from_str(v).map_err(E::custom)
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    #[test]
    fn zero_and_mock() {
        assert!(Addr::ZERO.is_zero());
        assert!(!Addr::mock(1).is_zero());
        assert_eq!(
            Addr::mock(1).to_string(),
            "0x0000000000000000000000000000000000000001"
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let deployer = Addr::mock(7);

        assert_eq!(
            Addr::derive(deployer, b"salt"),
            Addr::derive(deployer, b"salt")
        );
        assert_ne!(
            Addr::derive(deployer, b"salt"),
            Addr::derive(deployer, b"pepper")
        );
        assert_ne!(
            Addr::derive(deployer, b"salt"),
            Addr::derive(Addr::mock(8), b"salt")
        );
    }

    #[test_case("0x0000000000000000000000000000000000000001", Ok(Addr::mock(1)); "valid")]
    #[test_case("0000000000000000000000000000000000000001", Err("missing `0x` prefix"); "no prefix")]
    #[test_case("0x00000000000000000000000000000000000001", Err("address must be 20 bytes"); "too short")]
    #[test_case("0xzz00000000000000000000000000000000000001", Err("invalid address"); "not hex")]
    fn parsing(input: &str, expect: Result<Addr, &str>) {
        match (Addr::from_str(input), expect) {
            (Ok(addr), Ok(expect)) => assert_eq!(addr, expect),
            (Err(err), Err(expect)) => assert!(
                err.to_string().contains(expect),
                "expecting error containing `{expect}`, got: {err}"
            ),
            (res, expect) => panic!("expecting {expect:?}, got {res:?}"),
        }
    }

    #[test]
    fn serde_roundtrip_through_json_string() {
        let addr = Addr::derive(Addr::mock(1), b"registry");
        let json = serde_json::to_value(addr).unwrap();
        assert_eq!(json, serde_json::Value::String(addr.to_string()));
        assert_eq!(serde_json::from_value::<Addr>(json).unwrap(), addr);
    }
}
