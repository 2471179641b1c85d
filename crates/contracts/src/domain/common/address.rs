use serde::{Deserialize, Serialize};

/// Blockchain account address.
///
/// Addresses arrive from the upstream data layer already in canonical
/// form, so comparison is exact string equality. No case folding, no
/// checksum validation here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountAddress(pub String);

impl AccountAddress {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccountAddress {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_exact() {
        assert_eq!(AccountAddress::from("ABCD"), AccountAddress::from("ABCD"));
        // Case matters: addresses are compared byte for byte
        assert_ne!(AccountAddress::from("ABCD"), AccountAddress::from("abcd"));
    }

    #[test]
    fn test_serde_transparent() {
        let addr = AccountAddress::from("WALLET1");
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"WALLET1\"");
        let back: AccountAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }
}
