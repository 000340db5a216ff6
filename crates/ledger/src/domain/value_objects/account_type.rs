//! AccountType - Closed set of account kinds

use serde::{Deserialize, Serialize};

/// Account type classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Checking,
    Savings,
}

impl AccountType {
    /// Storage / wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Checking => "CHECKING",
            AccountType::Savings => "SAVINGS",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CHECKING" => Ok(AccountType::Checking),
            "SAVINGS" => Ok(AccountType::Savings),
            _ => Err(format!("Unknown account type: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("savings".parse::<AccountType>(), Ok(AccountType::Savings));
        assert_eq!("CHECKING".parse::<AccountType>(), Ok(AccountType::Checking));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("BROKERAGE".parse::<AccountType>().is_err());
    }

    #[test]
    fn test_serde_uses_upper_case() {
        let json = serde_json::to_string(&AccountType::Checking).unwrap();
        assert_eq!(json, "\"CHECKING\"");

        let parsed: AccountType = serde_json::from_str("\"SAVINGS\"").unwrap();
        assert_eq!(parsed, AccountType::Savings);
        assert!(serde_json::from_str::<AccountType>("\"savings\"").is_err());
    }
}
