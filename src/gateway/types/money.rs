//! Money input types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Strict-format signed decimal, validated during deserialization.
///
/// Ledger amounts are signed (deposits positive, withdrawals negative),
/// so unlike an order-quantity field the sign is allowed; only the
/// format is policed here:
/// - Rejects `.5` / `-.5` (must be `0.5`)
/// - Rejects `5.` (must be `5.0` or `5`)
/// - Rejects empty strings and a bare `-`
///
/// Business validation (overdraft) happens later in the ledger engine.
#[derive(Debug, Clone, Copy)]
pub struct SignedAmount(Decimal);

impl SignedAmount {
    /// Get the inner Decimal value
    pub fn inner(self) -> Decimal {
        self.0
    }
}

impl<'de> Deserialize<'de> for SignedAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        // Support both JSON number and JSON string
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum DecimalOrString {
            String(String),
            Number(Decimal),
        }

        let value = DecimalOrString::deserialize(deserializer)?;

        match value {
            DecimalOrString::String(s) => {
                if s.is_empty() {
                    return Err(D::Error::custom("Amount cannot be empty"));
                }
                let digits = s.strip_prefix('-').unwrap_or(&s);
                if digits.is_empty() {
                    return Err(D::Error::custom("Amount cannot be a bare sign"));
                }
                if digits.starts_with('.') {
                    return Err(D::Error::custom("Invalid format: use 0.5 not .5"));
                }
                if digits.ends_with('.') {
                    return Err(D::Error::custom("Invalid format: use 5.0 not 5."));
                }

                let d = Decimal::from_str(&s)
                    .map_err(|e| D::Error::custom(format!("Invalid decimal: {}", e)))?;

                Ok(SignedAmount(d))
            }
            DecimalOrString::Number(d) => Ok(SignedAmount(d)),
        }
    }
}

impl Serialize for SignedAmount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize as string to preserve precision
        serializer.serialize_str(&self.0.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<SignedAmount, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn test_accepts_signed_strings_and_numbers() {
        assert_eq!(parse(r#""-50.25""#).unwrap().inner(), Decimal::new(-5025, 2));
        assert_eq!(parse(r#""100""#).unwrap().inner(), Decimal::from(100));
        assert_eq!(parse("-5").unwrap().inner(), Decimal::from(-5));
    }

    #[test]
    fn test_rejects_malformed_strings() {
        assert!(parse(r#""""#).is_err());
        assert!(parse(r#"".5""#).is_err());
        assert!(parse(r#""-.5""#).is_err());
        assert!(parse(r#""5.""#).is_err());
        assert!(parse(r#""-""#).is_err());
        assert!(parse(r#""abc""#).is_err());
    }

    #[test]
    fn test_serializes_as_string() {
        let amount: SignedAmount = parse(r#""-0.30""#).unwrap();
        assert_eq!(serde_json::to_string(&amount).unwrap(), r#""-0.30""#);
    }
}
