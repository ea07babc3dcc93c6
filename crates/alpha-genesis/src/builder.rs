use alpha_core::error::GenesisError;
use alpha_core::genesis::GenesisValidator;
use alpha_core::types::PubKey;
use serde::{Deserialize, Serialize};

/// Raw validator fields exactly as a caller submitted them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorFields {
    /// Public key JSON, e.g. the output of the node's `show_validator`.
    pub pub_key: String,
    /// Base-10 voting power.
    pub power: String,
    pub name: String,
}

impl ValidatorFields {
    pub fn new(
        pub_key: impl Into<String>,
        power: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            pub_key: pub_key.into(),
            power: power.into(),
            name: name.into(),
        }
    }

    /// Build an optional validator. `Ok(None)` when every field is empty.
    pub fn build(&self) -> Result<Option<GenesisValidator>, GenesisError> {
        build_validator(&self.pub_key, &self.power, &self.name)
    }

    /// Build a validator that must be present.
    pub fn require(&self) -> Result<GenesisValidator, GenesisError> {
        self.build()?.ok_or(GenesisError::IncorrectValidatorFields)
    }
}

/// Parse one validator entry from raw strings.
///
/// All three fields empty means no validator was supplied (`Ok(None)`). Any
/// other mix of empty and non-empty fields is rejected. The name is kept
/// verbatim.
pub fn build_validator(
    raw_pub_key: &str,
    raw_power: &str,
    raw_name: &str,
) -> Result<Option<GenesisValidator>, GenesisError> {
    let fields = [raw_pub_key, raw_power, raw_name];
    if fields.iter().all(|f| f.is_empty()) {
        return Ok(None);
    }
    if fields.iter().any(|f| f.is_empty()) {
        return Err(GenesisError::IncorrectValidatorFields);
    }

    let power: i64 = raw_power.parse()?;
    if power < 0 {
        return Err(GenesisError::NegativePower);
    }

    let pub_key = PubKey::from_json(raw_pub_key)?;

    Ok(Some(GenesisValidator {
        pub_key,
        power,
        name: raw_name.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_JSON: &str = r#"{"type":"ed25519","data":"0D3A9E5C77B1F2C4A6E8D0B2C4E6F8A1B3C5D7E9F1A3B5C7D9E1F3A5B7C9D1E3"}"#;

    #[test]
    fn all_empty_is_omitted() {
        assert!(build_validator("", "", "").unwrap().is_none());
        assert!(ValidatorFields::default().build().unwrap().is_none());
    }

    #[test]
    fn partial_fields_rejected() {
        for (k, p, n) in [(KEY_JSON, "", ""), ("", "5", ""), ("", "", "n"), (KEY_JSON, "5", "")] {
            assert!(matches!(
                build_validator(k, p, n),
                Err(GenesisError::IncorrectValidatorFields)
            ));
        }
    }

    #[test]
    fn negative_power_rejected() {
        let err = build_validator(KEY_JSON, "-1", "n").unwrap_err();
        assert!(matches!(err, GenesisError::NegativePower));
        assert_eq!(err.to_string(), "power can't be negative");
    }

    #[test]
    fn non_numeric_power_rejected() {
        assert!(matches!(
            build_validator(KEY_JSON, "abc", "n"),
            Err(GenesisError::InvalidPower(_))
        ));
        // Out of i64 range.
        assert!(build_validator(KEY_JSON, "9223372036854775808", "n").is_err());
    }

    #[test]
    fn malformed_pub_key_rejected() {
        let err = build_validator("{bad json", "5", "n").unwrap_err();
        assert!(matches!(err, GenesisError::InvalidPubKey(_)));
        assert!(err.to_string().starts_with("failed to parse pubkey"));

        let unknown = r#"{"type":"bls","data":"00"}"#;
        assert!(matches!(
            build_validator(unknown, "5", "n"),
            Err(GenesisError::InvalidPubKey(_))
        ));
    }

    #[test]
    fn valid_fields_build_entry() {
        let v = build_validator(KEY_JSON, "10", "  node one ").unwrap().unwrap();
        assert_eq!(v.power, 10);
        assert_eq!(v.name, "  node one ");
        assert_eq!(v.pub_key.type_tag(), "ed25519");
        assert_eq!(build_validator(KEY_JSON, "0", "zero").unwrap().unwrap().power, 0);
    }

    #[test]
    fn require_rejects_omitted() {
        assert!(matches!(
            ValidatorFields::default().require(),
            Err(GenesisError::IncorrectValidatorFields)
        ));
        let v = ValidatorFields::new(KEY_JSON, "3", "v").require().unwrap();
        assert_eq!(v.power, 3);
    }
}
