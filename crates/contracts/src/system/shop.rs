use serde::{Deserialize, Serialize};

/// Identity of the shop whose orders are managed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopId(String);

impl ShopId {
    /// Blank values and stringified `null`/`undefined` are not a shop
    /// identity. Anything else is kept verbatim.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if matches!(value.trim(), "" | "null" | "undefined") {
            None
        } else {
            Some(Self(value))
        }
    }
}

impl std::fmt::Display for ShopId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_rejected() {
        assert_eq!(ShopId::new(""), None);
        assert_eq!(ShopId::new("   "), None);
        assert_eq!(ShopId::new("null"), None);
        assert_eq!(ShopId::new("undefined"), None);
    }

    #[test]
    fn test_value_kept_as_stored() {
        let id = ShopId::new(" 42 ").unwrap();
        assert_eq!(id.to_string(), " 42 ");
        assert_eq!(serde_json::to_value(&id).unwrap(), serde_json::json!(" 42 "));
    }
}
