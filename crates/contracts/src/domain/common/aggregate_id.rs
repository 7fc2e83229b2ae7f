use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier types of the shop aggregates
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// String form used in tab keys and request bodies
    fn as_string(&self) -> String;

    /// Parse from the string form
    fn from_string(s: &str) -> Result<Self, String>;
}
