use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Numeric identifier of a catalog aggregate, as issued by the catalog provider
pub trait AggregateId:
    Copy + Eq + Ord + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Prefix of the page element bound to the aggregate ("item", "category")
    const DOM_PREFIX: &'static str;

    fn from_value(value: i64) -> Self;

    fn value(&self) -> i64;

    fn as_string(&self) -> String {
        self.value().to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(Self::from_value)
            .map_err(|e| format!("Invalid {} id '{}': {}", Self::DOM_PREFIX, s, e))
    }

    /// Element id on the page, e.g. "item-7"
    fn dom_id(&self) -> String {
        format!("{}-{}", Self::DOM_PREFIX, self.value())
    }
}
