//! Wire model for a shopping cart.

use serde::{Deserialize, Deserializer, Serialize};

/// A cart as the upstream cart service represents it.
///
/// Items are an ordered list of identifier strings; duplicates are permitted
/// and insertion order is preserved. A cart the service has never seen comes
/// back with an absent or `null` item list, which decodes as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    /// Unique identifier of the cart.
    pub id: String,

    /// Item identifiers currently in the cart.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<String>,
}

/// The upstream serializes a brand-new cart with a nil item slice, which
/// arrives as `"items": null` rather than `[]`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(items.unwrap_or_default())
}
