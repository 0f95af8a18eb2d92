//! Custom item domain model.

use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::constants::CUSTOM_FIELD_PREFIX;

/// A user-defined line item attached to a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomItem {
    /// Display label entered by the user.
    pub name: String,
    /// Generated field key, `custom_<category>_<suffix>`.
    pub field: String,
    /// Category the item contributes to.
    pub category: Category,
}

/// Derive the category of a field key from its `custom_<category>_` prefix.
///
/// Returns `None` for predefined keys and malformed custom keys. Used to
/// recover categories when unpacking a bare field map saved by older
/// clients.
pub fn field_category(key: &str) -> Option<Category> {
    let rest = key.strip_prefix(CUSTOM_FIELD_PREFIX)?;
    let (category_key, suffix) = rest.split_once('_')?;
    if suffix.is_empty() {
        return None;
    }
    Category::parse(category_key)
}
