//! Custom item registry.

use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::custom_items_model::CustomItem;
use crate::catalog::Category;
use crate::constants::CUSTOM_FIELD_PREFIX;
use crate::errors::{Result, ValidationError};
use crate::statement::FieldValues;

/// Per-category lists of user-defined items.
///
/// The registry owns the item metadata; the corresponding amounts live in
/// the caller's [`FieldValues`] map. Field keys are uuid-suffixed so a key
/// is never reused after removal, which keeps a stale value from being
/// resurrected by a later add.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomItemRegistry {
    items: HashMap<Category, Vec<CustomItem>>,
}

impl CustomItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new item and set its initial amount.
    ///
    /// Fails with a validation error when the trimmed name is empty.
    pub fn add(
        &mut self,
        values: &mut FieldValues,
        category: Category,
        name: &str,
        initial_value: Decimal,
    ) -> Result<CustomItem> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }

        let field = format!(
            "{}{}_{}",
            CUSTOM_FIELD_PREFIX,
            category.as_str(),
            Uuid::new_v4().simple()
        );
        let item = CustomItem {
            name: name.to_string(),
            field: field.clone(),
            category,
        };

        values.set(&field, initial_value);
        self.items.entry(category).or_default().push(item.clone());

        debug!("Added custom {} item '{}' as {}", category.as_str(), name, field);
        Ok(item)
    }

    /// Remove an item and delete its amount entry.
    ///
    /// A field that is not registered is a no-op, not an error.
    pub fn remove(&mut self, values: &mut FieldValues, category: Category, field: &str) {
        if let Some(list) = self.items.get_mut(&category) {
            let before = list.len();
            list.retain(|item| item.field != field);
            if list.len() < before {
                values.remove(field);
                debug!("Removed custom {} item {}", category.as_str(), field);
            }
        }
    }

    /// Items registered under a category, in insertion order.
    pub fn items_for(&self, category: Category) -> &[CustomItem] {
        self.items
            .get(&category)
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    /// All items across categories.
    pub fn iter(&self) -> impl Iterator<Item = &CustomItem> {
        Category::ALL
            .iter()
            .flat_map(|category| self.items_for(*category).iter())
    }

    pub fn is_empty(&self) -> bool {
        self.items.values().all(|list| list.is_empty())
    }

    /// Rebuild a registry from a list of items, preserving list order.
    ///
    /// Used when unpacking a remote record.
    pub fn from_items<I: IntoIterator<Item = CustomItem>>(items: I) -> Self {
        let mut registry = Self::new();
        for item in items {
            registry.items.entry(item.category).or_default().push(item);
        }
        registry
    }
}
