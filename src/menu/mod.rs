// SPDX-License-Identifier: MPL-2.0
//! Menu catalog domain: categories and the items shown on the menu board.
//!
//! The catalog ships as an embedded TOML asset so the binary stays
//! self-contained. A parse failure is non-fatal: the board simply renders
//! empty and the problem is reported through diagnostics.

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Asset;

const CATALOG_FILE: &str = "menu.toml";

/// Menu categories, in tab display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Coffee,
    Beverage,
    Dessert,
}

impl Category {
    /// All categories in tab display order.
    pub const ALL: [Category; 3] = [Category::Coffee, Category::Beverage, Category::Dessert];

    /// Korean display name shown on tabs and in toast messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Coffee => "커피",
            Category::Beverage => "음료",
            Category::Dessert => "디저트",
        }
    }
}

/// One entry on the menu board.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: Category,
}

/// The full menu, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl Catalog {
    /// Loads the embedded catalog asset.
    pub fn load() -> Result<Self> {
        let file = Asset::get(CATALOG_FILE)
            .ok_or_else(|| Error::Catalog(format!("embedded asset {CATALOG_FILE} missing")))?;
        let content = std::str::from_utf8(file.data.as_ref())
            .map_err(|err| Error::Catalog(err.to_string()))?;
        Self::parse(content)
    }

    /// Parses a catalog from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| Error::Catalog(err.to_string()))
    }

    /// Items belonging to `category`, preserving catalog order.
    pub fn items_in(&self, category: Category) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(move |item| item.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = Catalog::load().expect("embedded catalog should parse");
        assert!(!catalog.items.is_empty());
    }

    #[test]
    fn every_category_has_items() {
        let catalog = Catalog::load().expect("embedded catalog should parse");
        for category in Category::ALL {
            assert!(
                catalog.items_in(category).count() > 0,
                "category {category:?} has no items"
            );
        }
    }

    #[test]
    fn items_in_preserves_catalog_order() {
        let catalog = Catalog::parse(
            r#"
            [[items]]
            name = "a"
            description = ""
            price = "1"
            category = "coffee"

            [[items]]
            name = "b"
            description = ""
            price = "2"
            category = "dessert"

            [[items]]
            name = "c"
            description = ""
            price = "3"
            category = "coffee"
            "#,
        )
        .expect("inline catalog should parse");

        let names: Vec<_> = catalog
            .items_in(Category::Coffee)
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn parse_rejects_unknown_category() {
        let result = Catalog::parse(
            r#"
            [[items]]
            name = "a"
            description = ""
            price = "1"
            category = "smoothie"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn category_labels_are_korean() {
        assert_eq!(Category::Coffee.label(), "커피");
        assert_eq!(Category::Beverage.label(), "음료");
        assert_eq!(Category::Dessert.label(), "디저트");
    }
}
