//! Menu catalogue entities.
//!
//! Menu items are seeded at start-up and read-only afterwards. Categories are
//! free-text labels compared with exact, case-sensitive equality.

mod seed;

pub use seed::default_menu;

use super::Price;
use super::validation::{ValidationErrors, Violations};

/// A dish or drink offered by the restaurant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    id: i64,
    item: NewMenuItem,
}

impl MenuItem {
    /// Attach the store-assigned identifier to a validated item.
    pub fn new(id: i64, item: NewMenuItem) -> Self {
        Self { id, item }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.item.name
    }

    pub fn description(&self) -> &str {
        &self.item.description
    }

    pub fn price(&self) -> Price {
        self.item.price
    }

    pub fn category(&self) -> &str {
        &self.item.category
    }

    /// Image URI shown on the menu card.
    pub fn image(&self) -> &str {
        &self.item.image
    }

    pub fn is_available(&self) -> bool {
        self.item.available
    }

    /// True when the item belongs to `category` (exact match).
    pub fn in_category(&self, category: &str) -> bool {
        self.item.category == category
    }
}

/// Validated menu item awaiting an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: String,
    pub image: String,
    pub available: bool,
}

/// Untrusted menu item input used for administrative seeding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuItemDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub category: Option<String>,
    pub image: Option<String>,
    /// Defaults to `true` when omitted.
    pub available: Option<bool>,
}

impl TryFrom<MenuItemDraft> for NewMenuItem {
    type Error = ValidationErrors;

    fn try_from(draft: MenuItemDraft) -> Result<Self, Self::Error> {
        let mut violations = Violations::default();
        let name = violations.require_text("name", draft.name);
        let description = draft.description.unwrap_or_default().trim().to_owned();
        let category = violations.require_text("category", draft.category);
        let image = draft.image.unwrap_or_default().trim().to_owned();
        let price = violations.require_price("price", draft.price);
        let available = draft.available.unwrap_or(true);

        violations.finish(|| {
            Some(Self {
                name: name?,
                description,
                price: price?,
                category: category?,
                image,
                available,
            })
        })
    }
}
