//! Facet filter state for the browse page.
//!
//! Filters are display-only: toggling one never changes the gateway
//! request. The selection lives in the URL so chip links can be built by
//! toggling against the current state.

/// One independently toggleable filter dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Difficulty,
    CookingTime,
    Cuisine,
    Dietary,
}

/// The active filter selection. Multi-valued facets keep insertion order;
/// cooking time is a single choice that deselects when picked again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub difficulty: Vec<String>,
    pub cooking_time: Option<String>,
    pub cuisine: Vec<String>,
    pub dietary: Vec<String>,
}

impl FilterSelection {
    /// Toggle one facet value: remove-if-present / append-if-absent for the
    /// multi-valued facets, select-or-clear for cooking time.
    pub fn toggle(&mut self, facet: Facet, value: &str) {
        match facet {
            Facet::Difficulty => toggle_in(&mut self.difficulty, value),
            Facet::Cuisine => toggle_in(&mut self.cuisine, value),
            Facet::Dietary => toggle_in(&mut self.dietary, value),
            Facet::CookingTime => {
                if self.cooking_time.as_deref() == Some(value) {
                    self.cooking_time = None;
                } else {
                    self.cooking_time = Some(value.to_string());
                }
            }
        }
    }

    /// Reset all four facets in one step
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// A copy with one value toggled; used to build chip hrefs
    pub fn toggled(&self, facet: Facet, value: &str) -> Self {
        let mut next = self.clone();
        next.toggle(facet, value);
        next
    }

    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        match facet {
            Facet::Difficulty => self.difficulty.iter().any(|v| v == value),
            Facet::Cuisine => self.cuisine.iter().any(|v| v == value),
            Facet::Dietary => self.dietary.iter().any(|v| v == value),
            Facet::CookingTime => self.cooking_time.as_deref() == Some(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.difficulty.is_empty()
            && self.cooking_time.is_none()
            && self.cuisine.is_empty()
            && self.dietary.is_empty()
    }
}

fn toggle_in(values: &mut Vec<String>, value: &str) {
    if let Some(pos) = values.iter().position(|v| v == value) {
        values.remove(pos);
    } else {
        values.push(value.to_string());
    }
}

/// The facet values offered in the browse sidebar
pub struct FacetCatalog {
    pub facet: Facet,
    pub label: &'static str,
    pub values: &'static [(&'static str, &'static str)], // (value, label)
}

pub const FACET_CATALOG: &[FacetCatalog] = &[
    FacetCatalog {
        facet: Facet::Difficulty,
        label: "Difficulty",
        values: &[("Easy", "Easy"), ("Medium", "Medium"), ("Hard", "Hard")],
    },
    FacetCatalog {
        facet: Facet::CookingTime,
        label: "Cooking time",
        values: &[
            ("15", "Under 15 min"),
            ("30", "Under 30 min"),
            ("60", "Under 1 hour"),
            ("120", "Under 2 hours"),
        ],
    },
    FacetCatalog {
        facet: Facet::Cuisine,
        label: "Cuisine",
        values: &[
            ("French", "French"),
            ("Italian", "Italian"),
            ("Japanese", "Japanese"),
            ("Mexican", "Mexican"),
            ("American", "American"),
        ],
    },
    FacetCatalog {
        facet: Facet::Dietary,
        label: "Dietary",
        values: &[
            ("Vegetarian", "Vegetarian"),
            ("Vegan", "Vegan"),
            ("Gluten-free", "Gluten-free"),
        ],
    },
];
