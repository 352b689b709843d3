//! The fixed category set for sweets.
//!
//! Categories are static configuration, not data: the listing endpoint
//! returns [`CATEGORIES`] verbatim and never derives the set from stored
//! rows.

/// A sweet category. Stored as lowercase text in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Chocolate,
    Candy,
    Gummy,
    Lollipop,
    Cake,
    Cookie,
    Other,
}

/// Every category name, in canonical (lowercase) form.
pub const CATEGORIES: &[&str] = &[
    "chocolate",
    "candy",
    "gummy",
    "lollipop",
    "cake",
    "cookie",
    "other",
];

impl Category {
    /// Parse a category name, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for anything outside the fixed set.
    pub fn parse(input: &str) -> Option<Category> {
        match input.trim().to_ascii_lowercase().as_str() {
            "chocolate" => Some(Category::Chocolate),
            "candy" => Some(Category::Candy),
            "gummy" => Some(Category::Gummy),
            "lollipop" => Some(Category::Lollipop),
            "cake" => Some(Category::Cake),
            "cookie" => Some(Category::Cookie),
            "other" => Some(Category::Other),
            _ => None,
        }
    }

    /// The canonical lowercase name persisted to the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Chocolate => "chocolate",
            Category::Candy => "candy",
            Category::Gummy => "gummy",
            Category::Lollipop => "lollipop",
            Category::Cake => "cake",
            Category::Cookie => "cookie",
            Category::Other => "other",
        }
    }
}
