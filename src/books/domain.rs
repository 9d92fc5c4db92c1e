use crate::core::domain::Identifiable;

pub mod model;

pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn category(&self) -> &str;
    fn rating(&self) -> i32;

    // Titles, authors and categories are compared case-insensitively but never
    // by substring.
    fn has_title(&self, title: &str) -> bool {
        same_text(self.title(), title)
    }

    fn has_author(&self, author: &str) -> bool {
        same_text(self.author(), author)
    }

    fn has_category(&self, category: &str) -> bool {
        same_text(self.category(), category)
    }

    fn is_edition_of(&self, title: &str, author: &str, category: &str) -> bool {
        self.has_title(title) && self.has_author(author) && self.has_category(category)
    }
}

// Compares character by character; two characters match when equal, when their
// upper case forms match or when their lower case forms match.
pub(crate) fn same_text(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    a.chars().count() == b.chars().count() && a.chars().zip(b.chars()).all(|(x, y)| {
        x == y || x.to_uppercase().eq(y.to_uppercase()) || x.to_lowercase().eq(y.to_lowercase())
    })
}
