use crate::models::{Category, CategorySelector, Listing};

/// The two ways a listing can identify its category
///
/// Some catalog call sites filter by the opaque `kategori_id`, others by the
/// human-readable name. Both keys are resolved here so callers never need to
/// know which scheme a selector uses.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRef<'a> {
    pub name: Option<&'a str>,
    pub id: Option<&'a str>,
}

impl<'a> CategoryRef<'a> {
    pub fn of(listing: &'a Listing) -> Self {
        Self {
            name: listing.category.as_deref(),
            id: listing.category_id.as_deref(),
        }
    }

    /// Whether this reference is selected by `selector`
    #[inline]
    pub fn matches(&self, selector: &CategorySelector) -> bool {
        match selector {
            CategorySelector::All => true,
            CategorySelector::Key(key) => {
                self.id == Some(key.as_str()) || self.name == Some(key.as_str())
            }
        }
    }
}

/// Category names offered in the filter selector
///
/// Returns the `allowed` names that the category provider also knows, in
/// `allowed` order. When the provider returned none of them (empty response,
/// provider down) the whole `allowed` list is used.
pub fn categories_to_show(from_api: &[Category], allowed: &[String]) -> Vec<String> {
    let shown: Vec<String> = allowed
        .iter()
        .filter(|name| from_api.iter().any(|c| !c.name.is_empty() && &c.name == *name))
        .cloned()
        .collect();

    if shown.is_empty() {
        allowed.to_vec()
    } else {
        shown
    }
}
