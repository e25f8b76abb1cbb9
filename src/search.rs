//! Gallery queries: category filters, text search, and truncation
//!
//! The gallery, the template selector, and the editor's integration panel all
//! filter the combined template list the same way and differ only in which
//! fields the search text is matched against.

use std::fmt;
use std::str::FromStr;

use crate::template::{Category, Template};

/// Which tab of the gallery is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(Category),
    /// User-created templates, whatever category they were filed under
    Custom,
}

impl CategoryFilter {
    /// Every tab in display order
    pub fn tabs() -> Vec<CategoryFilter> {
        let mut tabs = vec![CategoryFilter::All];
        tabs.extend(Category::ALL.into_iter().map(CategoryFilter::Category));
        tabs.push(CategoryFilter::Custom);
        tabs
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Category(c) => c.as_str(),
            CategoryFilter::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Templates",
            CategoryFilter::Category(c) => c.label(),
            CategoryFilter::Custom => "My Templates",
        }
    }

    pub fn matches(&self, template: &Template) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(c) => template.category == *c,
            CategoryFilter::Custom => template.is_custom,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CategoryFilter::All),
            "custom" => Ok(CategoryFilter::Custom),
            other => other.parse().map(CategoryFilter::Category),
        }
    }
}

/// Fields the search text is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    /// Name only (editor integration panel)
    Name,
    /// Name and description (template selector)
    NameAndDescription,
    /// Name, description, and tags (gallery)
    #[default]
    Full,
}

/// Search text plus category filter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateQuery {
    pub text: String,
    pub category: CategoryFilter,
    pub scope: SearchScope,
}

impl TemplateQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_scope(mut self, scope: SearchScope) -> Self {
        self.scope = scope;
        self
    }

    /// Case-insensitive substring match; empty text matches everything
    pub fn matches(&self, template: &Template) -> bool {
        self.category.matches(template) && self.matches_text(template)
    }

    fn matches_text(&self, template: &Template) -> bool {
        let needle = self.text.to_lowercase();
        let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);
        match self.scope {
            SearchScope::Name => contains(template.name.as_str()),
            SearchScope::NameAndDescription => {
                contains(template.name.as_str()) || contains(template.description.as_str())
            }
            SearchScope::Full => {
                contains(template.name.as_str())
                    || contains(template.description.as_str())
                    || template.tags.iter().any(|tag| contains(tag.as_str()))
            }
        }
    }
}

/// Templates matching a query, preserving input order
pub fn filter_templates<'a, I>(templates: I, query: &TemplateQuery) -> Vec<&'a Template>
where
    I: IntoIterator<Item = &'a Template>,
{
    templates.into_iter().filter(|t| query.matches(t)).collect()
}

/// A list cut to a display limit, with the count of what was cut
#[derive(Debug, Clone, PartialEq)]
pub struct Truncated<'a, T> {
    pub shown: &'a [T],
    pub hidden: usize,
}

impl<T> Truncated<'_, T> {
    /// "+N more" style suffix, or `None` when nothing was hidden
    pub fn overflow_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{}", self.hidden))
    }
}

pub fn truncate<T>(items: &[T], limit: usize) -> Truncated<'_, T> {
    let shown = &items[..items.len().min(limit)];
    Truncated {
        shown,
        hidden: items.len() - shown.len(),
    }
}
