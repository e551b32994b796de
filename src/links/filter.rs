//! Category filtering of archive links.

use std::fmt;

/// Required suffix of every archive link.
pub const ARCHIVE_SUFFIX: &str = ".zip";

/// Archive size tier, encoded in the archive filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Top100,
    Minimum3,
    Rest,
}

impl Category {
    /// All categories in the order they are checked.
    pub const ALL: [Category; 3] = [Category::Top100, Category::Minimum3, Category::Rest];

    /// Substring marking a link as belonging to this category.
    pub fn marker(&self) -> &'static str {
        match self {
            Category::Top100 => "_top100",
            Category::Minimum3 => "_minimum3",
            Category::Rest => "_rest",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Top100 => write!(f, "top100"),
            Category::Minimum3 => write!(f, "minimum3"),
            Category::Rest => write!(f, "rest"),
        }
    }
}

/// Which categories are enabled for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryFlags {
    pub top100: bool,
    pub minimum3: bool,
    pub rest: bool,
}

impl CategoryFlags {
    /// Whether `category` is enabled.
    pub fn is_enabled(&self, category: Category) -> bool {
        match category {
            Category::Top100 => self.top100,
            Category::Minimum3 => self.minimum3,
            Category::Rest => self.rest,
        }
    }

    /// Whether no category is enabled.
    pub fn is_empty(&self) -> bool {
        !(self.top100 || self.minimum3 || self.rest)
    }

    /// Enabled categories, in check order.
    pub fn enabled(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|c| self.is_enabled(*c))
    }

    /// Whether a single link passes the filter.
    pub fn matches(&self, link: &str) -> bool {
        link.ends_with(ARCHIVE_SUFFIX) && self.enabled().any(|c| link.contains(c.marker()))
    }
}

impl fmt::Display for CategoryFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let names: Vec<String> = self.enabled().map(|c| c.to_string()).collect();
        write!(f, "{}", names.join(", "))
    }
}

/// Lazily keep the links that pass `flags`, preserving input order.
pub fn filter_links<I>(links: I, flags: CategoryFlags) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    links
        .into_iter()
        .filter(move |link| flags.matches(link.as_ref()))
}
