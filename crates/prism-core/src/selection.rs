use derive_more::Deref;
use std::collections::BTreeMap;

///
/// SelectionRequest
///
/// Per-call request describing which fields to serialize. A request passed
/// into a related entity's serialization is reparented: the child treats it
/// as its own top-level request and never consults the parent's.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum SelectionRequest {
    /// No overrides; schema defaults apply.
    #[default]
    Default,

    /// Serialize the primary key only. This is the recursion base case for
    /// related entities requested without a sub-selection.
    IdentifierOnly,

    /// Explicit per-field directives.
    Fields(SelectionMap),
}

impl SelectionRequest {
    #[must_use]
    pub const fn is_identifier_only(&self) -> bool {
        matches!(self, Self::IdentifierOnly)
    }

    /// The directive map, when one was supplied.
    #[must_use]
    pub const fn directive_map(&self) -> Option<&SelectionMap> {
        match self {
            Self::Fields(map) => Some(map),
            Self::Default | Self::IdentifierOnly => None,
        }
    }
}

impl From<SelectionMap> for SelectionRequest {
    fn from(map: SelectionMap) -> Self {
        Self::Fields(map)
    }
}

///
/// Directive
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Directive {
    /// Force-include; related entities recurse with their own defaults.
    Include,
    /// Force-exclude.
    Exclude,
    /// Force-include and recurse with this sub-selection.
    Nested(SelectionMap),
}

///
/// SelectionMap
///
/// Field-name → directive map. Construction is builder-style and every
/// operation returns a new owned map; inherited maps are never mutated in
/// place.
///

#[derive(Clone, Debug, Default, Deref, Eq, PartialEq)]
pub struct SelectionMap {
    entries: BTreeMap<String, Directive>,
}

impl SelectionMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn include(mut self, name: impl Into<String>) -> Self {
        self.entries.insert(name.into(), Directive::Include);
        self
    }

    #[must_use]
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.entries.insert(name.into(), Directive::Exclude);
        self
    }

    #[must_use]
    pub fn nested(mut self, name: impl Into<String>, map: Self) -> Self {
        self.entries.insert(name.into(), Directive::Nested(map));
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, directive: Directive) {
        self.entries.insert(name.into(), directive);
    }
}

impl FromIterator<(String, Directive)> for SelectionMap {
    fn from_iter<I: IntoIterator<Item = (String, Directive)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
