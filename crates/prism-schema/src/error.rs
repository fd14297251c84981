use std::fmt;

///
/// ErrorTree
///
/// Accumulates validation failures keyed by the route that produced them,
/// so a single startup pass can report every broken declaration at once.
///

#[derive(Clone, Debug, Default)]
pub struct ErrorTree {
    entries: Vec<TreeEntry>,
}

#[derive(Clone, Debug)]
struct TreeEntry {
    route: String,
    message: String,
}

impl ErrorTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message with no route context.
    pub fn add(&mut self, message: impl fmt::Display) {
        self.add_at(String::new(), message);
    }

    /// Add a message under a route key (entity path, field name).
    pub fn add_at(&mut self, route: impl Into<String>, message: impl fmt::Display) {
        self.entries.push(TreeEntry {
            route: route.into(),
            message: message.to_string(),
        });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate `(route, message)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.route.as_str(), e.message.as_str()))
    }

    /// Collapse into a `Result`, consuming the tree.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error(s)", self.entries.len())?;
        for entry in &self.entries {
            if entry.route.is_empty() {
                write!(f, "\n  {}", entry.message)?;
            } else {
                write!(f, "\n  {}: {}", entry.route, entry.message)?;
            }
        }
        Ok(())
    }
}

/// Push a formatted message onto an [`ErrorTree`].
#[macro_export]
macro_rules! err {
    ($errs:expr, $route:expr => $fmt:literal $(, $arg:expr)* $(,)?) => {
        $errs.add_at($route, format!($fmt $(, $arg)*));
    };
    ($errs:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $errs.add(format!($fmt $(, $arg)*));
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_collapses_to_ok() {
        let errs = ErrorTree::new();
        assert!(errs.result().is_ok());
    }

    #[test]
    fn display_lists_routes_and_messages() {
        let mut errs = ErrorTree::new();
        err!(errs, "top-level problem");
        err!(errs, "app::Person" => "field '{}' is broken", "email");

        let err = errs.result().expect_err("non-empty tree should be an error");
        assert_eq!(err.len(), 2);

        let rendered = err.to_string();
        assert!(rendered.contains("2 error(s)"));
        assert!(rendered.contains("top-level problem"));
        assert!(rendered.contains("app::Person: field 'email' is broken"));
    }
}
