//! Ordered `property:value;` declaration lists

use std::fmt;

use indexmap::IndexMap;

/// An ordered set of CSS declarations
///
/// Keys keep the position of their first insertion; inserting an existing
/// key replaces its value in place. Rendering with [`Display`](fmt::Display)
/// emits `property:value;` for each entry, in order, with no separators.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Declarations {
    entries: IndexMap<String, String>,
}

impl Declarations {
    /// Create an empty declaration list
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a declaration string
    ///
    /// Entries are split on `;` and then on the first `:`. Both halves are
    /// trimmed; entries missing either half are dropped. A repeated property
    /// keeps its first position and its last value.
    ///
    /// ```
    /// use stox_css::Declarations;
    ///
    /// let decls = Declarations::parse("color: red; width:10px;color:blue;junk");
    /// assert_eq!(decls.get("color"), Some("blue"));
    /// assert_eq!(decls.to_string(), "color:blue;width:10px;");
    /// ```
    pub fn parse(text: &str) -> Self {
        let mut decls = Self::new();
        for entry in text.split(';') {
            let Some((property, value)) = entry.split_once(':') else {
                continue;
            };
            let (property, value) = (property.trim(), value.trim());
            if property.is_empty() || value.is_empty() {
                continue;
            }
            decls.insert(property, value);
        }
        decls
    }

    /// Insert a declaration, replacing the value of an existing property
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, property: K, value: V) {
        self.entries.insert(property.into(), value.into());
    }

    /// Get the value of a property
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries.get(property).map(String::as_str)
    }

    /// Check if a property is present
    pub fn contains(&self, property: &str) -> bool {
        self.entries.contains_key(property)
    }

    /// Iterate over `(property, value)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of declarations
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no declarations
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Declarations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (property, value) in &self.entries {
            write!(f, "{}:{};", property, value)?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Declarations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut decls = Self::new();
        for (k, v) in iter {
            decls.insert(k, v);
        }
        decls
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Declarations {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}
