//! Conditional class-name joining

use std::fmt;

/// Accumulates CSS classes and joins them with single spaces.
///
/// Empty entries are skipped so optional caller classes can be pushed without
/// checking them first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassNames {
    classes: Vec<String>,
}

impl ClassNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a base class
    pub fn with(class: impl Into<String>) -> Self {
        Self::new().add(class)
    }

    /// Add a class unconditionally
    pub fn add(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.trim().is_empty() {
            self.classes.push(class);
        }
        self
    }

    /// Add a class when `condition` holds
    pub fn add_if(self, condition: bool, class: impl Into<String>) -> Self {
        if condition {
            self.add(class)
        } else {
            self
        }
    }

    /// Add an optional class
    pub fn add_opt<S: Into<String>>(self, class: Option<S>) -> Self {
        match class {
            Some(class) => self.add(class),
            None => self,
        }
    }

    /// Append every class of another builder
    pub fn extend(mut self, other: ClassNames) -> Self {
        self.classes.extend(other.classes);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn build(&self) -> String {
        self.classes.join(" ")
    }
}

impl fmt::Display for ClassNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

impl From<ClassNames> for String {
    fn from(value: ClassNames) -> Self {
        value.build()
    }
}
