//! CSS classes for components.

use crate::SharedString;
use dioxus_core::{AttributeValue, prelude::*};
use smallvec::SmallVec;
use std::fmt;

/// An order-stable list of class tokens for dioxus components.
///
/// Tokens keep their insertion order and duplicates are elided, so merging a
/// fixed component class stack with a caller-supplied override produces a
/// deterministic class attribute.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Class {
    /// A list of classes.
    classes: SmallVec<[SharedString; 4]>,
}

impl Class {
    /// Creates a new instance, splitting the input on whitespace.
    pub fn new(class: impl Into<SharedString>) -> Self {
        let mut instance = Self::default();
        instance.add(class);
        instance
    }

    /// Adds one or more whitespace-separated classes to the list,
    /// omitting any that are already present.
    pub fn add(&mut self, class: impl Into<SharedString>) {
        match class.into() {
            SharedString::Borrowed(s) => {
                for token in s.split_whitespace() {
                    if !self.contains(token) {
                        self.classes.push(token.into());
                    }
                }
            }
            SharedString::Owned(s) => {
                for token in s.split_whitespace() {
                    if !self.contains(token) {
                        self.classes.push(SharedString::Owned(token.to_owned()));
                    }
                }
            }
        }
    }

    /// Appends the tokens of another class list, omitting duplicates.
    pub fn append(&mut self, other: Class) {
        for token in other.classes {
            if !self.contains(&token) {
                self.classes.push(token);
            }
        }
    }

    /// Removes a class from the list.
    #[inline]
    pub fn remove(&mut self, class: &str) {
        self.classes.retain(|s| s != class);
    }

    /// Toggles a class in the list.
    pub fn toggle(&mut self, class: impl Into<SharedString>) {
        let class = class.into();
        if let Some(index) = self.classes.iter().position(|s| s == &class) {
            self.classes.remove(index);
        } else {
            self.classes.push(class);
        }
    }

    /// Returns `true` if a given class has been added.
    #[inline]
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|s| s == class)
    }

    /// Returns `true` if the class list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Formats `self` as a space-separated `String`.
    pub fn format(&self) -> String {
        self.classes.join(" ")
    }
}

impl From<&'static str> for Class {
    #[inline]
    fn from(class: &'static str) -> Self {
        Self::new(class)
    }
}

impl From<String> for Class {
    #[inline]
    fn from(class: String) -> Self {
        Self::new(class)
    }
}

impl From<Vec<&'static str>> for Class {
    fn from(classes: Vec<&'static str>) -> Self {
        let mut instance = Self::default();
        for class in classes {
            instance.add(class);
        }
        instance
    }
}

impl<const N: usize> From<[&'static str; N]> for Class {
    fn from(classes: [&'static str; N]) -> Self {
        let mut instance = Self::default();
        for class in classes {
            instance.add(class);
        }
        instance
    }
}

impl fmt::Display for Class {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let format = self.format();
        write!(f, "{format}")
    }
}

impl IntoAttributeValue for Class {
    #[inline]
    fn into_value(self) -> AttributeValue {
        AttributeValue::Text(self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::Class;

    #[test]
    fn it_keeps_insertion_order() {
        let mut class = Class::from(["base-menu-item", "dropdown-menu-item"]);
        class.add("variant-solid");
        class.add("custom");
        assert_eq!(
            class.format(),
            "base-menu-item dropdown-menu-item variant-solid custom"
        );
    }

    #[test]
    fn it_elides_duplicates() {
        let mut class = Class::new("menu menu item");
        class.add("item");
        class.append(Class::new("menu extra"));
        assert_eq!(class.format(), "menu item extra");
    }

    #[test]
    fn it_splits_whitespace() {
        let class = Class::new("popper-content  base-menu-content");
        assert!(class.contains("popper-content"));
        assert!(class.contains("base-menu-content"));
        assert!(!class.contains("dropdown-menu-content"));
    }

    #[test]
    fn it_accepts_owned_strings() {
        let mut class = Class::new(format!("size-{}", 2));
        class.add(format!("xs:size-{}", 3));
        assert_eq!(class.format(), "size-2 xs:size-3");
    }

    #[test]
    fn it_toggles_and_removes() {
        let mut class = Class::new("high-contrast");
        class.toggle("high-contrast");
        assert!(class.is_empty());
        class.toggle("high-contrast");
        class.add("custom");
        class.remove("custom");
        assert_eq!(class.format(), "high-contrast");
    }
}
