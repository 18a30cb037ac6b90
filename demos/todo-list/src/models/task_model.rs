// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::fmt;

/// A single entry of the to-do list.
///
/// The description is stored exactly as entered; an empty description is
/// representable, the controller is the one refusing to add it.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct TaskModel {
    pub description: String,
}

impl TaskModel {
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into() }
    }
}

impl fmt::Display for TaskModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl From<&str> for TaskModel {
    fn from(description: &str) -> Self {
        Self::new(description)
    }
}

impl From<String> for TaskModel {
    fn from(description: String) -> Self {
        Self::new(description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(TaskModel::new("Buy milk").to_string(), "Buy milk");
    }

    #[test]
    fn test_display_keeps_whitespace() {
        assert_eq!(TaskModel::from("  pay rent ").to_string(), "  pay rent ");
    }

    #[test]
    fn test_empty_is_representable() {
        assert_eq!(TaskModel::default(), TaskModel::new(String::new()));
        assert_eq!(TaskModel::default().to_string(), "");
    }
}
