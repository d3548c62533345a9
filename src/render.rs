//! Plain-text layouts for printing a sequence of values

use std::fmt::Display;

/// How a sequence is laid out when printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `1 2 4 5 8`
    SpaceSeparated,
    /// One value per line, each followed by a newline
    Lines,
    /// `[1, 2, 4, 5, 8]`
    Bracketed,
}

/// Render `values` in the given layout
pub fn render<T: Display>(values: &[T], layout: Layout) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    match layout {
        Layout::SpaceSeparated => items.join(" "),
        Layout::Lines => items.iter().map(|item| format!("{item}\n")).collect(),
        Layout::Bracketed => format!("[{}]", items.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts() {
        let nums = [1, 2, 4, 5, 8];
        assert_eq!(render(&nums, Layout::SpaceSeparated), "1 2 4 5 8");
        assert_eq!(render(&nums, Layout::Lines), "1\n2\n4\n5\n8\n");
        assert_eq!(render(&nums, Layout::Bracketed), "[1, 2, 4, 5, 8]");
    }

    #[test]
    fn empty_and_single() {
        let empty: [u64; 0] = [];
        assert_eq!(render(&empty, Layout::SpaceSeparated), "");
        assert_eq!(render(&empty, Layout::Lines), "");
        assert_eq!(render(&empty, Layout::Bracketed), "[]");

        assert_eq!(render(&[7], Layout::SpaceSeparated), "7");
        assert_eq!(render(&[7], Layout::Bracketed), "[7]");
    }

    #[test]
    fn any_display_type() {
        assert_eq!(render(&[-1.5, 2.0], Layout::Bracketed), "[-1.5, 2]");
        assert_eq!(render(&["a", "b"], Layout::SpaceSeparated), "a b");
    }
}
