//! Terminal rendering of a todo list.
//!
//! Completed items are struck through with a check mark. Move markers follow
//! the list boundaries: no up marker on the first item, no down marker on
//! the last.

use crate::config::DisplayConfig;
use colored::*;
use todolist::{TodoItem, TodoList};

const UP_MARKER: &str = "↑";
const DOWN_MARKER: &str = "↓";

/// Render the whole list, one item per line, followed by a summary line.
pub fn render_list(list: &TodoList, display: &DisplayConfig) -> String {
    if list.is_empty() {
        return paint("(no items)", display, |s| s.dimmed());
    }

    let mut lines: Vec<String> = list
        .iter()
        .enumerate()
        .map(|(index, item)| render_item(list, index, item, display))
        .collect();

    lines.push(summary(list));
    lines.join("\n")
}

fn render_item(list: &TodoList, index: usize, item: &TodoItem, display: &DisplayConfig) -> String {
    let mut line = String::new();

    if display.show_index {
        line.push_str(&format!("{:>3}. ", index));
    }

    if item.is_complete() {
        line.push_str(&paint("[x]", display, |s| s.green()));
        line.push(' ');
        line.push_str(&paint(item.text(), display, |s| s.strikethrough()));
    } else {
        line.push_str("[ ] ");
        line.push_str(item.text());
    }

    if display.show_markers {
        let up = if index > 0 { UP_MARKER } else { " " };
        let down = if list.is_last(index) { " " } else { DOWN_MARKER };
        line.push_str(&format!("  {}{}", up, down));
    }

    line.trim_end().to_string()
}

fn summary(list: &TodoList) -> String {
    format!("{} items, {} done", list.len(), list.completed_count())
}

fn paint(text: &str, display: &DisplayConfig, style: impl Fn(&str) -> ColoredString) -> String {
    if display.color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> DisplayConfig {
        DisplayConfig {
            color: false,
            show_index: true,
            show_markers: true,
        }
    }

    fn sample() -> TodoList {
        TodoList::new()
            .add("buy milk")
            .and_then(|l| l.add("walk dog"))
            .and_then(|l| l.add("write report"))
            .and_then(|l| l.toggle(1))
            .unwrap()
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render_list(&TodoList::new(), &plain()), "(no items)");
    }

    #[test]
    fn test_render_markers_follow_boundaries() {
        let out = render_list(&sample(), &plain());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "  0. [ ] buy milk   ↓");
        assert_eq!(lines[1], "  1. [x] walk dog  ↑↓");
        assert_eq!(lines[2], "  2. [ ] write report  ↑");
        assert_eq!(lines[3], "3 items, 1 done");
    }

    #[test]
    fn test_render_single_item_has_no_markers() {
        let list = TodoList::new().add("only").unwrap();
        let out = render_list(&list, &plain());
        assert_eq!(out.lines().next().unwrap(), "  0. [ ] only");
    }

    #[test]
    fn test_render_without_index_or_markers() {
        let display = DisplayConfig {
            color: false,
            show_index: false,
            show_markers: false,
        };
        let out = render_list(&sample(), &display);
        assert_eq!(out.lines().next().unwrap(), "[ ] buy milk");
    }
}
