//! Text building blocks shared by the components.

/// Width of a rule line, in characters.
pub const RULE_WIDTH: usize = 50;

const INDENT: &str = "    ";

/// A full-width `#` separator, newline-terminated.
pub fn rule_line() -> String {
    let mut line = "#".repeat(RULE_WIDTH);
    line.push('\n');
    line
}

/// A title framed by rule lines, followed by a blank line.
pub fn banner(title: &str) -> String {
    let rule = rule_line();
    format!("{rule}# {title}\n{rule}\n")
}

pub fn indent() -> &'static str {
    INDENT
}
