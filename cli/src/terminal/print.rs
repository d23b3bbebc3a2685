use std::fmt::Display;

use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

/// Target for plain terminal output; the formatter prints these without a glyph.
pub const PRINT_TARGET: &str = "handsign::print";
pub const RAW_FIELD: &str = "raw_msg";

#[macro_export]
macro_rules! hprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner(q_level: u8) {
    if q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ HANDSIGN v{} ⟧", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).bright_black();

    print(&format!("{sep}{text}{sep}"));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg.to_uppercase());
    let dash_count: usize = TOTAL_WIDTH.saturating_sub(UnicodeWidthStr::width(formatted.as_str()));
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    print(&format!(
        "{}{}{}",
        "─".repeat(left).bright_black(),
        formatted.bright_green(),
        "─".repeat(right).bright_black()
    ));
}

pub fn fat_separator() {
    print(&"═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string());
}

/// `key.......: value`, with dots padding the key to `key_width`.
pub fn aligned_line<V: Display>(key: &str, key_width: usize, value: V) {
    let dots: String = ".".repeat((key_width + 1).saturating_sub(key.width()));
    print_status(format!(
        "{}{}{} {}",
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    ));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    print(&format!("{} {}", prefix, msg.as_ref()));
}

pub fn tree_head(idx: usize, name: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    print(&format!(
        "{} {}",
        idx_str.color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));
}

pub fn as_tree_one_level(details: &[(&str, ColoredString)]) {
    let key_width: usize = details.iter().map(|(key, _)| key.width()).max().unwrap_or(0);

    for (i, (key, value)) in details.iter().enumerate() {
        let branch: ColoredString = if i + 1 == details.len() {
            "└─".bright_black()
        } else {
            "├─".bright_black()
        };
        print(&format!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            ".".repeat(key_width + 1 - key.width()).color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

/// Centers uncolored text; escape codes would throw off the width.
pub fn centerln(msg: &str) {
    let space: String = " ".repeat(TOTAL_WIDTH.saturating_sub(msg.width()) / 2);
    print(&format!("{space}{}", msg.color(colors::TEXT_DEFAULT).bold()));
}
