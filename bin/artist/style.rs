//! Terminal styling for wizard output

use artist_program::{Notification, Severity, Stage};

/// ANSI color codes
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

use colors::*;

pub fn style_bold(s: &str) -> String {
    format!("{}{}{}", BOLD, s, RESET)
}

pub fn style_dim(s: &str) -> String {
    format!("{}{}{}", DIM, s, RESET)
}

pub fn style_cyan(s: &str) -> String {
    format!("{}{}{}", CYAN, s, RESET)
}

// Status indicators
pub fn icon_success() -> String {
    format!("{}✓{}", GREEN, RESET)
}

pub fn icon_error() -> String {
    format!("{}✗{}", RED, RESET)
}

pub fn icon_warning() -> String {
    format!("{}⚠{}", YELLOW, RESET)
}

pub fn icon_info() -> String {
    format!("{}ℹ{}", BLUE, RESET)
}

pub fn print_success(msg: &str) {
    println!("  {} {}", icon_success(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("  {} {}{}{}", icon_error(), RED, msg, RESET);
}

pub fn print_warning(msg: &str) {
    println!("  {} {}{}{}", icon_warning(), YELLOW, msg, RESET);
}

pub fn print_info(msg: &str) {
    println!("  {} {}", icon_info(), msg);
}

/// Toast-style line for a wizard notification
pub fn print_notification(notification: &Notification) {
    match notification.severity {
        Severity::Success => print_success(&notification.message),
        Severity::Info => print_info(&notification.message),
        Severity::Error => print_error(&notification.message),
    }
}

/// `(1) Collection ──── (2) Artwork` with the reached steps highlighted
pub fn print_progress(stage: Stage) {
    let current = stage.step_number();
    let step = |s: Stage| {
        let label = format!("({}) {}", s.step_number(), s.title());
        if s.step_number() <= current {
            format!("{}{}{}{}", BOLD, MAGENTA, label, RESET)
        } else {
            style_dim(&label)
        }
    };
    let line_color = if current >= 2 { MAGENTA } else { GRAY };

    println!();
    println!(
        "  {} {}{}{} {}",
        step(Stage::CollectionInfo),
        line_color,
        "─".repeat(12),
        RESET,
        step(Stage::ArtworkInfo)
    );
    println!();
}

pub fn print_section(title: &str, subtitle: &str) {
    println!("  {}", style_bold(title));
    println!("  {}", style_dim(subtitle));
    println!("  {}", style_dim(&"─".repeat(40)));
}

pub fn print_key_value(key: &str, value: &str) {
    println!("  {}{}:{} {}", GRAY, key, RESET, value);
}

// Box drawing
pub fn print_box(title: &str, content: &[&str]) {
    let width = content
        .iter()
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(0)
        .max(title.chars().count())
        + 4;

    println!("  {}╭{}╮{}", GRAY, "─".repeat(width), RESET);
    println!(
        "  {}│{} {}{}{} {}{}│{}",
        GRAY,
        RESET,
        BOLD,
        title,
        RESET,
        " ".repeat(width - title.chars().count() - 2),
        GRAY,
        RESET
    );
    println!("  {}├{}┤{}", GRAY, "─".repeat(width), RESET);

    for line in content {
        println!(
            "  {}│{} {} {}{}│{}",
            GRAY,
            RESET,
            line,
            " ".repeat(width - line.chars().count() - 2),
            GRAY,
            RESET
        );
    }

    println!("  {}╰{}╯{}", GRAY, "─".repeat(width), RESET);
}
