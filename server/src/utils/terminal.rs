//! Terminal output helpers for the startup banner

/// ANSI color used for a banner line marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Green,
    Yellow,
    Magenta,
    Dim,
}

impl Accent {
    const fn code(self) -> &'static str {
        match self {
            Accent::Green => "32",
            Accent::Yellow => "33",
            Accent::Magenta => "35",
            Accent::Dim => "90",
        }
    }
}

/// Width of the label column in banner lines
pub const LABEL_WIDTH: usize = 12;

/// Format a URL as a clickable OSC 8 hyperlink when the terminal supports it,
/// plain cyan text otherwise.
pub fn terminal_link(url: &str) -> String {
    if supports_hyperlinks::on(supports_hyperlinks::Stream::Stdout) {
        format!("\x1b]8;;{url}\x07\x1b[36m{url}\x1b[0m\x1b]8;;\x07")
    } else {
        format!("\x1b[36m{url}\x1b[0m")
    }
}

/// One `➜  Label:  value` banner line
pub fn banner_line(accent: Accent, label: &str, value: &str) -> String {
    let code = accent.code();
    if accent == Accent::Dim {
        format!("  \x1b[{code}m➜  {label:<LABEL_WIDTH$} {value}\x1b[0m")
    } else {
        format!("  \x1b[{code}m➜\x1b[0m  \x1b[1m{label:<LABEL_WIDTH$}\x1b[0m {value}")
    }
}
