//! Output format and the text decorations every renderer goes through.

const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_CYAN: &str = "\x1b[36m";
const ANSI_RESET: &str = "\x1b[0m";

/// Rendering target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// ANSI-decorated plain text for terminals
    #[default]
    Tty,
    /// Inline-styled HTML for browsers
    Html,
}

impl Format {
    pub fn bold(self, text: &str) -> String {
        match self {
            Format::Html => format!("<b>{}</b>", text),
            Format::Tty => format!("{}{}{}", ANSI_BOLD, text, ANSI_RESET),
        }
    }

    pub fn cyan(self, text: &str) -> String {
        match self {
            Format::Html => format!("<span style=\"color:cyan\">{}</span>", text),
            Format::Tty => format!("{}{}{}", ANSI_CYAN, text, ANSI_RESET),
        }
    }

    /// Make upstream text safe to embed. Terminal output is passed through.
    pub fn escape(self, text: &str) -> String {
        match self {
            Format::Tty => text.to_string(),
            Format::Html => {
                let mut out = String::with_capacity(text.len());
                for c in text.chars() {
                    match c {
                        '&' => out.push_str("&amp;"),
                        '<' => out.push_str("&lt;"),
                        '>' => out.push_str("&gt;"),
                        '"' => out.push_str("&quot;"),
                        '\'' => out.push_str("&#39;"),
                        _ => out.push(c),
                    }
                }
                out
            }
        }
    }

    /// MIME type of a response body in this format
    pub fn content_type(self) -> &'static str {
        match self {
            Format::Html => "text/html; charset=utf-8",
            Format::Tty => "text/plain; charset=utf-8",
        }
    }
}

pub fn bold(text: &str, format: Format) -> String {
    format.bold(text)
}

pub fn cyan(text: &str, format: Format) -> String {
    format.cyan(text)
}

/// Remove ANSI SGR sequences and HTML tags.
pub fn strip_decoration(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\x1b' if chars.peek() == Some(&'[') => {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            }
            '<' => {
                for c in chars.by_ref() {
                    if c == '>' {
                        break;
                    }
                }
            }
            _ => out.push(c),
        }
    }

    out
}
