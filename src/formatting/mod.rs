//! Terminal styling: color and emoji decisions, plus number formatting shared
//! by every renderer.

use colored::*;
use std::env;
use std::io::IsTerminal;

/// Environment variable accepting `auto`, `always` or `never`.
pub const COLOR_ENV_VAR: &str = "GRANTLIFT_COLOR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" | "on" => Some(Self::Always),
            "never" | "off" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Auto => stdout_is_rich_terminal(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Gauge labels and table rows carry emoji unless this says otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiMode {
    Auto,
    Always,
    Never,
}

impl EmojiMode {
    pub fn should_use_emoji(&self) -> bool {
        match self {
            Self::Auto => stdout_is_rich_terminal(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub emoji: EmojiMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self::new(ColorMode::Auto, EmojiMode::Auto)
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode, emoji: EmojiMode) -> Self {
        Self { color, emoji }
    }

    /// Auto-detected styling, adjusted by `NO_COLOR`, `CLICOLOR`,
    /// `CLICOLOR_FORCE` and [`COLOR_ENV_VAR`].
    pub fn from_env() -> Self {
        let var = |name: &str| env::var(name).ok();
        Self {
            color: color_mode_from_vars(
                var("NO_COLOR"),
                var("CLICOLOR"),
                var("CLICOLOR_FORCE"),
                var(COLOR_ENV_VAR),
            ),
            emoji: EmojiMode::Auto,
        }
    }

    /// ASCII only: no colors, no emoji.
    pub fn plain() -> Self {
        Self::new(ColorMode::Never, EmojiMode::Never)
    }

    pub fn formatter(self) -> Box<dyn OutputFormatter> {
        match (self.color, self.emoji) {
            (ColorMode::Never, EmojiMode::Never) => Box::new(PlainFormatter),
            _ => Box::new(ColoredFormatter::new(self)),
        }
    }
}

// Pure function: later rules win, so an explicit force beats NO_COLOR
fn color_mode_from_vars(
    no_color: Option<String>,
    clicolor: Option<String>,
    clicolor_force: Option<String>,
    explicit: Option<String>,
) -> ColorMode {
    let mut mode = ColorMode::Auto;
    if no_color.is_some() || clicolor.as_deref() == Some("0") {
        mode = ColorMode::Never;
    }
    if clicolor_force.as_deref() == Some("1") {
        mode = ColorMode::Always;
    }
    explicit
        .as_deref()
        .and_then(ColorMode::parse)
        .unwrap_or(mode)
}

pub trait OutputFormatter {
    fn success(&self, text: &str) -> String;
    fn header(&self, text: &str) -> String;
    fn emoji(&self, emoji: &str, fallback: &str) -> String;
    fn bold(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
    /// Paint `text` in a named gauge color ("white", "blue", "green").
    fn paint(&self, text: &str, color: &str) -> String;
}

pub struct ColoredFormatter {
    config: FormattingConfig,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        colored::control::set_override(config.color.should_use_color());
        Self { config }
    }

    fn colorize(&self, text: &str, f: impl FnOnce(&str) -> ColoredString) -> String {
        if self.config.color.should_use_color() {
            f(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn success(&self, text: &str) -> String {
        self.colorize(text, |t| t.green())
    }

    fn header(&self, text: &str) -> String {
        self.colorize(text, |t| t.blue().bold())
    }

    fn emoji(&self, emoji: &str, fallback: &str) -> String {
        if self.config.emoji.should_use_emoji() {
            emoji.to_string()
        } else {
            fallback.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        self.colorize(text, |t| t.bold())
    }

    fn dim(&self, text: &str) -> String {
        self.colorize(text, |t| t.dimmed())
    }

    fn paint(&self, text: &str, color: &str) -> String {
        self.colorize(text, |t| t.color(color))
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn success(&self, text: &str) -> String {
        text.to_string()
    }

    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn emoji(&self, _emoji: &str, fallback: &str) -> String {
        fallback.to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }

    fn paint(&self, text: &str, _color: &str) -> String {
        text.to_string()
    }
}

// A "dumb" terminal or a pipe gets neither color nor emoji
fn stdout_is_rich_terminal() -> bool {
    let dumb = env::var("TERM").is_ok_and(|term| term == "dumb");
    !dumb && std::io::stdout().is_terminal()
}

// Emoji used in reports, with their ASCII fallbacks
pub fn emoji_or_fallback(emoji: &str) -> (&str, &str) {
    match emoji {
        "📍" => ("📍", "[NOW]"),
        "🎯" => ("🎯", "[GRANT]"),
        "🚀" => ("🚀", "[PAID]"),
        "💎" => ("💎", "[LEADS]"),
        "🌟" => ("🌟", "[LTV]"),
        "🎉" => ("🎉", "[TOTAL]"),
        "📊" => ("📊", "[GROWTH]"),
        "📈" => ("📈", "[CHART]"),
        "✓" => ("✓", "[OK]"),
        "✗" => ("✗", "[FAIL]"),
        _ => (emoji, ""),
    }
}

/// Render a known emoji through `formatter`, falling back to its ASCII tag.
pub fn icon(formatter: &dyn OutputFormatter, emoji: &str) -> String {
    let (emoji, fallback) = emoji_or_fallback(emoji);
    formatter.emoji(emoji, fallback)
}

/// Insert thousands separators into the integer part of a decimal string.
fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

/// `$1,234.56`. Negative amounts render as `-$1,234.56`.
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${}.{cents}", group_thousands(whole))
}

/// Whole count with separators, truncating any fraction: `1,234`.
pub fn format_count(value: f64) -> String {
    let whole = value.trunc();
    let digits = format!("{:.0}", whole.abs());
    let sign = if whole < 0.0 { "-" } else { "" };
    format!("{sign}{}", group_thousands(&digits))
}

/// Percentage with one decimal: `42.0%`.
pub fn format_percent(pct: f64) -> String {
    format!("{pct:.1}%")
}

/// Signed relative change from a ratio: `0.5` renders as `+50.0%`.
pub fn format_relative_delta(ratio: f64) -> String {
    format!("{:+.1}%", ratio * 100.0)
}
