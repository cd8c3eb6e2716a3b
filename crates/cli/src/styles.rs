//! Text styling helpers offered to label formats.
//!
//! Every colour name becomes a helper that paints its argument in that colour,
//! alongside a handful of attribute helpers (`bold`, `italic`, `underline`,
//! `strikethrough`). With colour disabled the same names are registered as
//! pass-through helpers, so a label format never fails just because styling is
//! turned off.

use cmd_menu_core::helpers::HelperRegistry;
use crossterm::style::{Color, Stylize};

/// Colour helpers, in registration order.
pub const COLORS: [(&str, Color); 16] = [
    ("black", Color::Black),
    ("darkgrey", Color::DarkGrey),
    ("red", Color::Red),
    ("darkred", Color::DarkRed),
    ("green", Color::Green),
    ("darkgreen", Color::DarkGreen),
    ("yellow", Color::Yellow),
    ("darkyellow", Color::DarkYellow),
    ("blue", Color::Blue),
    ("darkblue", Color::DarkBlue),
    ("magenta", Color::Magenta),
    ("darkmagenta", Color::DarkMagenta),
    ("cyan", Color::Cyan),
    ("darkcyan", Color::DarkCyan),
    ("white", Color::White),
    ("grey", Color::Grey),
];

/// Attribute helper names, in registration order.
pub const ATTRIBUTE_NAMES: [&str; 4] = ["bold", "italic", "underline", "strikethrough"];

fn apply_attribute(name: &str, text: &str) -> String {
    match name {
        "bold" => text.bold().to_string(),
        "italic" => text.italic().to_string(),
        "underline" => text.underlined().to_string(),
        "strikethrough" => text.crossed_out().to_string(),
        _ => text.to_string(),
    }
}

/// Builds the helper registry handed to label formats.
pub fn style_helpers(use_color: bool) -> HelperRegistry {
    let mut helpers = HelperRegistry::new();

    for (name, color) in COLORS {
        if use_color {
            helpers.register(name, move |text| text.with(color).to_string());
        } else {
            helpers.register(name, str::to_string);
        }
    }

    for name in ATTRIBUTE_NAMES {
        if use_color {
            helpers.register(name, move |text| apply_attribute(name, text));
        } else {
            helpers.register(name, str::to_string);
        }
    }

    helpers
}
