//! Theme engine: maps shell themes to CSS variables and the toolbar stylesheet.

use std::collections::BTreeMap;

use crate::types::theme::Theme;

/// Colors for one theme.
struct Palette {
    background: &'static str,
    text: &'static str,
    input_bg: &'static str,
    border: &'static str,
}

const DEFAULT_LIGHT: Palette = Palette {
    background: "#ffffff",
    text: "#000000",
    input_bg: "#ffffff",
    border: "#c8c8c8",
};

const DARK: Palette = Palette {
    background: "#000000",
    text: "#ffffff",
    input_bg: "#1e1e1e",
    border: "#3c3c3c",
};

const SOFT_BLUE: Palette = Palette {
    background: "#add8e6",
    text: "#000000",
    input_bg: "#eef7fa",
    border: "#7fb3c4",
};

const LIGHT_GRAY: Palette = Palette {
    background: "#d3d3d3",
    text: "#000000",
    input_bg: "#f0f0f0",
    border: "#a9a9a9",
};

fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::DefaultLight => &DEFAULT_LIGHT,
        Theme::Dark => &DARK,
        Theme::SoftBlue => &SOFT_BLUE,
        Theme::LightGray => &LIGHT_GRAY,
    }
}

/// CSS custom properties for the shell chrome.
pub fn css_variables(theme: Theme) -> BTreeMap<&'static str, &'static str> {
    let p = palette(theme);
    let mut vars = BTreeMap::new();
    vars.insert("--bg-color", p.background);
    vars.insert("--text-color", p.text);
    vars.insert("--input-bg", p.input_bg);
    vars.insert("--border-color", p.border);
    vars
}

/// A `:root { ... }` rule declaring [`css_variables`].
pub fn stylesheet(theme: Theme) -> String {
    let body: String = css_variables(theme)
        .iter()
        .map(|(k, v)| format!("{k}:{v};"))
        .collect();
    format!(":root{{{body}}}")
}
