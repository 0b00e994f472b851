use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Prefix for text styled with a name the theme does not define.
const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Named styles the templates refer to through the `style` filter.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    /// Styles `text`; plain text when color is off. Unknown names are flagged
    /// either way so template typos show up.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => {
                style.clone().force_styling(true).apply_to(text).to_string()
            }
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

pub static STORE_THEME: Lazy<Theme> = Lazy::new(|| {
    let bronze = rgb_to_ansi256((0x8B, 0x73, 0x55));
    let muted = rgb_to_ansi256((154, 154, 154));
    Theme::new()
        .add("heading", Style::new().bold().underlined())
        .add("title", Style::new().bold())
        .add("artist", Style::new().italic())
        .add("price", Style::new().color256(bronze).bold())
        .add("original_price", Style::new().color256(muted).strikethrough())
        .add("muted", Style::new().color256(muted))
        .add("badge_new", Style::new().black().on_green())
        .add("badge_sale", Style::new().white().on_red())
        .add("badge", Style::new().cyan())
        .add("stars", Style::new().yellow())
        .add("id", Style::new().yellow())
        .add("active", Style::new().green().bold())
        .add("label", Style::new().dim())
        .add("total", Style::new().bold().color256(bronze))
        .add("warning", Style::new().yellow())
});
