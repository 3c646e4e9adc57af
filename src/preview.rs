use anyhow::Result;
use crossterm::style::{Color as TermColor, Stylize};

use crate::color::Color;
use crate::theme::{ThemeVars, LIGHT_BACKGROUND_LUMINANCE};

fn to_term(c: Color) -> TermColor {
    TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Choose black or white foreground for readable text on the given swatch.
fn contrast_fg(c: Color) -> TermColor {
    if c.perceived_luminance() > LIGHT_BACKGROUND_LUMINANCE {
        TermColor::Black
    } else {
        TermColor::White
    }
}

/// Print a colored swatch per theme variable. Goes to stderr so the CSS on
/// stdout stays pipeable.
pub fn print_preview(vars: &ThemeVars) -> Result<()> {
    for (name, hex) in vars.entries() {
        let color = Color::from_hex(hex)?;
        let swatch = format!(" {hex} ")
            .with(contrast_fg(color))
            .on(to_term(color));
        eprintln!("  {name:<10} {swatch}");
    }
    Ok(())
}
