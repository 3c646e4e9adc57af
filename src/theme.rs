use crate::color::Color;

/// Fallback brand triples used when the extracted palette has fewer than
/// three colors. These match the stylesheet's shipped defaults.
pub const DEFAULT_BRAND: Color = Color::new(45, 74, 106);
pub const DEFAULT_BRAND_2: Color = Color::new(106, 160, 200);
pub const DEFAULT_ACCENT: Color = Color::new(196, 154, 108);

/// Brand luminance above this picks the light-background text pair.
pub const LIGHT_BACKGROUND_LUMINANCE: f32 = 0.6;

const TEXT_ON_LIGHT: &str = "#1d232a";
const MUTED_ON_LIGHT: &str = "#5a6876";
const TEXT_ON_DARK: &str = "#101418";
const MUTED_ON_DARK: &str = "#8b96a3";

/// The five CSS custom properties the site's stylesheet consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeVars {
    pub brand: String,
    pub brand_2: String,
    pub accent: String,
    pub text: String,
    pub muted: String,
}

impl ThemeVars {
    /// Build theme variables from a ranked palette.
    ///
    /// Returns `None` for an empty palette so the caller leaves the current
    /// theme untouched. Missing slots beyond the first fall back to the
    /// default triples. Text and muted colors are derived from the brand
    /// color's perceived luminance.
    pub fn from_palette(palette: &[Color]) -> Option<Self> {
        let brand = *palette.first()?;
        let brand_2 = palette.get(1).copied().unwrap_or(DEFAULT_BRAND_2);
        let accent = palette.get(2).copied().unwrap_or(DEFAULT_ACCENT);

        let light_background = brand.perceived_luminance() > LIGHT_BACKGROUND_LUMINANCE;
        let (text, muted) = if light_background {
            (TEXT_ON_LIGHT, MUTED_ON_LIGHT)
        } else {
            (TEXT_ON_DARK, MUTED_ON_DARK)
        };

        Some(Self {
            brand: brand.to_hex(),
            brand_2: brand_2.to_hex(),
            accent: accent.to_hex(),
            text: text.to_string(),
            muted: muted.to_string(),
        })
    }

    /// Variable name/value pairs in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("--brand", &self.brand),
            ("--brand-2", &self.brand_2),
            ("--accent", &self.accent),
            ("--text", &self.text),
            ("--muted", &self.muted),
        ]
    }

    /// Serialize as a CSS rule under the given selector.
    pub fn serialize(&self, selector: &str) -> String {
        let mut out = String::new();
        out.push_str(selector);
        out.push_str(" {\n");
        for (name, value) in self.entries() {
            out.push_str(&format!("  {name}: {value};\n"));
        }
        out.push_str("}\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_palette_yields_none() {
        assert!(ThemeVars::from_palette(&[]).is_none());
    }

    #[test]
    fn three_colors_map_to_slots() {
        let palette = [
            Color::new(200, 60, 60),
            Color::new(10, 10, 200),
            Color::new(250, 250, 10),
        ];
        let vars = ThemeVars::from_palette(&palette).unwrap();
        assert_eq!(vars.brand, "#c83c3c");
        assert_eq!(vars.brand_2, "#0a0ac8");
        assert_eq!(vars.accent, "#fafa0a");
    }

    #[test]
    fn missing_slots_fall_back_to_defaults() {
        let vars = ThemeVars::from_palette(&[Color::new(200, 60, 60)]).unwrap();
        assert_eq!(vars.brand, "#c83c3c");
        assert_eq!(vars.brand_2, DEFAULT_BRAND_2.to_hex());
        assert_eq!(vars.accent, DEFAULT_ACCENT.to_hex());
    }

    #[test]
    fn extra_colors_beyond_three_ignored() {
        let palette = [
            Color::new(1, 1, 1),
            Color::new(2, 2, 2),
            Color::new(3, 3, 3),
            Color::new(4, 4, 4),
        ];
        let vars = ThemeVars::from_palette(&palette).unwrap();
        assert_eq!(vars.accent, "#030303");
    }

    #[test]
    fn white_brand_selects_light_background_pair() {
        let vars = ThemeVars::from_palette(&[Color::new(255, 255, 255)]).unwrap();
        assert_eq!(vars.text, "#1d232a");
        assert_eq!(vars.muted, "#5a6876");
    }

    #[test]
    fn black_brand_selects_dark_background_pair() {
        let vars = ThemeVars::from_palette(&[Color::new(0, 0, 0)]).unwrap();
        assert_eq!(vars.text, "#101418");
        assert_eq!(vars.muted, "#8b96a3");
    }

    #[test]
    fn serialize_emits_all_five_variables() {
        let vars = ThemeVars::from_palette(&[Color::new(45, 74, 106)]).unwrap();
        let css = vars.serialize(":root");

        assert!(css.starts_with(":root {\n"));
        assert!(css.ends_with("}\n"));
        for name in ["--brand", "--brand-2", "--accent", "--text", "--muted"] {
            assert!(
                css.contains(&format!("  {name}: #")),
                "missing {name} in:\n{css}"
            );
        }
        assert_eq!(css.lines().count(), 7);
    }

    #[test]
    fn serialize_respects_selector() {
        let vars = ThemeVars::from_palette(&[Color::new(45, 74, 106)]).unwrap();
        let css = vars.serialize("html[data-theme=\"brand\"]");
        assert!(css.starts_with("html[data-theme=\"brand\"] {"));
    }
}
