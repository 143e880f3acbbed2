//! Color plans: harmony palettes and styling suggestions for a
//! request.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;
use crate::{Color, FormatError};

pub(crate) mod ty;
use ty::{Formality, HarmonyType, MetalPreference};

/// Base color used when a request names none.
pub const DEFAULT_BASE: Color = Color::new(0x1F, 0x29, 0x37);

/// Color [`build_neutrals`] judges brightness on when given no color.
pub const FALLBACK_NEUTRAL: Color = Color::new(0x2D, 0x37, 0x48);

/// Bases with a luma above this are "light".
const LIGHT_LUMA: f64 = 0.6;

/// Neutrals for a light base.
const DARK_NEUTRALS: [Color; 4] = [
    Color::new(0x00, 0x00, 0x00), Color::new(0x37, 0x41, 0x51),
    Color::new(0x6B, 0x72, 0x80), Color::new(0x9C, 0xA3, 0xAF)];

/// Neutrals for a dark base.
const LIGHT_NEUTRALS: [Color; 4] = [
    Color::new(0xFF, 0xFF, 0xFF), Color::new(0xD1, 0xD5, 0xDB),
    Color::new(0x9C, 0xA3, 0xAF), Color::new(0x6B, 0x72, 0x80)];

/// What to compute a plan for.
///
/// Deserializes from `{"baseColors": [...], "formality": ...,
/// "preferredMetal": ...}` where every field may be omitted or `null`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineRequest {
    /// Colors of the garments worn, as `#RGB` or `#RRGGBB` strings.
    /// Only the first one drives the palette; [`DEFAULT_BASE`] is used
    /// if empty.
    #[serde(deserialize_with = "null_as_empty")]
    pub base_colors: Vec<String>,
    /// Occasion the outfit is for; only changes the wording.
    pub formality: Formality,
    /// Metal named in the accessory suggestion.
    pub preferred_metal: MetalPreference,
}

fn null_as_empty<'de, D: Deserializer<'de>>(d: D)
                                            -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(d)?.unwrap_or_default())
}

/// Colors in harmony with the main base color, one list per
/// [`HarmonyType`].  Positions are meaningful.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// `[base, complement]`.
    pub complementary: [Color; 2],
    /// `[-30°, base, +30°]`.
    pub analogous: [Color; 3],
    /// `[base, +120°, -120°]`.
    pub triadic: [Color; 3],
    /// Four grays, see [`build_neutrals`].
    pub neutrals: [Color; 4],
}

impl Palette {
    /// Compute the palette of `base`.  The neutrals only depend on the
    /// first color (see [`build_neutrals`]).
    pub fn new(base: &[Color]) -> Palette {
        let main = base.first().copied().unwrap_or(DEFAULT_BASE);
        Palette {
            complementary: [main, main.complementary()],
            analogous: main.analogous(),
            triadic: main.triadic(),
            neutrals: build_neutrals(base),
        }
    }

    /// Returns the colors of the harmony `t`.
    pub fn get(&self, t: HarmonyType) -> &[Color] {
        match t {
            HarmonyType::Complementary => &self.complementary,
            HarmonyType::Analogous => &self.analogous,
            HarmonyType::Triadic => &self.triadic,
            HarmonyType::Neutrals => &self.neutrals,
        }
    }

    /// Iterate over all harmonies in [`HarmonyType::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (HarmonyType, &[Color])> {
        HarmonyType::ALL.into_iter().map(move |t| (t, self.get(t)))
    }
}

/// A styling tip with the colors it refers to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Short name of the tip, e.g. "Accessory".
    pub title: String,
    /// The tip itself, worded for the requested formality.
    pub details: String,
    /// Palette colors the tip refers to, in palette order.
    pub colors: Vec<Color>,
}

impl Suggestion {
    fn new(title: &str, details: String, colors: &[Color]) -> Self {
        Suggestion { title: title.to_string(), details,
                     colors: colors.to_vec() }
    }
}

/// The outcome of [`generate_color_plan`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineResult {
    /// Harmonies of the main base color.
    pub palette: Palette,
    /// The five suggestions, in a fixed order.
    pub suggestions: Vec<Suggestion>,
}

/// Return four neutrals contrasting with the brightness of the first
/// color of `base` ([`FALLBACK_NEUTRAL`] if `base` is empty).  There
/// are only two possible outcomes: a dark set for light colors and a
/// light set otherwise.  Other colors of `base` are not considered.
///
/// ```
/// use wardrobe_harmony::{build_neutrals, Color};
/// let white = Color::new(255, 255, 255);
/// assert_eq!(build_neutrals(&[white])[0], Color::new(0, 0, 0));
/// ```
pub fn build_neutrals(base: &[Color]) -> [Color; 4] {
    let primary = base.first().copied().unwrap_or(FALLBACK_NEUTRAL);
    if primary.luma() > LIGHT_LUMA { DARK_NEUTRALS } else { LIGHT_NEUTRALS }
}

fn accessory(formality: Formality, metal: MetalPreference,
             palette: &Palette) -> Suggestion {
    let opening = match formality {
        Formality::Formal => "Keep it refined",
        Formality::Smart => "Elevate the look",
        Formality::Casual => "Add personality",
    };
    // No contrast with the complement is measured: any non-formal look
    // gets a statement piece.
    let piece = if formality == Formality::Formal { "minimal" }
                else { "statement" };
    Suggestion::new(
        "Accessory",
        format!("{opening} with {} accents. Try a {piece} piece.",
                metal.phrase()),
        &palette.neutrals[.. 2])
}

/// Compute the palette of the request's main base color and the five
/// suggestions built on it, in this order: accessory, complementary
/// pop, analogous blend, triadic contrast, safe neutrals.
///
/// Every base color is validated first: the first malformed one is
/// returned as an error and nothing is computed.
///
/// ```
/// use wardrobe_harmony::{generate_color_plan, EngineRequest};
/// let plan = generate_color_plan(&EngineRequest::default())?;
/// assert_eq!(plan.palette.complementary[0].to_string(), "#1F2937");
/// assert!(plan.suggestions[0].details.contains("gold or silver"));
/// # Ok::<(), wardrobe_harmony::FormatError>(())
/// ```
pub fn generate_color_plan(req: &EngineRequest)
                           -> Result<EngineResult, FormatError> {
    let mut base = req.base_colors.iter()
        .map(|c| c.parse::<Color>())
        .collect::<Result<Vec<_>, _>>()?;
    if base.is_empty() { base.push(DEFAULT_BASE) }
    let palette = Palette::new(&base);

    let suggestions = vec![
        accessory(req.formality, req.preferred_metal, &palette),
        Suggestion::new(
            "Complementary pop",
            format!("Add a pop via complementary color: {}. \
                     Good for bags, scarves, or shoes.",
                    palette.complementary[1]),
            &palette.complementary),
        Suggestion::new(
            "Analogous blend",
            "Create a cohesive look with close-by hues \
             (jacket/shirt/accessory).".to_string(),
            &palette.analogous),
        Suggestion::new(
            "Triadic contrast",
            "Balanced contrast using three-way split. \
             Use one as an accent.".to_string(),
            &palette.triadic),
        Suggestion::new(
            "Safe neutrals",
            "If in doubt, pair with these reliable neutrals.".to_string(),
            &palette.neutrals),
    ];
    debug!(main = %base[0], formality = %req.formality,
           metal = %req.preferred_metal, "generated color plan");
    Ok(EngineResult { palette, suggestions })
}


#[cfg(test)]
mod tests {
    use super::*;

    fn request(base: &[&str], formality: Formality,
               metal: MetalPreference) -> EngineRequest {
        EngineRequest {
            base_colors: base.iter().map(|c| c.to_string()).collect(),
            formality,
            preferred_metal: metal,
        }
    }

    #[test]
    fn neutrals_two_buckets() {
        let black = Color::new(0, 0, 0);
        let white = Color::new(255, 255, 255);
        assert_eq!(build_neutrals(&[white]), DARK_NEUTRALS);
        assert_eq!(build_neutrals(&[black]), LIGHT_NEUTRALS);
        // Only the first color counts.
        assert_eq!(build_neutrals(&[black, white, white]), LIGHT_NEUTRALS);
        assert_eq!(build_neutrals(&[]), build_neutrals(&[FALLBACK_NEUTRAL]));
        assert_eq!(build_neutrals(&[]), LIGHT_NEUTRALS);
    }

    #[test]
    fn neutrals_threshold() {
        // The luma of #999999 is exactly the threshold: not light.
        let gray = Color::new(0x99, 0x99, 0x99);
        assert_eq!(build_neutrals(&[gray]), LIGHT_NEUTRALS);
        let lighter = Color::new(0x9A, 0x9A, 0x9A);
        assert_eq!(build_neutrals(&[lighter]), DARK_NEUTRALS);
        for c in crate::PRESETS {
            let expected = if c.luma() > 0.6 { DARK_NEUTRALS }
                           else { LIGHT_NEUTRALS };
            assert_eq!(build_neutrals(&[c]), expected, "{c}");
        }
    }

    #[test]
    fn formal_gold_plan() {
        let req = request(&["#1F2937"], Formality::Formal,
                          MetalPreference::Gold);
        let plan = generate_color_plan(&req).unwrap();
        let main: Color = "#1F2937".parse().unwrap();
        assert_eq!(plan.palette.complementary, [main, main.complementary()]);
        assert_eq!(plan.palette.complementary[1].to_string(), "#372D1F");
        let acc = &plan.suggestions[0];
        assert_eq!(acc.title, "Accessory");
        assert!(acc.details.contains("gold"), "{}", acc.details);
        assert!(acc.details.contains("minimal"), "{}", acc.details);
        assert!(!acc.details.contains("silver"), "{}", acc.details);
        assert_eq!(acc.details,
                   "Keep it refined with gold accents. Try a minimal piece.");
    }

    #[test]
    fn empty_request_defaults() {
        let req = request(&[], Formality::Casual, MetalPreference::Both);
        let plan = generate_color_plan(&req).unwrap();
        assert_eq!(plan.palette.complementary[0], DEFAULT_BASE);
        assert_eq!(plan.palette.analogous[1], DEFAULT_BASE);
        assert_eq!(plan.palette.triadic[0], DEFAULT_BASE);
        assert_eq!(plan.palette.neutrals, LIGHT_NEUTRALS);
        assert_eq!(plan.suggestions[0].details,
                   "Add personality with gold or silver accents. \
                    Try a statement piece.");
    }

    #[test]
    fn smart_silver_wording() {
        let req = request(&["#F59E0B"], Formality::Smart,
                          MetalPreference::Silver);
        let plan = generate_color_plan(&req).unwrap();
        assert_eq!(plan.suggestions[0].details,
                   "Elevate the look with silver accents. \
                    Try a statement piece.");
        assert_eq!(plan.suggestions[0].colors, &DARK_NEUTRALS[.. 2]);
    }

    #[test]
    fn five_suggestions_in_order() {
        let req = request(&["#0ea5e9", "#EF4444"], Formality::Casual,
                          MetalPreference::Both);
        let plan = generate_color_plan(&req).unwrap();
        let titles: Vec<_> = plan.suggestions.iter()
            .map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Accessory", "Complementary pop",
                            "Analogous blend", "Triadic contrast",
                            "Safe neutrals"]);
        let p = &plan.palette;
        assert_eq!(plan.suggestions[0].colors, &p.neutrals[.. 2]);
        assert_eq!(plan.suggestions[1].colors, p.complementary);
        assert_eq!(plan.suggestions[2].colors, p.analogous);
        assert_eq!(plan.suggestions[3].colors, p.triadic);
        assert_eq!(plan.suggestions[4].colors, p.neutrals);
        assert_eq!(plan.suggestions[1].details,
                   "Add a pop via complementary color: #E9520E. \
                    Good for bags, scarves, or shoes.");
        // Base colors are normalized in the output.
        assert_eq!(p.complementary[0].to_string(), "#0EA5E9");
    }

    #[test]
    fn malformed_color_is_rejected() {
        let req = request(&["#12"], Formality::Casual, MetalPreference::Both);
        let e = generate_color_plan(&req).unwrap_err();
        assert_eq!(e.input(), "#12");
        // Later colors are validated too.
        let req = request(&["#1F2937", "#XYZXYZ"], Formality::Formal,
                          MetalPreference::Gold);
        assert_eq!(generate_color_plan(&req).unwrap_err().input(), "#XYZXYZ");
    }

    #[test]
    fn plans_are_deterministic() {
        let req = request(&["#8B5CF6"], Formality::Smart,
                          MetalPreference::Gold);
        assert_eq!(generate_color_plan(&req).unwrap(),
                   generate_color_plan(&req).unwrap());
    }

    #[test]
    fn palette_accessors() {
        let palette = Palette::new(&[Color::new(255, 0, 0)]);
        let kinds: Vec<_> = palette.iter().map(|(t, c)| (t, c.len()))
            .collect();
        assert_eq!(kinds, [(HarmonyType::Complementary, 2),
                           (HarmonyType::Analogous, 3),
                           (HarmonyType::Triadic, 3),
                           (HarmonyType::Neutrals, 4)]);
        assert_eq!(palette.get(HarmonyType::Triadic)[1],
                   Color::new(0, 255, 0));
    }

    #[test]
    fn request_json() {
        let req: EngineRequest = serde_json::from_str(
            r##"{"baseColors": ["#abc"], "formality": "formal"}"##).unwrap();
        assert_eq!(req.formality, Formality::Formal);
        assert_eq!(req.preferred_metal, MetalPreference::Both);
        let req: EngineRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req, EngineRequest::default());
    }

    #[test]
    fn request_json_nulls_default() {
        for json in [r#"{"preferredMetal": null}"#, r#"{"formality": null}"#,
                     r#"{"baseColors": null}"#,
                     r#"{"baseColors": null, "formality": null,
                         "preferredMetal": null}"#] {
            let req: EngineRequest = serde_json::from_str(json)
                .unwrap_or_else(|e| panic!("{json}: {e}"));
            assert_eq!(req, EngineRequest::default(), "{json}");
        }
        let req: EngineRequest = serde_json::from_str(
            r#"{"formality": "smart", "preferredMetal": null}"#).unwrap();
        assert_eq!(req.formality, Formality::Smart);
        assert_eq!(req.preferred_metal, MetalPreference::Both);
        let plan = generate_color_plan(&req).unwrap();
        assert!(plan.suggestions[0].details.contains("gold or silver"));
    }

    #[test]
    fn result_json() {
        let req = request(&["#1F2937"], Formality::Formal,
                          MetalPreference::Gold);
        let plan = generate_color_plan(&req).unwrap();
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["palette"]["neutrals"][0], "#FFFFFF");
        assert_eq!(json["palette"]["complementary"][0], "#1F2937");
        assert_eq!(json["suggestions"][4]["title"], "Safe neutrals");
        let back: EngineResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, plan);
    }
}
