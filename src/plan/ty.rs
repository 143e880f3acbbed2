use std::fmt;
use serde::{Deserialize, Serialize};

/// The occasion an outfit is dressed for.  It changes the wording of
/// suggestions, never the colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash,
         Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "&'static str")]
pub enum Formality {
    #[default]
    Casual,
    Smart,
    Formal,
}

impl Formality {
    /// All formalities, from the least to the most formal.
    pub const ALL: [Formality; 3] =
        [Formality::Casual, Formality::Smart, Formality::Formal];

    /// The lowercase word naming the formality.
    pub fn as_str(self) -> &'static str {
        match self {
            Formality::Casual => "casual",
            Formality::Smart => "smart",
            Formality::Formal => "formal",
        }
    }
}

/// Case insensitive; any unknown word is [`Formality::Casual`].
impl From<&str> for Formality {
    fn from(word: &str) -> Self {
        match word.trim().to_ascii_lowercase().as_str() {
            "smart" => Formality::Smart,
            "formal" => Formality::Formal,
            _ => Formality::Casual,
        }
    }
}

/// A missing word (`null`) is [`Formality::Casual`].
impl From<Option<String>> for Formality {
    fn from(word: Option<String>) -> Self {
        word.as_deref().map(Formality::from).unwrap_or_default()
    }
}

impl From<Formality> for &'static str {
    fn from(f: Formality) -> Self { f.as_str() }
}

impl fmt::Display for Formality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metal tone of the accessories the wearer prefers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash,
         Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "&'static str")]
pub enum MetalPreference {
    Gold,
    Silver,
    #[default]
    Both,
}

impl MetalPreference {
    /// The lowercase word naming the preference.
    pub fn as_str(self) -> &'static str {
        match self {
            MetalPreference::Gold => "gold",
            MetalPreference::Silver => "silver",
            MetalPreference::Both => "both",
        }
    }

    /// How the metal is named in suggestions.
    pub fn phrase(self) -> &'static str {
        match self {
            MetalPreference::Both => "gold or silver",
            m => m.as_str(),
        }
    }
}

/// Case insensitive; any unknown word is [`MetalPreference::Both`].
impl From<&str> for MetalPreference {
    fn from(word: &str) -> Self {
        match word.trim().to_ascii_lowercase().as_str() {
            "gold" => MetalPreference::Gold,
            "silver" => MetalPreference::Silver,
            _ => MetalPreference::Both,
        }
    }
}

/// A missing word (`null`) is [`MetalPreference::Both`].
impl From<Option<String>> for MetalPreference {
    fn from(word: Option<String>) -> Self {
        word.as_deref().map(MetalPreference::from).unwrap_or_default()
    }
}

impl From<MetalPreference> for &'static str {
    fn from(m: MetalPreference) -> Self { m.as_str() }
}

impl fmt::Display for MetalPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named color relationships derived from a base color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyType {
    /// The base color and the hue opposite to it (180°).
    Complementary,
    /// Hues 30° on either side of the base color.
    Analogous,
    /// Three hues evenly spaced (120°) around the wheel.
    Triadic,
    /// Grays chosen to contrast with the base brightness.
    Neutrals,
}

impl HarmonyType {
    /// Harmony types in the order palettes list them.
    pub const ALL: [HarmonyType; 4] = [
        HarmonyType::Complementary, HarmonyType::Analogous,
        HarmonyType::Triadic, HarmonyType::Neutrals];

    /// The lowercase key of the harmony in a serialized palette.
    pub fn as_str(self) -> &'static str {
        match self {
            HarmonyType::Complementary => "complementary",
            HarmonyType::Analogous => "analogous",
            HarmonyType::Triadic => "triadic",
            HarmonyType::Neutrals => "neutrals",
        }
    }
}

impl fmt::Display for HarmonyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_words() {
        assert_eq!(Formality::from("FORMAL"), Formality::Formal);
        assert_eq!(Formality::from(" smart "), Formality::Smart);
        assert_eq!(Formality::from("black tie"), Formality::Casual);
        assert_eq!(MetalPreference::from("Silver"), MetalPreference::Silver);
        assert_eq!(MetalPreference::from("platinum"), MetalPreference::Both);
    }

    #[test]
    fn metal_phrase() {
        assert_eq!(MetalPreference::Both.phrase(), "gold or silver");
        assert_eq!(MetalPreference::Gold.phrase(), "gold");
        assert_eq!(MetalPreference::Silver.phrase(), "silver");
    }

    #[test]
    fn serde_words() {
        for f in Formality::ALL {
            let s = serde_json::to_string(&f).unwrap();
            assert_eq!(s, format!("\"{f}\""));
        }
        let m: MetalPreference = serde_json::from_str("\"bronze\"").unwrap();
        assert_eq!(m, MetalPreference::Both);
        let m: MetalPreference = serde_json::from_str("null").unwrap();
        assert_eq!(m, MetalPreference::Both);
        let f: Formality = serde_json::from_str("null").unwrap();
        assert_eq!(f, Formality::Casual);
        assert_eq!(serde_json::to_string(&HarmonyType::Triadic).unwrap(),
                   "\"triadic\"");
    }
}
