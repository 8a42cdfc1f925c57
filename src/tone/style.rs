use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed catalogue of writing tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Professional,
    Casual,
    Polite,
    Friendly,
    Confident,
    Empathetic,
    Persuasive,
    Concise,
    Detailed,
    Creative,
    Technical,
    Romantic,
    Humorous,
    Sarcasm,
    GenZ,
}

impl Tone {
    pub const ALL: [Tone; 15] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Polite,
        Tone::Friendly,
        Tone::Confident,
        Tone::Empathetic,
        Tone::Persuasive,
        Tone::Concise,
        Tone::Detailed,
        Tone::Creative,
        Tone::Technical,
        Tone::Romantic,
        Tone::Humorous,
        Tone::Sarcasm,
        Tone::GenZ,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Polite => "polite",
            Tone::Friendly => "friendly",
            Tone::Confident => "confident",
            Tone::Empathetic => "empathetic",
            Tone::Persuasive => "persuasive",
            Tone::Concise => "concise",
            Tone::Detailed => "detailed",
            Tone::Creative => "creative",
            Tone::Technical => "technical",
            Tone::Romantic => "romantic",
            Tone::Humorous => "humorous",
            Tone::Sarcasm => "sarcasm",
            Tone::GenZ => "gen_z",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Polite => "Polite",
            Tone::Friendly => "Friendly",
            Tone::Confident => "Confident",
            Tone::Empathetic => "Empathetic",
            Tone::Persuasive => "Persuasive",
            Tone::Concise => "Concise",
            Tone::Detailed => "Detailed",
            Tone::Creative => "Creative",
            Tone::Technical => "Technical",
            Tone::Romantic => "Romantic",
            Tone::Humorous => "Humorous",
            Tone::Sarcasm => "Sarcastic",
            Tone::GenZ => "Gen Z",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Tone::Professional => "Formal, business-appropriate tone",
            Tone::Casual => "Relaxed, friendly tone",
            Tone::Polite => "Courteous and respectful",
            Tone::Friendly => "Warm and approachable",
            Tone::Confident => "Assured and decisive",
            Tone::Empathetic => "Understanding and compassionate",
            Tone::Persuasive => "Convincing and compelling",
            Tone::Concise => "Brief and to the point",
            Tone::Detailed => "Comprehensive and thorough",
            Tone::Creative => "Imaginative and original",
            Tone::Technical => "Precise and specialized",
            Tone::Romantic => "Loving and affectionate",
            Tone::Humorous => "Funny and entertaining",
            Tone::Sarcasm => "Ironically mocking",
            Tone::GenZ => "Modern, trendy language",
        }
    }

    /// Look up a tone by identifier or one of its aliases, ignoring case.
    pub fn from_id(id: &str) -> Option<Tone> {
        let id = id.trim();
        match id.to_ascii_lowercase().as_str() {
            "sarcastic" => Some(Tone::Sarcasm),
            "genz" | "gen-z" => Some(Tone::GenZ),
            lowered => Tone::ALL.into_iter().find(|t| t.id() == lowered),
        }
    }
}

impl FromStr for Tone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::from_id(s).ok_or_else(|| Error::UnknownTone(s.to_string()))
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Identifier and display name of the tone a result was produced for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToneStyle {
    pub id: String,
    pub name: String,
}

impl From<Tone> for ToneStyle {
    fn from(tone: Tone) -> Self {
        Self {
            id: tone.id().to_string(),
            name: tone.name().to_string(),
        }
    }
}
