//! Diagnostic labels produced by banding

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};

/// The five bands plus the "cannot tell" case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosticLevel {
    /// Below the expected range: the lift should go up
    Weak,
    Rising,
    Ideal,
    Strong,
    /// At or past the top of the expected range
    Limit,
    /// Missing or non-positive data
    Unavailable,
}

impl DiagnosticLevel {
    /// Text shown to the athlete
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Weak => "Low",
            Self::Rising => "Rising",
            Self::Ideal => "Ideal",
            Self::Strong => "Strong",
            Self::Limit => "Limit",
            Self::Unavailable => "N/A",
        }
    }
}

impl std::fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Arrow direction attached to a label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Icon {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::UpRight => "↗",
            Self::Right => "→",
            Self::DownRight => "↘",
            Self::Down => "↓",
        }
    }
}

/// Color hint. Green marks "room to grow", not "good".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColorTag {
    Green,
    Yellow,
    Red,
    Neutral,
}

impl ColorTag {
    /// Paint text for terminal output
    pub fn paint(&self, text: &str) -> ColoredString {
        match self {
            Self::Green => text.green(),
            Self::Yellow => text.yellow(),
            Self::Red => text.red(),
            Self::Neutral => text.bright_black(),
        }
    }
}

/// One classification outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticLabel {
    pub label: DiagnosticLevel,
    pub icon: Icon,
    pub color_tag: ColorTag,
}

/// Band index → label. Index 0 is below the first bound.
const BAND_TABLE: [DiagnosticLabel; 5] = [
    DiagnosticLabel { label: DiagnosticLevel::Weak, icon: Icon::Up, color_tag: ColorTag::Green },
    DiagnosticLabel { label: DiagnosticLevel::Rising, icon: Icon::UpRight, color_tag: ColorTag::Yellow },
    DiagnosticLabel { label: DiagnosticLevel::Ideal, icon: Icon::Right, color_tag: ColorTag::Yellow },
    DiagnosticLabel { label: DiagnosticLevel::Strong, icon: Icon::DownRight, color_tag: ColorTag::Yellow },
    DiagnosticLabel { label: DiagnosticLevel::Limit, icon: Icon::Down, color_tag: ColorTag::Red },
];

impl DiagnosticLabel {
    /// Label for band `index`; anything past the table is Limit
    pub fn for_band(index: usize) -> Self {
        BAND_TABLE[index.min(BAND_TABLE.len() - 1)]
    }

    pub fn unavailable() -> Self {
        Self {
            label: DiagnosticLevel::Unavailable,
            icon: Icon::Right,
            color_tag: ColorTag::Neutral,
        }
    }

    pub fn is_available(&self) -> bool {
        self.label != DiagnosticLevel::Unavailable
    }

    /// "↓ Limit", colored by tag
    pub fn to_terminal_string(&self) -> String {
        self.color_tag
            .paint(&self.to_parseable_string())
            .to_string()
    }

    pub fn to_parseable_string(&self) -> String {
        format!("{} {}", self.icon.glyph(), self.label)
    }
}

/// Labels for the three monitored lifts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    /// Snatch efficiency vs snatch thresholds
    pub snatch: DiagnosticLabel,
    /// Clean-and-jerk efficiency vs clean-and-jerk thresholds
    pub clean_jerk: DiagnosticLabel,
    /// Back squat position inside the projected range
    pub back_squat: DiagnosticLabel,
}
