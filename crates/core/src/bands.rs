use serde::{Deserialize, Serialize};

pub const HIGH_THRESHOLD: f64 = 4.0;
pub const MID_THRESHOLD: f64 = 3.0;

/// Display tier of a score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Tone {
    Neutral,
    Good,
    Medium,
    Poor,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Good => "good",
            Tone::Medium => "medium",
            Tone::Poor => "poor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Band {
    High,
    Mid,
    Low,
}

fn band(score: Option<f64>) -> Option<Band> {
    match score {
        Some(value) if value != 0.0 && !value.is_nan() => Some(if value >= HIGH_THRESHOLD {
            Band::High
        } else if value >= MID_THRESHOLD {
            Band::Mid
        } else {
            Band::Low
        }),
        _ => None,
    }
}

pub fn rating_tone(rating: Option<f64>) -> Tone {
    match band(rating) {
        Some(Band::High) => Tone::Good,
        Some(Band::Mid) => Tone::Medium,
        Some(Band::Low) => Tone::Poor,
        None => Tone::Neutral,
    }
}

/// Same bands as [`rating_tone`], read the other way round.
pub fn difficulty_tone(difficulty: Option<f64>) -> Tone {
    match band(difficulty) {
        Some(Band::High) => Tone::Poor,
        Some(Band::Mid) => Tone::Medium,
        Some(Band::Low) => Tone::Good,
        None => Tone::Neutral,
    }
}

pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(value) if value != 0.0 => format!("{value:.1}"),
        _ => "N/A".to_string(),
    }
}

pub fn format_would_take_again(percent: Option<f64>) -> String {
    match percent {
        Some(value) if value != -1.0 => format!("{value}%"),
        _ => "N/A".to_string(),
    }
}
