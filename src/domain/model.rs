use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One static tarot card document, loaded once at startup and never mutated.
/// `number` keeps the catalog's string form ("1".."78"); the interpretive
/// metadata fields are optional because older card documents omit them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardRecord {
    pub name: String,
    pub number: String,
    pub arcana: String,
    pub suit: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub fortune_telling: Option<Vec<String>>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub meanings: Option<HashMap<String, Vec<String>>>,
    #[serde(default)]
    pub archetype: Option<String>,
    #[serde(default)]
    pub hebrew_alphabet: Option<String>,
    #[serde(default)]
    pub numerology: Option<String>,
    #[serde(default)]
    pub elemental: Option<String>,
    #[serde(default)]
    pub mythical_spiritual: Option<String>,
    #[serde(default)]
    pub questions_to_ask: Option<Vec<String>>,
}

/// A card handed to the caller by one draw. Owned by the caller, no shared
/// state with the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawnCard {
    pub name: String,
    pub is_upright: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl DrawnCard {
    pub fn full_card_name(&self) -> String {
        if self.is_upright {
            format!("{} (UPRIGHT)", self.name)
        } else {
            format!("{} (REVERSED)", self.name)
        }
    }

    pub fn orientation(&self) -> Orientation {
        if self.is_upright {
            Orientation::Upright
        } else {
            Orientation::Reversed
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Past,
    Present,
    Future,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Past => write!(f, "past"),
            Position::Present => write!(f, "present"),
            Position::Future => write!(f, "future"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Upright,
    Reversed,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Upright => write!(f, "upright"),
            Orientation::Reversed => write!(f, "reversed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyResult {
    pub name_numerology: u32,
    pub dob_numerology: u32,
    pub personal_numerology: u32,
}

/// Input for one tarot reading: requester, question, and the three positioned
/// cards of the spread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingRequest {
    pub name: String,
    pub question: String,
    pub past_card: DrawnCard,
    pub present_card: DrawnCard,
    pub future_card: DrawnCard,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interpretation {
    pub card_name: String,
    pub position: Position,
    pub orientation: Orientation,
    pub meaning: String,
}

/// Terminal output of the orchestrator. Built fresh per request, never
/// persisted. Interpretations are always in past/present/future order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    pub interpretations: [Interpretation; 3],
    pub summary: String,
}

/// The structured shape the tarot model is asked to return: one text field
/// per spread position plus an overall summary.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TarotLlmResponse {
    pub past: String,
    pub present: String,
    pub future: String,
    pub summary: String,
}
