//! Candidate records and the compared attribute set.
//!
//! A [`Candidate`] is one adoptable-pet record in the population store,
//! immutable once loaded. Each quiz round compares a single [`Attribute`]
//! across two candidates; [`AttrValue`] carries the heterogeneous raw value
//! and its humanized display label.

mod loader;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use loader::parse_export;

/// One attribute compared during the quiz, in its fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Species,
    Name,
    Age,
    BreedIsMixed,
    ColourPrimary,
    Size,
    Sex,
    IsShotsCurrent,
    IsSpecialNeeds,
    IsDeclawed,
    BreedPrimary,
    IsSpayedOrNeutered,
    IsHouseTrained,
}

impl Attribute {
    /// The full comparison sequence, one round per attribute.
    pub const SEQUENCE: [Attribute; 13] = [
        Attribute::Species,
        Attribute::Name,
        Attribute::Age,
        Attribute::BreedIsMixed,
        Attribute::ColourPrimary,
        Attribute::Size,
        Attribute::Sex,
        Attribute::IsShotsCurrent,
        Attribute::IsSpecialNeeds,
        Attribute::IsDeclawed,
        Attribute::BreedPrimary,
        Attribute::IsSpayedOrNeutered,
        Attribute::IsHouseTrained,
    ];

    /// Stable field name, matching the stored record format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Species => "Species",
            Attribute::Name => "Name",
            Attribute::Age => "Age",
            Attribute::BreedIsMixed => "BreedIsMixed",
            Attribute::ColourPrimary => "ColourPrimary",
            Attribute::Size => "Size",
            Attribute::Sex => "Sex",
            Attribute::IsShotsCurrent => "IsShotsCurrent",
            Attribute::IsSpecialNeeds => "IsSpecialNeeds",
            Attribute::IsDeclawed => "IsDeclawed",
            Attribute::BreedPrimary => "BreedPrimary",
            Attribute::IsSpayedOrNeutered => "IsSpayedOrNeutered",
            Attribute::IsHouseTrained => "IsHouseTrained",
        }
    }

    /// The question shown to the user for this attribute's round.
    pub fn prompt(&self) -> &'static str {
        match self {
            Attribute::Species => "Which species is superior?",
            Attribute::Name => "Which name is more cool?",
            Attribute::Age => "Old soul or young at heart?",
            Attribute::BreedIsMixed => {
                "Do you like to listen to one song, or mix them together?"
            }
            Attribute::ColourPrimary => "What's your favourite colour? (ours is #f72fe3)",
            Attribute::Size => "Would you rather a small party or a medium disco?",
            Attribute::Sex => "Men or Women?",
            Attribute::IsShotsCurrent => "Vaxed or Unvaxed, or anti-vaxer? Haha, we're joking.",
            Attribute::IsSpecialNeeds => "Pet Living with a disability?",
            Attribute::IsDeclawed => "Do you like when the claws come out?",
            Attribute::BreedPrimary => "What's a better breed?",
            Attribute::IsSpayedOrNeutered => "Do you want more pets?",
            Attribute::IsHouseTrained => "Spending time at home or away?",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw attribute value: an integer (0/1 flags) or free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Number(i64),
    Text(String),
}

impl AttrValue {
    /// Display transform: `0` becomes `"No Way!"`, `1` becomes `"Yes!"`,
    /// everything else renders unchanged.
    pub fn label(&self) -> String {
        match self {
            AttrValue::Number(0) => "No Way!".to_string(),
            AttrValue::Number(1) => "Yes!".to_string(),
            AttrValue::Number(n) => n.to_string(),
            AttrValue::Text(s) => s.clone(),
        }
    }

    /// Empty text reads are treated as missing data by the engine.
    pub fn is_empty_text(&self) -> bool {
        matches!(self, AttrValue::Text(s) if s.is_empty())
    }
}

impl From<i64> for AttrValue {
    fn from(n: i64) -> Self {
        AttrValue::Number(n)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

/// One adoptable-pet record. Field names follow the stored record format
/// (PascalCase keys, boolean attributes flattened to 0/1 flags).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Candidate {
    pub species: String,
    pub name: String,
    pub age: String,
    pub breed_is_mixed: i64,
    pub colour_primary: String,
    pub size: String,
    pub sex: String,
    pub is_shots_current: i64,
    pub is_special_needs: i64,
    pub is_declawed: i64,
    pub breed_primary: String,
    pub is_spayed_or_neutered: i64,
    pub is_house_trained: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pet_photos: String,
}

impl Candidate {
    /// Minimal record with just species and name filled in.
    pub fn new(species: impl Into<String>, name: impl Into<String>) -> Self {
        Candidate {
            species: species.into(),
            name: name.into(),
            ..Candidate::default()
        }
    }

    /// Project the raw value of one compared attribute.
    pub fn value_of(&self, attribute: Attribute) -> AttrValue {
        match attribute {
            Attribute::Species => AttrValue::Text(self.species.clone()),
            Attribute::Name => AttrValue::Text(self.name.clone()),
            Attribute::Age => AttrValue::Text(self.age.clone()),
            Attribute::BreedIsMixed => AttrValue::Number(self.breed_is_mixed),
            Attribute::ColourPrimary => AttrValue::Text(self.colour_primary.clone()),
            Attribute::Size => AttrValue::Text(self.size.clone()),
            Attribute::Sex => AttrValue::Text(self.sex.clone()),
            Attribute::IsShotsCurrent => AttrValue::Number(self.is_shots_current),
            Attribute::IsSpecialNeeds => AttrValue::Number(self.is_special_needs),
            Attribute::IsDeclawed => AttrValue::Number(self.is_declawed),
            Attribute::BreedPrimary => AttrValue::Text(self.breed_primary.clone()),
            Attribute::IsSpayedOrNeutered => AttrValue::Number(self.is_spayed_or_neutered),
            Attribute::IsHouseTrained => AttrValue::Number(self.is_house_trained),
        }
    }

    /// Presentation view for the shortlist screen.
    pub fn summary(&self) -> PetSummary {
        PetSummary {
            name: self.name.clone(),
            age: self.age.clone(),
            description: self.description.clone(),
            photo: self.pet_photos.clone(),
        }
    }
}

/// What the shortlist screen shows per winning pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetSummary {
    pub name: String,
    pub age: String,
    pub description: String,
    pub photo: String,
}
