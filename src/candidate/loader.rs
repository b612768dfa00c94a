//! Converts a Petfinder-style JSON export into flat candidate records.
//!
//! The export groups fields under nested `breeds`, `colors`, `attributes`,
//! and `photos` objects, any of which may be null or absent. The loader
//! flattens booleans to 0/1 flags, picks the first usable photo, and skips
//! animals without photos so every record can be rendered.

use serde::Deserialize;

use super::Candidate;

#[derive(Deserialize)]
struct Export {
    #[serde(default)]
    animals: Vec<Animal>,
}

#[derive(Default, Deserialize)]
struct Animal {
    #[serde(default)]
    species: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    age: Option<String>,
    #[serde(default)]
    gender: Option<String>,
    #[serde(default)]
    size: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    breeds: Breeds,
    #[serde(default)]
    colors: Colors,
    #[serde(default)]
    attributes: Attributes,
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Default, Deserialize)]
struct Breeds {
    #[serde(default)]
    primary: Option<String>,
    #[serde(default)]
    mixed: Option<bool>,
}

#[derive(Default, Deserialize)]
struct Colors {
    #[serde(default)]
    primary: Option<String>,
}

#[derive(Default, Deserialize)]
struct Attributes {
    #[serde(default)]
    spayed_neutered: Option<bool>,
    #[serde(default)]
    house_trained: Option<bool>,
    #[serde(default)]
    declawed: Option<bool>,
    #[serde(default)]
    special_needs: Option<bool>,
    #[serde(default)]
    shots_current: Option<bool>,
}

#[derive(Default, Deserialize)]
struct Photo {
    #[serde(default)]
    small: Option<String>,
    #[serde(default)]
    medium: Option<String>,
    #[serde(default)]
    large: Option<String>,
    #[serde(default)]
    full: Option<String>,
}

/// Parse an export document (`{"animals": [...]}`) into candidate records.
///
/// Animals without any photo are dropped. Absent booleans flatten to 0.
pub fn parse_export(json: &str) -> Result<Vec<Candidate>, serde_json::Error> {
    let export: Export = serde_json::from_str(json)?;
    Ok(export.animals.into_iter().filter_map(convert).collect())
}

fn convert(animal: Animal) -> Option<Candidate> {
    let photo = animal.photos.into_iter().find_map(|p| {
        p.medium.or(p.large).or(p.full).or(p.small)
    })?;

    Some(Candidate {
        species: animal.species.unwrap_or_default(),
        name: animal.name.unwrap_or_default(),
        age: animal.age.unwrap_or_default(),
        breed_is_mixed: flag(animal.breeds.mixed),
        colour_primary: animal.colors.primary.unwrap_or_default(),
        size: animal.size.unwrap_or_default(),
        sex: animal.gender.unwrap_or_default(),
        is_shots_current: flag(animal.attributes.shots_current),
        is_special_needs: flag(animal.attributes.special_needs),
        is_declawed: flag(animal.attributes.declawed),
        breed_primary: animal.breeds.primary.unwrap_or_default(),
        is_spayed_or_neutered: flag(animal.attributes.spayed_neutered),
        is_house_trained: flag(animal.attributes.house_trained),
        description: animal
            .description
            .map(|d| d.trim().to_string())
            .unwrap_or_default(),
        pet_photos: photo,
    })
}

fn flag(value: Option<bool>) -> i64 {
    match value {
        Some(true) => 1,
        _ => 0,
    }
}
