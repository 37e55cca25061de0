//! Read-only character data from the remote dataset.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterStatus {
    Alive,
    Dead,
    #[default]
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl CharacterStatus {
    /// Wire spelling (`Alive`, `Dead`, `unknown`).
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterStatus::Alive => "Alive",
            CharacterStatus::Dead => "Dead",
            CharacterStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields returned by the list query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSummary {
    pub id: String,
    pub name: String,
    pub status: CharacterStatus,
    pub species: String,
    pub gender: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub id: String,
    /// Season/episode code such as `S01E01`
    pub code: String,
    pub name: String,
    pub air_date: String,
}

/// Full character as returned by the detail query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub status: CharacterStatus,
    pub species: String,
    /// Subspecies or variant, often empty
    pub kind: String,
    pub gender: String,
    pub image: String,
    pub origin: Option<String>,
    pub location: Option<String>,
    pub episodes: Vec<Episode>,
}

impl Character {
    pub fn summary(&self) -> CharacterSummary {
        CharacterSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            status: self.status,
            species: self.species.clone(),
            gender: self.gender.clone(),
            image: self.image.clone(),
        }
    }
}

/// Pagination metadata reported by the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub pages: u32,
    pub next: Option<u32>,
    pub prev: Option<u32>,
}

/// One page of the character list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPage {
    /// The 1-based page this result answers
    pub page: u32,
    pub info: PageInfo,
    pub items: Vec<CharacterSummary>,
}

impl CharacterPage {
    pub fn total_pages(&self) -> u32 {
        self.info.pages
    }

    pub fn has_next(&self) -> bool {
        self.info.next.is_some()
    }

    pub fn has_prev(&self) -> bool {
        self.info.prev.is_some()
    }
}
