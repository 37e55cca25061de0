//! GraphQL documents and their response shapes.

use serde::Deserialize;

use super::types::{Character, CharacterPage, CharacterStatus, CharacterSummary, Episode, PageInfo};

pub const CHARACTERS_QUERY: &str = r#"
  query Characters($page: Int!) {
    characters(page: $page) {
      info {
        pages
        next
        prev
      }
      results {
        id
        name
        status
        species
        gender
        image
      }
    }
  }
"#;

pub const CHARACTER_QUERY: &str = r#"
  query Character($id: ID!) {
    character(id: $id) {
      id
      name
      status
      species
      type
      gender
      image
      origin {
        name
      }
      location {
        name
      }
      episode {
        id
        name
        episode
        air_date
      }
    }
  }
"#;

#[derive(Debug, Deserialize)]
pub(crate) struct CharactersData {
    characters: Option<CharactersWire>,
}

#[derive(Debug, Deserialize)]
struct CharactersWire {
    #[serde(default)]
    info: Option<PageInfoWire>,
    #[serde(default)]
    results: Option<Vec<Option<SummaryWire>>>,
}

#[derive(Debug, Default, Deserialize)]
struct PageInfoWire {
    pages: Option<u32>,
    next: Option<u32>,
    prev: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct SummaryWire {
    id: Option<String>,
    name: Option<String>,
    status: Option<CharacterStatus>,
    species: Option<String>,
    gender: Option<String>,
    image: Option<String>,
}

impl SummaryWire {
    fn into_summary(self) -> Option<CharacterSummary> {
        Some(CharacterSummary {
            id: self.id?,
            name: self.name.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            species: self.species.unwrap_or_default(),
            gender: self.gender.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
        })
    }
}

impl CharactersData {
    /// A `null` list or missing info reads as an empty page with no pages.
    pub(crate) fn into_page(self, page: u32) -> CharacterPage {
        let (info, results) = match self.characters {
            Some(wire) => (wire.info.unwrap_or_default(), wire.results.unwrap_or_default()),
            None => (PageInfoWire::default(), Vec::new()),
        };

        CharacterPage {
            page,
            info: PageInfo {
                pages: info.pages.unwrap_or(0),
                next: info.next,
                prev: info.prev,
            },
            items: results
                .into_iter()
                .flatten()
                .filter_map(SummaryWire::into_summary)
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CharacterData {
    character: Option<CharacterWire>,
}

#[derive(Debug, Deserialize)]
struct NamedWire {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EpisodeWire {
    id: Option<String>,
    name: Option<String>,
    episode: Option<String>,
    air_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CharacterWire {
    id: Option<String>,
    name: Option<String>,
    status: Option<CharacterStatus>,
    species: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    gender: Option<String>,
    image: Option<String>,
    origin: Option<NamedWire>,
    location: Option<NamedWire>,
    #[serde(default)]
    episode: Option<Vec<Option<EpisodeWire>>>,
}

impl CharacterData {
    /// `None` when the server answered `character: null`.
    pub(crate) fn into_character(self) -> Option<Character> {
        let wire = self.character?;
        Some(Character {
            id: wire.id?,
            name: wire.name.unwrap_or_default(),
            status: wire.status.unwrap_or_default(),
            species: wire.species.unwrap_or_default(),
            kind: wire.kind.unwrap_or_default(),
            gender: wire.gender.unwrap_or_default(),
            image: wire.image.unwrap_or_default(),
            origin: wire.origin.and_then(|o| o.name),
            location: wire.location.and_then(|l| l.name),
            episodes: wire
                .episode
                .unwrap_or_default()
                .into_iter()
                .flatten()
                .filter_map(|e| {
                    Some(Episode {
                        id: e.id?,
                        code: e.episode.unwrap_or_default(),
                        name: e.name.unwrap_or_default(),
                        air_date: e.air_date.unwrap_or_default(),
                    })
                })
                .collect(),
        })
    }
}
