//! Normalized response cache.
//!
//! Characters are stored once by id; list pages only keep their metadata and
//! the ids in order. A character seen in a list page is therefore available as
//! a summary before its detail query has ever run.

use std::collections::HashMap;

use super::types::{Character, CharacterPage, CharacterSummary, Episode, PageInfo};

#[derive(Debug, Clone)]
struct CharacterDetail {
    kind: String,
    origin: Option<String>,
    location: Option<String>,
    episodes: Vec<Episode>,
}

#[derive(Debug, Clone)]
struct CharacterEntry {
    summary: CharacterSummary,
    detail: Option<CharacterDetail>,
}

#[derive(Debug, Clone)]
struct PageEntry {
    info: PageInfo,
    ids: Vec<String>,
}

#[derive(Debug, Default)]
pub struct QueryCache {
    characters: HashMap<String, CharacterEntry>,
    pages: HashMap<u32, PageEntry>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a list page, refreshing the summary of every character on it.
    pub fn write_page(&mut self, page: &CharacterPage) {
        for summary in &page.items {
            self.characters
                .entry(summary.id.clone())
                .and_modify(|entry| entry.summary = summary.clone())
                .or_insert_with(|| CharacterEntry {
                    summary: summary.clone(),
                    detail: None,
                });
        }
        self.pages.insert(
            page.page,
            PageEntry {
                info: page.info,
                ids: page.items.iter().map(|s| s.id.clone()).collect(),
            },
        );
    }

    /// Rebuild a cached page; `None` unless every referenced character is known.
    pub fn read_page(&self, page: u32) -> Option<CharacterPage> {
        let entry = self.pages.get(&page)?;
        let items = entry
            .ids
            .iter()
            .map(|id| self.characters.get(id).map(|c| c.summary.clone()))
            .collect::<Option<Vec<_>>>()?;
        Some(CharacterPage {
            page,
            info: entry.info,
            items,
        })
    }

    pub fn write_character(&mut self, character: &Character) {
        self.characters.insert(
            character.id.clone(),
            CharacterEntry {
                summary: character.summary(),
                detail: Some(CharacterDetail {
                    kind: character.kind.clone(),
                    origin: character.origin.clone(),
                    location: character.location.clone(),
                    episodes: character.episodes.clone(),
                }),
            },
        );
    }

    /// Full character, only if a detail query has populated it.
    pub fn read_character(&self, id: &str) -> Option<Character> {
        let entry = self.characters.get(id)?;
        let detail = entry.detail.as_ref()?;
        let summary = &entry.summary;
        Some(Character {
            id: summary.id.clone(),
            name: summary.name.clone(),
            status: summary.status,
            species: summary.species.clone(),
            kind: detail.kind.clone(),
            gender: summary.gender.clone(),
            image: summary.image.clone(),
            origin: detail.origin.clone(),
            location: detail.location.clone(),
            episodes: detail.episodes.clone(),
        })
    }

    /// Whatever is known about a character, possibly only list fields.
    pub fn read_summary(&self, id: &str) -> Option<CharacterSummary> {
        self.characters.get(id).map(|entry| entry.summary.clone())
    }

    pub fn clear(&mut self) {
        self.characters.clear();
        self.pages.clear();
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn character_count(&self) -> usize {
        self.characters.len()
    }
}
