//! Presentation logic for the character details dialog.

use crate::remote::{Character, Episode, QueryState};

/// Episodes shown when a character is first opened.
pub const INITIAL_REVEAL: usize = 5;

/// Episodes added per "view more".
pub const REVEAL_STEP: usize = 10;

/// Number of episodes currently rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealCount(usize);

impl Default for RevealCount {
    fn default() -> Self {
        RevealCount(INITIAL_REVEAL)
    }
}

impl RevealCount {
    pub fn get(self) -> usize {
        self.0
    }

    pub fn is_truncated(self, total: usize) -> bool {
        self.0 < total
    }

    /// Grow by [`REVEAL_STEP`], capped at `total`.
    pub fn reveal_more(&mut self, total: usize) {
        if self.is_truncated(total) {
            self.0 = (self.0 + REVEAL_STEP).min(total);
        }
    }

    pub fn visible<T>(self, items: &[T]) -> &[T] {
        &items[..self.0.min(items.len())]
    }
}

/// `true` unless the value is blank or the `unknown` sentinel.
pub fn is_displayable(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && !value.eq_ignore_ascii_case("unknown")
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayField {
    pub label: &'static str,
    pub value: String,
}

/// Attribute rows for a character.
///
/// Status is always shown (capitalized); every other row is dropped when
/// blank or `unknown`.
pub fn display_fields(character: &Character) -> Vec<DisplayField> {
    let mut fields = vec![DisplayField {
        label: "Status",
        value: capitalize_first(character.status.as_str()),
    }];

    let optional: [(&'static str, Option<&str>); 5] = [
        ("Species", Some(character.species.as_str())),
        ("Type", Some(character.kind.as_str())),
        ("Gender", Some(character.gender.as_str())),
        ("Origin", character.origin.as_deref()),
        ("Location", character.location.as_deref()),
    ];

    fields.extend(optional.into_iter().filter_map(|(label, value)| {
        value.filter(|v| is_displayable(v)).map(|v| DisplayField {
            label,
            value: v.to_string(),
        })
    }));
    fields
}

/// State of the details dialog for whichever character is open.
///
/// Results are applied only for the currently open id, so a response that
/// arrives after the user switched characters is discarded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailsTracker {
    current: Option<String>,
    reveal: RevealCount,
    state: QueryState<Character>,
}

impl DetailsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to `id` (or close with `None`).
    ///
    /// Returns `true` when the id changed; the reveal count and query state are
    /// reset in that case.
    pub fn open(&mut self, id: Option<&str>) -> bool {
        if self.current.as_deref() == id {
            return false;
        }
        self.current = id.map(str::to_string);
        self.reveal = RevealCount::default();
        self.state = if id.is_some() {
            QueryState::Loading
        } else {
            QueryState::Idle
        };
        true
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Record a query result for `id`. Ignored unless `id` is still open.
    pub fn apply(&mut self, id: &str, state: QueryState<Character>) -> bool {
        if self.current.as_deref() != Some(id) {
            return false;
        }
        self.state = state;
        true
    }

    pub fn state(&self) -> &QueryState<Character> {
        &self.state
    }

    pub fn character(&self) -> Option<&Character> {
        self.state.data()
    }

    pub fn reveal(&self) -> RevealCount {
        self.reveal
    }

    fn episode_count(&self) -> usize {
        self.character().map_or(0, |c| c.episodes.len())
    }

    pub fn can_reveal_more(&self) -> bool {
        self.reveal.is_truncated(self.episode_count())
    }

    pub fn reveal_more(&mut self) {
        let total = self.episode_count();
        self.reveal.reveal_more(total);
    }

    pub fn visible_episodes(&self) -> &[Episode] {
        match self.character() {
            Some(character) => self.reveal.visible(&character.episodes),
            None => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::CharacterStatus;

    fn character(id: &str, episodes: usize) -> Character {
        Character {
            id: id.to_string(),
            name: format!("Character {id}"),
            status: CharacterStatus::Alive,
            species: "Human".to_string(),
            kind: String::new(),
            gender: "unknown".to_string(),
            image: String::new(),
            origin: Some("Earth (C-137)".to_string()),
            location: Some("Unknown".to_string()),
            episodes: (1..=episodes)
                .map(|n| Episode {
                    id: n.to_string(),
                    code: format!("S01E{n:02}"),
                    name: format!("Episode {n}"),
                    air_date: "December 2, 2013".to_string(),
                })
                .collect(),
        }
    }

    fn ready(c: Character) -> QueryState<Character> {
        QueryState::Ready {
            data: c,
            refreshing: false,
        }
    }

    #[test]
    fn test_reveal_steps_and_cap() {
        let mut reveal = RevealCount::default();
        assert_eq!(reveal.get(), 5);
        assert!(reveal.is_truncated(12));

        reveal.reveal_more(12);
        assert_eq!(reveal.get(), 12);
        assert!(!reveal.is_truncated(12));

        reveal.reveal_more(12);
        assert_eq!(reveal.get(), 12);
    }

    #[test]
    fn test_reveal_large_list() {
        let mut reveal = RevealCount::default();
        reveal.reveal_more(51);
        assert_eq!(reveal.get(), 15);
        reveal.reveal_more(51);
        assert_eq!(reveal.get(), 25);
    }

    #[test]
    fn test_visible_slice() {
        let items = [1, 2, 3];
        assert_eq!(RevealCount::default().visible(&items), &[1, 2, 3]);
        let many: Vec<u32> = (0..20).collect();
        assert_eq!(RevealCount::default().visible(&many).len(), 5);
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("unknown"), "Unknown");
        assert_eq!(capitalize_first("ALIVE"), "Alive");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_display_fields_hide_unknown_and_empty() {
        let fields = display_fields(&character("1", 0));
        let labels: Vec<_> = fields.iter().map(|f| f.label).collect();
        assert_eq!(labels, vec!["Status", "Species", "Origin"]);
        assert_eq!(fields[0].value, "Alive");
    }

    #[test]
    fn test_status_always_shown() {
        let mut c = character("1", 0);
        c.status = CharacterStatus::Unknown;
        let fields = display_fields(&c);
        assert_eq!(fields[0].label, "Status");
        assert_eq!(fields[0].value, "Unknown");
    }

    #[test]
    fn test_tracker_resets_reveal_on_switch() {
        let mut tracker = DetailsTracker::new();
        assert!(tracker.open(Some("1")));
        tracker.apply("1", ready(character("1", 30)));
        tracker.reveal_more();
        assert_eq!(tracker.reveal().get(), 15);

        assert!(!tracker.open(Some("1")));
        assert_eq!(tracker.reveal().get(), 15);

        assert!(tracker.open(Some("2")));
        assert_eq!(tracker.reveal().get(), INITIAL_REVEAL);
        assert_eq!(tracker.state(), &QueryState::Loading);
    }

    #[test]
    fn test_tracker_drops_stale_results() {
        let mut tracker = DetailsTracker::new();
        tracker.open(Some("1"));
        tracker.open(Some("2"));

        assert!(!tracker.apply("1", ready(character("1", 3))));
        assert!(tracker.character().is_none());

        assert!(tracker.apply("2", ready(character("2", 3))));
        assert_eq!(tracker.character().unwrap().id, "2");
    }

    #[test]
    fn test_tracker_close() {
        let mut tracker = DetailsTracker::new();
        tracker.open(Some("1"));
        tracker.apply("1", ready(character("1", 8)));

        assert!(tracker.open(None));
        assert_eq!(tracker.state(), &QueryState::Idle);
        assert!(tracker.visible_episodes().is_empty());
        assert!(!tracker.apply("1", ready(character("1", 8))));
    }

    #[test]
    fn test_tracker_visible_episodes() {
        let mut tracker = DetailsTracker::new();
        tracker.open(Some("1"));
        tracker.apply("1", ready(character("1", 8)));

        assert_eq!(tracker.visible_episodes().len(), 5);
        assert!(tracker.can_reveal_more());
        tracker.reveal_more();
        assert_eq!(tracker.visible_episodes().len(), 8);
        assert!(!tracker.can_reveal_more());
    }
}
