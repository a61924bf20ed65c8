//! Search and filter queries over the catalog.
//!
//! A query always applies to the full catalog, never to an already-filtered
//! view, so filters cannot compound. The result keeps the catalog's original
//! order and is handed to the playback controller as a new active view.

use crate::library::{Catalog, Track, TrackId};

/// A search/filter query. Empty fields do not restrict the result.
#[derive(Debug, Clone, Default)]
pub struct Query {
    /// Case-insensitive substring match against title, artist and genre.
    pub text: String,
    /// Exact genre match when non-empty.
    pub genre: String,
    /// Exact artist match when non-empty.
    pub artist: String,
}

impl Query {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.genre.is_empty() && self.artist.is_empty()
    }

    /// Restrict the catalog to matching tracks, in original catalog order.
    pub fn apply(&self, catalog: &Catalog) -> Vec<TrackId> {
        catalog
            .all()
            .iter()
            .filter(|t| self.matches(t))
            .map(|t| t.id)
            .collect()
    }

    fn matches(&self, track: &Track) -> bool {
        let text = self.text.to_lowercase();
        let matches_text = text.is_empty()
            || track.title.to_lowercase().contains(&text)
            || track.artist.to_lowercase().contains(&text)
            || track.genre.to_lowercase().contains(&text);

        let matches_genre = self.genre.is_empty() || track.genre == self.genre;
        let matches_artist = self.artist.is_empty() || track.artist == self.artist;

        matches_text && matches_genre && matches_artist
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::Track;

    fn catalog() -> Catalog {
        let mut c = Catalog::new();
        for (i, (title, artist, genre)) in [
            ("Moonlight Piano", "A", "Classical"),
            ("Drum Loop", "B", "Electronic"),
            ("Night Drums", "A", "Electronic"),
        ]
        .iter()
        .enumerate()
        {
            let mut t = Track::new(
                crate::library::TrackId::new(i as u64),
                *title,
                format!("/music/{i}.mp3"),
            );
            t.artist = artist.to_string();
            t.genre = genre.to_string();
            c.add(t).unwrap();
        }
        c
    }

    fn titles(catalog: &Catalog, ids: &[TrackId]) -> Vec<String> {
        ids.iter()
            .map(|id| catalog.get(*id).unwrap().title.clone())
            .collect()
    }

    #[test]
    fn empty_query_returns_whole_catalog_in_order() {
        let c = catalog();
        assert_eq!(Query::default().apply(&c), c.ids());
    }

    #[test]
    fn text_matches_any_field_case_insensitively() {
        let c = catalog();
        assert_eq!(titles(&c, &Query::text("piano").apply(&c)), ["Moonlight Piano"]);
        assert_eq!(titles(&c, &Query::text("ELECTRO").apply(&c)), ["Drum Loop", "Night Drums"]);
        assert_eq!(titles(&c, &Query::text("b").apply(&c)), ["Drum Loop"]);
        assert!(Query::text("zither").apply(&c).is_empty());
    }

    #[test]
    fn genre_and_artist_are_exact_matches() {
        let c = catalog();
        let q = Query {
            genre: "Electronic".into(),
            ..Query::default()
        };
        assert_eq!(titles(&c, &q.apply(&c)), ["Drum Loop", "Night Drums"]);

        // Genre comparison is exact, not substring.
        let q = Query {
            genre: "Electro".into(),
            ..Query::default()
        };
        assert!(q.apply(&c).is_empty());

        let q = Query {
            artist: "A".into(),
            ..Query::default()
        };
        assert_eq!(titles(&c, &q.apply(&c)), ["Moonlight Piano", "Night Drums"]);
    }

    #[test]
    fn all_predicates_must_hold() {
        let c = catalog();
        let q = Query {
            text: "drum".into(),
            genre: "Electronic".into(),
            artist: "A".into(),
        };
        assert_eq!(titles(&c, &q.apply(&c)), ["Night Drums"]);
    }
}
