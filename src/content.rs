//! Static page content, embedded as JSON and parsed once per page load.

use once_cell::sync::OnceCell;
use serde::Deserialize;

use crate::error::PageError;

const CATALOG_JSON: &str = include_str!("../content/catalog.json");

static CATALOG: OnceCell<Catalog> = OnceCell::new();

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Level::Beginner => "level-badge beginner",
            Level::Intermediate => "level-badge intermediate",
            Level::Advanced => "level-badge advanced",
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Feature {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub gradient: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub level: Level,
    pub lessons: u32,
    pub duration: String,
    pub tags: Vec<String>,
    pub color: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DictionaryEntry {
    pub word: String,
    pub pronunciation: String,
    pub definition: String,
    pub level: Level,
    pub saved: bool,
    pub examples: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MatchingPair {
    pub word: String,
    pub definition: String,
    pub matched: bool,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GameSamples {
    pub matching_pairs: Vec<MatchingPair>,
    pub typing_words: Vec<String>,
    pub typing_sample: String,
    pub puzzle_letters: Vec<String>,
    pub puzzle_placed: usize,
    pub puzzle_hint: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PracticeSample {
    pub completed_days: Vec<u32>,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub success_rate: u32,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FooterSection {
    pub title: String,
    pub links: Vec<FooterLink>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Catalog {
    pub features: Vec<Feature>,
    pub courses: Vec<Course>,
    pub dictionary: Vec<DictionaryEntry>,
    pub games: GameSamples,
    pub practice: PracticeSample,
    pub footer_sections: Vec<FooterSection>,
    pub languages: Vec<String>,
}

impl Catalog {
    pub fn parse(json: &str) -> Result<Self, PageError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        if catalog.games.typing_words.is_empty() {
            return Err(PageError::Content("no typing words".to_string()));
        }
        Ok(catalog)
    }

    pub fn matched_pairs(&self) -> usize {
        self.games.matching_pairs.iter().filter(|p| p.matched).count()
    }
}

/// The embedded catalog. Parsed on first use; a broken document keeps
/// failing on every call rather than caching the error.
pub fn catalog() -> Result<&'static Catalog, PageError> {
    CATALOG.get_or_try_init(|| Catalog::parse(CATALOG_JSON))
}

/// Case-insensitive substring match on the headword.
pub fn filter_words<'a>(entries: &'a [DictionaryEntry], query: &str) -> Vec<&'a DictionaryEntry> {
    let query = query.trim().to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.word.to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = catalog().unwrap();
        assert_eq!(catalog.features.len(), 3);
        assert_eq!(catalog.courses.len(), 6);
        assert_eq!(catalog.dictionary.len(), 4);
        assert_eq!(catalog.footer_sections.len(), 4);
        assert_eq!(catalog.matched_pairs(), 2);
        assert_eq!(catalog.courses[0].level, Level::Intermediate);
        assert_eq!(catalog.courses[0].tags, vec!["Professional", "Communication"]);
    }

    #[test]
    fn broken_json_is_a_content_error() {
        match Catalog::parse("{\"features\": [") {
            Err(PageError::Content(_)) => {}
            other => panic!("expected content error, got {:?}", other),
        }
    }

    #[test]
    fn unknown_level_is_rejected() {
        let json = CATALOG_JSON.replace("\"Intermediate\"", "\"Expert\"");
        assert!(Catalog::parse(&json).is_err());
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let entries = &catalog().unwrap().dictionary;

        let words: Vec<_> = filter_words(entries, "E").iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["serendipity", "eloquent", "ephemeral"]);

        let words: Vec<_> = filter_words(entries, "QUIT").iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["ubiquitous"]);

        assert_eq!(filter_words(entries, "").len(), 4);
        assert!(filter_words(entries, "zzz").is_empty());
    }
}
