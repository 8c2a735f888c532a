//! # Grammar Store
//!
//! Holds the declarative command grammar: for every category, a table from a
//! command key (`mysql export <db> <file.sql>`) to a free-text description.
//! The grammar is loaded once at startup and never modified afterwards.
//!
//! A key is a sequence of space-separated tokens. A token wrapped in angle
//! brackets (`<db>`) is a placeholder for one argument; every other token is a
//! literal. The run of literal tokens before the first placeholder is the key's
//! *literal head*.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::{collections::BTreeMap, fs, io, path::Path};

lazy_static! {
    static ref PLACEHOLDER_RE: Regex = Regex::new(r"<[^<>\s]+>").unwrap();
}

/// The grammar shipped with the binary, written to disk on first run.
pub const BUNDLED_GRAMMAR: &str = include_str!("../../assets/commands.json");

/// On-disk shape of the grammar file.
#[derive(Deserialize, Debug, Default)]
struct GrammarDocument {
    #[serde(default)]
    commands: BTreeMap<String, BTreeMap<String, String>>,
}

/// One valid command shape and its description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarEntry {
    /// Space-separated literal and `<placeholder>` tokens.
    pub key: String,
    /// Free text; only its placeholders are counted.
    pub description: String,
}

impl GrammarEntry {
    /// An entry with whitespace in `key` normalized to single spaces.
    pub fn new(key: &str, description: impl Into<String>) -> Self {
        Self {
            key: normalize_key(key),
            description: description.into(),
        }
    }

    /// The key split into its tokens.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.key.split_whitespace()
    }

    /// The literal tokens that precede the first placeholder.
    pub fn literal_head(&self) -> Vec<&str> {
        self.tokens().take_while(|token| !is_placeholder(token)).collect()
    }

    /// Number of key tokens following the literal head.
    pub fn tail_len(&self) -> usize {
        self.tokens().count() - self.literal_head().len()
    }
}

/// Returns `true` when the whole token is a `<name>` placeholder.
pub fn is_placeholder(token: &str) -> bool {
    PLACEHOLDER_RE
        .find(token)
        .is_some_and(|m| m.start() == 0 && m.end() == token.len())
}

/// Counts the `<name>`-shaped substrings of `text`.
pub fn placeholder_count(text: &str) -> usize {
    PLACEHOLDER_RE.find_iter(text).count()
}

/// The number of arguments a grammar entry expects.
///
/// Placeholders in the description are authoritative. A description without
/// any falls back to the placeholders written in the key itself.
pub fn expected_arg_count(entry: &GrammarEntry) -> usize {
    match placeholder_count(&entry.description) {
        0 => placeholder_count(&entry.key),
        n => n,
    }
}

fn normalize_key(key: &str) -> String {
    key.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The in-memory grammar, keyed by category and then by command key.
#[derive(Debug, Clone, Default)]
pub struct GrammarStore {
    categories: BTreeMap<String, BTreeMap<String, GrammarEntry>>,
}

impl GrammarStore {
    /// Loads the grammar file at `path`.
    ///
    /// A missing or malformed file yields an empty store, so every category is
    /// then reported as unknown instead of validating against a partial grammar.
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Could not read grammar file '{}': {}", path.display(), e);
                return Self::default();
            }
        };
        match Self::from_json(&content) {
            Ok(store) => {
                log::debug!(
                    "Loaded grammar from '{}' ({} categories)",
                    path.display(),
                    store.categories.len()
                );
                store
            }
            Err(e) => {
                log::warn!("Ignoring malformed grammar file '{}': {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parses a grammar document of the form `{"commands": {category: {key: description}}}`.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let document: GrammarDocument = serde_json::from_str(content)?;
        Ok(Self::from_map(document.commands))
    }

    /// Builds a store from `category -> key -> description`.
    pub fn from_map(commands: BTreeMap<String, BTreeMap<String, String>>) -> Self {
        let categories = commands
            .into_iter()
            .map(|(category, keys)| {
                let entries = keys
                    .into_iter()
                    .map(|(key, description)| {
                        let entry = GrammarEntry::new(&key, description);
                        (entry.key.clone(), entry)
                    })
                    .collect();
                (category, entries)
            })
            .collect();
        Self { categories }
    }

    /// The grammar shipped with the binary.
    pub fn bundled() -> Result<Self, serde_json::Error> {
        Self::from_json(BUNDLED_GRAMMAR)
    }

    /// True when no category was loaded.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// True when the grammar defines `category`.
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// Every category name, in sorted order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Every entry of a category, in key order.
    pub fn entries<'a>(&'a self, category: &str) -> impl Iterator<Item = &'a GrammarEntry> + use<'a> {
        self.categories
            .get(category)
            .into_iter()
            .flat_map(|entries| entries.values())
    }

    /// Exact lookup of a command key.
    pub fn lookup(&self, category: &str, key: &str) -> Option<&GrammarEntry> {
        self.categories.get(category)?.get(&normalize_key(key))
    }

    /// Finds the entry whose key is `head` exactly or, failing that, the first
    /// entry whose literal head equals `head` (`-u logs` finds `-u logs <service>`).
    pub fn lookup_literal(&self, category: &str, head: &str) -> Option<&GrammarEntry> {
        if let Some(entry) = self.lookup(category, head) {
            return Some(entry);
        }
        let wanted: Vec<&str> = head.split_whitespace().collect();
        self.entries(category)
            .find(|entry| entry.literal_head() == wanted)
    }

    /// Every key of the category whose token sequence starts with the tokens of
    /// `prefix`. `-u backup` matches `-u backup list` but not `-u backups`.
    pub fn keys_with_prefix(&self, category: &str, prefix: &str) -> Vec<String> {
        let wanted: Vec<&str> = prefix.split_whitespace().collect();
        self.entries(category)
            .filter(|entry| {
                let tokens: Vec<&str> = entry.tokens().collect();
                tokens.starts_with(&wanted)
            })
            .map(|entry| entry.key.clone())
            .collect()
    }
}

/// Writes the bundled grammar to `path` when no grammar file exists yet.
/// Returns `true` if a file was written.
pub fn ensure_default_grammar(path: &Path) -> io::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, BUNDLED_GRAMMAR)?;
    log::debug!("Wrote default grammar to '{}'", path.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn sample() -> GrammarStore {
        GrammarStore::from_json(
            r#"{"commands": {
                "utils": {
                    "-u backup create": "Create a backup",
                    "-u backup restore <zip>": "Restore <zip>",
                    "-u backups": "List backups",
                    "-u logs <service>": "Tail logs"
                },
                "apache": { "apache start": "Start Apache" }
            }}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_placeholder_count() {
        assert_eq!(placeholder_count("Export <db> into <file.sql>"), 2);
        assert_eq!(placeholder_count("Start Apache"), 0);
        assert_eq!(placeholder_count("a < b > c"), 0);
        assert_eq!(placeholder_count("<<x>>"), 1);
    }

    #[test]
    fn test_is_placeholder_requires_whole_token() {
        assert!(is_placeholder("<zip>"));
        assert!(is_placeholder("<file.sql>"));
        assert!(!is_placeholder("x<zip>"));
        assert!(!is_placeholder("<zip>s"));
        assert!(!is_placeholder("restore"));
    }

    #[test]
    fn test_expected_arg_count_falls_back_to_key() {
        let entry = GrammarEntry::new("-u logs <service>", "Tail logs");
        assert_eq!(expected_arg_count(&entry), 1);

        let entry = GrammarEntry::new("mysql export <db> <file>", "Export <db>");
        assert_eq!(expected_arg_count(&entry), 1);
    }

    #[test]
    fn test_literal_head_and_tail() {
        let entry = GrammarEntry::new("apache   module enable <module>", "Enable");
        assert_eq!(entry.key, "apache module enable <module>");
        assert_eq!(entry.literal_head(), vec!["apache", "module", "enable"]);
        assert_eq!(entry.tail_len(), 1);
    }

    #[test]
    fn test_lookup_and_categories() {
        let store = sample();
        assert!(store.has_category("utils"));
        assert!(!store.has_category("docker"));
        assert_eq!(store.categories().collect::<Vec<_>>(), vec!["apache", "utils"]);
        assert!(store.lookup("apache", "apache start").is_some());
        assert!(store.lookup("apache", "apache stop").is_none());
        assert!(store.lookup("utils", "apache start").is_none());
    }

    #[test]
    fn test_lookup_literal_matches_head() {
        let store = sample();
        let entry = store.lookup_literal("utils", "-u logs").unwrap();
        assert_eq!(entry.key, "-u logs <service>");
        assert!(store.lookup_literal("utils", "-u logs apache").is_none());
    }

    #[test]
    fn test_keys_with_prefix_is_token_wise() {
        let store = sample();
        let keys = store.keys_with_prefix("utils", "-u backup");
        assert_eq!(keys, vec!["-u backup create", "-u backup restore <zip>"]);
    }

    #[test]
    fn test_load_missing_file_yields_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = GrammarStore::load(&dir.path().join("missing.json"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_malformed_file_yields_empty_store() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ \"commands\": [ not json").unwrap();
        file.flush().unwrap();
        assert!(GrammarStore::load(file.path()).is_empty());
    }

    #[test]
    fn test_bundled_grammar_parses() {
        let store = GrammarStore::bundled().unwrap();
        for category in ["core", "help", "apache", "mysql", "php", "utils", "vhosts", "laravel"] {
            assert!(store.has_category(category), "missing category {}", category);
        }
        assert!(store.lookup("utils", "-u backup restore <zip>").is_some());
    }

    #[test]
    fn test_ensure_default_grammar_writes_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("commands.json");
        assert!(ensure_default_grammar(&path).unwrap());
        assert!(!ensure_default_grammar(&path).unwrap());
        assert!(GrammarStore::load(&path).has_category("mysql"));
    }
}
