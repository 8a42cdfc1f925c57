use crate::error::{Error, Result};
use fst::{Set, SetBuilder, Streamer};
use lazy_static::lazy_static;
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Most common English words, used when no dictionary file is configured.
const SEED_WORDS: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i",
    "it", "for", "not", "on", "with", "he", "as", "you", "do", "at",
    "this", "but", "his", "by", "from", "they", "we", "say", "her", "she",
    "or", "an", "will", "my", "one", "all", "would", "there", "their", "what",
    "so", "up", "out", "if", "about", "who", "get", "which", "go", "me",
    "when", "make", "can", "like", "time", "no", "just", "him", "know", "take",
    "people", "into", "year", "your", "good", "some", "could", "them", "see", "other",
    "than", "then", "now", "look", "only", "come", "its", "over", "think", "also",
    "back", "after", "use", "two", "how", "our", "work", "first", "well", "way",
    "even", "new", "want", "because", "any", "these", "give", "day", "most", "us",
];

lazy_static! {
    static ref SEED_VOCABULARY: Arc<Set<Vec<u8>>> =
        Arc::new(build_set(SEED_WORDS.iter().copied()).expect("seed vocabulary is a valid set"));
}

/// Known words: an immutable base vocabulary plus user additions.
///
/// The base is an FST shared between dictionaries; additions live behind a
/// reader-writer lock so concurrent checks see either the set before an
/// insert or the set after it.
#[derive(Debug)]
pub struct Dictionary {
    base: Arc<Set<Vec<u8>>>,
    custom: RwLock<BTreeSet<String>>,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Dictionary {
    /// Dictionary pre-seeded with the built-in vocabulary
    pub fn seeded() -> Self {
        Self::with_base(Arc::clone(&SEED_VOCABULARY))
    }

    /// Dictionary over an explicit word list (useful for testing)
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = build_set(words)?;
        Ok(Self::with_base(Arc::new(set)))
    }

    /// Load a prebuilt FST dictionary from disk
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
        let set = Set::new(bytes)?;

        debug!(path = %path.display(), words = set.len(), "loaded dictionary");
        Ok(Self::with_base(Arc::new(set)))
    }

    /// Build an FST dictionary file from a word list
    pub fn build_from_words(words: &[String], output_path: &Path) -> Result<()> {
        let file = File::create(output_path).map_err(|e| Error::io(output_path, e))?;

        let writer = BufWriter::new(file);
        let mut builder = SetBuilder::new(writer)?;

        for word in normalize(words) {
            builder.insert(word.as_bytes())?;
        }

        builder.finish()?;

        Ok(())
    }

    fn with_base(base: Arc<Set<Vec<u8>>>) -> Self {
        Self {
            base,
            custom: RwLock::new(BTreeSet::new()),
        }
    }

    /// Check if a lower-cased word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        if self.base.contains(word.as_bytes()) {
            return true;
        }

        self.custom
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(word)
    }

    /// Add a word, lower-cased. Returns `false` if it was already known.
    pub fn insert(&self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        if word.is_empty() || self.base.contains(word.as_bytes()) {
            return false;
        }

        self.custom
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(word)
    }

    /// Visit every known word in iteration order: base vocabulary first,
    /// then additions, each in lexicographic order.
    pub fn for_each_word<F>(&self, mut visit: F)
    where
        F: FnMut(&str),
    {
        let mut stream = self.base.stream();
        while let Some(key) = stream.next() {
            if let Ok(word) = std::str::from_utf8(key) {
                visit(word);
            }
        }

        let custom = self.custom.read().unwrap_or_else(PoisonError::into_inner);
        for word in custom.iter() {
            visit(word);
        }
    }

    /// Snapshot of every known word, in `for_each_word` order.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.len());
        self.for_each_word(|word| words.push(word.to_string()));
        words
    }

    pub fn len(&self) -> usize {
        let custom = self.custom.read().unwrap_or_else(PoisonError::into_inner);
        self.base.len() + custom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn normalize<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words: Vec<String> = words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect();
    words.sort();
    words.dedup();
    words
}

fn build_set<I, S>(words: I) -> Result<Set<Vec<u8>>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(Set::from_iter(normalize(words))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_build_and_load_dictionary() {
        let dir = tempdir().unwrap();
        let dict_path = dir.path().join("test.dict");

        let words = vec!["hello".to_string(), "World".to_string(), "test".to_string()];

        Dictionary::build_from_words(&words, &dict_path).unwrap();

        let dict = Dictionary::load_from_path(&dict_path).unwrap();
        assert!(dict.contains("hello"));
        assert!(dict.contains("world"));
        assert!(!dict.contains("notfound"));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = Dictionary::load_from_path(Path::new("/nonexistent/typewise.dict")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/typewise.dict"));
    }

    #[test]
    fn test_seeded_vocabulary() {
        let dict = Dictionary::seeded();
        assert!(dict.contains("the"));
        assert!(dict.contains("because"));
        assert!(!dict.contains("xyzzy"));
        assert_eq!(dict.len(), 100);
    }

    #[test]
    fn test_insert_is_idempotent_and_lowercases() {
        let dict = Dictionary::from_words(["alpha"]).unwrap();

        assert!(dict.insert("Xyzzy"));
        assert!(!dict.insert("xyzzy"));
        assert!(!dict.insert("ALPHA"));
        assert!(dict.contains("xyzzy"));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_words_lists_base_then_additions() {
        let dict = Dictionary::from_words(["zeta", "beta"]).unwrap();
        dict.insert("alpha");

        assert_eq!(dict.words(), vec!["beta", "zeta", "alpha"]);
    }

    #[test]
    fn test_for_each_word_visits_without_collecting() {
        let dict = Dictionary::from_words(["mango", "apple"]).unwrap();
        dict.insert("kiwi");

        let mut visited = Vec::new();
        dict.for_each_word(|word| visited.push(word.len()));

        assert_eq!(visited, vec![5, 5, 4]);
        assert_eq!(dict.words(), vec!["apple", "mango", "kiwi"]);
    }

    #[test]
    fn test_concurrent_reads_during_insert() {
        let dict = Arc::new(Dictionary::from_words(["base"]).unwrap());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let dict = Arc::clone(&dict);
                std::thread::spawn(move || {
                    dict.insert(&format!("word{}", i));
                    assert!(dict.contains("base"));
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(dict.len(), 5);
    }
}
