use crate::checker::dictionary::Dictionary;
use crate::checker::{SpellChecker, DEFAULT_MAX_EDIT_DISTANCE, DEFAULT_MAX_SUGGESTIONS};
use crate::error::{Error, Result};
use crate::grammar::Category;
use crate::tone::Tone;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const LOCAL_CONFIG_FILE: &str = ".typewise.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub language: String,
    pub category: Category,
    /// Tone applied when none is requested explicitly
    pub tone: Option<String>,
    pub max_suggestions: usize,
    pub max_edit_distance: usize,
    /// Prebuilt FST word list replacing the built-in vocabulary
    pub dictionary: Option<PathBuf>,
    /// Plain-text word list, one word per line
    pub personal_dictionary: Option<PathBuf>,
    pub extra_words: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            category: Category::General,
            tone: None,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
            dictionary: None,
            personal_dictionary: None,
            extra_words: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration with priority: local config > global config > defaults.
    /// CLI overrides are applied by the caller on top.
    pub fn load() -> Result<Self> {
        Self::load_from(
            Self::global_config_path().as_deref(),
            Path::new(LOCAL_CONFIG_FILE),
        )
    }

    pub fn load_from(global: Option<&Path>, local: &Path) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                config = config.merge(Self::from_file(global_path)?);
            }
        }

        if local.exists() {
            config = config.merge(Self::from_file(local)?);
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config: Self = toml::from_str(&contents).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(tone) = &config.tone {
            if Tone::from_id(tone).is_none() {
                warn!(tone = %tone, path = %path.display(), "config names an unknown tone");
            }
        }

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn merge(mut self, other: Self) -> Self {
        // other's values override self's if they differ from defaults
        let defaults = Self::default();

        if other.language != defaults.language {
            self.language = other.language;
        }
        if other.category != defaults.category {
            self.category = other.category;
        }
        if other.tone.is_some() {
            self.tone = other.tone;
        }
        if other.max_suggestions != defaults.max_suggestions {
            self.max_suggestions = other.max_suggestions;
        }
        if other.max_edit_distance != defaults.max_edit_distance {
            self.max_edit_distance = other.max_edit_distance;
        }
        if other.dictionary.is_some() {
            self.dictionary = other.dictionary;
        }
        if other.personal_dictionary.is_some() {
            self.personal_dictionary = other.personal_dictionary;
        }
        self.extra_words.extend(other.extra_words);
        self
    }

    /// Build a spell checker from the configured word lists and limits.
    pub fn build_checker(&self) -> Result<SpellChecker> {
        let dictionary = match &self.dictionary {
            Some(path) => Dictionary::load_from_path(path)?,
            None => Dictionary::seeded(),
        };

        if let Some(path) = &self.personal_dictionary {
            if path.exists() {
                let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
                for line in content.lines() {
                    let word = line.trim();
                    if !word.is_empty() && !word.starts_with('#') {
                        dictionary.insert(word);
                    }
                }
            }
        }

        for word in &self.extra_words {
            dictionary.insert(word);
        }

        Ok(SpellChecker::with_dictionary(dictionary)
            .with_limits(self.max_suggestions, self.max_edit_distance))
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "typewise").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.language, "en");
        assert_eq!(config.category, Category::General);
        assert_eq!(config.max_suggestions, 5);
        assert_eq!(config.max_edit_distance, 2);
    }

    #[test]
    fn test_merge_configs() {
        let base = Config::default();
        let override_config = Config {
            language: "fr".to_string(),
            category: Category::Formal,
            extra_words: vec!["xyzzy".to_string()],
            ..Default::default()
        };

        let merged = base.merge(override_config);
        assert_eq!(merged.language, "fr");
        assert_eq!(merged.category, Category::Formal);
        assert_eq!(merged.max_suggestions, 5);
        assert_eq!(merged.extra_words, vec!["xyzzy"]);
    }

    #[test]
    fn test_local_overrides_global() {
        let dir = tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let local = dir.path().join("local.toml");

        fs::write(&global, "category = \"casual\"\nmax_suggestions = 3\n").unwrap();
        fs::write(&local, "category = \"formal\"\ntone = \"polite\"\n").unwrap();

        let config = Config::load_from(Some(&global), &local).unwrap();
        assert_eq!(config.category, Category::Formal);
        assert_eq!(config.max_suggestions, 3);
        assert_eq!(config.tone.as_deref(), Some("polite"));
    }

    #[test]
    fn test_missing_files_give_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(None, &dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let dir = tempdir().unwrap();
        let local = dir.path().join("bad.toml");
        fs::write(&local, "category = 12").unwrap();

        let err = Config::load_from(None, &local).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_build_checker_with_personal_words() {
        let dir = tempdir().unwrap();
        let personal = dir.path().join("personal.txt");
        fs::write(&personal, "# my words\nxyzzy\n\nPlugh\n").unwrap();

        let config = Config {
            personal_dictionary: Some(personal),
            extra_words: vec!["frobnicate".to_string()],
            ..Default::default()
        };

        let checker = config.build_checker().unwrap();
        assert!(checker.is_word_correct("xyzzy"));
        assert!(checker.is_word_correct("plugh"));
        assert!(checker.is_word_correct("frobnicate"));
        assert!(!checker.is_word_correct("words"));
        assert!(checker.is_word_correct("the"));
    }
}
