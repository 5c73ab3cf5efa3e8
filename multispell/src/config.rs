//! Spell checker configuration files.
//!
//! ```json
//! {
//!   "languages": [
//!     { "code": "en_US.UTF-8", "alphabet": "abcdefghijklmnopqrstuvwxyz", "dictionary": "en.txt" },
//!     { "code": "ru_RU.UTF-8", "alphabet": "абвгдежзийклмнопрстуфхцчшщъыьэюя", "dictionary": "ru.txt" }
//!   ]
//! }
//! ```
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("I/O error reading '{0}'")]
    Io(String, #[source] std::io::Error),

    /// The configuration is not valid JSON or has the wrong shape
    #[error("Failed to parse configuration")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageConfig {
    pub code: SmolStr,
    /// Every character of the string is one alphabet symbol
    pub alphabet: String,
    pub dictionary: PathBuf,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpellCheckerConfig {
    #[serde(default)]
    pub languages: Vec<LanguageConfig>,
}

impl SpellCheckerConfig {
    pub fn from_json_str(s: &str) -> Result<SpellCheckerConfig, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Reads a configuration file. Relative dictionary paths are resolved
    /// against the directory containing the file.
    pub fn from_path(path: &Path) -> Result<SpellCheckerConfig, ConfigError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_string_lossy().to_string(), e))?;
        let mut config = SpellCheckerConfig::from_json_str(&data)?;

        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }

        Ok(config)
    }

    pub fn resolve_relative_to(&mut self, base: &Path) {
        for lang in self.languages.iter_mut() {
            if lang.dictionary.is_relative() {
                lang.dictionary = base.join(&lang.dictionary);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speller::{Corrector, CorrectorConfigurator, SpellChecker};
    use std::io::Write;

    #[test]
    fn parse() {
        let config = SpellCheckerConfig::from_json_str(
            r#"{"languages": [{"code": "en", "alphabet": "abc", "dictionary": "/tmp/en.txt"}]}"#,
        )
        .unwrap();

        assert_eq!(
            config.languages,
            vec![LanguageConfig {
                code: "en".into(),
                alphabet: "abc".into(),
                dictionary: PathBuf::from("/tmp/en.txt"),
            }]
        );
        assert_eq!(SpellCheckerConfig::from_json_str("{}").unwrap(), SpellCheckerConfig::default());
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            SpellCheckerConfig::from_json_str(r#"{"languages": [{"code": "en"}]}"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SpellCheckerConfig::from_path(Path::new("/nonexistent/multispell.json")),
            Err(ConfigError::Io(..))
        ));
    }

    #[test]
    fn loads_languages_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();

        let mut en = std::fs::File::create(dir.path().join("en.txt")).unwrap();
        writeln!(en, "dog cat dog").unwrap();
        let mut ru = std::fs::File::create(dir.path().join("ru.txt")).unwrap();
        writeln!(ru, "да нет").unwrap();

        let config_path = dir.path().join("multispell.json");
        std::fs::write(
            &config_path,
            r#"{"languages": [
                {"code": "en", "alphabet": "abcdefghijklmnopqrstuvwxyz", "dictionary": "en.txt"},
                {"code": "ru", "alphabet": "абвгдежзийклмнопрстуфхцчшщъыьэюя", "dictionary": "ru.txt"}
            ]}"#,
        )
        .unwrap();

        let config = SpellCheckerConfig::from_path(&config_path).unwrap();
        assert_eq!(config.languages[0].dictionary, dir.path().join("en.txt"));

        let checker = SpellChecker::from_config(&config).unwrap();
        assert_eq!(checker.languages(), vec!["en", "ru"]);
        assert_eq!(checker.correct("dgo"), "dog");
        assert_eq!(checker.correct("нте"), "нет");
    }
}
