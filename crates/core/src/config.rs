use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("quiz configuration is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown environment `{0}`, expected `production` or `development`")]
    UnknownEnvironment(String),
}

/// Controls how chatty diagnostics are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    Development,
}

impl Environment {
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownEnvironment` for anything but
    /// `production` or `development` (case-insensitive).
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "development" => Ok(Self::Development),
            _ => Err(ConfigError::UnknownEnvironment(raw.to_string())),
        }
    }

    /// Diagnostic records (validation, lookups, counts) are only emitted in development.
    #[must_use]
    pub fn diagnostics_enabled(self) -> bool {
        matches!(self, Self::Development)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Texts {
    pub app_title: String,
    pub submit_label: String,
    pub empty_set: String,
    pub congratulation: String,
    pub help: String,
    pub back_to_index: String,
    pub load_failed: String,
    pub render_failed: String,
}

impl Default for Texts {
    fn default() -> Self {
        Self {
            app_title: "Tiedonhaun mobiilisovellus".to_string(),
            submit_label: "Tarkista".to_string(),
            empty_set: "Ei vielä kysymyksiä tässä osiossa".to_string(),
            congratulation: "Kaikki oikein! Onneksi olkoon!".to_string(),
            help: "Kirjoita vastaus kenttään ja paina Tarkista.".to_string(),
            back_to_index: "Takaisin kysymyssarjoihin".to_string(),
            load_failed: "Kysymysten lataaminen epäonnistui.".to_string(),
            render_failed: "Sovelluksessa tapahtui virhe.".to_string(),
        }
    }
}

/// Class tokens written into the rendered markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    pub hidden: String,
    pub question: String,
    pub correct: String,
    pub incorrect: String,
    pub group: String,
    pub message: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            hidden: "piilotettu".to_string(),
            question: "question".to_string(),
            correct: "correct".to_string(),
            incorrect: "incorrect".to_string(),
            group: "wrap".to_string(),
            message: "message".to_string(),
        }
    }
}

/// Element ids of the page regions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionIds {
    pub content: String,
    pub help: String,
    pub navigation: String,
}

impl Default for RegionIds {
    fn default() -> Self {
        Self {
            content: "content".to_string(),
            help: "ohje".to_string(),
            navigation: "navigaatio".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub environment: Environment,
    pub texts: Texts,
    pub classes: ClassNames,
    pub regions: RegionIds,
}

impl QuizConfig {
    /// Reads a configuration; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` for malformed input.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }
}
