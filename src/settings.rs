use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::modules::navigation::{DEFAULT_SEARCH_TEMPLATE, SEARCH_TERMS_PLACEHOLDER};

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub enum SearchEngine {
    #[default]
    Yahoo,
    DuckDuckGo,
    Google,
    Bing,
    Brave,
    Custom { template: String },
}

impl SearchEngine {
    /// Search URL template with a `{searchTerms}` placeholder.
    pub fn template(&self) -> &str {
        match self {
            Self::Yahoo => DEFAULT_SEARCH_TEMPLATE,
            Self::DuckDuckGo => "https://duckduckgo.com/?q={searchTerms}",
            Self::Google => "https://google.com/search?q={searchTerms}",
            Self::Bing => "https://bing.com/search?q={searchTerms}",
            Self::Brave => "https://search.brave.com/search?q={searchTerms}",
            Self::Custom { template } => template,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub search_engine: SearchEngine,
}

impl Settings {
    pub fn path_in(app_data_dir: &Path) -> PathBuf {
        app_data_dir.join(SETTINGS_FILE)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.search_engine.template().contains(SEARCH_TERMS_PLACEHOLDER) {
            return Err(format!(
                "search template '{}' has no {} placeholder",
                self.search_engine.template(),
                SEARCH_TERMS_PLACEHOLDER
            ));
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let mut settings: Self = match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                log::warn!("[Settings] Failed to parse settings: {}, returning defaults", e);
                Self::default()
            }),
            Err(e) => {
                log::warn!("[Settings] Failed to read file: {}, returning defaults", e);
                Self::default()
            }
        };

        if let Err(e) = settings.validate() {
            log::warn!("[Settings] {}, falling back to the default search engine", e);
            settings.search_engine = SearchEngine::default();
        }

        settings
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        self.validate()?;

        let tmp_path = path.with_extension("tmp");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;

        // Write to tmp, then rename, so a crash never leaves half a file.
        fs::write(&tmp_path, json).map_err(|e| e.to_string())?;
        fs::rename(tmp_path, path).map_err(|e| e.to_string())?;

        Ok(())
    }
}
