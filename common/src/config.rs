use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable consulted before the config file.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Example topic pre-filled into the composer on a fresh start.
pub const EXAMPLE_TOPIC: &str = "12月1日 第12周 围绕 2023 年以来“AI 概念股”狂热（如英伟达、科大讯飞、寒武纪），分析其股价飙升是信息有效反映还是市场非理性繁荣。制作 PPT, 汇报 45 分钟。";

/// Finpre configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinpreConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub default_topic: Option<String>,
}

impl Default for FinpreConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            // The pro model times out on deck-sized JSON responses.
            model: "gemini-2.5-flash".to_string(),
            default_topic: None,
        }
    }
}

impl FinpreConfig {
    /// Get config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir.join("config.json"))
    }

    pub fn config_dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find config directory"))?
            .join("finpre"))
    }

    /// Log file written while the TUI owns the terminal.
    pub fn log_path() -> Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir.join("finpre.log"))
    }

    /// Load configuration from file
    pub async fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = tokio::fs::read_to_string(&path).await?;
            let config: FinpreConfig = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub async fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = serde_json::to_string_pretty(self)?;
        tokio::fs::write(&path, content).await?;
        Ok(())
    }

    /// Credential used for generation calls: environment first, then the
    /// stored key. `None` means generation must fail before any network call.
    pub fn resolve_api_key(&self) -> Option<String> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Some(key),
            _ => self.api_key.clone().filter(|k| !k.trim().is_empty()),
        }
    }

    /// Topic the composer starts out with.
    pub fn starting_topic(&self) -> String {
        self.default_topic
            .clone()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| EXAMPLE_TOPIC.to_string())
    }
}
