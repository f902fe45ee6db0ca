use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::{artifact::ArtifactMode, errors::Error, Result};

/// Number of token characters shown in startup logs.
const TOKEN_PREVIEW_LEN: usize = 10;

/// Typed configuration for the bot.
///
/// Built once at startup and shared read-only (`Arc<Config>`).
#[derive(Clone, Debug)]
pub struct Config {
    pub bot_token: String,
    /// Alternative Bot API server (e.g. a local `telegram-bot-api` instance).
    pub api_url: Option<String>,
    /// How rendered barcodes are handed to the messenger.
    pub artifact_mode: ArtifactMode,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_lookup(env_str)
    }

    /// Build the config from an arbitrary key lookup (the process env in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        // BOT_TOKEN wins; TELEGRAM_BOT_TOKEN is accepted for compatibility.
        let bot_token = lookup("BOT_TOKEN")
            .and_then(non_empty)
            .or_else(|| lookup("TELEGRAM_BOT_TOKEN").and_then(non_empty))
            .map(|s| s.trim().to_string())
            .ok_or_else(|| {
                Error::Config("BOT_TOKEN environment variable is required".to_string())
            })?;

        if bot_token.chars().any(char::is_whitespace) {
            return Err(Error::Config(
                "BOT_TOKEN must not contain whitespace".to_string(),
            ));
        }

        let api_url = lookup("BOT_API_URL").and_then(non_empty);

        let artifact_mode = match lookup("BARCODE_SPOOL_DIR").and_then(non_empty) {
            Some(dir) => ArtifactMode::Spool(PathBuf::from(dir.trim())),
            None => ArtifactMode::Memory,
        };

        Ok(Self {
            bot_token,
            api_url,
            artifact_mode,
        })
    }

    /// Token prefix safe to print in logs.
    pub fn token_preview(&self) -> String {
        let head: String = self.bot_token.chars().take(TOKEN_PREVIEW_LEN).collect();
        format!("{head}...")
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for (key, val) in parse_dotenv(&contents) {
        if env::var_os(&key).is_some() {
            continue; // do not override existing env
        }
        env::set_var(key, val);
    }
}

fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        out.push((key.to_string(), val));
    }
    out
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
