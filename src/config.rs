use anyhow::{Context, Result};
use serde::Deserialize;
use std::{env, str::FromStr};

use crate::lexicon::{ChallengeSettings, MAX_GENERATION_ATTEMPTS, MIN_CHALLENGE_COMPLETIONS};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub lexicon: LexiconConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LexiconConfig {
    pub dictionary_path: String,
    pub prefixes_path: String,
    pub nsfw_path: String,
    pub min_completions: usize,
    pub max_generation_attempts: usize,
    pub default_prefix_length: usize,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            dictionary_path: "./assets/dictionary.json".to_string(),
            prefixes_path: "./assets/prefixes.json".to_string(),
            nsfw_path: "./assets/nsfw.json".to_string(),
            min_completions: MIN_CHALLENGE_COMPLETIONS,
            max_generation_attempts: MAX_GENERATION_ATTEMPTS,
            default_prefix_length: 2,
        }
    }
}

impl LexiconConfig {
    pub fn challenge_settings(&self) -> ChallengeSettings {
        ChallengeSettings {
            min_completions: self.min_completions,
            max_attempts: self.max_generation_attempts.max(1),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server = ServerConfig {
            host: env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_var("PORT", 3000)?,
        };

        let defaults = LexiconConfig::default();
        let lexicon = LexiconConfig {
            dictionary_path: env::var("DICTIONARY_PATH")
                .unwrap_or(defaults.dictionary_path),
            prefixes_path: env::var("PREFIXES_PATH")
                .unwrap_or(defaults.prefixes_path),
            nsfw_path: env::var("NSFW_PATH")
                .unwrap_or(defaults.nsfw_path),
            min_completions: parse_var("MIN_PREFIX_COMPLETIONS", defaults.min_completions)?,
            max_generation_attempts: parse_var(
                "MAX_GENERATION_ATTEMPTS",
                defaults.max_generation_attempts,
            )?,
            default_prefix_length: parse_var(
                "DEFAULT_PREFIX_LENGTH",
                defaults.default_prefix_length,
            )?,
        };

        Ok(Config { server, lexicon })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Read a numeric variable, falling back to `default` when it is unset
fn parse_var<T: FromStr>(key: &str, default: T) -> Result<T> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .ok()
            .with_context(|| format!("{} must be a number", key)),
        Err(_) => Ok(default),
    }
}
