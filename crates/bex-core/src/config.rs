use std::{env, fs, path::Path, time::Duration};

use crate::{errors::Error, Result};

/// Typed configuration, read once at startup and shared as `Arc<Config>`.
#[derive(Clone, Debug)]
pub struct Config {
    /// Telegram bot token. The only required setting.
    pub bot_token: String,

    /// Base URL of the batch catalog API (no trailing slash).
    pub api_base_url: String,
    /// Per-request timeout for catalog calls.
    pub request_timeout: Duration,

    /// Maximum number of batch buttons in the selection keyboard.
    pub batch_list_limit: usize,
    /// Batch-name truncation for button labels.
    pub button_label_max_length: usize,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let bot_token = env_str("BOT_TOKEN").unwrap_or_default();
        if bot_token.trim().is_empty() {
            return Err(Error::Config(
                "BOT_TOKEN environment variable is required".to_string(),
            ));
        }

        let api_base_url = env_str("BATCH_API_BASE_URL")
            .and_then(non_empty)
            .unwrap_or_else(|| "https://hackerfreesw.vercel.app".to_string());
        // A trailing slash would double up when request paths are appended.
        let api_base_url = api_base_url.trim_end_matches('/').to_string();

        let request_timeout =
            Duration::from_millis(env_u64("REQUEST_TIMEOUT_MS").unwrap_or(10_000));

        let batch_list_limit = env_usize("BATCH_LIST_LIMIT").unwrap_or(30);
        let button_label_max_length = env_usize("BUTTON_LABEL_MAX_LENGTH").unwrap_or(25);

        Ok(Self {
            bot_token,
            api_base_url,
            request_timeout,
            batch_list_limit,
            button_label_max_length,
        })
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn env_u64(key: &str) -> Option<u64> {
    env_str(key).and_then(|s| s.trim().parse::<u64>().ok())
}

fn env_usize(key: &str) -> Option<usize> {
    env_str(key).and_then(|s| s.trim().parse::<usize>().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}
