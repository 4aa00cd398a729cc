//! TOML configuration with layered overrides.
//!
//! Sources, weakest to strongest: built-in defaults, then the first three
//! candidate files in reverse priority (`~/.config/herodex/config.toml`,
//! `./.herodex.toml`, `$HERODEX_CONFIG`), then an explicit `--config` file,
//! then CLI flags. Every field is optional so partial sources stack.

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://gateway.marvel.com";
pub const DEFAULT_CHARACTERS_PAGE_SIZE: usize = 30;
pub const DEFAULT_COMICS_PAGE_SIZE: usize = 10;
pub const DEFAULT_END_REACHED_THRESHOLD: usize = 5;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Mouse capture (scroll wheel on lists).
    pub mouse: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the catalog gateway.
    pub base_url: Option<String>,
    /// Key appended to every request's query string. The `MARVEL_API_KEY`
    /// environment variable takes precedence at startup.
    pub key: Option<String>,
}

/// Page sizes are display tuning, not engine invariants.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct PagingConfig {
    pub characters_page_size: Option<usize>,
    pub comics_page_size: Option<usize>,
    /// Rows from the bottom of the loaded list at which the next page is
    /// requested.
    pub end_reached_threshold: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub api: ApiConfig,
    pub paging: PagingConfig,
}

/// Candidate config file paths, highest priority first. The explicit CLI
/// `--config` path is handled separately in `load`.
fn candidate_paths() -> Vec<PathBuf> {
    let env_path = std::env::var("HERODEX_CONFIG").ok().map(PathBuf::from);
    let local = std::env::current_dir()
        .ok()
        .map(|cwd| cwd.join(".herodex.toml"));
    let global = dirs::config_dir().map(|dir| dir.join("herodex").join("config.toml"));

    [env_path, local, global].into_iter().flatten().collect()
}

/// Read and parse one TOML config file. A missing file is silently `None`;
/// a file that exists but doesn't parse gets a stderr warning (logging is
/// not up yet when configs load).
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str::<AppConfig>(&content)
        .inspect_err(|e| {
            eprintln!("Warning: ignoring config file {}: {}", path.display(), e);
        })
        .ok()
}

impl GeneralConfig {
    fn merge(self, over: &GeneralConfig) -> GeneralConfig {
        GeneralConfig {
            mouse: over.mouse.or(self.mouse),
        }
    }
}

impl ApiConfig {
    fn merge(self, over: &ApiConfig) -> ApiConfig {
        ApiConfig {
            base_url: over.base_url.clone().or(self.base_url),
            key: over.key.clone().or(self.key),
        }
    }
}

impl PagingConfig {
    fn merge(self, over: &PagingConfig) -> PagingConfig {
        PagingConfig {
            characters_page_size: over.characters_page_size.or(self.characters_page_size),
            comics_page_size: over.comics_page_size.or(self.comics_page_size),
            end_reached_threshold: over.end_reached_threshold.or(self.end_reached_threshold),
        }
    }
}

impl AppConfig {
    /// Layer `over` on top of `self`; per field, `over`'s `Some` wins.
    pub fn merge(self, over: &AppConfig) -> AppConfig {
        AppConfig {
            general: self.general.merge(&over.general),
            api: self.api.merge(&over.api),
            paging: self.paging.merge(&over.paging),
        }
    }

    /// Resolve the final configuration from all sources.
    pub fn load(cli_config_path: Option<&Path>, cli_overrides: Option<&AppConfig>) -> AppConfig {
        // Candidates are ordered strongest-first, so stack them reversed and
        // finish with the explicit --config file.
        let file_layers = candidate_paths()
            .iter()
            .rev()
            .map(PathBuf::as_path)
            .chain(cli_config_path)
            .filter_map(|path| load_file(path))
            .fold(AppConfig::default(), |acc, layer| acc.merge(&layer));

        match cli_overrides {
            Some(flags) => file_layers.merge(flags),
            None => file_layers,
        }
    }

    pub fn mouse_enabled(&self) -> bool {
        self.general.mouse.unwrap_or(true)
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api.key.as_deref()
    }

    pub fn characters_page_size(&self) -> usize {
        self.paging
            .characters_page_size
            .unwrap_or(DEFAULT_CHARACTERS_PAGE_SIZE)
    }

    pub fn comics_page_size(&self) -> usize {
        self.paging
            .comics_page_size
            .unwrap_or(DEFAULT_COMICS_PAGE_SIZE)
    }

    pub fn end_reached_threshold(&self) -> usize {
        self.paging
            .end_reached_threshold
            .unwrap_or(DEFAULT_END_REACHED_THRESHOLD)
    }
}
