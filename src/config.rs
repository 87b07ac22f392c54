use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Environment variable naming the verbosity threshold, either by canonical
/// level name (`"WARN"`) or by single digit (`"3"`).
pub const VERBOSITY_ENV: &str = "SCLOG_VERBOSITY_LEVEL";

/// Config file section holding the logger keys.
pub const LOGGING_SECTION: &str = "Logging";

/// Minimal INI-style key/value file: `key = value` lines, optional
/// `[section]` headers, `#` comments.
#[derive(Debug)]
pub struct Config {
    pub globals: HashMap<String, String>,
    pub sections: HashMap<String, HashMap<String, String>>,
}

impl Config {
    pub fn load(path: &str) -> Result<Self, String> {
        let content =
            fs::read_to_string(path).map_err(|e| format!("Error reading file {path}: {e}"))?;
        Ok(Self::parse(&content))
    }

    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut globals = HashMap::new();
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current_section: Option<String> = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                let name = &line[1..line.len() - 1];
                current_section = Some(name.trim().to_string());
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_string();
                let value = value.trim().trim_matches('"').to_string();

                match &current_section {
                    None => {
                        globals.insert(key, value);
                    }
                    Some(sec) => {
                        sections.entry(sec.clone()).or_default().insert(key, value);
                    }
                }
            }
        }
        Config { globals, sections }
    }

    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|sec| sec.get(key))
            .map(|s| s.as_str())
    }

    #[must_use]
    pub fn get_non_empty(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section, key).filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn get_global(&self, key: &str) -> Option<&str> {
        self.globals.get(key).map(|s| s.as_str())
    }

    /// Section value, then global value, for keys that may live in either.
    #[must_use]
    pub fn get_non_empty_any(&self, section: &str, key: &str) -> Option<&str> {
        self.get_non_empty(section, key)
            .or_else(|| self.get_global(key).filter(|s| !s.is_empty()))
    }

    #[must_use]
    pub fn get_bool(&self, section: &str, key: &str) -> Option<bool> {
        self.get_non_empty_any(section, key).and_then(parse_bool)
    }
}

/// Resolved logger options, handed to `init` so nothing below it reads the
/// process environment on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Threshold override: a level name or single digit.
    pub verbosity: Option<String>,
    /// File sink path; `None` logs to the console only.
    pub log_file: Option<PathBuf>,
    /// Append to `log_file` instead of truncating it.
    pub append: bool,
    /// Whether records are echoed to stdout.
    pub to_stdout: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            verbosity: None,
            log_file: None,
            append: false,
            to_stdout: true,
        }
    }
}

impl LogConfig {
    /// Defaults plus [`VERBOSITY_ENV`] from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_env_value(env::var(VERBOSITY_ENV).ok())
    }

    /// Fills `verbosity` from an environment value unless it is already set.
    /// Empty values count as absent.
    #[must_use]
    pub fn with_env_value(mut self, value: Option<String>) -> Self {
        if self.verbosity.is_none() {
            self.verbosity = value.filter(|v| !v.is_empty());
        }
        self
    }

    /// Reads the `[Logging]` section: `verbosity`, `log_file`, `append` and
    /// `to_stdout`. Missing keys keep their defaults.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let defaults = Self::default();
        Self {
            verbosity: config
                .get_non_empty_any(LOGGING_SECTION, "verbosity")
                .map(str::to_owned),
            log_file: config
                .get_non_empty_any(LOGGING_SECTION, "log_file")
                .map(expand_path),
            append: config
                .get_bool(LOGGING_SECTION, "append")
                .unwrap_or(defaults.append),
            to_stdout: config
                .get_bool(LOGGING_SECTION, "to_stdout")
                .unwrap_or(defaults.to_stdout),
        }
    }

    /// Loads a config file, then lets [`VERBOSITY_ENV`] fill a missing
    /// threshold.
    pub fn load(path: &str) -> Result<Self, String> {
        let config = Config::load(path)?;
        Ok(Self::from_config(&config).with_env_value(env::var(VERBOSITY_ENV).ok()))
    }

    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>, append: bool) -> Self {
        self.log_file = Some(path.into());
        self.append = append;
        self
    }

    #[must_use]
    pub fn with_stdout(mut self, to_stdout: bool) -> Self {
        self.to_stdout = to_stdout;
        self
    }

    #[must_use]
    pub fn with_verbosity(mut self, verbosity: impl Into<String>) -> Self {
        self.verbosity = Some(verbosity.into());
        self
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Expands tilde (`~`) in file paths to the user's home directory.
fn expand_path(path_str: &str) -> PathBuf {
    if path_str.starts_with('~') {
        let home = env::var("HOME")
            .or_else(|_| env::var("USERPROFILE"))
            .ok()
            .map(PathBuf::from);

        if let Some(mut home_path) = home {
            if path_str == "~" {
                return home_path;
            }
            if path_str.starts_with("~/") || path_str.starts_with("~\\") {
                home_path.push(&path_str[2..]);
                return home_path;
            }
        }
    }
    PathBuf::from(path_str)
}
