// Copyright The Glide Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fs::File;
use std::io::Read;
use std::ops::Range;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Used when nothing else specifies a divider thickness.
pub const DEFAULT_DIVIDER_SIZE: i32 = 7;

pub const DEFAULT_USER_MIN_SIZE: i32 = 20;

pub fn config_path_default() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".multisplit.toml"))
}

#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
}

/// How the minimum size of a node is determined when shrinking.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Use the minimum size reported by each component.
    #[default]
    Natural,
    /// Treat every minimum size as zero.
    IgnoreMinimum,
    /// Use `user_min_size` on both axes for every content node.
    UserMinimum,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default = "default_divider_size")]
    pub divider_size: i32,
    /// Derive divider positions from preferred sizes on every layout instead
    /// of keeping their current positions.
    #[serde(default = "yes")]
    pub floating_dividers: bool,
    /// Collapse splits that are left with a single child after a removal.
    #[serde(default = "yes")]
    pub remove_dividers: bool,
    /// Size children from their weights before laying out.
    #[serde(default = "no")]
    pub layout_by_weight: bool,
    #[serde(default)]
    pub layout_mode: LayoutMode,
    #[serde(default = "default_user_min_size")]
    pub user_min_size: i32,
}

fn default_divider_size() -> i32 {
    DEFAULT_DIVIDER_SIZE
}

fn default_user_min_size() -> i32 {
    DEFAULT_USER_MIN_SIZE
}

fn yes() -> bool {
    true
}

fn no() -> bool {
    false
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            divider_size: DEFAULT_DIVIDER_SIZE,
            floating_dividers: true,
            remove_dividers: true,
            layout_by_weight: false,
            layout_mode: LayoutMode::Natural,
            user_min_size: DEFAULT_USER_MIN_SIZE,
        }
    }
}

impl Settings {
    fn validate(&self) -> Result<(), SpannedError> {
        let negative = [
            ("divider_size", self.divider_size),
            ("user_min_size", self.user_min_size),
        ]
        .into_iter()
        .find(|&(_, value)| value < 0);
        match negative {
            Some((field, value)) => Err(SpannedError {
                message: format!("{field} must not be negative (got {value})"),
                span: None,
            }),
            None => Ok(()),
        }
    }
}

impl Config {
    /// Loads the config at `custom_path`, or the default config file if there
    /// is one.
    pub fn load(custom_path: Option<&Path>) -> anyhow::Result<Config> {
        let mut buf = String::new();
        let default = config_path_default();
        let (mut file, path) = match (custom_path, default.as_deref()) {
            (Some(path), _) => (File::open(path)?, path),
            (None, Some(default)) => match File::open(default) {
                Ok(file) => (file, default),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
                Err(e) => return Err(e.into()),
            },
            (None, None) => return Ok(Config::default()),
        };
        file.read_to_string(&mut buf)?;
        Self::parse(&buf).map_err(|e| anyhow::anyhow!("{}", format_toml_error(e, &buf, path)))
    }

    fn parse(buf: &str) -> Result<Self, SpannedError> {
        let c: Config = toml::from_str(buf)?;
        c.settings.validate()?;
        Ok(c)
    }
}

fn format_toml_error(error: SpannedError, input: &str, path: &Path) -> String {
    use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

    let message = error.message;
    let Some(span) = error.span else {
        return format!("could not parse config: {}", message);
    };

    let snippet = Snippet::source(input)
        .path(path.to_string_lossy())
        .annotation(AnnotationKind::Primary.span(span.start..span.end).label(message));

    let report = Level::ERROR.primary_title("could not parse config").element(snippet);

    let renderer = Renderer::styled();
    format!("{}", renderer.render(&[report]))
}

#[derive(Debug)]
struct SpannedError {
    message: String,
    span: Option<Range<usize>>,
}

impl From<toml::de::Error> for SpannedError {
    fn from(e: toml::de::Error) -> Self {
        Self {
            message: e.message().to_owned(),
            span: e.span(),
        }
    }
}
