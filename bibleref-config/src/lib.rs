//! Configuration loader for bibleref.
//!
//! `defaults/bibleref.default.toml` is embedded so that documented and runtime
//! defaults stay in sync. Applications layer their own files over those defaults
//! via [`Loader`], then convert the result into the library's value types with
//! [`BiblerefConfig::separators`], [`BiblerefConfig::flags`] and
//! [`BiblerefConfig::render_options`].

use bibleref::{BibleFlags, BibleRefError, RenderOptions, Separators};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

const DEFAULT_TOML: &str = include_str!("../defaults/bibleref.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BiblerefConfig {
    pub separators: SeparatorsConfig,
    pub flags: FlagsConfig,
    pub render: RenderConfig,
}

/// Separator characters, each written as a one-character string.
#[derive(Debug, Clone, Deserialize)]
pub struct SeparatorsConfig {
    pub range: String,
    pub major_list: String,
    pub minor_list: String,
    pub verse: String,
    pub verse_alt: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FlagsConfig {
    pub multibook: bool,
    pub verse_zero: bool,
}

/// Mirrors the switches on `RenderOptions`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RenderConfig {
    pub abbreviated: bool,
    pub alt_separator: bool,
    pub no_space: bool,
    pub preserve_groups: bool,
    pub force_start_verses: bool,
}

impl BiblerefConfig {
    /// The configured separators, validated.
    pub fn separators(&self) -> Result<Separators, BibleRefError> {
        let s = &self.separators;
        Separators::from_strs(&s.range, &s.major_list, &s.minor_list, &s.verse, &s.verse_alt)
    }

    pub fn flags(&self) -> BibleFlags {
        BibleFlags::from_modes(self.flags.multibook, self.flags.verse_zero)
    }

    /// Render options carrying the configured flags and separators.
    pub fn render_options(&self) -> Result<RenderOptions, BibleRefError> {
        let render = &self.render;
        Ok(RenderOptions {
            abbreviated: render.abbreviated,
            alt_separator: render.alt_separator,
            no_space: render.no_space,
            preserve_groups: render.preserve_groups,
            force_start_verses: render.force_start_verses,
            flags: self.flags(),
            separators: self.separators()?,
        })
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        debug!(path = %path.as_ref().display(), "layering config file");
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. `("flags.multibook", true)`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<BiblerefConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<BiblerefConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bibleref::RangeList;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.separators().unwrap(), Separators::DEFAULT);
        assert_eq!(config.flags(), BibleFlags::NONE);
        assert_eq!(config.render_options().unwrap(), RenderOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("flags.multibook", true)
            .expect("override to apply")
            .set_override("render.abbreviated", true)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.flags(), BibleFlags::MULTIBOOK);

        let list = RangeList::parse("Matt 28-Mark 2", config.flags()).unwrap();
        assert_eq!(list.render(&config.render_options().unwrap()), "Matt 28-Mark 2");
    }

    #[test]
    fn rejects_bad_separators() {
        let config = Loader::new()
            .set_override("separators.minor_list", ";")
            .unwrap()
            .build()
            .unwrap();
        assert!(matches!(config.separators(), Err(BibleRefError::InvalidArgument(_))));

        let config = Loader::new()
            .set_override("separators.range", "--")
            .unwrap()
            .build()
            .unwrap();
        assert!(config.render_options().is_err());
    }

    #[test]
    fn layers_files_over_defaults() {
        let path = std::env::temp_dir().join(format!("bibleref-config-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[separators]\nrange = \"_\"\nverse_alt = \"*\"").unwrap();

        let config = Loader::new().with_file(&path).build().unwrap();
        let separators = config.separators().unwrap();
        assert_eq!(separators.range(), '_');
        assert_eq!(separators.verse_alt(), '*');
        assert_eq!(separators.major_list(), ';');
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_files() {
        let missing = std::env::temp_dir().join("bibleref-config-does-not-exist.toml");
        assert!(Loader::new().with_optional_file(&missing).build().is_ok());
        assert!(Loader::new().with_file(&missing).build().is_err());
    }
}
