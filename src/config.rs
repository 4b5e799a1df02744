//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::i18n::Language;

/// Command line configuration for Nujum.
#[derive(Debug, Clone, Parser)]
#[command(name = "nujum", version, about, long_about = None)]
pub struct Config {
    /// Content directory
    #[arg(default_value = "content")]
    pub content: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Public base URL used for canonical links and the sitemap
    #[arg(long, default_value = "https://example.com")]
    pub base_url: String,

    /// Default language (en or ar) for the root redirect and 404 page
    #[arg(long, default_value = "en")]
    pub default_lang: String,

    /// Open the generated site in a browser when generation finishes
    #[arg(long)]
    pub open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the content directory does not exist or the
    /// default language is not a supported code.
    pub fn validate(&self) -> Result<()> {
        if !self.content.exists() {
            bail!(
                "Content directory does not exist: {}",
                self.content.display()
            );
        }
        if Language::from_code(&self.default_lang).is_none() {
            bail!(
                "Unsupported default language '{}', expected en or ar",
                self.default_lang
            );
        }

        Ok(())
    }

    /// Returns the configured default language.
    ///
    /// # Errors
    ///
    /// Returns error if the language code is not supported; `validate`
    /// catches this earlier in normal flow.
    pub fn default_language(&self) -> Result<Language> {
        Language::from_code(&self.default_lang).ok_or_else(|| {
            anyhow::anyhow!("Unsupported default language: {}", self.default_lang)
        })
    }
}
