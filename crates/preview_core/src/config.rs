//! Previewer configuration.
//!
//! A hosting page can tune the previewer by putting a JSON object in the
//! `data-preview-config` attribute of its `<html>` element. Every field is
//! optional.

use serde::{Deserialize, Serialize};

use crate::constants::PREVIEW_IMAGE_ID;
use crate::error::Result;
use crate::zoom::ZoomOptions;

/// Log level setting for the previewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }

    /// Convert to log crate's Level.
    pub fn to_level(&self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Previewer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewConfig {
    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Id of the image element to bind
    #[serde(default = "default_image_element_id")]
    pub image_element_id: String,

    /// Zoom interaction options
    #[serde(default)]
    pub zoom: ZoomOptions,
}

fn default_image_element_id() -> String {
    PREVIEW_IMAGE_ID.to_string()
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            image_element_id: default_image_element_id(),
            zoom: ZoomOptions::default(),
        }
    }
}

impl PreviewConfig {
    /// Parse configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
