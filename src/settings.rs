//! Game settings and preferences
//!
//! Persisted in LocalStorage as JSON. Carries the simulation configuration
//! alongside display preferences; scores and positions are never stored.

use serde::{Deserialize, Serialize};

use crate::sim::SimConfig;

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Classic,
    HighContrast,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Classic => "Classic",
            Theme::HighContrast => "High Contrast",
        }
    }

    /// Next theme in the cycle
    pub fn next(self) -> Self {
        match self {
            Theme::Classic => Theme::HighContrast,
            Theme::HighContrast => Theme::Classic,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    /// Draw the dashed center net
    pub show_net: bool,
    /// Show FPS counter
    pub show_fps: bool,
    /// Simulation constants, fixed once a game starts
    pub sim: SimConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Classic,
            show_net: true,
            show_fps: false,
            sim: SimConfig::default(),
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "canvas_pong_settings";

    /// Parse settings, rejecting JSON whose simulation config is unusable
    pub fn from_json(json: &str) -> Option<Self> {
        let settings: Settings = match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring unreadable settings: {}", e);
                return None;
            }
        };
        if let Err(e) = settings.sim.validate() {
            log::warn!("Ignoring stored settings: {}", e);
            return None;
        }
        Some(settings)
    }

    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }

    pub fn toggle_net(&mut self) {
        self.show_net = !self.show_net;
    }

    pub fn toggle_fps(&mut self) {
        self.show_fps = !self.show_fps;
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Some(json) = self.to_json() {
                report_save(storage.set_item(Self::STORAGE_KEY, &json));
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

/// Log the outcome of a storage write, returning whether it landed
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn report_save<E: std::fmt::Debug>(result: Result<(), E>) -> bool {
    match result {
        Ok(()) => {
            log::info!("Settings saved");
            true
        }
        Err(e) => {
            log::warn!("Failed to save settings: {:?}", e);
            false
        }
    }
}
