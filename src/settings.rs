//! Game settings
//!
//! Read once at startup from the page URL query string. Settings only
//! affect presentation and the RNG seed; they never feed back into tick
//! logic, so two sessions with the same seed stay in lockstep regardless
//! of quality preset.

use serde::{Deserialize, Serialize};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Whether to render the scrolling starfield backdrop
    pub fn starfield_enabled(&self) -> bool {
        match self {
            QualityPreset::Low => false,
            QualityPreset::Medium => true,
            QualityPreset::High => true,
        }
    }

    /// Whether to render soft glow quads behind ships and pickups
    pub fn glow_enabled(&self) -> bool {
        match self {
            QualityPreset::Low => false,
            QualityPreset::Medium => false,
            QualityPreset::High => true,
        }
    }

    /// How many explosion particles to draw. The simulation always keeps
    /// its full pool; this only caps what reaches the vertex buffer.
    pub fn max_rendered_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 64,
            QualityPreset::Medium => 256,
            QualityPreset::High => 256,
        }
    }
}

/// Startup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Fixed RNG seed; None means derive one from the clock
    pub seed: Option<u64>,
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            seed: None,
            show_fps: true,
        }
    }
}

impl Settings {
    /// Parse settings from a URL query string, e.g.
    /// `?quality=low&seed=42&fps=0`. Unknown keys and unparseable values
    /// fall back to defaults.
    pub fn from_query(query: &str) -> Self {
        let mut settings = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "quality" => match QualityPreset::from_str(value) {
                    Some(preset) => settings.quality = preset,
                    None => log::warn!("Unknown quality preset: {value}"),
                },
                "seed" => match value.parse::<u64>() {
                    Ok(seed) => settings.seed = Some(seed),
                    Err(_) => log::warn!("Bad seed value: {value}"),
                },
                "fps" => match value {
                    "1" | "true" | "on" => settings.show_fps = true,
                    "0" | "false" | "off" => settings.show_fps = false,
                    other => log::warn!("Bad fps value: {other}"),
                },
                _ => {}
            }
        }

        settings
    }

    /// Load settings from the page URL (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let query = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let settings = Self::from_query(&query);
        log::info!(
            "Settings: quality={} seed={:?} fps={}",
            settings.quality.as_str(),
            settings.seed,
            settings.show_fps
        );
        settings
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
