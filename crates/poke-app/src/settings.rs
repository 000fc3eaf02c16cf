//! Settings controller
//!
//! Sole owner of the live [`QueryConfig`]. Every mutation goes through a
//! declared operation, each of which completes synchronously before control
//! returns; no operation can observe another's partial effect. Export and
//! import speak the portable clipboard form through the [`Clipboard`] seam.

use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{info, warn};

use poke_core::{Dimension, ImportOutcome, QueryConfig, Result, VectorStrengths};

use crate::clipboard::Clipboard;

/// How long the "copied" confirmation stays visible after an export.
pub const COPIED_CONFIRMATION: Duration = Duration::from_secs(2);

pub struct SettingsController {
    config: QueryConfig,
    /// The backend's advertised defaults, captured at bootstrap.
    defaults: VectorStrengths,
    copied_at: Option<Instant>,
}

impl SettingsController {
    /// Start from the backend's advertised default strengths.
    pub fn new(defaults: VectorStrengths) -> Self {
        Self {
            config: QueryConfig::new(defaults.clone()),
            defaults,
            copied_at: None,
        }
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    pub fn set_algorithm(&mut self, algorithm: poke_core::Algorithm) {
        self.config.algorithm = algorithm;
    }

    /// Rejects sizes outside [`poke_core::K_CHOICES`]; returns whether the
    /// value was applied.
    pub fn set_k(&mut self, k: u32) -> bool {
        if poke_core::K_CHOICES.contains(&k) {
            self.config.k = k;
            true
        } else {
            false
        }
    }

    /// Replace a single dimension's strength, leaving the rest untouched.
    ///
    /// No clamping against [`Dimension::bounds`] happens here; bounding
    /// input is the presentation layer's job.
    pub fn edit(&mut self, dim: Dimension, value: f64) {
        self.config.strengths.set(dim, value);
    }

    /// Restore the backend defaults. Algorithm and k are untouched.
    pub fn reset(&mut self) {
        self.config.strengths = self.defaults.clone();
    }

    /// Zero every dimension. Algorithm and k are untouched.
    pub fn clear(&mut self) {
        self.config.strengths = VectorStrengths::zeroed();
    }

    /// Draw each dimension independently from `[0, max]` for that
    /// dimension. No seeding; every call is a fresh draw.
    pub fn randomize(&mut self) {
        let mut rng = rand::thread_rng();
        for dim in Dimension::ALL {
            let bounds = dim.bounds();
            self.config
                .strengths
                .set(dim, rng.gen_range(bounds.min..=bounds.max));
        }
    }

    /// Serialize the live configuration onto the clipboard.
    ///
    /// On success the "copied" confirmation becomes visible for
    /// [`COPIED_CONFIRMATION`]. A clipboard failure is logged and swallowed;
    /// nothing else in the session depends on it.
    pub fn export(&mut self, clipboard: &mut dyn Clipboard) {
        let text = match self.config.to_portable().to_json_pretty() {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to serialize settings for export: {}", e);
                return;
            }
        };
        match clipboard.write_text(&text) {
            Ok(()) => {
                self.copied_at = Some(Instant::now());
            }
            Err(e) => {
                warn!("Failed to export settings to clipboard: {}", e);
            }
        }
    }

    /// Whether the post-export confirmation is still visible.
    pub fn export_confirmed(&self) -> bool {
        self.copied_at
            .is_some_and(|at| at.elapsed() < COPIED_CONFIRMATION)
    }

    /// Read the clipboard and apply it field by field.
    ///
    /// Unparsable text fails the whole import with no effect; otherwise each
    /// recognized field applies independently (see
    /// [`QueryConfig::apply_portable`]). Skipped fields are logged, not
    /// surfaced.
    pub fn import(&mut self, clipboard: &mut dyn Clipboard) -> Result<ImportOutcome> {
        let text = clipboard.read_text()?;
        let outcome = self.config.apply_portable(&text)?;
        if !outcome.any_applied() {
            info!("Imported settings contained no applicable fields");
        }
        Ok(outcome)
    }
}
