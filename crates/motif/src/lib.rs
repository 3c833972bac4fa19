//! Motif - procedurally generated documents of randomly patterned frames.
//!
//! A document is a page shell holding one SVG drawing region per configured
//! frame. Each frame is filled with randomly sampled circles and rectangles.
//! Output is fully reproducible when a seed is supplied.

pub mod card;
pub mod config;

mod error;

pub use motif_core::{document, geometry, params, sampler, shape};

pub use error::MotifError;

use std::io;

use log::{debug, info};
use rand::Rng;

use motif_core::sampler::RandomSampler;

use config::AppConfig;

/// Builder for generating Motif documents.
///
/// # Examples
///
/// ```rust
/// use motif::{PatternBuilder, config::AppConfig};
///
/// let config = AppConfig::default().with_seed(42);
/// let builder = PatternBuilder::new(config);
///
/// let document = builder.render_to_string().expect("Failed to render");
/// assert!(document.starts_with("<html>"));
/// assert_eq!(document.matches("<svg ").count(), 3);
///
/// // Same seed, same document
/// assert_eq!(document, builder.render_to_string().unwrap());
/// ```
#[derive(Debug, Default)]
pub struct PatternBuilder {
    config: AppConfig,
}

impl PatternBuilder {
    /// Create a new pattern builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Creates a sampler from the configured seed, or from OS entropy when
    /// no seed is set.
    pub fn sampler(&self) -> RandomSampler {
        match self.config.seed() {
            Some(seed) => {
                debug!(seed; "Using seeded sampler");
                RandomSampler::seeded(seed)
            }
            None => {
                debug!("Using entropy-seeded sampler");
                RandomSampler::from_entropy()
            }
        }
    }

    /// Write the complete document to `sink`.
    ///
    /// Frames are generated in configuration order from the single
    /// `sampler`, so the output depends on draw order.
    ///
    /// # Errors
    ///
    /// Returns `MotifError::Io` if the sink cannot be written. The sink may
    /// hold a partial document in that case.
    pub fn render<W, R>(
        &self,
        sink: &mut W,
        sampler: &mut RandomSampler<R>,
    ) -> Result<(), MotifError>
    where
        W: io::Write + ?Sized,
        R: Rng,
    {
        info!(
            title = self.config.title(),
            frames = self.config.frames().len(),
            shapes = self.config.shape_count();
            "Generating document"
        );

        document::write_shell_open(sink, self.config.title())?;
        for frame in self.config.frames() {
            card::compose_frame(sink, sampler, frame)?;
        }
        document::write_shell_end(sink)?;
        sink.flush()?;

        info!("Document generated successfully");
        Ok(())
    }

    /// Render the complete document to a string using [`Self::sampler`].
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::render`].
    pub fn render_to_string(&self) -> Result<String, MotifError> {
        let mut sampler = self.sampler();
        let mut out = Vec::new();
        self.render(&mut out, &mut sampler)?;
        String::from_utf8(out)
            .map_err(|err| MotifError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
    }
}
