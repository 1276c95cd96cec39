#![forbid(unsafe_code)]

//! JA3/JA3S passive TLS fingerprinting.
//!
//! Turns already-parsed ClientHello/ServerHello fields into the canonical JA3
//! bare string and its MD5 digest, with GREASE filtering and optional
//! extension-order normalization. Packet capture and TLS record parsing are
//! left to the caller.

pub mod digest;
pub mod error;
pub mod grease;
pub mod ja3;
pub mod ja3s;
pub mod observable;
pub mod output;
pub mod process;
pub mod record_writer;

// Re-exports
pub use digest::*;
pub use error::*;
pub use grease::*;
pub use ja3::*;
pub use ja3s::*;
pub use observable::*;
pub use output::*;
pub use process::*;
pub use record_writer::*;

use std::io::Write;
use tracing::debug;

/// Stateless JA3/JA3S analyzer over handshakes decoded elsewhere.
#[derive(Debug, Clone, Default)]
pub struct HuginnNetJa3 {
    config: AnalyzerConfig,
}

impl HuginnNetJa3 {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Fingerprint one observation; `None` when it carries nothing to fingerprint.
    pub fn analyze(&self, observable: &ObservableHandshake) -> Option<Ja3Output> {
        process_handshake(observable, &self.config)
    }

    pub fn analyze_batch(&self, observables: &[ObservableHandshake]) -> Vec<Ja3Output> {
        let outputs: Vec<Ja3Output> = observables.iter().filter_map(|o| self.analyze(o)).collect();
        if self.config.debug {
            debug!("{} fingerprints.", outputs.len());
        }
        outputs
    }

    /// Fingerprint `observables` and write one record per result.
    ///
    /// Returns the sink after flushing it.
    pub fn write_records<W: Write>(
        &self,
        observables: &[ObservableHandshake],
        out: W,
        format: &OutputFormat,
    ) -> Result<W, HuginnNetJa3Error> {
        let mut writer = RecordWriter::new(out, format, self.config.wants_ja3s())?;
        for output in observables.iter().filter_map(|o| self.analyze(o)) {
            writer.write(&Ja3Record::from(&output))?;
        }
        if self.config.debug {
            debug!("{} fingerprints.", writer.written());
        }
        writer.finish()
    }
}
