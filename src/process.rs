use crate::ja3::Ja3Options;
use crate::observable::{ObservableHandshake, TlsHello};
use crate::output::{Ja3ClientOutput, Ja3Output, Ja3ServerOutput};
use tracing::{debug, trace};

/// Analyzer settings. The canonicalizer only ever sees `options`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub options: Ja3Options,
    /// Fingerprint ServerHellos as well
    pub include_ja3s: bool,
    /// Fingerprint ServerHellos only, ignoring ClientHellos
    pub ja3s_only: bool,
    /// Log every computed bare string and digest
    pub debug: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            options: Ja3Options::default(),
            include_ja3s: true,
            ja3s_only: false,
            debug: false,
        }
    }
}

impl AnalyzerConfig {
    pub fn wants_ja3s(&self) -> bool {
        self.include_ja3s || self.ja3s_only
    }
}

pub fn process_handshake(
    observable: &ObservableHandshake,
    config: &AnalyzerConfig,
) -> Option<Ja3Output> {
    let src = &observable.source;
    let dst = &observable.destination;

    let hello = match &observable.hello {
        Some(hello) => hello,
        None => {
            trace!("{}/{} -> {}/{}: not a TLS hello, skipping", src.ip, src.port, dst.ip, dst.port);
            return None;
        }
    };

    match hello {
        TlsHello::Client(sig) => {
            if config.ja3s_only {
                trace!("ClientHello ignored, JA3S only");
                return None;
            }
            let ja3 = sig.generate_ja3(&config.options);
            if config.debug {
                debug!(
                    "{}/{} -> {}/{} {}={} {}={}",
                    src.ip,
                    src.port,
                    dst.ip,
                    dst.port,
                    ja3.raw.variant_name(),
                    ja3.raw,
                    ja3.hash.variant_name(),
                    ja3.hash
                );
            }
            Some(Ja3Output::Client(Ja3ClientOutput {
                source: src.clone(),
                destination: dst.clone(),
                timestamp: observable.timestamp,
                sig: sig.clone(),
                ja3,
            }))
        }
        TlsHello::Server(sig) => {
            if !config.wants_ja3s() {
                trace!("ServerHello ignored, JA3S disabled");
                return None;
            }
            let ja3s = sig.generate_ja3s();
            if config.debug {
                debug!(
                    "{}/{} -> {}/{} ja3s_r={} ja3s={}",
                    src.ip, src.port, dst.ip, dst.port, ja3s.raw, ja3s.hash
                );
            }
            Some(Ja3Output::Server(Ja3ServerOutput {
                source: src.clone(),
                destination: dst.clone(),
                timestamp: observable.timestamp,
                sig: sig.clone(),
                ja3s,
            }))
        }
    }
}
