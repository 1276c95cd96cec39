use crate::ja3::{ClientHelloSignature, Ja3Payload, TlsVersion};
use crate::ja3s::{Ja3sPayload, ServerHelloSignature};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IpPort {
    pub ip: std::net::IpAddr,
    pub port: u16,
}

impl IpPort {
    pub fn new(ip: std::net::IpAddr, port: u16) -> Self {
        Self { ip, port }
    }
}

/// Render a capture time as `seconds.microseconds`, micros zero-padded to 6 digits
pub fn format_timestamp(timestamp: Duration) -> String {
    format!("{}.{:06}", timestamp.as_secs(), timestamp.subsec_micros())
}

/// Capture time as fractional seconds, truncated to microsecond precision
pub fn timestamp_seconds(timestamp: Duration) -> f64 {
    timestamp.as_secs() as f64 + f64::from(timestamp.subsec_micros()) / 1_000_000.0
}

/// Holds the JA3 computed for one ClientHello.
pub struct Ja3ClientOutput {
    /// The client sending the ClientHello.
    pub source: IpPort,
    /// The server receiving the ClientHello.
    pub destination: IpPort,
    pub timestamp: Duration,
    /// The handshake fields the fingerprint was computed from.
    pub sig: ClientHelloSignature,
    pub ja3: Ja3Payload,
}

impl fmt::Display for Ja3ClientOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            ".-[ {}/{} -> {}/{} (ja3 client) ]-\n\
            |\n\
            | client   = {}/{}\n\
            | {:<8} = {}\n\
            | {:<8} = {}\n\
            | version  = {}\n\
            | time     = {}\n\
            `----\n",
            self.source.ip,
            self.source.port,
            self.destination.ip,
            self.destination.port,
            self.source.ip,
            self.source.port,
            self.ja3.hash.variant_name(),
            self.ja3.hash,
            self.ja3.raw.variant_name(),
            self.ja3.raw,
            TlsVersion::from(self.sig.version),
            format_timestamp(self.timestamp),
        )
    }
}

/// Holds the JA3S computed for one ServerHello.
pub struct Ja3ServerOutput {
    /// The server sending the ServerHello.
    pub source: IpPort,
    /// The client receiving the ServerHello.
    pub destination: IpPort,
    pub timestamp: Duration,
    pub sig: ServerHelloSignature,
    pub ja3s: Ja3sPayload,
}

impl fmt::Display for Ja3ServerOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            ".-[ {}/{} -> {}/{} (ja3s server) ]-\n\
            |\n\
            | server   = {}/{}\n\
            | ja3s     = {}\n\
            | ja3s_r   = {}\n\
            | version  = {}\n\
            | time     = {}\n\
            `----\n",
            self.source.ip,
            self.source.port,
            self.destination.ip,
            self.destination.port,
            self.source.ip,
            self.source.port,
            self.ja3s.hash,
            self.ja3s.raw,
            TlsVersion::from(self.sig.version),
            format_timestamp(self.timestamp),
        )
    }
}

pub enum Ja3Output {
    Client(Ja3ClientOutput),
    Server(Ja3ServerOutput),
}

impl Ja3Output {
    pub fn is_server(&self) -> bool {
        matches!(self, Ja3Output::Server(_))
    }
}

impl fmt::Display for Ja3Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Ja3Output::Client(client) => fmt::Display::fmt(client, f),
            Ja3Output::Server(server) => fmt::Display::fmt(server, f),
        }
    }
}

/// Flat record written by the JSON and CSV writers.
///
/// Client hellos fill the `ja3` pair, server hellos the `ja3s` pair; the
/// other pair stays empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ja3Record {
    pub destination_ip: String,
    pub destination_port: u16,
    pub ja3: String,
    pub ja3_digest: String,
    pub ja3s: String,
    pub ja3s_digest: String,
    pub source_ip: String,
    pub source_port: u16,
    pub timestamp: f64,
}

impl From<&Ja3Output> for Ja3Record {
    fn from(output: &Ja3Output) -> Self {
        match output {
            Ja3Output::Client(client) => Ja3Record {
                destination_ip: client.destination.ip.to_string(),
                destination_port: client.destination.port,
                ja3: client.ja3.raw.value().to_string(),
                ja3_digest: client.ja3.hash.value().to_string(),
                ja3s: String::new(),
                ja3s_digest: String::new(),
                source_ip: client.source.ip.to_string(),
                source_port: client.source.port,
                timestamp: timestamp_seconds(client.timestamp),
            },
            Ja3Output::Server(server) => Ja3Record {
                destination_ip: server.destination.ip.to_string(),
                destination_port: server.destination.port,
                ja3: String::new(),
                ja3_digest: String::new(),
                ja3s: server.ja3s.raw.clone(),
                ja3s_digest: server.ja3s.hash.clone(),
                source_ip: server.source.ip.to_string(),
                source_port: server.source.port,
                timestamp: timestamp_seconds(server.timestamp),
            },
        }
    }
}
