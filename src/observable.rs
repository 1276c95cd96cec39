use crate::ja3::ClientHelloSignature;
use crate::ja3s::ServerHelloSignature;
use crate::output::IpPort;
use std::time::Duration;

/// A handshake message already decoded by an upstream parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TlsHello {
    Client(ClientHelloSignature),
    Server(ServerHelloSignature),
}

/// One observed packet handed over by the capture layer.
///
/// `hello` is `None` when the payload was not a recognized handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservableHandshake {
    pub source: IpPort,
    pub destination: IpPort,
    /// Capture time since the Unix epoch
    pub timestamp: Duration,
    pub hello: Option<TlsHello>,
}

impl ObservableHandshake {
    pub fn client(
        source: IpPort,
        destination: IpPort,
        timestamp: Duration,
        hello: ClientHelloSignature,
    ) -> Self {
        Self {
            source,
            destination,
            timestamp,
            hello: Some(TlsHello::Client(hello)),
        }
    }

    pub fn server(
        source: IpPort,
        destination: IpPort,
        timestamp: Duration,
        hello: ServerHelloSignature,
    ) -> Self {
        Self {
            source,
            destination,
            timestamp,
            hello: Some(TlsHello::Server(hello)),
        }
    }
}
