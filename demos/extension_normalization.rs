use clap::Parser;
use huginn_net_ja3::{
    AnalyzerConfig, ClientHelloSignature, HuginnNetJa3, IpPort, Ja3Options, ObservableHandshake,
    OutputFormat,
};
use std::net::{IpAddr, Ipv4Addr};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Classic vs normalized JA3 for a client that shuffles extensions", long_about = None)]
struct Args {
    /// Sort extensions before hashing
    #[arg(short = 'n', long)]
    normalize: bool,

    /// Print records as a JSON array instead of text blocks
    #[arg(short = 'j', long)]
    json: bool,

    /// Log bare strings and digests as they are computed
    #[arg(short = 'd', long)]
    debug: bool,
}

fn initialize_logging() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set subscriber: {e}");
        std::process::exit(1);
    }
}

/// Same client twice: identical parameters, shuffled extension order
fn shuffled_hellos() -> [ClientHelloSignature; 2] {
    let first = ClientHelloSignature {
        version: 0x0303,
        cipher_suites: vec![0x1301, 0x1302, 0x1303, 0xc02f, 0xc030],
        extensions: vec![35, 0, 10, 11, 13, 16, 23],
        supported_groups: vec![23, 24, 25],
        supported_points: vec![0],
    };
    let second = ClientHelloSignature {
        extensions: vec![13, 23, 0, 35, 10, 16, 11],
        ..first.clone()
    };
    [first, second]
}

fn main() {
    let args = Args::parse();
    initialize_logging();

    let options = if args.normalize {
        Ja3Options::normalized()
    } else {
        Ja3Options::default()
    };
    let analyzer = HuginnNetJa3::new(AnalyzerConfig {
        options,
        debug: args.debug,
        ..Default::default()
    });

    let client = IpPort::new(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 14)), 49391);
    let server = IpPort::new(IpAddr::V4(Ipv4Addr::new(93, 184, 216, 34)), 443);
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO);

    let observations: Vec<ObservableHandshake> = shuffled_hellos()
        .into_iter()
        .map(|hello| ObservableHandshake::client(client.clone(), server.clone(), now, hello))
        .collect();
    info!("Fingerprinting {} ClientHellos", observations.len());

    if args.json {
        let stdout = std::io::stdout().lock();
        if let Err(e) = analyzer.write_records(&observations, stdout, &OutputFormat::Json) {
            error!("Failed to write records: {e}");
            std::process::exit(1);
        }
        println!();
        return;
    }

    let outputs = analyzer.analyze_batch(&observations);
    for output in &outputs {
        println!("{output}");
    }

    let digests: Vec<String> = outputs
        .iter()
        .map(|o| huginn_net_ja3::Ja3Record::from(o).ja3_digest)
        .collect();
    let stable = digests.windows(2).all(|pair| pair[0] == pair[1]);
    println!("normalize={} fingerprints_match={}", args.normalize, stable);
}
