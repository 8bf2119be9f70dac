use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use url::Url;

#[derive(Parser, Debug)]
#[command(
    name = "autoscale-cli",
    about = "Normalize autoscaling policy responses into typed JSON",
    version
)]
struct Args {
    /// Input is a single-policy response ({"policy": {...}})
    #[arg(long)]
    single: bool,

    /// Reject policies that carry more than one target type key
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Base URL for resolving relative link hrefs
    #[arg(long, value_name = "URL")]
    base_url: Option<Url>,

    /// Pretty-print JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("autoscale=warn")),
        )
        .init();

    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }
    debug!(bytes = buf.len(), single = args.single, "read policy response");

    let mut options = autoscale::Options {
        strict: args.strict,
        base_url: None,
    };
    if let Some(base_url) = args.base_url {
        options = options.with_base_url(base_url);
    }

    let out = if args.single {
        let document: serde_json::Value =
            serde_json::from_str(&buf).map_err(autoscale::Error::from)?;
        let policy = autoscale::normalize_single(&document, &options)?;
        render(&policy, args.pretty)?
    } else {
        let policies = autoscale::normalize_str(&buf, &options)?;
        render(&policies, args.pretty)?
    };
    println!("{}", out);

    Ok(())
}

fn render<T: serde::Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
