//! WFS inspection CLI.
//!
//! Loads a WFS GetCapabilities document and prints its service metadata,
//! its feature types, or the feature type a name resolves to.

mod render;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use ogc_common::{BoundingBox, OgcError};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use wfs_protocol::{CapabilitiesCache, CapabilitiesDocument, HttpXmlLoader, LoaderConfig};

#[derive(Parser, Debug)]
#[command(name = "wfs-inspect")]
#[command(about = "Inspect a WFS GetCapabilities document")]
struct Args {
    /// GetCapabilities URL
    #[arg(short, long, env = "WFS_URL")]
    url: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,

    /// Log level
    #[arg(long, default_value = "warn", env = "WFS_LOG_LEVEL")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print service identification and contact details
    Service,

    /// List feature types
    Layers {
        /// Only layers whose WGS84 extent intersects "minx,miny,maxx,maxy"
        #[arg(long)]
        within: Option<String>,
    },

    /// Resolve layer names against the feature type list
    Find {
        /// Names to resolve (qualified names, local names or titles)
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

async fn load(cache: &CapabilitiesCache, url: &str) -> Result<Arc<CapabilitiesDocument>> {
    cache
        .get(url)
        .await
        .map_err(OgcError::from)
        .with_context(|| format!("loading capabilities from {}", url))
}

fn init_tracing(args: &Args) -> Result<()> {
    let builder = FmtSubscriber::builder()
        .with_max_level(parse_level(&args.log_level))
        .with_writer(std::io::stderr);

    if args.log_json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(&args)?;

    let config = LoaderConfig::from_env();
    info!(
        request_timeout_secs = config.request_timeout.as_secs(),
        connect_timeout_secs = config.connect_timeout.as_secs(),
        "Loader configured"
    );
    let loader = HttpXmlLoader::new(&config).context("building HTTP loader")?;
    let cache = CapabilitiesCache::new(Arc::new(loader));

    match &args.command {
        Command::Service => {
            let doc = load(&cache, &args.url).await?;
            println!("{}", render::service(&doc, args.output)?);
        }
        Command::Layers { within } => {
            let filter = within
                .as_deref()
                .map(BoundingBox::from_kvp_string)
                .transpose()
                .map_err(OgcError::from)
                .context("parsing --within")?;
            let doc = load(&cache, &args.url).await?;
            let layers = render::select_layers(doc.feature_types(), filter.as_ref());
            println!("{}", render::layers(&layers, args.output)?);
        }
        Command::Find { names } => {
            let mut missing = Vec::new();
            for name in names {
                let doc = load(&cache, &args.url).await?;
                match doc.find_layer(name) {
                    Some(layer) => println!("{}", render::layer(name, layer, args.output)?),
                    None => missing.push(name.as_str()),
                }
            }
            if !missing.is_empty() {
                return Err(OgcError::LayerNotFound(missing.join(", ")).into());
            }
        }
    }

    let stats = cache.stats();
    info!(hits = stats.hits, misses = stats.misses, "Capabilities cache");
    Ok(())
}
