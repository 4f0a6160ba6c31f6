use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::{Parser, Subcommand};

use geocodr_boundary::ResultRecord;
use geocodr_core::usecases;
use geocodr_entities::address::AddressRow;

use crate::{config::Config, gateways};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Port to listen on (overrides the configuration)
    #[arg(short, long)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web server (default)
    Serve,
    /// Resolve a single address and print the result as JSON
    Geocode {
        address: String,
        /// Geocoding service to use instead of the default one
        #[arg(short, long)]
        service: Option<String>,
    },
    /// List the available geocoding services
    Services,
}

pub fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut cfg = Config::try_load_from_file_or_default(args.config)?;
    if let Some(port) = args.port {
        cfg.webserver.port = port;
    }

    // The blocking HTTP clients of the gateways must be created
    // and dropped outside of the async runtime.
    let registry = Arc::new(gateways::provider_registry(&cfg)?);

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(cfg, Arc::clone(&registry))?,
        Command::Geocode { address, service } => {
            let row = AddressRow::new(address);
            let result = usecases::geocode_address(&registry, &row, service.as_deref())?;
            let record = ResultRecord::from((row, result));
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Command::Services => {
            for name in registry.list_available() {
                if name == registry.default_service() {
                    println!("{name} (default)");
                } else {
                    println!("{name}");
                }
            }
        }
    }
    Ok(())
}

fn serve(cfg: Config, registry: Arc<geocodr_core::registry::ProviderRegistry>) -> Result<()> {
    let Config {
        geocoding,
        webserver,
        ..
    } = cfg;
    let web_cfg = geocodr_webserver::Cfg {
        max_batch_size: geocoding.max_batch_size,
    };
    let server_cfg = geocodr_webserver::ServerCfg {
        address: webserver.address,
        port: webserver.port,
        upload_limit_mib: webserver.upload_limit_mib,
        enable_cors: webserver.enable_cors,
    };
    log::info!(
        "Start web server on {}:{}",
        server_cfg.address,
        server_cfg.port
    );
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(geocodr_webserver::run(registry, web_cfg, server_cfg));
    Ok(())
}
