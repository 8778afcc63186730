//! # Etiqueta CLI
//!
//! ## Usage
//!
//! ```bash
//! # Start the label printing service
//! etiqueta serve --listen 0.0.0.0:8080
//!
//! # Pin every request to one queue and render ZPL
//! etiqueta serve --printer Zebra_Lab_3 --language zpl
//!
//! # Render an order payload to printer commands without any printer
//! etiqueta render order.json
//! etiqueta render order.json --language zpl --output labels.zpl
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use etiqueta::{
    dispatch::CupsSpooler,
    grouping::group,
    label::{compose, LayoutConfig},
    normalize::normalize,
    printer::resolve::DEFAULT_PRINTER_NAME,
    server::{serve, ServerConfig},
    EtiquetaError, PrinterLanguage,
};

/// Etiqueta - lab specimen label printing service
#[derive(Parser, Debug)]
#[command(name = "etiqueta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP label printing service
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:8080")]
        listen: String,

        /// Printer command language: epl or zpl
        #[arg(long, default_value = "epl")]
        language: String,

        /// Pin all requests to this queue (beats discovery)
        #[arg(long)]
        printer: Option<String>,

        /// Queue name used when discovery finds nothing
        #[arg(long, default_value = DEFAULT_PRINTER_NAME)]
        default_printer: String,

        /// Label width override in dots
        #[arg(long)]
        width: Option<u16>,

        /// Label length override in dots
        #[arg(long)]
        length: Option<u16>,

        /// Darkness override (EPL scale 0-15)
        #[arg(long)]
        darkness: Option<u8>,

        /// Speed override (EPL scale 1-4)
        #[arg(long)]
        speed: Option<u8>,
    },

    /// Compose an order payload into printer commands, offline
    Render {
        /// JSON payload file
        payload: PathBuf,

        /// Printer command language: epl or zpl
        #[arg(long, default_value = "epl")]
        language: String,

        /// Write commands here instead of stdout
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "etiqueta=info,tower_http=info".into()),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), EtiquetaError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            listen,
            language,
            printer,
            default_printer,
            width,
            length,
            darkness,
            speed,
        } => {
            let language = PrinterLanguage::parse(&language)
                .map_err(EtiquetaError::Config)?;

            let mut layout = LayoutConfig::default();
            if let Some(width) = width {
                layout.page_width_dots = width;
            }
            if let Some(length) = length {
                layout.page_length_dots = length;
            }
            if let Some(darkness) = darkness {
                layout.darkness = darkness;
            }
            if let Some(speed) = speed {
                layout.speed = speed;
            }

            let config = ServerConfig {
                listen_addr: listen,
                language,
                printer_override: printer,
                default_printer,
                layout,
            };

            serve(config, Arc::new(CupsSpooler)).await
        }

        Commands::Render {
            payload,
            language,
            output,
        } => {
            let language = PrinterLanguage::parse(&language)
                .map_err(EtiquetaError::Config)?;

            let raw = std::fs::read_to_string(&payload)?;
            let value: serde_json::Value = serde_json::from_str(&raw)
                .map_err(|e| EtiquetaError::MalformedPayload(format!("invalid JSON: {}", e)))?;

            let (patient, requests) = normalize(&value)?;
            let groups = group(&requests);
            if groups.is_empty() {
                eprintln!("No requests with resolvable containers; nothing to render.");
                return Ok(());
            }

            let layout = LayoutConfig::default();
            let mut rendered = Vec::new();
            for container_group in &groups {
                let doc = compose(&patient, container_group, &layout);
                rendered.extend(language.render(&doc));
            }

            match output {
                Some(path) => {
                    std::fs::write(&path, &rendered)?;
                    eprintln!("Wrote {} labels to {}", groups.len(), path.display());
                }
                None => print!("{}", String::from_utf8_lossy(&rendered)),
            }

            Ok(())
        }
    }
}
