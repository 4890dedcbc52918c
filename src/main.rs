mod chart;
mod ephemeris;
mod web;

use clap::{Parser, Subcommand};
use std::fs;
use std::io::Read;
use std::process::ExitCode;
use utoipa::OpenApi;

use crate::ephemeris::SwissEphemeris;
use crate::web::api_doc::ApiDoc;
use crate::web::{AppState, Config};

#[derive(Parser)]
#[command(name = "natal-chart")]
#[command(about = "Natal chart computation service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve POST /natal over HTTP
    Serve {
        /// YAML configuration file
        #[arg(short, long)]
        config: Option<String>,
        /// Listen address, overrides the configuration file
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Compute one chart from a JSON request file ("-" reads stdin)
    Chart { request: String },
    /// Print the OpenAPI document
    Openapi,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, bind } => serve(config.as_deref(), bind),
        Commands::Chart { request } => chart(&request),
        Commands::Openapi => openapi(),
    }
}

fn serve(config_path: Option<&str>, bind: Option<String>) -> ExitCode {
    let mut config = match config_path {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };
    if let Some(bind) = bind {
        config.web.bind = bind;
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error starting runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::new(SwissEphemeris::new());
    match runtime.block_on(web::run_server(config, state)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn chart(path: &str) -> ExitCode {
    let mut body = Vec::new();
    let read = if path == "-" {
        std::io::stdin().read_to_end(&mut body).map(|_| ())
    } else {
        fs::read(path).map(|content| body = content)
    };
    if let Err(e) = read {
        eprintln!("Error reading request: {}", e);
        return ExitCode::FAILURE;
    }

    let chart = match chart::chart_from_json(&body, &SwissEphemeris::new()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&chart) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing chart: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn openapi() -> ExitCode {
    match ApiDoc::openapi().to_pretty_json() {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing OpenAPI document: {}", e);
            ExitCode::FAILURE
        }
    }
}
