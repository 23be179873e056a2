// src/main.rs
use actix_web::{web, App, HttpServer};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{error, info};

use muc::config::Config;
use muc::shell::{self, Shell};
use muc::storage::memory::ConsoleStore;

#[derive(Parser, Debug)]
#[command(author, version, about = "Cross-server message and command console", long_about = None)]
struct Args {
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Interactive console against a backend (default)
    Console {
        /// Backend base URL, overrides MUC_API_URL
        #[arg(long)]
        api_url: Option<String>,
    },
    /// Run the in-memory mock backend
    Serve {
        /// Address to bind, overrides BIND_ADDRESS
        #[arg(short, long)]
        bind: Option<String>,

        /// Port to listen on, overrides PORT
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    // Initialize logger only once at the start
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();
    let mut config = Config::from_env();

    match args.mode.unwrap_or(Mode::Console { api_url: None }) {
        Mode::Console { api_url } => {
            if let Some(url) = api_url {
                config = config.with_api_url(url);
            }
            info!("Console using backend {}", config.api_base_url);

            if let Err(e) = shell::run(Shell::new(&config)).await {
                error!("Console failed: {}", e);
                return Err(e);
            }
            Ok(())
        }
        Mode::Serve { bind, port } => {
            if let Some(bind) = bind {
                config.bind_address = bind;
            }
            if let Some(port) = port {
                config.port = port;
            }
            serve(&config).await
        }
    }
}

async fn serve(config: &Config) -> std::io::Result<()> {
    let storage = web::Data::new(ConsoleStore::seeded());
    let bind = config.bind();

    info!("Starting mock backend on {}", bind);
    HttpServer::new(move || {
        App::new()
            .app_data(storage.clone())
            .configure(muc::handlers::configure)
    })
    .bind(&bind)?
    .run()
    .await
}
