#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;

use catalog_core::config::default_data_dir;
use catalog_core::CatalogConfig;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

use crate::context::Services;

/// Character Catalog - browse the Rick and Morty character dataset
#[derive(Parser, Debug)]
#[command(name = "catalog-desktop")]
#[command(about = "Character Catalog - profile-gated character browser")]
struct Args {
    /// Data directory for the profile database
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Instance name (creates data dir: catalog-<name>)
    #[arg(short, long)]
    name: Option<String>,

    /// GraphQL endpoint override
    #[arg(long, hide = true)]
    endpoint: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let (data_dir, display_name) = match (args.data_dir, args.name.as_deref()) {
        (Some(dir), _) => {
            let label = dir
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("custom")
                .to_string();
            (dir, label)
        }
        (None, Some(name)) => (default_data_dir(Some(name)), name.to_string()),
        (None, None) => (default_data_dir(None), String::new()),
    };

    let mut config = CatalogConfig::default().with_data_dir(data_dir);
    if let Some(endpoint) = args.endpoint {
        config = config.with_endpoint(endpoint);
    }

    tracing::info!(
        "Starting '{}' with data dir {:?}, endpoint {}",
        display_name,
        config.data_dir,
        config.endpoint
    );

    let services = match Services::bootstrap(&config) {
        Ok(services) => services,
        Err(e) => {
            tracing::error!("Failed to start: {:#}", e);
            std::process::exit(1);
        }
    };

    let title = if display_name.is_empty() {
        app::APP_NAME.to_string()
    } else {
        format!("{} - {}", app::APP_NAME, display_name)
    };

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context(services)
        .launch(app::App);
}
