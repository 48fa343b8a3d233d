//! Ubigeo engine - command-line entry point.
//!
//! Opens one picker session against the configured source, restoring the
//! stored selection given as the first argument (a `code-name` composite or
//! a JSON preload object), then prints the outcome.

use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ubigeo_domain::{CompositeCode, Level, PreloadRequest};
use ubigeo_engine::infrastructure::settings::{load_dotenv, PickerSettings};
use ubigeo_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (binary may run from `crates/engine`).
    load_dotenv(&PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../.."));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ubigeo_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Ubigeo picker");

    let settings = PickerSettings::from_env()?;
    let app = App::from_settings(&settings);

    let preload = match std::env::args().nth(1) {
        Some(arg) => parse_preload(&arg)?,
        None => None,
    };

    let mut modal = app.use_cases.picker.modal();
    let session = modal.open(preload).await;

    if session.is_complete() {
        println!("{}", session.breadcrumb());
        let finalized = modal.confirm()?;
        println!("{}", serde_json::to_string_pretty(&finalized)?);
        return Ok(());
    }

    let breadcrumb = session.breadcrumb();
    if !breadcrumb.is_empty() {
        println!("Selected so far: {breadcrumb}");
    }
    let next = Level::ALL
        .into_iter()
        .find(|level| session.selection().get(*level).is_none())
        .unwrap_or(Level::Country);
    println!("Choose a {next}:");
    for node in session.options(next) {
        println!("  {:>8}  {:<10} {}", node.id.get(), node.code, node.name);
    }

    Ok(())
}

fn parse_preload(arg: &str) -> anyhow::Result<Option<PreloadRequest>> {
    let arg = arg.trim();
    if arg.is_empty() {
        return Ok(None);
    }
    if arg.starts_with('{') {
        let request = serde_json::from_str(arg).context("Invalid preload JSON")?;
        return Ok(Some(request));
    }
    let composite: CompositeCode = arg.parse().context("Invalid stored location code")?;
    Ok(Some(composite.into()))
}
