use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use orgview::bootstrap::{OrgViewer, PageScaffold, boot};
use orgview::catalog::InteractionCatalog;
use orgview::config::ViewerSettings;
use orgview::host::{BundledOrgDataStore, NoopMapRenderer, StaticTreeRenderer};
use orgview::shell::run_shell;

#[derive(Debug, Parser)]
#[command(name = "orgview", about = "Org-chart viewer with tree and map views")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the bootstrap sequence headless and print the resulting state.
    Demo,
    /// Print the seeded interaction catalog as JSON.
    Catalog,
    /// Open the native viewer shell.
    Shell,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let cli = Cli::parse();
    let settings = ViewerSettings::from_env().context("failed to load configuration")?;

    match cli.command {
        Commands::Demo => run_demo(&settings).await,
        Commands::Catalog => print_catalog(),
        Commands::Shell => {
            let viewer = boot_with_bundled_hosts(&settings).await;
            run_shell(viewer)
        }
    }
}

fn init_tracing() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,orgview=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}

async fn boot_with_bundled_hosts(settings: &ViewerSettings) -> OrgViewer {
    let mut data_store = BundledOrgDataStore::default();
    let mut ui = StaticTreeRenderer::default();
    let map = NoopMapRenderer::new(true);

    boot(
        settings,
        PageScaffold::standard(),
        &mut data_store,
        &mut ui,
        Some(Box::new(map)),
    )
    .await
}

async fn run_demo(settings: &ViewerSettings) -> Result<()> {
    let mut viewer = boot_with_bundled_hosts(settings).await;

    if !viewer.status.is_clear() {
        println!("bootstrap status: {}", viewer.status.message());
        return Ok(());
    }

    let active = viewer
        .view
        .mode()
        .map(|mode| mode.as_str())
        .unwrap_or("inert");
    println!("active view after bootstrap: {active}");

    viewer.view.set_view("map");
    let map_panel = viewer.view.map_panel().context("view switch is inert")?;
    println!("map panel visible: {}", map_panel.visible());
    if let Some(notice) = map_panel.notice() {
        println!("map notice: {notice}");
    }

    viewer.view.set_view("tree");
    println!("roles in catalog:");
    for role in viewer.catalog.role_names() {
        let count = viewer
            .catalog
            .interactions(role)
            .map(<[_]>::len)
            .unwrap_or(0);
        println!("  {role} ({count} interactions)");
    }

    Ok(())
}

fn print_catalog() -> Result<()> {
    let catalog = InteractionCatalog::with_default_roles();
    let json = serde_json::to_string_pretty(&catalog)
        .context("failed to serialize interaction catalog")?;
    println!("{json}");
    Ok(())
}
