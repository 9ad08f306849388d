//! Company Admin - command line front end for company master data.
//!
//! Every command drives the same view models a graphical front end would:
//! it navigates, fires intents and waits for the resulting state.

mod cli;

use clap::Parser;
use company_app::CompanyApp;
use company_client::HttpCompanyClient;
use company_shared::{telemetry, Settings};
use std::sync::Arc;
use tracing::info;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load()?;
    if let Some(base_url) = cli.base_url.clone() {
        settings.api.base_url = base_url;
    }

    let _guard = telemetry::init_telemetry(&settings.logging)?;
    info!("Using company API at {}", settings.api.base_url);

    let client = HttpCompanyClient::new(&settings.api)?;
    let mut app = CompanyApp::new(Arc::new(client), settings.ui.clone());

    match cli.command {
        Commands::List { search } => cli::handle_list(&mut app, search).await,
        Commands::Show { id } => cli::handle_show(&mut app, id).await,
        Commands::Create { fields, files } => cli::handle_create(&mut app, fields, files).await,
        Commands::Update { id, fields, files } => {
            cli::handle_update(&mut app, id, fields, files).await
        }
        Commands::Delete { id, yes } => cli::handle_delete(&mut app, id, yes).await,
    }
}
