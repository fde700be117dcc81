use std::sync::Arc;

use medienos_pro::config::Config;
use medienos_pro::report::{DashboardReport, DateRange};
use medienos_pro::session::Session;
use medienos_pro::view;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "medienos_pro=info".into()),
        )
        .init();

    let config = Arc::new(Config::from_env());
    if !config.is_configured() {
        tracing::warn!("Endpoint not configured: SCRIPT_URL does not point at the script host");
    }

    let mut session = Session::new(config);
    tracing::info!("Loading data from remote store");
    session.load().await;
    tracing::info!(
        records = session.records().len(),
        settings = session.settings().len(),
        "Loaded"
    );

    if !session.records().is_empty() {
        let all: Vec<_> = session.records().iter().collect();
        print!("{}", view::render_record_table(&all));
        println!();
    }

    let report = DashboardReport::build(
        session.records(),
        session.settings(),
        DateRange::last_month(),
    );
    print!("{}", view::render_dashboard(&report));

    Ok(())
}
