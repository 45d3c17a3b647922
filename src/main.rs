//! Console entry point: initializes the stack and prints a per-project
//! back-office digest (budget usage, phase progress, before/after coverage).

use atelier_desk::config::{database, settings};
use atelier_desk::core::{currency::Currency, project, report};
use atelier_desk::errors::Result;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();

    // 3. Studio settings, with built-in defaults when config.toml is absent
    let settings = settings::load_or_default()?;
    info!(
        currency = %settings.currency,
        phases = settings.phases.len(),
        "Loaded studio settings"
    );

    // 4. Database
    let db = database::create_connection().await?;
    database::create_tables(&db).await?;
    info!("Database initialized");

    // 5. Per-project digest
    let projects = project::get_all_active_projects(&db).await?;
    if projects.is_empty() {
        info!("No active projects yet");
        return Ok(());
    }

    for entry in projects {
        let rpt = report::generate_project_report(&db, entry.id).await?;
        let currency = Currency::from_code(&rpt.project.currency);

        println!("\n{}", rpt.project.name);
        match rpt.budget.summary() {
            Some(summary) => {
                println!("  budget    {}", report::format_budget_line(summary, currency));
            }
            None => println!("  budget    not computed"),
        }
        match rpt.overall_completion {
            Some(pct) => {
                println!("  progress  {}", report::format_completion_bar(pct, None));
            }
            None => println!("  progress  no phases defined"),
        }
        for tracked in &rpt.phases {
            println!("    {:>5.1}%  {}", tracked.completion, tracked.phase.name);
        }
        println!("  before/after rooms: {}", rpt.comparable_rooms.len());
    }

    Ok(())
}
