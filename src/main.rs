use analytics::{DashboardReport, MetricsEngine};
use api_client::{fetch_dashboard, DashboardApi, PlatformClient, SessionStore};
use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::Table;
use configuration::Settings;
use export::export_records;
use tracing_subscriber::EnvFilter;

/// The main entry point for the negotiation dashboard CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment overrides from a .env file when one exists.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let settings = configuration::load_settings()?;
    tracing::debug!(base_url = %settings.api.base_url, "dashboard client initialized");
    let store = SessionStore::new(settings.session.path.clone());
    let client = PlatformClient::new(&settings.api, store.clone());

    match cli.command {
        Commands::Login(args) => handle_login(&client, args).await,
        Commands::Logout => handle_logout(&store),
        Commands::Whoami => handle_whoami(&store),
        Commands::Overview(args) => handle_overview(&client, args).await,
        Commands::Benchmarks => handle_benchmarks(&client).await,
        Commands::Export(args) => handle_export(&client, &settings, args).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Stakeholder dashboard for the blockchain negotiation platform.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Authenticate against the platform and persist the session.
    Login(LoginArgs),
    /// Clear the persisted session.
    Logout,
    /// Show the currently stored user profile.
    Whoami,
    /// Fetch every dashboard section and render the KPI summary.
    Overview(OverviewArgs),
    /// Render the strategy benchmarking table.
    Benchmarks,
    /// Export a dataset as a timestamped CSV file.
    Export(ExportArgs),
}

#[derive(Parser)]
struct LoginArgs {
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
}

#[derive(Parser)]
struct OverviewArgs {
    /// Print the report as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct ExportArgs {
    /// Which dataset to export.
    #[arg(long, value_enum)]
    subject: ExportSubject,
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportSubject {
    Evaluations,
    Proposals,
    Benchmarks,
}

// ==============================================================================
// Command Handlers
// ==============================================================================

async fn handle_login(client: &PlatformClient, args: LoginArgs) -> anyhow::Result<()> {
    let session = client.login(&args.email, &args.password).await?;
    println!(
        "Logged in as {} ({})",
        session.user.name, session.user.role
    );
    Ok(())
}

fn handle_logout(store: &SessionStore) -> anyhow::Result<()> {
    store.clear()?;
    println!("Session cleared.");
    Ok(())
}

fn handle_whoami(store: &SessionStore) -> anyhow::Result<()> {
    match store.load() {
        Some(session) => println!("{} ({})", session.user.name, session.user.role),
        None => println!("Not logged in."),
    }
    Ok(())
}

async fn handle_overview(client: &PlatformClient, args: OverviewArgs) -> anyhow::Result<()> {
    let mut data = fetch_dashboard(client).await;

    // Derived fields (performance score, trend) are filled locally; the
    // backend only ships the raw metrics.
    for evaluation in &mut data.evaluations {
        analytics::enrich(evaluation);
    }

    let report = MetricsEngine::new().calculate(
        &data.proposals,
        &data.negotiations,
        &data.conflicts,
        &data.evaluations,
        &data.feasibility,
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_overview(&report);
    }

    // One notification per failed section, after the tables so the degraded
    // view is still the headline.
    for notice in &data.errors {
        eprintln!("⚠ {notice}");
    }

    Ok(())
}

async fn handle_benchmarks(client: &PlatformClient) -> anyhow::Result<()> {
    let benchmarks = client.fetch_benchmarks().await?;

    let mut table = Table::new();
    table.set_header(vec![
        "Strategy",
        "Fairness (Jain)",
        "Avg TTC",
        "Avg Utility Gain",
        "Samples",
    ]);
    for b in &benchmarks {
        table.add_row(vec![
            b.strategy.clone(),
            b.fairness_index.map_or_else(|| "-".to_string(), |v| format!("{v:.3}")),
            b.avg_time_to_consensus_secs
                .map_or_else(|| "-".to_string(), |secs| human_secs(secs)),
            b.avg_utility_gain.map_or_else(|| "-".to_string(), |v| format!("{v:.2}")),
            b.sample_size.map_or_else(|| "-".to_string(), |n| n.to_string()),
        ]);
    }
    println!("{table}");
    Ok(())
}

async fn handle_export(
    client: &PlatformClient,
    settings: &Settings,
    args: ExportArgs,
) -> anyhow::Result<()> {
    let now = chrono::Utc::now();
    let doc = match args.subject {
        ExportSubject::Evaluations => {
            let mut evaluations = client.fetch_evaluations().await?;
            for evaluation in &mut evaluations {
                analytics::enrich(evaluation);
            }
            export_records("evaluations", &evaluations, now)
        }
        ExportSubject::Proposals => {
            let proposals = client.fetch_proposals().await?;
            export_records("proposals", &proposals, now)
        }
        ExportSubject::Benchmarks => {
            let benchmarks = client.fetch_benchmarks().await?;
            export_records("benchmarks", &benchmarks, now)
        }
    };

    let path = doc.write_to(&settings.export.output_dir)?;
    println!("Exported {}", path.display());
    Ok(())
}

// ==============================================================================
// Rendering
// ==============================================================================

fn render_overview(report: &DashboardReport) {
    let mut proposals = Table::new();
    proposals.set_header(vec!["Proposals", ""]);
    proposals.add_row(vec!["Total".to_string(), report.proposals.total.to_string()]);
    proposals.add_row(vec![
        "Acceptance rate".to_string(),
        format!("{:.1}%", report.proposals.acceptance_rate_pct),
    ]);
    for status in &report.proposals.by_status {
        proposals.add_row(vec![format!("  {}", status.key), status.count.to_string()]);
    }

    let mut negotiations = Table::new();
    negotiations.set_header(vec!["Negotiations", ""]);
    negotiations.add_row(vec![
        "Total".to_string(),
        report.negotiations.total.to_string(),
    ]);
    negotiations.add_row(vec![
        "Active".to_string(),
        report.negotiations.active.to_string(),
    ]);
    negotiations.add_row(vec![
        "Completed".to_string(),
        report.negotiations.completed.to_string(),
    ]);
    negotiations.add_row(vec![
        "Avg rounds".to_string(),
        report
            .negotiations
            .average_rounds
            .map_or_else(|| "-".to_string(), |v| format!("{v:.1}")),
    ]);

    let mut conflicts = Table::new();
    conflicts.set_header(vec!["Conflicts", ""]);
    conflicts.add_row(vec!["Total".to_string(), report.conflicts.total.to_string()]);
    conflicts.add_row(vec![
        "Resolved".to_string(),
        report.conflicts.resolved.to_string(),
    ]);
    conflicts.add_row(vec![
        "Resolution rate".to_string(),
        format!("{:.1}%", report.conflicts.resolution_rate_pct),
    ]);

    let mut evaluations = Table::new();
    evaluations.set_header(vec!["Evaluations", ""]);
    evaluations.add_row(vec![
        "Total".to_string(),
        report.evaluations.total.to_string(),
    ]);
    evaluations.add_row(vec![
        "Avg time to consensus".to_string(),
        report
            .evaluations
            .average_time_to_consensus
            .map_or_else(|| "-".to_string(), |d| human_secs(d.as_secs_f64())),
    ]);
    evaluations.add_row(vec![
        "Avg satisfaction".to_string(),
        report
            .evaluations
            .average_satisfaction
            .map_or_else(|| "-".to_string(), |v| format!("{v:.2} / 5")),
    ]);
    evaluations.add_row(vec![
        "Avg performance score".to_string(),
        report
            .evaluations
            .average_performance_score
            .map_or_else(|| "-".to_string(), |v| format!("{v:.0} / 100")),
    ]);
    for trend in &report.evaluations.by_trend {
        evaluations.add_row(vec![
            format!("  {}", trend.key.as_str()),
            trend.count.to_string(),
        ]);
    }

    let mut feasibility = Table::new();
    feasibility.set_header(vec!["Feasibility", "Mean score"]);
    for dim in &report.feasibility.dimension_scores {
        feasibility.add_row(vec![dim.dimension.clone(), format!("{:.2}", dim.mean_score)]);
    }
    feasibility.add_row(vec![
        "overall".to_string(),
        report
            .feasibility
            .average_overall_score
            .map_or_else(|| "-".to_string(), |v| format!("{v:.2}")),
    ]);

    println!("{proposals}");
    println!("{negotiations}");
    println!("{conflicts}");
    println!("{evaluations}");
    println!("{feasibility}");
}

/// Formats a second count as a compact `1h 23m 45s` string for table cells.
fn human_secs(secs: f64) -> String {
    let total = secs.max(0.0).round() as u64;
    let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
    if h > 0 {
        format!("{h}h {m}m {s}s")
    } else if m > 0 {
        format!("{m}m {s}s")
    } else {
        format!("{s}s")
    }
}
