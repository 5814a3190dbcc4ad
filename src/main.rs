use std::process;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, Cell, CellAlignment, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use appstat::actor::{Actor, ActorError, InstanceOrder};
use appstat::api::{self, CloudControllerClient};
use appstat::config::Settings;
use appstat::models::{InstanceView, Warnings};
use appstat::utils::{byte_size, format_cpu, format_since, format_state};

#[derive(Parser)]
#[command(
    name = "appstat",
    author,
    version,
    about = "Show the health of an application's running instances",
    long_about = r#"appstat — per-instance health for a deployed application.

Fetches runtime statistics and lifecycle state for every instance of an
application and shows them side by side. Instances missing from one of the two
sources are still listed, with "(Unable to retrieve information)" in their
details.

Examples:
  appstat instances 6e8e2a5c-4b0f-4a0e-9d7b-0e5f0f1a2b3c
  appstat instances my-app-guid --order unordered --json
"#,
    after_help = "Use `appstat <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the instances of an application
    Instances {
        /// Application GUID
        application_id: String,
        /// Row order: ascending (by index) or unordered
        #[arg(long)]
        order: Option<InstanceOrder>,
        /// Print the views as JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Validate configuration (API_BASE_URL / API_TOKEN)
    CheckConfig {
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
}

fn display_warnings(warnings: &Warnings) {
    for warning in warnings {
        eprintln!("{}", yansi::Paint::new(warning).yellow());
    }
}

fn instances_table(views: &[InstanceView]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }

    table.set_header(vec!["", "State", "Since", "CPU", "Memory", "Disk", "Details"]);
    for view in views {
        table.add_row(vec![
            Cell::new(format!("#{}", view.index())),
            Cell::new(format_state(view.state().as_str())),
            Cell::new(format_since(view.created_at())),
            Cell::new(format_cpu(view.cpu())).set_alignment(CellAlignment::Right),
            Cell::new(format!("{} of {}", byte_size(view.memory()), byte_size(view.memory_quota()))),
            Cell::new(format!("{} of {}", byte_size(view.disk()), byte_size(view.disk_quota()))),
            Cell::new(view.details()),
        ]);
    }
    table
}

fn handle_error(err: &ActorError) -> ! {
    match err {
        ActorError::NotFound { .. } => {
            eprintln!("{}", yansi::Paint::new(err.to_string()).red());
        }
        ActorError::Passthrough(inner) => {
            eprintln!("{}: {}", yansi::Paint::new("Request failed").red(), inner);
        }
    }
    process::exit(1);
}

async fn run_instances(application_id: &str, order: Option<InstanceOrder>, json: bool, env_file: Option<&str>) {
    let settings = Settings::from_env(env_file);
    let client = match CloudControllerClient::new(&settings.api_base_url, &settings.api_token, settings.request_timeout) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(%e, "Failed to create HTTP client");
            eprintln!("{}: {}", yansi::Paint::new("Failed to create HTTP client").red(), e);
            process::exit(1);
        }
    };
    let actor = Actor::new(client).with_order(order.unwrap_or(settings.instance_order));

    let (result, warnings) = actor.reconcile_instances(application_id).await.into_parts();
    display_warnings(&warnings);
    let views = match result {
        Ok(views) => views,
        Err(e) => handle_error(&e),
    };

    if json {
        match serde_json::to_string_pretty(&views) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("{}: {}", yansi::Paint::new("Failed to serialize instances").red(), e);
                process::exit(1);
            }
        }
        return;
    }

    if views.is_empty() {
        println!("There are no running instances of this app.");
    } else {
        println!("\n{}\n", instances_table(&views));
    }
}

fn run_check_config(env_file: Option<&str>) {
    let settings = Settings::from_env(env_file);
    let mut ok = true;
    if std::env::var("API_BASE_URL").map(|v| v.trim().is_empty()).unwrap_or(true) {
        eprintln!(
            "{} (defaulting to {})",
            yansi::Paint::new("API_BASE_URL is not configured").red(),
            settings.api_base_url
        );
        ok = false;
    }
    if settings.api_token.trim().is_empty() {
        eprintln!("{}", yansi::Paint::new("API_TOKEN is not configured").red());
        ok = false;
    }
    if !ok {
        process::exit(1);
    }
    println!(
        "{} ({}, order: {}, timeout: {}s)",
        yansi::Paint::new("Configuration looks valid").green(),
        settings.api_base_url,
        settings.instance_order,
        settings.request_timeout.as_secs()
    );
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        api::set_silent(true);
    }

    match cli.command {
        Commands::Instances { application_id, order, json, env_file } => {
            run_instances(&application_id, order, json, env_file.as_deref()).await;
        }
        Commands::CheckConfig { env_file } => run_check_config(env_file.as_deref()),
    }
}
