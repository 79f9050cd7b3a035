use clap::Parser;
use tracing::{debug, error};
use transweep::api::AdminApiClient;
use transweep::config::{self, Credentials, WorkflowConfig};
use transweep::interaction::{ConsoleInteraction, UserInteraction};
use transweep::workflow;

/// Update a named transformation and purge its derived resources
#[derive(Parser)]
#[command(name = "transweep")]
#[command(
    about = "Update a named media transformation and purge its derived resources so they regenerate",
    long_about = None
)]
struct Cli {
    /// Name of the transformation to update
    transformation: String,

    /// Replacement definition as a JSON object, e.g. '{"width":600,"height":600}'
    #[arg(short, long)]
    definition: String,

    /// Ids per delete call (capped at the service limit of 100)
    #[arg(long, default_value_t = config::DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    /// Derived resources per listing page (capped at the service limit of 500)
    #[arg(long, default_value_t = config::DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace,hyper=debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    debug!(
        transformation = %cli.transformation,
        batch_size = cli.batch_size,
        page_size = cli.page_size,
        "transweep started"
    );

    let ui = ConsoleInteraction::new();
    if let Err(e) = run(cli, &ui).await {
        error!("fatal: {e}");
        ui.error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli, ui: &dyn UserInteraction) -> transweep::error::Result<()> {
    let definition = config::parse_definition(&cli.definition)?;
    let workflow_config = WorkflowConfig::new(cli.transformation, definition)
        .with_batch_size(cli.batch_size)
        .with_page_size(cli.page_size);

    let credentials = Credentials::from_env()?;
    let client = AdminApiClient::new(&credentials)?;

    workflow::run(&client, ui, &workflow_config).await
}
