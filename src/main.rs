use anyhow::{Context, Result};
use create_module::cli::output::{format_execution_event, format_step_list, style, INFO};
use create_module::cli::Cli;
use create_module::clients::Toolchain;
use create_module::core::{CreateOptions, ScaffoldConfig};
use create_module::execution::{self, CreateRequest, ExecutionEngine};
use create_module::steps;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging; progress lines go to stdout, logs to stderr
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    let config = ScaffoldConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    let options = CreateOptions { check: cli.check };
    let toolchain = Toolchain::live(config).context("Failed to set up the GitHub client")?;

    if cli.dry_run {
        let steps = steps::assemble(&options, &toolchain);
        println!("{} Steps for {}:", INFO, style(&cli.name).bold());
        print!("{}", format_step_list(&steps));
        return Ok(());
    }

    let token = cli
        .token
        .clone()
        .context("A GitHub token is required (--token or GITHUB_TOKEN)")?;
    let request = CreateRequest {
        name: cli.name.clone(),
        token,
        options,
        cwd: std::env::current_dir().context("Failed to read the current directory")?,
    };

    let mut engine = ExecutionEngine::new();
    engine.add_event_handler(|event| println!("{}", format_execution_event(&event)));

    let report = execution::create_module(&request, &toolchain, &engine).await;
    if let Some(err) = report.error {
        eprintln!("{} {}", style("Error:").red().bold(), err);
        std::process::exit(1);
    }

    Ok(())
}
