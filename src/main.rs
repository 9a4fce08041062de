use std::process::ExitCode;

use clap::Parser;
use startup_roast::examples::usage_hint;
use startup_roast::render::{render_card, render_error};
use startup_roast::{ClientConfig, HttpBackend, LifecycleState, RequestController};
use tracing_subscriber::EnvFilter;

/// Submit a startup idea for a brutally honest roast.
#[derive(Debug, Parser)]
#[command(name = "startup-roast-cli", version)]
struct Cli {
    /// Startup name
    #[arg(required_unless_present = "example")]
    name: Option<String>,

    /// What the startup does
    #[arg(required_unless_present = "example")]
    description: Option<String>,

    /// Prefill from the service's random-example endpoint
    #[arg(long, conflicts_with = "name")]
    example: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let config = ClientConfig::from_env();
    let controller = RequestController::new(HttpBackend::new(&config));

    let (name, description) = if cli.example {
        match controller.fetch_example().await {
            Some(example) => {
                println!("Trying example: {} - {}", example.name, example.description);
                (example.name, example.description)
            }
            None => {
                eprintln!(
                    "{}",
                    render_error("Could not fetch an example idea. Supply your own instead.")
                );
                return ExitCode::FAILURE;
            }
        }
    } else {
        // clap guarantees both are present unless --example was given.
        (
            cli.name.unwrap_or_default(),
            cli.description.unwrap_or_default(),
        )
    };

    let Some(handle) = controller.submit(&name, &description) else {
        eprintln!(
            "{}",
            render_error(&format!(
                "Both a name and a description are required (max 100/1000 characters). {}",
                usage_hint(&mut rand::thread_rng())
            ))
        );
        return ExitCode::FAILURE;
    };

    println!("🔥 Roasting...");
    if handle.await.is_err() {
        eprintln!("{}", render_error("Something went wrong. Try again!"));
        return ExitCode::FAILURE;
    }

    match controller.state() {
        LifecycleState::Success(result) => {
            println!("{}", render_card(&result));
            ExitCode::SUCCESS
        }
        LifecycleState::Failed(message) => {
            eprintln!("{}", render_error(&message));
            ExitCode::FAILURE
        }
        LifecycleState::Idle | LifecycleState::Loading => ExitCode::FAILURE,
    }
}
