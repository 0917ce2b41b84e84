use anyhow::Result;
use clap::Parser;
use std::io::{BufRead, Write};
use std::time::Duration;
use tabdigest::browser::FetchBrowser;
use tabdigest::relay::Relay;
use tabdigest::session::{Session, SessionState};
use tabdigest::settings::{EnvSettingsStore, SUPPORTED_MODELS};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "tabdigest")]
#[command(about = "Summarize a webpage or YouTube video and ask follow-up questions")]
struct CliArgs {
    /// URL of the page to treat as the active tab.
    #[arg(value_name = "URL", required_unless_present = "check")]
    url: Option<String>,

    /// Model to use instead of the configured GEMINI_MODEL.
    #[arg(long, value_parser = parse_model_arg)]
    model: Option<String>,

    /// Verify the configured credentials and exit.
    #[arg(long)]
    check: bool,
}

fn parse_model_arg(input: &str) -> std::result::Result<String, String> {
    if SUPPORTED_MODELS.contains(&input) {
        Ok(input.to_string())
    } else {
        Err(format!(
            "Unknown model '{}'. Supported models: {}",
            input,
            SUPPORTED_MODELS.join(", ")
        ))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tabdigest=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    let url = args.url.unwrap_or_default();
    let settings = EnvSettingsStore::new().with_model_override(args.model);
    let browser = FetchBrowser::new(url.clone(), http.clone());
    let relay = Relay::with_client(Box::new(settings), Box::new(browser), http);

    if args.check {
        return match relay.check_credentials().await {
            Ok(()) => {
                println!("Connection OK");
                Ok(())
            }
            Err(e) => {
                eprintln!("Connection failed: {}", e);
                std::process::exit(1);
            }
        };
    }

    let mut session = Session::new(relay);

    info!("Summarizing {}", url);

    if let SessionState::Failed { error: message } = session.start().await {
        error!("Summarization failed: {}", message);
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }

    if let Some(transcript) = session.transcript() {
        println!("{}", transcript.render());
    }

    // Follow-up loop: one question per line, empty line or EOF ends the
    // session.
    let stdin = std::io::stdin();
    loop {
        print!("\n> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let question = line.trim();
        if question.is_empty() {
            break;
        }

        session.ask(question).await;
        if let Some(turn) = session
            .transcript()
            .and_then(|transcript| transcript.turns().last())
        {
            println!("\n{}", turn.content);
        }
    }

    Ok(())
}
