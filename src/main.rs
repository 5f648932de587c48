//! concierge CLI binary entry point.

use std::io::{BufRead, Write};
use std::sync::Arc;

use clap::Parser;
use concierge::cli::{ChatInput, Cli, Commands};
use concierge::resolver::ResponseResolver;
use concierge::widget::ChatWidget;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("concierge=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli.overrides.load()?;
    let resolver = Arc::new(ResponseResolver::new(config)?);

    match cli.command {
        Commands::Ask(args) => {
            let message = args.message.join(" ");
            let message = message.trim();
            if message.is_empty() {
                return Err("message is empty".into());
            }
            println!("{}", resolver.resolve(message).await);
        }
        Commands::Chat => handle_chat(resolver).await?,
    }
    Ok(())
}

async fn handle_chat(resolver: Arc<ResponseResolver>) -> std::io::Result<()> {
    let mode = if resolver.has_remote() { "remote" } else { "offline" };
    eprintln!("concierge ({mode}) - /reset clears history, /quit exits");

    let mut widget = ChatWidget::new(resolver);
    widget.open();

    let mut lines = std::io::stdin().lock().lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        match ChatInput::parse(&line) {
            ChatInput::Quit => break,
            ChatInput::Reset => {
                widget.clear();
                eprintln!("(history cleared)");
            }
            ChatInput::Message(text) => {
                if let Some(reply) = widget.submit(text).await {
                    println!("{reply}");
                }
            }
        }
    }

    widget.close();
    Ok(())
}
