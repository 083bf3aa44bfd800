mod view;

use anyhow::Result;
use clap::{Parser, Subcommand};
use modelsearch_client::{Autocomplete, HttpSearchClient, SearchClient};
use modelsearch_core::{Query, ResultItem, ServerStatus, WidgetConfig};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use view::{format_items, TerminalView};

#[derive(Parser)]
#[command(name = "modelsearch")]
#[command(about = "Model Search - find models in the Ollama library", long_about = None)]
struct Cli {
    /// Model search server URL
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the library once and print the matches
    Search {
        /// Text to look for in model names
        keyword: String,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        output: String,
    },

    /// Show whether the server can reach Ollama
    Status,
}

fn get_server_url() -> String {
    std::env::var("MODELSEARCH_SERVER").unwrap_or_else(|_| "http://localhost:5000".to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let server = cli.server.unwrap_or_else(get_server_url);
    let client = HttpSearchClient::new(&server);

    match cli.command {
        Some(Commands::Search { keyword, output }) => cmd_search(&client, &keyword, &output).await?,
        Some(Commands::Status) => cmd_status(&client).await?,
        None => run_interactive(client).await?,
    }

    Ok(())
}

async fn cmd_search(client: &HttpSearchClient, keyword: &str, output: &str) -> Result<()> {
    let Some(query) = Query::parse(keyword) else {
        anyhow::bail!("Search keyword is empty");
    };

    let models = client.search(&query).await?;

    if output == "json" {
        println!("{}", serde_json::to_string_pretty(&models)?);
        return Ok(());
    }

    if models.is_empty() {
        println!("No models match '{}'", query);
        return Ok(());
    }

    let items: Vec<ResultItem> = models.iter().map(ResultItem::from).collect();
    println!();
    print!("{}", format_items(&items));
    println!();

    Ok(())
}

async fn cmd_status(client: &HttpSearchClient) -> Result<()> {
    println!("System Status:");
    println!("{:-<40}", "");
    println!("  Server: {}", client.base_url());

    match client.server_status().await {
        Ok(resp) => {
            let label = match resp.status {
                ServerStatus::Running => "running",
                ServerStatus::Stopped => "stopped",
            };
            println!("  Ollama: {}", label);
        }
        Err(e) => {
            tracing::warn!("Status request to {} failed: {}", client.base_url(), e);
            println!("  Server: unreachable ({})", e);
        }
    }

    Ok(())
}

async fn run_interactive(client: HttpSearchClient) -> Result<()> {
    display_welcome();

    let autocomplete = Autocomplete::new(client, TerminalView::new(), &WidgetConfig::default());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print!("> ");
    flush();

    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();

        match trimmed {
            ":quit" | ":q" => break,
            ":help" | ":h" => display_help(),
            ":clear" => autocomplete.input(""),
            _ if trimmed.starts_with(":pick") => {
                let picked = trimmed
                    .trim_start_matches(":pick")
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| autocomplete.select_index(i));
                match picked {
                    Some(name) => println!("  Selected: {}", name),
                    None => println!("  No such result. Use :pick <#> from the list."),
                }
            }
            _ => autocomplete.input(&line),
        }

        print!("> ");
        flush();
    }

    let widget = autocomplete.snapshot();
    if !widget.input.trim().is_empty() {
        println!("{}", widget.input);
    }

    Ok(())
}

fn flush() {
    use std::io::Write;
    let _ = std::io::stdout().flush();
}

fn display_welcome() {
    println!();
    println!("  Model Search");
    println!();
    println!("  Type part of a model name; matches appear after a short pause.");
    println!();
    println!("  :pick <#>   # Put result # in the field");
    println!("  :clear      # Empty the field");
    println!("  :help       # Show all command options");
    println!("  :quit       # Exit and print the field");
    println!();
}

fn display_help() {
    println!();
    println!("Available Commands:");
    println!("  <text>       Replace the field with <text> and search after 300 ms");
    println!("  :pick <#>    Select a listed result by number");
    println!("  :clear       Clear the field and hide results");
    println!("  :help, :h    Show this help message");
    println!("  :quit, :q    Exit, printing the field content");
    println!();
}
