use std::collections::BTreeMap;

use clap::{Parser, Subcommand};
use serde_json::Value;
use url::Url;

use stock_router::routing::{route_table, RouteParams};

#[derive(Parser)]
#[command(name = "route-cli")]
#[command(about = "Inspect the stock viewer route table and query a running server", long_about = None)]
struct Cli {
    /// Base URL of a running server.
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the declared routes
    Routes,
    /// Resolve a path against the route table
    Resolve { path: String },
    /// Build a path from a route name and key=value parameters
    Href { name: String, params: Vec<String> },
    /// Fetch the demo records from the server
    Records,
    /// Fetch a stock quote from the server
    Quote { ticker: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = route_table();

    match cli.command {
        Commands::Routes => {
            for entry in config.routes().iter() {
                println!("{:<8} {:<16} {}", entry.name(), entry.pattern().to_string(), entry.view());
            }
        }
        Commands::Resolve { path } => match config.resolve(&path) {
            Some(matched) => println!("{}", serde_json::to_string_pretty(&matched)?),
            None => {
                eprintln!("No route matches {}", path);
                std::process::exit(1);
            }
        },
        Commands::Href { name, params } => {
            let params = parse_params(&params)?;
            println!("{}", config.location(&name, &params)?);
        }
        Commands::Records => {
            let url = Url::parse(&cli.url)?.join("/api/records")?;
            print_response(reqwest::get(url).await?).await?;
        }
        Commands::Quote { ticker } => {
            let path = format!("/api/stocks/{}", urlencoding::encode(&ticker));
            let url = Url::parse(&cli.url)?.join(&path)?;
            print_response(reqwest::get(url).await?).await?;
        }
    }

    Ok(())
}

fn parse_params(raw: &[String]) -> Result<RouteParams, String> {
    let mut params = BTreeMap::new();
    for pair in raw {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("expected key=value, got `{}`", pair))?;
        params.insert(key.to_string(), value.to_string());
    }
    Ok(params)
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
