use clap::{Parser, Subcommand};
use serde_json::{json, Number, Value};

#[derive(Parser)]
#[command(name = "predict-cli")]
#[command(about = "Command-line client for the prediction service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a feature sequence and print the prediction
    Predict {
        /// Numeric features, in order
        #[arg(value_parser = parse_feature, allow_negative_numbers = true)]
        features: Vec<Number>,
    },
    /// Check service liveness
    Health,
}

fn parse_feature(raw: &str) -> Result<Number, String> {
    serde_json::from_str::<Number>(raw).map_err(|_| format!("{raw:?} is not a number"))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Predict { features } => {
            let res = client
                .post(format!("{}/prediction", cli.url))
                .json(&json!({ "X": features }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Health => {
            let res = client.get(format!("{}/health", cli.url)).send().await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
