use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "risk-cli")]
#[command(about = "Command-line client for the Mountain Risk API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess the risk of a location
    Assess {
        location: String,
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        lng: Option<f64>,
    },
    /// Assess a location, then generate a report for it
    Report { location: String },
    /// Autocomplete a location name
    Suggest { query: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Assess { location, lat, lng } => {
            let res = client
                .post(format!("{}/api/assess-risk", base))
                .json(&json!({ "location": location, "lat": lat, "lng": lng }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Report { location } => {
            let assessment: Value = client
                .post(format!("{}/api/assess-risk", base))
                .json(&json!({ "location": location }))
                .send()
                .await?
                .json()
                .await?;

            let res = client
                .post(format!("{}/api/generate-report", base))
                .json(&json!({ "location": location, "riskData": assessment["data"] }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Suggest { query } => {
            let res = client
                .get(format!("{}/api/location-suggestions", base))
                .query(&[("query", query)])
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
