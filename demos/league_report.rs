use std::time::Duration;

use fpl_league_stats::{FplClient, StatsOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let league_id: u32 = args
        .next()
        .ok_or("usage: league_report <league-id> [debug-manager-id]")?
        .parse()?;
    let debug_manager = args.next().map(|id| id.parse()).transpose()?;

    let client = FplClient::new().with_timeout(Duration::from_secs(20));
    let options = StatsOptions {
        debug_manager,
        ..StatsOptions::default()
    };

    match client.league_stats(league_id, &options).await {
        Ok(stats) => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("Could not load league {league_id}, try again later ({e})");
            std::process::exit(1);
        }
    }
}
