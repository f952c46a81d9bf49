use amictl::{ami::run_pipeline, cli::Cli, config::Config, logging, provider::Ec2ImageProvider};
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> amictl::Result<()> {
    logging::init_logging(Path::new(concat!(env!("CARGO_PKG_NAME"), ".log")))?;

    let cli = Cli::parse_args();
    let config = Config::from_cli(&cli);
    let provider = Ec2ImageProvider::new();

    let summary = run_pipeline(&config, &provider).await?;

    if summary.regions_skipped > 0 {
        println!(
            "fetched {} regions, skipped {}",
            summary.regions_fetched, summary.regions_skipped
        );
    }
    println!(
        "{} records, {} matching filter {:?}",
        summary.records, summary.matched, config.filter
    );

    Ok(())
}
