use anyhow::{Context, Result};
use shopping_units::cli::parse_args;
use shopping_units::entry_loader::parse_raw_entries;
use shopping_units::shopping_list::{aggregate_entries, AggregationOptions, ShoppingLine};
use shopping_units::validate_unit;
use tokio::fs;

fn print_lines(lines: &[ShoppingLine]) {
    for line in lines {
        println!("{:<24} {:>10} {}", line.ingredient, line.quantity, line.unit);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok(); // .env may carry RUST_LOG

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli_args = parse_args();
    tracing::info!(path = %cli_args.entries_file, "reading entries");

    let csv_text = fs::read_to_string(&cli_args.entries_file)
        .await
        .with_context(|| format!("Failed to read entries file '{}'", cli_args.entries_file))?;

    let entries = parse_raw_entries(&csv_text)
        .with_context(|| format!("Failed to parse entries file '{}'", cli_args.entries_file))?;

    if cli_args.validate {
        for entry in &entries {
            if let Err(e) = validate_unit(&entry.unit) {
                tracing::warn!(ingredient = %entry.ingredient, "{}", e);
            }
        }
    }

    let options = AggregationOptions {
        combine_override_totals: !cli_args.keep_sub_buckets,
    };
    let lines = aggregate_entries(&entries, &options);

    if cli_args.json {
        println!("{}", serde_json::to_string_pretty(&lines)?);
    } else {
        print_lines(&lines);
    }

    Ok(())
}
