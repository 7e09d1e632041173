use crate::cli::RankArgs;
use crate::config::Config;
use crate::pipeline::{Pipeline, RankingSnapshot, ReportSource};
use tracing::info;

pub async fn execute(args: RankArgs) -> anyhow::Result<()> {
    info!("Loading config from {:?}", args.config);
    let mut config = Config::load_or_default(&args.config)?;

    // Apply CLI overrides
    if let Some(window) = args.window {
        config.window_half_width = window;
    }

    config.validate()?;

    let pipeline = Pipeline::new(config)?;
    let snapshot = pipeline.run().await;

    if args.table {
        print_table(&snapshot);
    } else {
        // The wire contract: a bare JSON array of ranked rows
        println!("{}", serde_json::to_string_pretty(&snapshot.entries)?);
    }

    Ok(())
}

fn print_table(snapshot: &RankingSnapshot) {
    let source = match &snapshot.report_source {
        ReportSource::Parsed { rows } => format!("report ({} rows)", rows),
        ReportSource::Fallback { reason } => format!(
            "curated fallback {} ({})",
            crate::fallback::DATASET_VERSION,
            reason
        ),
    };

    println!(
        "\nBanks: {} | Metric: {}M ({:?}) | {}",
        source,
        snapshot.metric.millions,
        snapshot.metric.provenance,
        snapshot.generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!("{:<6} {:<52} {:>14}", "Rank", "Name", "Assets ($M)");

    for entry in &snapshot.entries {
        let marker = if entry.is_inserted { " <--" } else { "" };
        println!(
            "{:<6} {:<52} {:>14}{}",
            entry.rank, entry.name, entry.assets, marker
        );
    }
    println!();
}
