use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use pinpoint_dataset::DatasetConfig;
use pinpoint_knn::suggested_k;
use pinpoint_session::EstimateSession;

use crate::cli::PredictArgs;
use crate::config::PinpointConfig;
use crate::report;

/// Run the `estimate` subcommand.
pub fn run(args: PredictArgs) -> Result<()> {
    let config = PinpointConfig::load(&args.config)?;
    let seed = args.seed.or(config.seed);
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let dataset_cfg = DatasetConfig::new()
        .with_size_range(config.dataset.min_points, config.dataset.max_points)
        .with_value_max(config.dataset.value_max);

    // Same provisional-k dance as the classify command: the heuristic needs
    // the dataset size first.
    let mut session = EstimateSession::generate(dataset_cfg, 1, &mut rng)
        .context("dataset generation failed")?;
    let k = args
        .k
        .or(config.knn.k)
        .unwrap_or_else(|| suggested_k(session.dataset().len()));
    session.set_k(k).context("invalid neighbor count")?;
    info!(n_points = session.dataset().len(), k, "dataset generated");

    session.place_query(args.x, args.y);
    let result = session.estimate().context("estimation failed")?.clone();

    info!(value = result.value(), "query estimated");
    println!("value {}", result.value());

    if let (Some(path), Some(query)) = (&args.output, session.query()) {
        let report = report::estimate_report(session.dataset(), query.query(), &result, seed);
        let json =
            serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report: {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }

    Ok(())
}
