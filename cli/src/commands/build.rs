use anyhow::Result;
use geocrosswalk::{assign_detailed, read_features, resolution_counts, write_crosswalk, CrosswalkConfig};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::BuildArgs) -> Result<()> {
    let out_path = &args.output.clone().unwrap_or("./crosswalk.csv".into());
    let header = args.header()?;
    let config = CrosswalkConfig::default()
        .with_samples(args.samples)
        .with_attempt_factor(args.attempt_factor)
        .with_parallel(!args.sequential);

    println!("[build] loading sources from {}", args.sources.display());
    let sources = read_features(&args.sources, &args.source_id)?;

    println!("[build] loading targets from {}", args.targets.display());
    let targets = read_features(&args.targets, &args.target_id)?;

    println!("[build] assigning {} sources across {} targets ({} samples each)",
        sources.len(), targets.len(), config.samples);
    let assignments = assign_detailed(&sources, &targets, &config);

    for (resolution, count) in resolution_counts(&assignments) {
        if count > 0 || cli.verbose > 0 {
            println!("[build]   {:<20} {count}", resolution.label());
        }
    }

    let mapping: Vec<_> = assignments.into_iter().map(|a| (a.source, a.target)).collect();
    println!("[build] writing crosswalk to {}", out_path.display());
    write_crosswalk(&mapping, out_path, header)?;

    Ok(())
}
