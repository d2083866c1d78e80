use std::process::ExitCode;
use std::time::Instant;
use clap::Parser;
use svl2jams::cli::commands::Cli;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let start_time = Instant::now();

    log::debug!(
        "Converting {} for '{}' into {}",
        cli.in_path.display(),
        cli.annotator_id,
        cli.out_file.display()
    );

    if let Err(e) = svl2jams::convert(&cli.in_path, &cli.annotator_id, &cli.out_file) {
        log::error!("{}", e);
        return ExitCode::FAILURE;
    }

    log::info!("Done! Took {:.2} seconds.", start_time.elapsed().as_secs_f64());
    ExitCode::SUCCESS
}
