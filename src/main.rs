use anyhow::Context;
use clap::{Parser, ValueEnum};
use salary_stats::logging::init_logging;
use salary_stats::{AppConfig, HhClient, HttpTransport, StatsPipeline, SuperJobClient};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Source {
    Hh,
    Superjob,
    All,
}

/// Average programmer salaries per language from hh.ru and superjob.ru.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[arg(long, value_enum, default_value_t = Source::All)]
    source: Source,

    /// hh.ru publication window, in days
    #[arg(long)]
    period: Option<u32>,

    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Also write a CSV file per source
    #[arg(long)]
    csv: bool,

    /// Wait 1-2 seconds before every request
    #[arg(long)]
    throttle: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let with_hh = matches!(args.source, Source::Hh | Source::All);
    let with_superjob = matches!(args.source, Source::Superjob | Source::All);

    let config = AppConfig::from_env(with_superjob)
        .context("failed to load configuration")?
        .with_period(args.period);

    let transport = HttpTransport::new(Duration::from_secs(args.timeout))
        .context("failed to build HTTP client")?
        .with_throttle(args.throttle);
    let pipeline = || StatsPipeline::new(&config.languages, &config.policy);

    let hh = if with_hh {
        let collected = pipeline()
            .collect(HhClient::new(&transport, config.hh.clone()))
            .context("hh.ru collection failed")?
            .save_and_then(args.output_dir.join("hh_salaries.json"));
        Some(if args.csv {
            collected.save_csv_and_then(args.output_dir.join("hh_salaries.csv"))
        } else {
            collected
        })
    } else {
        None
    };

    let superjob = match config.superjob.clone() {
        Some(superjob_config) if with_superjob => {
            let client = SuperJobClient::new(&transport, superjob_config)?;
            let collected = pipeline()
                .collect(client)
                .context("superjob.ru collection failed")?
                .save_and_then(args.output_dir.join("superjob_salaries.json"));
            Some(if args.csv {
                collected.save_csv_and_then(args.output_dir.join("superjob_salaries.csv"))
            } else {
                collected
            })
        }
        _ => None,
    };

    if let Some(hh) = hh {
        hh.print("hh.ru Moscow");
    }
    if let Some(superjob) = superjob {
        superjob.print("SuperJob.ru Moscow");
    }

    Ok(())
}
