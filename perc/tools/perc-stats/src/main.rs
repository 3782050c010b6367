#![forbid(unsafe_code)]

use clap::{ArgAction, Parser, ValueEnum};
use perc::{FlagLattice, Lattice, PercolationStats, StatsConfig, Stopwatch};
use rand::Rng;
use tracing::{debug, info, Level};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

////////////////////////////////////////////////////////////////////////////////

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Model {
    /// Two union-find structures, one of them without the bottom terminal.
    TwoUf,
    /// One union-find with per-component boundary flags.
    Flags,
}

/// Estimates the site-percolation threshold of an N-by-N lattice.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Lattice side length.
    #[arg(value_name = "N")]
    size: usize,

    /// Number of trials.
    #[arg(value_name = "T")]
    trials: usize,

    /// Seed for the trial generator; picked at random if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Run trials in parallel.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for parallel trials.
    #[arg(long, value_name = "K")]
    threads: Option<usize>,

    #[arg(long, value_enum, default_value_t = Model::TwoUf)]
    model: Model,

    /// Log more to stderr; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Log errors only.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn init_logging(level: Level) {
    let filter = EnvFilter::default().add_directive(LevelFilter::from_level(level).into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args, config: &StatsConfig) -> perc::Result<PercolationStats> {
    match args.model {
        Model::TwoUf => PercolationStats::run::<Lattice>(config),
        Model::Flags => PercolationStats::run::<FlagLattice>(config),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.log_level());

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let config = StatsConfig::new(args.size, args.trials)
        .seed(seed)
        .parallel(args.parallel || args.threads.is_some());
    debug!(?args, "parsed arguments");
    info!(seed, "seeding trials");

    let timer = Stopwatch::start();
    let stats = match args.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?
            .install(|| run(&args, &config))?,
        None => run(&args, &config)?,
    };
    let time = timer.elapsed_secs();

    println!("time                    = {}", time);
    println!("mean                    = {}", stats.mean());
    println!("stddev                  = {}", stats.stddev());
    println!(
        "95% confidence interval = [{}, {}]",
        stats.confidence_lo(),
        stats.confidence_hi()
    );

    Ok(())
}
