use std::path::PathBuf;

use pmaze::{
    app::{self, AppError, RunConfig},
    logging,
    settings::{Settings, SolverKind},
};

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[clap(version, author, about, name = "pmaze")]
struct Args {
    #[clap(short, long, help = "Number of maze rows")]
    rows: Option<i32>,
    #[clap(short, long, help = "Number of maze columns")]
    columns: Option<i32>,
    #[clap(long, help = "Seed for a reproducible maze and walk")]
    seed: Option<u64>,
    #[clap(long, value_enum, help = "Walker to send through the maze")]
    solver: Option<SolverKind>,
    #[clap(long, help = "Give up after this many steps")]
    max_steps: Option<usize>,
    #[clap(long, action, conflicts_with = "max_steps", help = "Walk without a step limit")]
    unbounded: bool,
    #[clap(long, help = "Settings file to use instead of the default one")]
    config: Option<PathBuf>,
    #[clap(long, action, help = "Print packed cell codes under each maze")]
    codes: bool,
    #[clap(long, action, help = "Print every step of the walk")]
    trace: bool,
    #[clap(long, action, help = "Disable colored output")]
    no_color: bool,
    #[clap(short, long, action = ArgAction::Count, help = "More logging, repeat for more")]
    verbose: u8,
    #[clap(short, long, action, conflicts_with = "verbose", help = "Only log errors")]
    quiet: bool,
    #[clap(long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, help = "Show config in debug format and quit")]
    debug_config: bool,
}

impl Args {
    fn log_level(&self, settings: &Settings) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }

        match self.verbose {
            0 => settings.log_level.to_filter(),
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    fn run_config(&self, settings: &Settings) -> RunConfig {
        let mut config = RunConfig::from(settings);

        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(columns) = self.columns {
            config.columns = columns;
        }
        if let Some(solver) = self.solver {
            config.solver = solver;
        }
        if self.max_steps.is_some() || self.unbounded {
            config.max_steps = self.max_steps;
        }

        config.seed = self.seed;
        config.trace = self.trace;
        config.color &= !self.no_color;
        config.show_codes |= self.codes;
        config
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    let settings_path = args.config.clone().unwrap_or_else(Settings::default_path);

    if args.reset_config {
        Settings::reset_config(&settings_path)?;
        return Ok(());
    }

    if args.show_config_path {
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    if args.debug_config {
        println!("{:#?}", Settings::load(&settings_path));
        return Ok(());
    }

    better_panic::install();

    let settings = Settings::load(&settings_path)?;
    logging::init(args.log_level(&settings))?;

    let config = args.run_config(&settings);
    if !config.color {
        colored::control::set_override(false);
    }

    let output = app::run(&config)?;
    print!("{}", app::report(&config, &output));

    Ok(())
}
