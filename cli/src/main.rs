use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use minado_core::{Session, read_board};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

mod controller;
mod coords;
mod render;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Where the save and load menu entries store the board
    #[arg(long, default_value = "minado.sav")]
    save_file: PathBuf,

    /// Print a saved board as JSON and exit
    #[arg(long, value_name = "PATH")]
    dump: Option<PathBuf>,
}

fn dump(path: &Path) -> anyhow::Result<()> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let board = read_board(io::BufReader::new(file)).with_context(|| format!("reading {}", path.display()))?;

    let rows: Vec<Vec<_>> = board
        .iter_cells()
        .map(|(_, view)| view)
        .collect::<Vec<_>>()
        .chunks(minado_core::COLS)
        .map(<[_]>::to_vec)
        .collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &rows)?;
    writeln!(out)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    TermLogger::init(
        args.verbose.log_level_filter(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("Error initializing logger")?;
    log::debug!("seed: {:?}", args.seed);

    if let Some(path) = &args.dump {
        return dump(path);
    }

    let session = match args.seed {
        Some(seed) => Session::new(seed),
        None => Session::random(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut controller = controller::Controller::new(session, args.save_file, stdin.lock(), stdout.lock());
    controller.run()?;

    log::debug!("Session finished");
    Ok(())
}
