use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use discovery_core::{update, DiscoveryState, Msg, SearchLedger};
use discovery_engine::{ensure_data_dir, FileStorage, ReqwestJobsApi};
use discovery_logging::discovery_info;

use super::cli::Cli;
use super::effects::EffectRunner;
use super::input::{parse_command, Command, HELP};
use super::render::render;

const LOG_FILENAME: &str = "discovery.log";

/// Creates the data dir ahead of the file logger and returns the log path.
///
/// Runs before logging is up, so failure goes to stderr. Without a data dir
/// the ledger just reads as empty.
fn prepare_data_dir(dir: &Path) -> PathBuf {
    if let Err(err) = ensure_data_dir(dir) {
        eprintln!("search history disabled: {err}");
    }
    dir.join(LOG_FILENAME)
}

/// Tick cadence for settling debounced filters; well below the quiet period.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    let log_path = prepare_data_dir(&cli.data_dir);
    discovery_logging::initialize(cli.log.into(), cli.log_level.into(), &log_path);

    let origin = cli.api_origin();
    discovery_info!("job discovery starting; api origin {}", origin);

    let ledger = SearchLedger::new(Arc::new(FileStorage::new(cli.data_dir.clone())));
    let api = ReqwestJobsApi::new(origin, cli.fetch_settings())
        .with_context(|| format!("invalid API origin {origin:?}"))?;

    let (inbox_tx, inbox_rx) = mpsc::channel::<Command>();
    let runner = EffectRunner::new(Arc::new(api), ledger, inbox_tx.clone());
    spawn_ticker(inbox_tx.clone());
    spawn_stdin_reader(inbox_tx.clone());
    inbox_tx
        .send(Command::Msg(Msg::Activated))
        .context("inbox closed before startup")?;
    drop(inbox_tx);

    let mut out = io::stdout().lock();
    writeln!(out, "{HELP}")?;

    let mut state = DiscoveryState::with_config(cli.discovery_config());
    while let Ok(command) = inbox_rx.recv() {
        match command {
            Command::Msg(msg) => {
                let (next, effects) = update(state, msg);
                state = next;
                runner.run(effects);
                if state.consume_dirty() {
                    print_view(&mut out, &state)?;
                }
            }
            Command::Show => print_view(&mut out, &state)?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
        }
    }

    discovery_info!("job discovery exiting");
    Ok(())
}

fn print_view(out: &mut impl Write, state: &DiscoveryState) -> io::Result<()> {
    writeln!(out)?;
    for line in render(&state.view()) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

fn spawn_ticker(inbox: mpsc::Sender<Command>) {
    thread::spawn(move || {
        while inbox
            .send(Command::Msg(Msg::Tick {
                now: Instant::now(),
            }))
            .is_ok()
        {
            thread::sleep(TICK_INTERVAL);
        }
    });
}

fn spawn_stdin_reader(inbox: mpsc::Sender<Command>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            match parse_command(&line, Instant::now()) {
                Ok(command) => {
                    if inbox.send(command).is_err() {
                        return;
                    }
                }
                Err(err) => eprintln!("{err}"),
            }
        }
        let _ = inbox.send(Command::Quit);
    });
}
