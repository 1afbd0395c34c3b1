mod app;
mod cli;
mod config;
mod error;
mod fileio;
mod logging;
mod menu;
mod overlays;
mod paths;
mod task_manager;
mod ui;
mod util;

use std::io::{self, Write};
use std::process::ExitCode;

use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::prelude::*;

use app::App;
use cli::{Flags, HELP_TEXT};
use config::Config;
use error::Result;
use paths::{CONFIG_FILE, LOG_FILE};
use task_manager::TaskManager;

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = ?err, "fatal");
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<()> {
    let flags = Flags::parse(std::env::args().skip(1));

    let data_dir = paths::ensure_data_dir()?;
    logging::init(&data_dir.join(LOG_FILE));

    let tasks = TaskManager::load(&data_dir)?;
    let config = Config::load(&data_dir.join(CONFIG_FILE))?;

    if flags.help {
        println!("{HELP_TEXT}");
        return Ok(());
    }
    if flags.inline {
        return print_current(&mut io::stdout(), &tasks);
    }

    let mut app = App::new(tasks, config);

    // Setup terminal; the guard restores it on every exit path, before main
    // prints any fatal message
    enable_raw_mode()?;
    let _guard = TerminalGuard;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("sequential"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    run(&mut terminal, &mut app)
}

/// Write the current task exactly as stored, without a trailing newline.
fn print_current(out: &mut impl Write, tasks: &TaskManager) -> Result<()> {
    if let Some(task) = tasks.current_task() {
        write!(out, "{task}")?;
        out.flush()?;
    }
    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key)?;
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Restores the terminal on drop, including early returns.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Best effort; the process is about to exit or report an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::paths::PENDING_FILE;
    use crate::task_manager::tests::manager_with;

    #[test]
    fn print_current_writes_only_the_first_task() {
        let dir = tempfile::tempdir().unwrap();
        let tasks = manager_with(dir.path(), &["A", "B"], &[]);
        let mut out = Vec::new();

        print_current(&mut out, &tasks).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "A");
        assert_eq!(
            fs::read_to_string(dir.path().join(PENDING_FILE)).unwrap(),
            "A\nB"
        );
    }

    #[test]
    fn print_current_with_empty_queue_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let tasks = manager_with(dir.path(), &[], &[]);
        let mut out = Vec::new();

        print_current(&mut out, &tasks).unwrap();

        assert!(out.is_empty());
    }

    #[test]
    fn terminal_guard_restore_ignores_errors() {
        // No tty under the test harness, so both restore calls fail quietly
        drop(TerminalGuard);
    }
}
