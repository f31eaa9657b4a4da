use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::session::TimerSession;
use crate::errors::AppResult;
use crate::models::DayRecord;
use crate::ui::messages;
use crate::ui::view::TerminalView;
use crate::utils::path::expand_tilde;
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Interactive timer loop. Elapsed wall time between commands is accrued
/// onto the running category, so totals match a once-per-second UI tick.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let side = if cli.test {
        None
    } else {
        Some(cfg.timer_side_file())
    };
    let mut record = DayRecord::create(&cfg.timer_categories, side, 0);

    if let Some(file) = &cli.file {
        record.set_file(expand_tilde(file));
    }

    messages::info(format!("Today is {}", record.date()));
    match record.file() {
        Some(path) => messages::info(format!("Saving to {}", path.display())),
        None => messages::warning("No file selected, use: file <path>"),
    }
    print_help(cfg);

    let autosave = Duration::from_secs(cfg.autosave_minutes * 60);
    let mut session = TimerSession::new(record, TerminalView, autosave);
    session.times();

    let stdin = io::stdin();
    let mut last = Instant::now();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = stdin.read_line(&mut line)?;

        let now = Instant::now();
        session.tick(now - last);
        last = now;

        if read == 0 {
            // end of input behaves like quit
            session.save();
            break;
        }

        let trimmed = line.trim();
        let mut parts = trimmed.splitn(2, ' ');
        let command = parts.next().unwrap_or("");
        let argument = parts.next().map(str::trim);

        match (command, argument) {
            ("start", Some(category)) => session.start(category),
            ("start", None) => messages::warning("Usage: start <category>"),
            ("stop", _) => session.stop(),
            ("times", _) => session.times(),
            ("file", Some(path)) => session.set_file(expand_tilde(path)),
            ("file", None) => messages::warning("Usage: file <path>"),
            ("save", _) => session.save(),
            ("quit", _) => {
                session.save();
                break;
            }
            ("help", _) => print_help(cfg),
            ("", _) => {}
            (other, _) => messages::warning(format!("Unknown command '{other}', try 'help'")),
        }
    }

    Ok(())
}

fn print_help(cfg: &Config) {
    println!("Commands: start <category> | stop | times | file <path> | save | quit | help");
    println!("Categories: {}", cfg.timer_categories.join(", "));
}
