//! Line-oriented shell over the EduTrack core.
//!
//! # Responsibility
//! - Feed raw command lines through the core parse/execute pipeline.
//! - Persist the contact book after each successful command.
//!
//! Output is plain feedback strings; rendering beyond that is out of scope.

use edutrack_core::storage::Connection;
use edutrack_core::{
    default_log_level, init_logging, open_db, run_command, BookStorage, Model, SqliteBookStorage,
};
use log::warn;
use std::io::{self, BufRead};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var("EDUTRACK_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let db_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "edutrack.db".to_string());

    let mut conn = match open_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open `{db_path}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    let book = match SqliteBookStorage::new(&mut conn).load_book() {
        Ok(book) => book,
        Err(err) => {
            eprintln!("failed to load `{db_path}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut model = Model::new(book);
    println!(
        "EduTrack ready: {} person(s), {} tag(s). Type `help` for commands.",
        model.book().persons().len(),
        model.book().tags().len()
    );

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("input error: {err}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let before = model.book().clone();
        match run_command(&line, &mut model) {
            Ok(result) => {
                println!("{}", result.feedback());
                // Queries leave the book identical; skip rewriting the file.
                if model.book() != &before {
                    save_book(&mut conn, &model);
                }
                if result.is_exit() {
                    return ExitCode::SUCCESS;
                }
            }
            // Command errors are reported and never fatal to the session.
            Err(err) => println!("{err}"),
        }
    }

    ExitCode::SUCCESS
}

fn save_book(conn: &mut Connection, model: &Model) {
    if let Err(err) = SqliteBookStorage::new(conn).save_book(model.book()) {
        warn!("event=book_save module=cli status=error error={err}");
        eprintln!("failed to save changes: {err}");
    }
}
