//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `kysimpel_core` linkage and the configured database.
//! - Keep output deterministic `key=value` lines for quick local checks.

use kysimpel_core::db::open_db;
use kysimpel_core::{
    init_logging_from_config, CoreConfig, LinkRepository, NoteRepository, SqliteKvStore,
    ThemeRepository,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("kysimpel_core ping={}", kysimpel_core::ping());
    println!("kysimpel_core version={}", kysimpel_core::core_version());

    let config = CoreConfig::from_env();
    if let Err(err) = init_logging_from_config(&config) {
        eprintln!("logging init failed: {err}");
        return ExitCode::FAILURE;
    }

    let conn = match open_db(&config.db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("db open failed at {}: {err}", config.db_path.display());
            return ExitCode::FAILURE;
        }
    };
    let store = SqliteKvStore::new(&conn);

    println!("db_path={}", config.db_path.display());
    println!("notes={}", NoteRepository::new(&store).get_all().len());
    println!("links={}", LinkRepository::new(&store).get_all().len());
    println!("theme={}", ThemeRepository::new(&store).get_theme().as_str());
    ExitCode::SUCCESS
}
