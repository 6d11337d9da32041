use clap::Parser;
use tracing::{debug, error};

use sqlsh::cli::Args;
use sqlsh::config::{ConfigFile, Settings};
use sqlsh::db::{DatabaseBackend, PostgresBackend};
use sqlsh::logging::init_logging;
use sqlsh::session::{RustylineEditor, Session, SqlHelper};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    let file = ConfigFile::discover(args.config.as_deref())?;
    let settings = Settings::resolve(&args, file)?;

    let backend = PostgresBackend::connect(&settings.connection).inspect_err(|e| {
        error!(error = %e, "connection failed");
    })?;
    let mut session = Session::new(&backend, &settings.connection.database, args.format);

    if let Some(command) = &args.execute {
        session.run_once(command);
        return Ok(());
    }

    let tables = backend.list_tables()?;
    debug!(count = tables.len(), "tables loaded for completion");
    let mut editor = RustylineEditor::new(SqlHelper::new(tables), settings.history_file)?;
    session.run_interactive(&mut editor)?;
    Ok(())
}
