//! VOX BOARD shell entry point.
//!
//! Loads the configured board file and runs a line-oriented session over
//! it: select categories and items, add entries, save. Type `help` for the
//! command list.

mod shell;

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;

use shell::{Response, Shell};
use vox_catalog::Catalog;
use vox_types::config::BoardConfig;
use vox_types::error::VoxError;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Resolve config from CLI arg, VOX_CONFIG env var, or the default path.
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("VOX_CONFIG").ok())
        .unwrap_or_else(|| "vox.toml".to_string());
    let config = BoardConfig::from_file(Path::new(&config_path))?;
    log::info!("Starting VOX BOARD (board: {})", config.catalog.display());

    let catalog = match Catalog::load(&config.catalog) {
        Ok(catalog) => catalog,
        Err(VoxError::FileNotFound(path)) => {
            log::info!("no board at {path}, starting empty");
            Catalog::new()
        },
        Err(e) => return Err(e.into()),
    };

    let mut sh = Shell::new(catalog, config.catalog.clone(), config.auto_save);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    print!("{}", config.prompt);
    stdout.flush()?;
    for line in stdin.lock().lines() {
        match sh.execute(&line?) {
            Response::Text(out) => println!("{out}"),
            Response::None => {},
            Response::Quit => break,
        }
        print!("{}", config.prompt);
        stdout.flush()?;
    }

    log::info!("VOX BOARD shut down cleanly");
    Ok(())
}
