//! `lattice [OPTIONS.toml]`: fly through a lattice of colored cubes.
//!
//! The optional argument is a TOML options file; any value it omits keeps
//! its default. Logging goes through `env_logger` (default level `info`,
//! override with `RUST_LOG`).

use std::path::Path;

use lattice::{options::Options, Viewer};

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => {
                log::info!("loaded options from {path}");
                options
            }
            Err(e) => {
                log::error!("failed to load options from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    if let Err(e) = Viewer::builder()
        .with_title("Lattice")
        .with_options(options)
        .build()
        .run()
    {
        log::error!("{e}");
        std::process::exit(1);
    }
}
