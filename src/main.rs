// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Interactive video catalogue simulator.
//!
//! Wires the catalogue, the player engine, and the console collaborators
//! together and hands control to the command loop. Diagnostics go to
//! stderr through `tracing`; user-facing result lines go to stdout.

use std::io;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use choovid::{
    catalog::VideoLibrary,
    config,
    console::{StdinSource, StdoutSink},
    player::VideoPlayer,
    repl,
};

fn main() -> Result<()> {
    init_tracing();

    let config = config::load_config();
    let library = match &config.catalog_file {
        Some(path) => VideoLibrary::load(path).context("Failed to load catalog")?,
        None => VideoLibrary::builtin(),
    };
    info!(videos = library.len(), "catalog ready");

    let mut player = VideoPlayer::new(library, Box::new(StdoutSink), Box::new(StdinSource));
    repl::run(&mut player).context("Command loop failed")?;
    Ok(())
}

/// Diagnostics on stderr so they never interleave with result lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
