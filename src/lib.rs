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

//! # Video catalogue simulator.
//!
//! An in-memory model of a video library: a catalogue of videos, a single
//! playing/paused slot, named playlists, and a moderation flag mechanism,
//! driven by discrete commands that report human-readable status lines.
//!
//! ## Architecture
//!
//! * [`catalog`] supplies the immutable video catalogue.
//! * [`player`] holds all mutable state and enforces the command rules.
//! * [`console`] carries result lines out and the search follow-up answer
//!   in, so the engine can be wired to a terminal or to test fixtures.
//! * [`repl`] is the interactive shell the binary runs.
//!
//! Everything is synchronous and single-threaded: each command completes
//! fully before the next one is accepted.

pub mod catalog;
pub mod config;
pub mod console;
pub mod model;
pub mod player;
pub mod repl;
pub mod util;
