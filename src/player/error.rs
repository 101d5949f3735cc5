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

//! Refusals reported by player commands.
//!
//! Every refusal is an expected, user-facing outcome rather than exceptional
//! control flow: a command either fully applies its state change or returns
//! one of these with no mutation at all.

use thiserror::Error;

/// Why a command was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    VideoNotFound,
    VideoFlagged,
    NothingPlaying,
    NoPlayableVideos,
    PlaylistAlreadyExists,
    PlaylistNotFound,
    VideoAlreadyAdded,
    VideoNotInPlaylist,
    VideoAlreadyFlagged,
    VideoNotFlagged,
}

/// A refused command.
///
/// Carries both a machine-checkable [`ErrorKind`] and the exact line shown
/// to the user, since the wording depends on the command that was refused
/// (stopping and pausing both fail with [`ErrorKind::NothingPlaying`] but
/// report different lines).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{line}")]
pub struct PlayerError {
    kind: ErrorKind,
    line: String,
}

impl PlayerError {
    pub(crate) fn new(kind: ErrorKind, line: impl Into<String>) -> Self {
        Self {
            kind,
            line: line.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}
