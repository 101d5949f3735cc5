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

//! Interactive command loop.
//!
//! This module reads whitespace-separated commands from standard input,
//! parses them into typed [`Command`]s and dispatches them to the player.
//! Command keywords are matched case-insensitively; playlist names and
//! video ids are passed through as typed.
//!
//! The loop itself is a thin shell: all state and all result wording live
//! in the player, and refusals come back as values to be printed, so the
//! loop never terminates on a failed command.

use std::io;

use thiserror::Error;
use tracing::debug;

use crate::player::{PlayerError, VideoPlayer};

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist(String, String),
    RemoveFromPlaylist(String, String),
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowAllPlaylists,
    ShowPlaylist(String),
    SearchVideos(String),
    SearchVideosWithTag(String),
    FlagVideo(String, Option<String>),
    AllowVideo(String),
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    UnknownCommand,
    #[error("Wrong arguments for {0}, type HELP for usage.")]
    BadArguments(String),
}

const KEYWORDS: &[&str] = &[
    "NUMBER_OF_VIDEOS",
    "SHOW_ALL_VIDEOS",
    "PLAY",
    "PLAY_RANDOM",
    "STOP",
    "PAUSE",
    "CONTINUE",
    "SHOW_PLAYING",
    "CREATE_PLAYLIST",
    "ADD_TO_PLAYLIST",
    "REMOVE_FROM_PLAYLIST",
    "CLEAR_PLAYLIST",
    "DELETE_PLAYLIST",
    "SHOW_ALL_PLAYLISTS",
    "SHOW_PLAYLIST",
    "SEARCH_VIDEOS",
    "SEARCH_VIDEOS_WITH_TAG",
    "FLAG_VIDEO",
    "ALLOW_VIDEO",
    "HELP",
    "EXIT",
];

const HELP_TEXT: &str = "Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library
    SHOW_ALL_VIDEOS - Lists all videos
    PLAY <video_id> - Plays the given video
    PLAY_RANDOM - Plays a random video
    STOP - Stops the current video
    PAUSE - Pauses the current video
    CONTINUE - Resumes the paused video
    SHOW_PLAYING - Shows the video currently playing
    CREATE_PLAYLIST <playlist> - Creates a playlist (names must not contain whitespace)
    ADD_TO_PLAYLIST <playlist> <video_id> - Adds a video to a playlist
    REMOVE_FROM_PLAYLIST <playlist> <video_id> - Removes a video from a playlist
    CLEAR_PLAYLIST <playlist> - Removes all videos from a playlist
    DELETE_PLAYLIST <playlist> - Deletes a playlist
    SHOW_ALL_PLAYLISTS - Lists all playlists
    SHOW_PLAYLIST <playlist> - Lists the videos in a playlist
    SEARCH_VIDEOS <term> - Searches video titles for a term
    SEARCH_VIDEOS_WITH_TAG <tag> - Searches video tags for a tag
    FLAG_VIDEO <video_id> [reason] - Flags a video, with an optional reason
    ALLOW_VIDEO <video_id> - Removes the flag from a video
    HELP - Shows this help
    EXIT - Leaves the application";

/// Parses one input line into a [`Command`].
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((keyword, args)) = parts.split_first() else {
        return Err(ParseError::UnknownCommand);
    };
    let keyword = keyword.to_ascii_uppercase();

    let command = match (keyword.as_str(), args) {
        ("NUMBER_OF_VIDEOS", []) => Command::NumberOfVideos,
        ("SHOW_ALL_VIDEOS", []) => Command::ShowAllVideos,
        ("PLAY", [video_id]) => Command::Play((*video_id).to_string()),
        ("PLAY_RANDOM", []) => Command::PlayRandom,
        ("STOP", []) => Command::Stop,
        ("PAUSE", []) => Command::Pause,
        ("CONTINUE", []) => Command::Continue,
        ("SHOW_PLAYING", []) => Command::ShowPlaying,
        ("CREATE_PLAYLIST", [name]) => Command::CreatePlaylist((*name).to_string()),
        ("ADD_TO_PLAYLIST", [name, video_id]) => {
            Command::AddToPlaylist((*name).to_string(), (*video_id).to_string())
        }
        ("REMOVE_FROM_PLAYLIST", [name, video_id]) => {
            Command::RemoveFromPlaylist((*name).to_string(), (*video_id).to_string())
        }
        ("CLEAR_PLAYLIST", [name]) => Command::ClearPlaylist((*name).to_string()),
        ("DELETE_PLAYLIST", [name]) => Command::DeletePlaylist((*name).to_string()),
        ("SHOW_ALL_PLAYLISTS", []) => Command::ShowAllPlaylists,
        ("SHOW_PLAYLIST", [name]) => Command::ShowPlaylist((*name).to_string()),
        ("SEARCH_VIDEOS", term @ [_, ..]) => Command::SearchVideos(term.join(" ")),
        ("SEARCH_VIDEOS_WITH_TAG", tag @ [_, ..]) => Command::SearchVideosWithTag(tag.join(" ")),
        ("FLAG_VIDEO", [video_id]) => Command::FlagVideo((*video_id).to_string(), None),
        ("FLAG_VIDEO", [video_id, reason @ ..]) => {
            Command::FlagVideo((*video_id).to_string(), Some(reason.join(" ")))
        }
        ("ALLOW_VIDEO", [video_id]) => Command::AllowVideo((*video_id).to_string()),
        ("HELP", []) => Command::Help,
        ("EXIT", []) => Command::Exit,
        (known, _) if KEYWORDS.contains(&known) => {
            return Err(ParseError::BadArguments(keyword.clone()));
        }
        _ => return Err(ParseError::UnknownCommand),
    };
    Ok(command)
}

/// Runs the command loop until `EXIT` or end of input.
///
/// # Errors
///
/// Returns an error only if reading standard input fails.
pub fn run(player: &mut VideoPlayer) -> io::Result<()> {
    player.emit("Welcome to choovid! Type HELP for a list of available commands.");

    let mut buffer = String::new();
    loop {
        buffer.clear();
        if io::stdin().read_line(&mut buffer)? == 0 {
            break;
        }
        let line = buffer.trim();
        if line.is_empty() {
            continue;
        }

        match parse(line) {
            Ok(Command::Exit) => {
                player.emit("Goodbye!");
                break;
            }
            Ok(Command::Help) => {
                for help_line in HELP_TEXT.lines() {
                    player.emit(help_line);
                }
            }
            Ok(command) => {
                debug!(?command, "dispatching command");
                if let Err(refusal) = dispatch(player, command) {
                    player.emit(&refusal.to_string());
                }
            }
            Err(parse_error) => player.emit(&parse_error.to_string()),
        }
    }
    Ok(())
}

fn dispatch(player: &mut VideoPlayer, command: Command) -> Result<(), PlayerError> {
    match command {
        Command::NumberOfVideos => player.number_of_videos(),
        Command::ShowAllVideos => player.show_all_videos(),
        Command::Play(video_id) => player.play_video(&video_id)?,
        Command::PlayRandom => player.play_random_video()?,
        Command::Stop => player.stop_video()?,
        Command::Pause => player.pause_video()?,
        Command::Continue => player.continue_video()?,
        Command::ShowPlaying => player.show_playing()?,
        Command::CreatePlaylist(name) => player.create_playlist(&name)?,
        Command::AddToPlaylist(name, video_id) => player.add_to_playlist(&name, &video_id)?,
        Command::RemoveFromPlaylist(name, video_id) => {
            player.remove_from_playlist(&name, &video_id)?
        }
        Command::ClearPlaylist(name) => player.clear_playlist(&name)?,
        Command::DeletePlaylist(name) => player.delete_playlist(&name)?,
        Command::ShowAllPlaylists => player.show_all_playlists(),
        Command::ShowPlaylist(name) => player.show_playlist(&name)?,
        Command::SearchVideos(term) => player.search_videos(&term)?,
        Command::SearchVideosWithTag(tag) => player.search_videos_with_tag(&tag)?,
        Command::FlagVideo(video_id, reason) => player.flag_video(&video_id, reason.as_deref())?,
        Command::AllowVideo(video_id) => player.allow_video(&video_id)?,
        Command::Help | Command::Exit => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_match_case_insensitively() {
        assert_eq!(
            parse("play amazing_cats_video_id").unwrap(),
            Command::Play("amazing_cats_video_id".to_string())
        );
        assert_eq!(parse("Show_All_Videos").unwrap(), Command::ShowAllVideos);
    }

    #[test]
    fn two_argument_commands_take_playlist_then_video() {
        assert_eq!(
            parse("ADD_TO_PLAYLIST my_playlist funny_dogs_video_id").unwrap(),
            Command::AddToPlaylist("my_playlist".to_string(), "funny_dogs_video_id".to_string())
        );
    }

    #[test]
    fn flag_reason_is_optional_and_joins_remaining_words() {
        assert_eq!(
            parse("FLAG_VIDEO nothing_video_id").unwrap(),
            Command::FlagVideo("nothing_video_id".to_string(), None)
        );
        assert_eq!(
            parse("FLAG_VIDEO nothing_video_id not very interesting").unwrap(),
            Command::FlagVideo(
                "nothing_video_id".to_string(),
                Some("not very interesting".to_string())
            )
        );
    }

    #[test]
    fn search_terms_may_contain_spaces() {
        assert_eq!(
            parse("SEARCH_VIDEOS life at google").unwrap(),
            Command::SearchVideos("life at google".to_string())
        );
    }

    #[test]
    fn unknown_keyword_is_rejected() {
        assert_eq!(parse("REWIND").unwrap_err(), ParseError::UnknownCommand);
        assert_eq!(parse("").unwrap_err(), ParseError::UnknownCommand);
    }

    #[test]
    fn known_keyword_with_wrong_arity_is_rejected() {
        assert_eq!(
            parse("PLAY").unwrap_err(),
            ParseError::BadArguments("PLAY".to_string())
        );
        assert_eq!(
            parse("stop now").unwrap_err(),
            ParseError::BadArguments("STOP".to_string())
        );
    }
}
