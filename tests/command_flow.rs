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

//! End-to-end command sequences over the full player surface, checking the
//! exact lines a user would see.

use std::sync::{Arc, Mutex};

use choovid::{
    catalog::VideoLibrary,
    console::{MemorySink, ScriptedInput},
    player::{ErrorKind, VideoPlayer},
};

fn player() -> (VideoPlayer, Arc<Mutex<Vec<String>>>) {
    player_with_input(ScriptedInput::default())
}

fn player_with_input(input: ScriptedInput) -> (VideoPlayer, Arc<Mutex<Vec<String>>>) {
    let sink = MemorySink::new();
    let lines = sink.lines();
    let player = VideoPlayer::new(VideoLibrary::builtin(), Box::new(sink), Box::new(input));
    (player, lines)
}

#[test]
fn a_full_playback_session_reports_every_transition() {
    let (mut player, lines) = player();

    player.play_video("life_at_google_video_id").unwrap();
    player.pause_video().unwrap();
    player.show_playing().unwrap();
    player.continue_video().unwrap();
    player.play_video("nothing_video_id").unwrap();
    player.stop_video().unwrap();

    assert_eq!(
        *lines.lock().unwrap(),
        [
            "Playing video: Life at Google",
            "Pausing video: Life at Google",
            "Currently playing: Life at Google (life_at_google_video_id) [#google #career] - PAUSED",
            "Continuing video: Life at Google",
            "Stopping video: Life at Google",
            "Playing video: Video about nothing",
            "Stopping video: Video about nothing",
        ]
    );
    assert_eq!(player.current_video(), None);
}

#[test]
fn playlist_lifecycle_create_fill_clear_delete() {
    let (mut player, lines) = player();

    player.create_playlist("Road_Trip").unwrap();
    player
        .add_to_playlist("road_trip", "funny_dogs_video_id")
        .unwrap();
    player
        .add_to_playlist("ROAD_TRIP", "amazing_cats_video_id")
        .unwrap();
    player.show_playlist("road_Trip").unwrap();
    player.clear_playlist("Road_Trip").unwrap();
    player.show_playlist("Road_Trip").unwrap();
    player.delete_playlist("Road_Trip").unwrap();
    player.show_all_playlists();

    assert_eq!(
        *lines.lock().unwrap(),
        [
            "Successfully created new playlist: Road_Trip",
            "Added video to road_trip: Funny Dogs",
            "Added video to ROAD_TRIP: Amazing Cats",
            "Showing playlist: road_Trip",
            "\tFunny Dogs (funny_dogs_video_id) [#dog #animal]",
            "\tAmazing Cats (amazing_cats_video_id) [#cat #animal]",
            "Successfully removed all videos from Road_Trip",
            "Showing playlist: Road_Trip",
            "\tNo videos here yet",
            "Deleted playlist: Road_Trip",
            "No playlists exist yet",
        ]
    );
}

#[test]
fn add_then_remove_restores_the_playlist_contents() {
    let (mut player, _) = player();
    player.create_playlist("mix").unwrap();
    player.add_to_playlist("mix", "funny_dogs_video_id").unwrap();
    player
        .add_to_playlist("mix", "life_at_google_video_id")
        .unwrap();

    player.add_to_playlist("mix", "nothing_video_id").unwrap();
    player.remove_from_playlist("mix", "nothing_video_id").unwrap();

    assert_eq!(
        player.playlist("mix").unwrap().video_ids(),
        ["funny_dogs_video_id", "life_at_google_video_id"]
    );
}

#[test]
fn flagging_gates_playback_playlists_search_and_random() {
    let (mut player, lines) = player();
    player.create_playlist("mix").unwrap();

    player.flag_video("amazing_cats_video_id", Some("dont_like_cats")).unwrap();
    player.flag_video("another_cat_video_id", None).unwrap();

    let error = player.play_video("amazing_cats_video_id").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::VideoFlagged);

    let error = player
        .add_to_playlist("mix", "another_cat_video_id")
        .unwrap_err();
    assert_eq!(
        error.to_string(),
        "Cannot add video to mix: Video is currently flagged (reason: Not supplied)"
    );

    lines.lock().unwrap().clear();
    player.search_videos("cat").unwrap();
    assert_eq!(*lines.lock().unwrap(), ["No search results for cat"]);

    player.flag_video("funny_dogs_video_id", None).unwrap();
    player.flag_video("life_at_google_video_id", None).unwrap();
    player.flag_video("nothing_video_id", None).unwrap();
    let error = player.play_random_video().unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NoPlayableVideos);
}

#[test]
fn allowing_a_video_restores_it_everywhere() {
    let (mut player, lines) = player();
    player.flag_video("amazing_cats_video_id", Some("mistake")).unwrap();
    player.allow_video("amazing_cats_video_id").unwrap();

    lines.lock().unwrap().clear();
    player.search_videos("amazing").unwrap();
    assert_eq!(
        lines.lock().unwrap()[1],
        "    1) Amazing Cats (amazing_cats_video_id) [#cat #animal]"
    );
    player.play_video("amazing_cats_video_id").unwrap();
    assert_eq!(player.current_video(), Some("amazing_cats_video_id"));
}

#[test]
fn search_selection_plays_the_numbered_result() {
    let (mut player, lines) = player_with_input(ScriptedInput::new(["1"]));
    player.search_videos_with_tag("#dog").unwrap();
    assert_eq!(player.current_video(), Some("funny_dogs_video_id"));
    assert_eq!(
        lines.lock().unwrap().last().map(String::as_str),
        Some("Playing video: Funny Dogs")
    );
}

#[test]
fn flagging_while_playing_interleaves_stop_before_the_flag_confirmation() {
    let (mut player, lines) = player();
    player.play_video("funny_dogs_video_id").unwrap();
    player
        .flag_video("funny_dogs_video_id", Some("barking"))
        .unwrap();

    assert_eq!(
        *lines.lock().unwrap(),
        [
            "Playing video: Funny Dogs",
            "Stopping video: Funny Dogs",
            "Successfully flagged video: Funny Dogs (reason: barking)",
        ]
    );
    assert_eq!(player.current_video(), None);
}

#[test]
fn refused_commands_leave_all_state_untouched() {
    let (mut player, lines) = player();
    player.create_playlist("mix").unwrap();
    player.add_to_playlist("mix", "nothing_video_id").unwrap();
    player.play_video("nothing_video_id").unwrap();
    let emitted = lines.lock().unwrap().len();

    assert!(player.play_video("bogus").is_err());
    assert!(player.create_playlist("MIX").is_err());
    assert!(player.add_to_playlist("mix", "nothing_video_id").is_err());
    assert!(player.remove_from_playlist("mix", "funny_dogs_video_id").is_err());
    assert!(player.flag_video("bogus", None).is_err());
    assert!(player.allow_video("nothing_video_id").is_err());

    assert_eq!(player.current_video(), Some("nothing_video_id"));
    assert_eq!(
        player.playlist("mix").unwrap().video_ids(),
        ["nothing_video_id"]
    );
    assert_eq!(lines.lock().unwrap().len(), emitted);
}
