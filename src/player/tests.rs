use super::*;
use crate::config::PlayerOptions;
use crate::library::{Album, Track};
use crate::media::MediaEvent;
use crate::media::fake::{Call, FakeMedia};

fn t(title: &str) -> Track {
    Track {
        title: title.into(),
        artist: "Artist".into(),
        album: Album {
            name: "Album".into(),
            image: None,
        },
        file: format!("{title}.mp3"),
    }
}

fn player_with(n: usize) -> Player<FakeMedia> {
    let tracks = (0..n).map(|i| t(&format!("T{i}"))).collect();
    Player::new(FakeMedia::new(), PlayerOptions::default(), Some(tracks))
}

fn active_count(p: &Player<FakeMedia>) -> usize {
    (0..p.tracks().len()).filter(|&i| p.is_active(i)).count()
}

#[test]
fn new_loads_first_track_and_waits() {
    let p = player_with(3);
    assert_eq!(p.state(), PlayerState { playing: false, index: 0 });
    assert_eq!(p.play_label(), PlayLabel::Play);
    assert_eq!(p.media().calls, vec![Call::Load("T0.mp3".into())]);
    assert!(p.is_active(0));
    assert_eq!(active_count(&p), 1);
}

#[test]
fn new_with_autoplay_starts_playing() {
    let tracks = vec![t("A"), t("B")];
    let p = Player::new(
        FakeMedia::new(),
        PlayerOptions { autoplay: true },
        Some(tracks),
    );
    assert!(p.state().playing);
    assert_eq!(p.play_label(), PlayLabel::Pause);
    assert_eq!(p.media().last_call(), Some(&Call::Play));
}

#[test]
fn new_without_tracks_uses_samples() {
    let p = Player::new(FakeMedia::new(), PlayerOptions::default(), None);
    assert_eq!(p.tracks().len(), 3);
    assert_eq!(p.current_track().title, "Amazing");

    let p = Player::new(FakeMedia::new(), PlayerOptions::default(), Some(Vec::new()));
    assert_eq!(p.tracks().len(), 3);
}

#[test]
fn play_toggles_and_drives_media() {
    let mut p = player_with(2);
    p.play();
    assert!(p.state().playing);
    assert_eq!(p.play_label(), PlayLabel::Pause);
    assert_eq!(p.media().last_call(), Some(&Call::Play));

    p.play();
    assert!(!p.state().playing);
    assert_eq!(p.play_label(), PlayLabel::Play);
    assert_eq!(p.media().last_call(), Some(&Call::Pause));
    assert_eq!(p.state().index, 0);
}

#[test]
fn next_wraps_after_last_track() {
    let mut p = player_with(3);
    p.change_song(SongAction::Next).unwrap();
    p.change_song(SongAction::Next).unwrap();
    assert_eq!(p.state(), PlayerState { playing: true, index: 2 });

    p.change_song(SongAction::Next).unwrap();
    assert_eq!(p.state().index, 0);
    assert!(p.state().playing);
}

#[test]
fn next_n_times_returns_to_start() {
    for n in 1..=5 {
        for start in 0..n {
            let mut p = player_with(n);
            p.select(start).unwrap();
            for _ in 0..n {
                p.change_song(SongAction::Next).unwrap();
            }
            assert_eq!(p.state().index, start, "n={n} start={start}");
        }
    }
}

#[test]
fn prev_then_next_is_identity() {
    let mut p = player_with(4);
    for start in 0..4 {
        p.select(start).unwrap();
        p.change_song(SongAction::Prev).unwrap();
        p.change_song(SongAction::Next).unwrap();
        assert_eq!(p.state().index, start);
        p.change_song(SongAction::Next).unwrap();
        p.change_song(SongAction::Prev).unwrap();
        assert_eq!(p.state().index, start);
    }
}

#[test]
fn prev_from_first_wraps_to_last() {
    let mut p = player_with(3);
    p.change_song(SongAction::Prev).unwrap();
    assert_eq!(p.state().index, 2);
    assert_eq!(p.media().calls[1], Call::Load("T2.mp3".into()));
}

#[test]
fn change_song_always_ends_playing_even_from_playing() {
    let mut p = player_with(3);
    p.play();
    assert!(p.state().playing);

    p.change_song(SongAction::Next).unwrap();
    assert!(p.state().playing);
    assert_eq!(p.play_label(), PlayLabel::Pause);
    let calls = &p.media().calls;
    assert_eq!(
        &calls[calls.len() - 2..],
        &[Call::Load("T1.mp3".into()), Call::Play]
    );
}

#[test]
fn change_song_moves_the_single_active_marker() {
    let mut p = player_with(4);
    p.select(2).unwrap();
    assert!(p.is_active(2));
    assert!(!p.is_active(0));
    assert_eq!(active_count(&p), 1);

    p.change_song(SongAction::Prev).unwrap();
    assert!(p.is_active(1));
    assert_eq!(active_count(&p), 1);
}

#[test]
fn bogus_action_is_rejected_without_mutation() {
    let mut p = player_with(3);
    p.select(1).unwrap();
    let before = p.state();
    let calls_before = p.media().calls.len();

    let err = p.change_song_str("bogus").unwrap_err();
    assert_eq!(err, PlayerError::InvalidAction("bogus".into()));
    assert_eq!(p.state(), before);
    assert_eq!(p.media().calls.len(), calls_before);
    assert!(p.is_active(1));
}

#[test]
fn index_one_past_the_end_lands_on_first_track() {
    let mut p = player_with(3);
    p.select(2).unwrap();

    p.select(3).unwrap();
    assert_eq!(p.state().index, 0);
    assert!(p.is_active(0));

    let err = p.select(4).unwrap_err();
    assert!(matches!(err, PlayerError::InvalidAction(_)));
    assert_eq!(p.state().index, 0);
}

#[test]
fn textual_actions_parse() {
    assert_eq!("prev".parse::<SongAction>(), Ok(SongAction::Prev));
    assert_eq!(" next ".parse::<SongAction>(), Ok(SongAction::Next));
    assert_eq!("2".parse::<SongAction>(), Ok(SongAction::Index(2)));
    assert!("-1".parse::<SongAction>().is_err());
    assert!("NEXT".parse::<SongAction>().is_err());

    let mut p = player_with(3);
    p.change_song_str("2").unwrap();
    assert_eq!(p.state().index, 2);
}

#[test]
fn failed_load_still_advances() {
    let mut media = FakeMedia::new();
    media.fail_loads = true;
    let mut p = Player::new(media, PlayerOptions::default(), Some(vec![t("A"), t("B")]));

    p.change_song(SongAction::Next).unwrap();
    assert_eq!(p.state(), PlayerState { playing: true, index: 1 });
}

#[test]
fn ended_track_shows_play_and_replays_on_toggle() {
    let mut p = player_with(2);
    p.play();
    assert_eq!(p.play_label(), PlayLabel::Pause);

    p.media_mut().events = vec![MediaEvent::TimeUpdate, MediaEvent::Progress];
    p.pump_media_events();
    assert!(p.state().playing);

    p.media_mut().events = vec![MediaEvent::TimeUpdate, MediaEvent::Ended];
    p.pump_media_events();
    assert_eq!(p.state(), PlayerState { playing: false, index: 0 });
    assert_eq!(p.play_label(), PlayLabel::Play);

    p.play();
    assert!(p.state().playing);
    assert_eq!(p.media().last_call(), Some(&Call::Play));
    assert_eq!(p.media().count(&Call::Play), 2);
}
