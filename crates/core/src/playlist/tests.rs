// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn playlist_with_name_is_valid() {
    let playlist = Playlist {
        name: "Road Trip".into(),
        songs: vec![SongId::new(3), SongId::new(3), SongId::new(999)],
    };
    assert!(playlist.is_valid());
}

#[test]
fn playlist_without_name_is_invalid() {
    let playlist = Playlist {
        name: String::new(),
        songs: vec![SongId::new(1)],
    };
    assert!(!playlist.is_valid());
}

#[test]
fn playlist_with_blank_name_is_valid() {
    let playlist = Playlist {
        name: "   ".into(),
        songs: vec![],
    };
    assert!(playlist.is_valid());
}
