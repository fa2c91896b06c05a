// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn first_id_is_one() {
    assert_eq!(Some(PlaylistId::new(1)), next_playlist_id([]));
}

#[test]
fn next_id_follows_maximum() {
    assert_eq!(
        Some(PlaylistId::new(3)),
        next_playlist_id([PlaylistId::new(1), PlaylistId::new(2)])
    );
}

#[test]
fn gaps_are_not_reused() {
    assert_eq!(
        Some(PlaylistId::new(8)),
        next_playlist_id([PlaylistId::new(7), PlaylistId::new(2)])
    );
}

#[test]
fn no_id_after_maximum_value() {
    assert_eq!(
        None,
        next_playlist_id([PlaylistId::new(1), PlaylistId::new(u64::MAX)])
    );
}
