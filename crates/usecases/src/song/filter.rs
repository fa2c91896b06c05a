// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use medialib_core::song::Song;

/// The field that a [`SongFilter`] inspects.
///
/// Field names are case-sensitive. Unknown names are captured
/// by [`SearchParam::Unfiltered`] and select all songs.
#[derive(Debug, Clone, PartialEq, Eq, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SearchParam {
    Album,
    Artist,
    Title,
    Duration,

    /// Compares the title for equality.
    Id,

    #[strum(default)]
    Unfiltered(String),
}

impl SearchParam {
    #[must_use]
    pub fn from_field_name(field_name: &str) -> Self {
        field_name
            .parse()
            .unwrap_or_else(|_| Self::Unfiltered(field_name.to_owned()))
    }
}

/// The raw comparison value, never converted into another type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Integer(i64),
}

impl FilterValue {
    fn contained_in_ignore_case(&self, text: &str) -> bool {
        let needle = match self {
            Self::Text(value) => value.to_lowercase(),
            Self::Integer(value) => value.to_string(),
        };
        text.to_lowercase().contains(&needle)
    }
}

impl From<String> for FilterValue {
    fn from(from: String) -> Self {
        Self::Text(from)
    }
}

impl From<&str> for FilterValue {
    fn from(from: &str) -> Self {
        Self::Text(from.to_owned())
    }
}

impl From<i64> for FilterValue {
    fn from(from: i64) -> Self {
        Self::Integer(from)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongFilter {
    pub param: SearchParam,
    pub value: FilterValue,
}

impl SongFilter {
    #[must_use]
    pub fn new(param: SearchParam, value: impl Into<FilterValue>) -> Self {
        Self {
            param,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn matches(&self, song: &Song) -> bool {
        let Self { param, value } = self;
        match param {
            SearchParam::Album => value.contained_in_ignore_case(&song.album),
            SearchParam::Artist => value.contained_in_ignore_case(&song.artist),
            SearchParam::Title => value.contained_in_ignore_case(&song.title),
            SearchParam::Duration => {
                matches!(value, FilterValue::Integer(duration) if *duration == i64::from(song.duration))
            }
            SearchParam::Id => matches!(value, FilterValue::Text(title) if *title == song.title),
            SearchParam::Unfiltered(_) => true,
        }
    }

    #[must_use]
    pub fn select(&self, songs: impl IntoIterator<Item = Song>) -> Vec<Song> {
        songs.into_iter().filter(|song| self.matches(song)).collect()
    }
}

#[cfg(test)]
mod tests {
    use medialib_core::song::SongId;

    use super::*;

    fn catalog() -> Vec<Song> {
        [
            (1, "Teardrop", "Massive Attack", "Mezzanine", 330),
            (2, "Angel", "Massive Attack", "Mezzanine", 379),
            (3, "Roads", "Portishead", "Dummy", 305),
            (4, "Glory Box", "Portishead", "Dummy", 305),
            (5, "Unfinished Sympathy", "Massive Attack", "Blue Lines", 308),
        ]
        .into_iter()
        .map(|(id, title, artist, album, duration)| Song {
            id: SongId::new(id),
            title: title.to_owned(),
            artist: artist.to_owned(),
            album: album.to_owned(),
            duration,
        })
        .collect()
    }

    fn selected_ids(filter: &SongFilter) -> Vec<u64> {
        filter
            .select(catalog())
            .into_iter()
            .map(|song| song.id.value())
            .collect()
    }

    #[test]
    fn parse_search_params() {
        assert_eq!(SearchParam::Album, SearchParam::from_field_name("album"));
        assert_eq!(SearchParam::Artist, SearchParam::from_field_name("artist"));
        assert_eq!(SearchParam::Title, SearchParam::from_field_name("title"));
        assert_eq!(
            SearchParam::Duration,
            SearchParam::from_field_name("duration")
        );
        assert_eq!(SearchParam::Id, SearchParam::from_field_name("id"));
        assert_eq!(
            SearchParam::Unfiltered("Title".to_owned()),
            SearchParam::from_field_name("Title")
        );
        assert_eq!(
            SearchParam::Unfiltered(String::new()),
            SearchParam::from_field_name("")
        );
    }

    #[test]
    fn title_contains_ignoring_case_in_catalog_order() {
        let filter = SongFilter::new(SearchParam::Title, "O");
        let expected = catalog()
            .into_iter()
            .filter(|song| song.title.to_lowercase().contains('o'))
            .map(|song| song.id.value())
            .collect::<Vec<_>>();
        assert_eq!(vec![1, 3, 4], expected);
        assert_eq!(expected, selected_ids(&filter));
    }

    #[test]
    fn album_and_artist_contain_ignoring_case() {
        assert_eq!(
            vec![3, 4],
            selected_ids(&SongFilter::new(SearchParam::Album, "dUMM"))
        );
        assert_eq!(
            vec![1, 2, 5],
            selected_ids(&SongFilter::new(SearchParam::Artist, "massive"))
        );
    }

    #[test]
    fn integer_value_matches_text_fields_by_digits() {
        let mut songs = catalog();
        songs[0].title = "1979".to_owned();
        let filter = SongFilter::new(SearchParam::Title, 97);
        assert_eq!(1, filter.select(songs).len());
    }

    #[test]
    fn duration_requires_integer_value() {
        assert_eq!(
            vec![3, 4],
            selected_ids(&SongFilter::new(SearchParam::Duration, 305))
        );
        assert!(selected_ids(&SongFilter::new(SearchParam::Duration, "305")).is_empty());
    }

    #[test]
    fn id_compares_title_exactly() {
        assert_eq!(
            vec![2],
            selected_ids(&SongFilter::new(SearchParam::Id, "Angel"))
        );
        assert!(selected_ids(&SongFilter::new(SearchParam::Id, "angel")).is_empty());
        assert!(selected_ids(&SongFilter::new(SearchParam::Id, "2")).is_empty());
        assert!(selected_ids(&SongFilter::new(SearchParam::Id, 2)).is_empty());
    }

    #[test]
    fn unknown_field_selects_entire_catalog() {
        let filter = SongFilter::new(SearchParam::from_field_name("unknown-field"), "xyz");
        assert_eq!(catalog(), filter.select(catalog()));
    }
}
