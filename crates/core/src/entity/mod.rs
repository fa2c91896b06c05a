// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::num::ParseIntError;

use thiserror::Error;

/// Numeric identifiers of records.
///
/// Ids are positive integers that are unique within their record set.
pub type RecordIdValue = u64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid id: {0}")]
pub struct ParseIdError(#[from] ParseIntError);

macro_rules! record_id_newtype {
    ($type_name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            derive_more::Display,
            derive_more::From,
            derive_more::Into,
        )]
        #[display("{_0}")]
        #[repr(transparent)]
        pub struct $type_name($crate::entity::RecordIdValue);

        impl $type_name {
            #[must_use]
            pub const fn new(value: $crate::entity::RecordIdValue) -> Self {
                Self(value)
            }

            #[must_use]
            pub const fn value(self) -> $crate::entity::RecordIdValue {
                let Self(value) = self;
                value
            }
        }

        impl std::str::FromStr for $type_name {
            type Err = $crate::entity::ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self).map_err(Into::into)
            }
        }
    };
}

pub(crate) use record_id_newtype;

/// A body that is identified by an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity<I, B> {
    pub id: I,
    pub body: B,
}

impl<I, B> Entity<I, B> {
    pub fn new(id: impl Into<I>, body: impl Into<B>) -> Self {
        Self {
            id: id.into(),
            body: body.into(),
        }
    }
}
