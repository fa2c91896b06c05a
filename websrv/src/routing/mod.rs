// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use warp::{Filter as _, Reply, filters::BoxedFilter};

use medialib_backend_embedded::LibraryService;

pub(crate) mod api;
pub(crate) mod graphql;

/// Both the REST resources and the GraphQL endpoint share the same service.
pub(crate) fn create_filters(service: LibraryService) -> BoxedFilter<(impl Reply,)> {
    let graphql_filters = warp::path("graphql")
        .and(warp::path::end())
        .and(graphql::create_filters(graphql::build_schema(service.clone())));
    api::create_filters(service).or(graphql_filters).boxed()
}

#[cfg(test)]
mod tests;
