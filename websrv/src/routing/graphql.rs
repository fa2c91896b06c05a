// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! GraphQL schema with resolvers that delegate to the [`LibraryService`].

use std::convert::Infallible;

use async_graphql::{
    Context, EmptySubscription, Object, Result, Schema, SimpleObject, http::GraphiQLSource,
};
use async_graphql_warp::{GraphQLBadRequest, GraphQLResponse};
use warp::{Filter as _, Rejection, Reply, filters::BoxedFilter, http::Response as HttpResponse};

use medialib_backend_embedded::{Error as BackendError, LibraryService, Result as BackendResult};
use medialib_core::{
    playlist::{Entity as PlaylistEntity, Playlist as PlaylistBody, PlaylistId},
    song::{Song as SongEntity, SongId},
};
use medialib_repo::prelude::RepoError;
use medialib_usecases::song::{SearchParam, SongFilter};
use medialib_websrv_warp::{Error, reject_on_error};

const GRAPHQL_ENDPOINT: &str = "/graphql";

/// Reply of `deletePlayList`, independent of the outcome.
const DELETE_PLAYLIST_STATUS: u16 = 200;

/// Resolve a missing entity as `null` and report the error without
/// failing sibling fields.
fn optional_entity<T>(ctx: &Context<'_>, result: BackendResult<T>) -> Result<Option<T>> {
    match result {
        Ok(entity) => Ok(Some(entity)),
        Err(err @ BackendError::Repository(RepoError::NotFound)) => {
            let err = async_graphql::Error::new(err.to_string()).into_server_error(ctx.item.pos);
            ctx.add_error(ctx.set_error_path(err));
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

#[derive(Debug, SimpleObject)]
pub(crate) struct Song {
    id: u64,
    title: String,
    artist: String,
    album: String,
    duration: u32,
}

impl From<SongEntity> for Song {
    fn from(from: SongEntity) -> Self {
        let SongEntity {
            id,
            title,
            artist,
            album,
            duration,
        } = from;
        Self {
            id: id.value(),
            title,
            artist,
            album,
            duration,
        }
    }
}

#[derive(Debug, SimpleObject)]
pub(crate) struct Playlist {
    id: u64,
    name: String,
    songs: Vec<u64>,
}

impl From<PlaylistEntity> for Playlist {
    fn from(from: PlaylistEntity) -> Self {
        let PlaylistEntity { id, body } = from;
        let PlaylistBody { name, songs } = body;
        Self {
            id: id.value(),
            name,
            songs: songs.into_iter().map(SongId::value).collect(),
        }
    }
}

#[derive(Debug, SimpleObject)]
pub(crate) struct CreateResult {
    id: Option<u64>,
}

#[derive(Debug)]
pub(crate) struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn get_songs(&self, ctx: &Context<'_>) -> Result<Vec<Song>> {
        let service = ctx.data::<LibraryService>()?;
        Ok(service.load_catalog()?.into_iter().map(Into::into).collect())
    }

    async fn get_song_by_id(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "SongId")] song_id: Option<u64>,
    ) -> Result<Option<Song>> {
        let Some(song_id) = song_id else {
            return Ok(None);
        };
        let service = ctx.data::<LibraryService>()?;
        let song = optional_entity(ctx, service.load_song(SongId::new(song_id)))?;
        Ok(song.map(Into::into))
    }

    /// Filter songs by a field name and a comparison value.
    ///
    /// All songs are returned if the field name is missing or unknown.
    async fn get_filter_song(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "SearchParam")] search_param: Option<String>,
        #[graphql(name = "SearchValue")] search_value: Option<String>,
    ) -> Result<Vec<Song>> {
        let service = ctx.data::<LibraryService>()?;
        let param = SearchParam::from_field_name(search_param.as_deref().unwrap_or_default());
        let filter = SongFilter::new(param, search_value.unwrap_or_default());
        Ok(service
            .filter_songs(&filter)?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn get_play_lists(&self, ctx: &Context<'_>) -> Result<Vec<Playlist>> {
        let service = ctx.data::<LibraryService>()?;
        let entities = service.load_playlists().await?;
        Ok(entities.into_iter().map(Into::into).collect())
    }

    async fn get_play_list(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "PlayListId")] playlist_id: Option<u64>,
    ) -> Result<Option<Playlist>> {
        let Some(playlist_id) = playlist_id else {
            return Ok(None);
        };
        let service = ctx.data::<LibraryService>()?;
        let entity = optional_entity(ctx, service.load_playlist(PlaylistId::new(playlist_id)))?;
        Ok(entity.map(Into::into))
    }
}

#[derive(Debug)]
pub(crate) struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_play_list(
        &self,
        ctx: &Context<'_>,
        name: String,
        songs: Vec<u64>,
    ) -> Result<Option<CreateResult>> {
        let service = ctx.data::<LibraryService>()?;
        let playlist = PlaylistBody {
            name,
            songs: songs.into_iter().map(SongId::new).collect(),
        };
        let id = service.create_or_update_playlist(None, playlist).await?;
        Ok(Some(CreateResult {
            id: Some(id.value()),
        }))
    }

    /// Always reports success.
    async fn delete_play_list(&self, ctx: &Context<'_>, id: u64) -> Result<Option<u16>> {
        let service = ctx.data::<LibraryService>()?;
        if let Err(err) = service.purge_playlist(PlaylistId::new(id)).await {
            log::warn!("Failed to delete playlist {id}: {err}");
        }
        Ok(Some(DELETE_PLAYLIST_STATUS))
    }
}

pub(crate) type LibrarySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

#[must_use]
pub(crate) fn build_schema(service: LibraryService) -> LibrarySchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(service)
        .finish()
}

/// Execute queries (GET/POST) or serve the GraphiQL IDE (plain GET).
pub(crate) fn create_filters(schema: LibrarySchema) -> BoxedFilter<(impl Reply,)> {
    log::info!("Creating GraphQL routes");

    let execute = async_graphql_warp::graphql(schema)
        .and_then(
            |(schema, request): (LibrarySchema, async_graphql::Request)| async move {
                Ok::<_, Infallible>(GraphQLResponse::from(schema.execute(request).await))
            },
        )
        .or_else(|reject: Rejection| async move {
            if let Some(GraphQLBadRequest(err)) = reject.find() {
                return Err(reject_on_error(Error::BadRequest(anyhow::anyhow!("{err}"))));
            }
            Err::<(GraphQLResponse,), _>(reject)
        });

    let graphiql = warp::get().map(|| {
        HttpResponse::builder()
            .header("content-type", "text/html")
            .body(GraphiQLSource::build().endpoint(GRAPHQL_ENDPOINT).finish())
    });

    execute.or(graphiql).boxed()
}
