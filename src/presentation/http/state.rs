use crate::{
    application::{gsdp_lookup::use_case::GsdpLookupUseCase, tags::use_case::TagUseCase},
    infrastructure::geography::geojson_store::GeoJsonStore,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub gsdp: Arc<GsdpLookupUseCase>,
    pub tags: Arc<TagUseCase>,
    pub geojson: Arc<GeoJsonStore>,
}
