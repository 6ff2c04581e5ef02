pub mod geojson_store;
pub mod state_names;
