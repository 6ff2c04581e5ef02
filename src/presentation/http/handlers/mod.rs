pub mod docs;
pub mod geojson;
pub mod gsdp;
pub mod health;
pub mod tags;
