pub mod gsdp_lookup;
pub mod ingest_gsdp;
pub mod tags;
