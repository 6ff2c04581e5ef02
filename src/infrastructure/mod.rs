pub mod database;
pub mod geography;
pub mod repositories;
pub mod sources;
