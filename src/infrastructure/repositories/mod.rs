pub mod in_memory_tag_repository;
pub mod sqlx_tag_repository;
