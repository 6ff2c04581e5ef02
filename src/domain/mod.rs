pub mod gsdp;
pub mod shared;
pub mod tag;
