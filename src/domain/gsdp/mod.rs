pub mod errors;
pub mod record;
pub mod source;
pub mod state_names;
pub mod year_index;
