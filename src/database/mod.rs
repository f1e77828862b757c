pub mod state_repo;

pub use state_repo::{open_in_memory, open_state_db};
