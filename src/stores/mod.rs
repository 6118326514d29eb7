// State management
// Stores hold view state and drive the async user actions that change it

pub mod config_store;
pub mod downloads;
pub mod state_cell;
pub mod viewer;
