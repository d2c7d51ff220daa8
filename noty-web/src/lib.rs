pub(crate) mod base;
pub(crate) mod components;
pub(crate) mod helpers;
pub(crate) mod routes;

pub mod app;

pub use base::state::GlobalState;
pub use helpers::local_storage::BrowserStorage;
