/// Network adapters for the update service
mod cincinnati_client;

pub use cincinnati_client::CincinnatiGraphSource;
