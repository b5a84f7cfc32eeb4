pub mod config;
pub mod enso;
pub mod error;
pub mod params;
pub mod request;
pub mod server;
pub mod tools;

pub use enso::EnsoClient;
pub use error::EnsoError;
