// Gigbook - venue/artist/show booking directory
//
// The core is the directory query and aggregation layer: repository queries
// live on the model types (domains/*/models), the nested read-model shapes
// are built by pure functions (domains/*/data), and every write runs inside
// the transaction wrapper in common/mutations.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
