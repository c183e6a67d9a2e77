pub mod venue;

pub use venue::*;
