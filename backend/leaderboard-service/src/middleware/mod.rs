pub mod logging;

pub use logging::Logging;
