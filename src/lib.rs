pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::outbox::FileOutbox;
pub use adapters::xlsx::XlsxWorkbook;
pub use config::TomlConfig;
pub use core::generator::RotaGenerator;
pub use domain::model::{Director, Directory, RotaMonth, RotaOutcome};
pub use utils::error::{Result, RotaError};
