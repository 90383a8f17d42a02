//! # Creational Patterns
//!
//! Object creation patterns applied to small toy domains.
//!
//! ## Patterns Covered
//!
//! 1. **Factory Method**
//!    - Vehicle factories that gather their fields from a [`console::FieldSource`]
//!    - Document creators held in a choice-keyed registry
//!
//! 2. **Builder**
//!    - Text and HTML report builders driven by a director
//!
//! 3. **Singleton**
//!    - A process-wide settings store behind `OnceLock`
//!    - A rotating file logger, also usable as the `log` backend
//!
//! 4. **Prototype**
//!    - Explicit field-by-field duplication of orders and game characters
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin p1_vehicle_factory
//! cargo run --bin p2_document_factory
//! cargo run --bin p3_singleton_builder_prototype
//! cargo run --bin p4_logger_reports_characters
//! cargo run --bin p5_user_manager
//! ```

pub mod character;
pub mod config_file;
pub mod console;
pub mod document;
pub mod error;
pub mod logger;
pub mod order;
pub mod prototype;
pub mod report;
pub mod settings;
pub mod users;
pub mod vehicle;

pub use error::{CreationError, InputError};
pub use logger::{LogLevel, Logger, LoggerConfig};
pub use prototype::Prototype;
pub use settings::Settings;
