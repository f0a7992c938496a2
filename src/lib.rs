//! # Design Patterns: Bad vs Good
//!
//! Classic object-oriented design patterns, each shown as a naive design next
//! to an improved one.
//!
//! ## Patterns Covered
//!
//! 1. **Creational**
//!    - Factory Method (shared interface, creator traits, runtime registry)
//!    - Abstract Factory (product families per platform)
//!    - Builder (mutable builder, director, gaming extension)
//!    - Singleton (global slot, reference counting, weak reclamation)
//!
//! 2. **Structural**
//!    - Bridge (device x audio format without a class explosion)
//!    - Decorator (border and shadow around a drawable node)
//!
//! 3. **Behavioral**
//!    - Observer (subject/observer, generic publisher)
//!    - Keyed event dispatcher (event manager with named channels)
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin factory_method
//! cargo run --bin abstract_factory
//! cargo run --bin builder
//! cargo run --bin singleton
//! cargo run --bin bridge
//! cargo run --bin decorator
//! cargo run --bin observer
//! ```
//!
//! Set `DESIGN_PATTERNS_CONFIG=path/to/patterns.toml` to override demo inputs
//! and `RUST_LOG=debug` to see the library's internal events.

pub mod config;
pub mod console;
pub mod error;
pub mod logging;

pub mod abstract_factory;
pub mod bridge;
pub mod builder;
pub mod decorator;
pub mod event_manager;
pub mod factory_method;
pub mod observer;
pub mod singleton;

pub use config::DemoConfig;
pub use error::{ConfigError, PatternError};

/// Driver start-up: read the config, then set colors and logging from it.
pub fn init_demo() -> Result<DemoConfig, ConfigError> {
    let config = DemoConfig::load()?;
    console::apply_color_preference(config.output.color);
    logging::init(&config.output.log_level);
    Ok(config)
}
