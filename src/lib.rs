//! # Creational Patterns
//!
//! Object-construction patterns, centred on a process-wide lazy singleton
//! that is safe to initialize from any number of threads at once.
//!
//! ## Patterns Covered
//!
//! 1. **Lazy Singleton**
//!    - Unsynchronized check-then-store (broken under concurrency, kept for comparison)
//!    - Always-lock accessor
//!    - Double-checked locking with Release/Acquire publication
//!    - Fallible construction that can be retried
//!
//! 2. **Factory / Abstract Factory**
//!    - Closed sets of variants selected by tag
//!    - Trait objects and enum dispatch
//!
//! 3. **Builder**
//!    - Consuming builder with a director for canned recipes
//!
//! 4. **Prototype**
//!    - Copy operation defined on the type itself
//!
//! 5. **Work Units**
//!    - Named threads printing and pausing, with and without a shared lock
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin singleton_demo
//! cargo run --bin singleton_demo -- harness.toml
//! cargo run --bin creational_tour
//! cargo bench --bench accessor_fast_path
//! ```

pub mod config;
pub mod error;
pub mod harness;
pub mod logging;
pub mod patterns;
pub mod singleton;
pub mod workers;

pub use config::HarnessConfig;
pub use error::{ConfigError, ConstructionError, FactoryError};
pub use singleton::{
    AlwaysLockSlot, DoubleCheckedSlot, InitSlot, InitStats, LazySingleton, TryLazySingleton,
    UnsynchronizedSlot,
};
