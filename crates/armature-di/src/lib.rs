//! # Armature Dependency Injection
//!
//! A small, synchronous dependency-injection engine.
//!
//! ## Features
//!
//! - **Explicit bindings**: every dependency is looked up in a per-container binding table
//! - **Class or value**: a binding either constructs a fresh instance or hands out a stored value
//! - **Identity tokens**: [`Identifier`] keys for dependencies that have no type of their own
//! - **Recursive**: a class's declared parameters are resolved before the class is constructed
//! - **Declarative**: `#[injectable]` (with the `macros` feature) writes the declarations for you
//!
//! ## Example
//!
//! ```rust
//! use armature_di::{Arguments, Binding, Class, Container, DiResult, Injectable, Key, ParamInfo};
//! use std::sync::Arc;
//!
//! trait Logger: Send + Sync {
//!     fn log(&self, message: &str) -> String;
//! }
//!
//! struct ConsoleLogger;
//!
//! impl Logger for ConsoleLogger {
//!     fn log(&self, message: &str) -> String {
//!         format!("[log] {message}")
//!     }
//! }
//!
//! impl Injectable for ConsoleLogger {
//!     fn construct(_args: &mut Arguments) -> DiResult<Self> {
//!         Ok(ConsoleLogger)
//!     }
//! }
//!
//! struct ApiService {
//!     logger: Arc<dyn Logger>,
//! }
//!
//! impl Injectable for ApiService {
//!     fn parameters() -> Vec<ParamInfo> {
//!         vec![ParamInfo::of::<Arc<dyn Logger>>()]
//!     }
//!
//!     fn construct(args: &mut Arguments) -> DiResult<Self> {
//!         Ok(Self { logger: args.next()? })
//!     }
//! }
//!
//! # fn main() -> DiResult<()> {
//! let api = Container::new()
//!     .bind(Binding::class(
//!         Key::of::<Arc<dyn Logger>>(),
//!         Class::of_with(|logger: ConsoleLogger| Arc::new(logger) as Arc<dyn Logger>),
//!     ))
//!     .build::<ApiService>()?;
//!
//! assert_eq!(api.logger.log("ready"), "[log] ready");
//! # Ok(())
//! # }
//! ```
//!
//! ## Resolution rules
//!
//! - `build::<T>()` fails with [`DiError::Usage`] if `T` itself is a binding key.
//! - An unregistered `T` is constructed from its own declarations.
//! - Each declared parameter is looked up by its override key, else by its declared type.
//!   Parameters with neither are skipped.
//! - A parameter with no binding fails with [`DiError::MissingDependency`], unless
//!   [`ContainerConfig::implicit_dependencies`] is on and the parameter is declared
//!   constructible.
//! - Errors returned by constructors are passed through unchanged.

extern crate self as armature_di;

pub mod binding;
pub mod config;
pub mod container;
pub mod declaration;
pub mod error;
pub mod key;
pub mod token;

pub use binding::{Binding, BindingKind, Class, Instance, Provider, Target};
pub use config::ContainerConfig;
pub use container::Container;
pub use declaration::{Arguments, Injectable, ParamInfo};
pub use error::{DiError, DiResult};
pub use key::{AsKey, Key, TypeKey};
pub use token::Identifier;

#[cfg(feature = "macros")]
pub use armature_di_macros::injectable;

#[doc(hidden)]
pub mod __private {
	pub use tracing;
}
