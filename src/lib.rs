//! # Armature
//!
//! A small dependency injection toolkit.
//!
//! Armature builds fully wired values from a table of bindings. Each container owns its
//! own table, every class binding yields a fresh instance, and resolution is a plain
//! synchronous recursion over the constructor declarations of the target.
//!
//! ## Feature Flags
//!
//! - `minimal` - Resolution engine only; declarations are written by hand
//! - `macros` - The `#[injectable]` attribute macro
//! - `full` (default) - Everything above
//!
//! ## Quick Example
//!
//! ```rust
//! use armature::prelude::*;
//! use std::sync::LazyLock;
//!
//! static LOG_FILE: LazyLock<Identifier> = LazyLock::new(|| Identifier::new("LOG_FILE"));
//!
//! #[injectable]
//! struct MyLogger {
//!     #[inject(LOG_FILE)]
//!     log_file: String,
//! }
//!
//! # fn main() -> DiResult<()> {
//! let logger = Container::new()
//!     .bind(Binding::value(&LOG_FILE, "log.txt".to_string()))
//!     .build::<MyLogger>()?;
//!
//! assert_eq!(logger.log_file, "log.txt");
//! # Ok(())
//! # }
//! ```

extern crate self as armature;

/// The resolution engine.
pub use armature_di as di;

pub use armature_di::{
	Arguments, AsKey, Binding, BindingKind, Class, Container, ContainerConfig, DiError, DiResult,
	Identifier, Injectable, Instance, Key, ParamInfo, Provider, Target, TypeKey,
};

#[cfg(feature = "macros")]
pub use armature_di::injectable;

/// Everything needed to declare and build injectable types.
pub mod prelude {
	pub use crate::{
		Arguments, Binding, Class, Container, ContainerConfig, DiError, DiResult, Identifier,
		Injectable, Key, ParamInfo,
	};

	#[cfg(feature = "macros")]
	pub use crate::injectable;
}
