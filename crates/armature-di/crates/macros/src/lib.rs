//! Procedural macros for Armature dependency injection
//!
//! - `#[injectable]` - Declare a struct's constructor parameters and generate its
//!   `Injectable` implementation

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod crate_paths;
mod injectable;

/// Mark a struct as constructible by an Armature container
///
/// Every field becomes one constructor parameter, in declaration order, and must be
/// annotated with exactly one of the attributes below.
///
/// # Example
///
/// ```ignore
/// use armature_di::{Identifier, injectable};
/// use std::sync::{Arc, LazyLock};
///
/// static LOG_FILE: LazyLock<Identifier> = LazyLock::new(|| Identifier::new("LOG_FILE"));
///
/// #[injectable]
/// struct MyLogger {
///     #[inject(LOG_FILE)]
///     log_file: String,
///     #[inject]
///     sink: Arc<dyn Sink>,
///     #[no_inject(default = 3)]
///     retries: u32,
/// }
/// ```
///
/// # Field attributes
///
/// - `#[inject]` - Dependency looked up by the field's type
/// - `#[inject(KEY)]` - Dependency looked up by `KEY` (anything implementing `AsKey`)
/// - `#[inject(constructible)]` - Dependency looked up by the field's type, which is
///   itself `Injectable` and may be built without a binding when implicit dependencies
///   are enabled
/// - `#[no_inject]` / `#[no_inject(default = EXPR)]` - Not resolved; initialized with
///   `Default::default()` or `EXPR`
#[proc_macro_attribute]
pub fn injectable(args: TokenStream, input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);

	injectable::injectable_impl(args.into(), input)
		.unwrap_or_else(|e| e.to_compile_error())
		.into()
}
