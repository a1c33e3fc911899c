//! The resolution engine
//!
//! A [`Container`] owns a binding table and builds targets from it. Construction is
//! synchronous and recursive: each declared parameter of a class is looked up in the
//! table and resolved before the class itself is constructed.
//!
//! No cycle detection is performed. A binding graph in which a class (directly or
//! transitively) depends on itself recurses until the stack is exhausted.

use crate::binding::{Binding, Class, Instance, Provider, Target};
use crate::config::ContainerConfig;
use crate::declaration::{Arguments, Injectable, ParamInfo};
use crate::error::{DiError, DiResult};
use crate::key::{AsKey, Key};
use std::collections::HashMap;

/// Binding table plus the resolution algorithm.
///
/// Every container has its own table; nothing is shared between containers.
/// Registration needs `&mut self` and building only `&self`, so a container that
/// is shared between threads has to sit behind a lock.
///
/// # Examples
///
/// ```
/// use armature_di::{Arguments, Binding, Container, DiResult, Identifier, Injectable, ParamInfo};
/// use std::sync::LazyLock;
///
/// static LOG_FILE: LazyLock<Identifier> = LazyLock::new(|| Identifier::new("LOG_FILE"));
///
/// struct MyLogger {
///     log_file: String,
/// }
///
/// impl Injectable for MyLogger {
///     fn parameters() -> Vec<ParamInfo> {
///         vec![ParamInfo::of::<String>().with_override(&LOG_FILE)]
///     }
///
///     fn construct(args: &mut Arguments) -> DiResult<Self> {
///         Ok(Self { log_file: args.next()? })
///     }
/// }
///
/// # fn main() -> DiResult<()> {
/// let logger = Container::new()
///     .bind(Binding::value(&LOG_FILE, "log.txt".to_string()))
///     .build::<MyLogger>()?;
///
/// assert_eq!(logger.log_file, "log.txt");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Container {
	bindings: HashMap<Key, Binding>,
	config: ContainerConfig,
}

impl Container {
	/// Creates a container with an empty binding table.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_config(config: ContainerConfig) -> Self {
		Self {
			bindings: HashMap::new(),
			config,
		}
	}

	pub fn config(&self) -> &ContainerConfig {
		&self.config
	}

	/// Inserts the binding, replacing any previous binding with the same key.
	pub fn register(&mut self, binding: Binding) {
		tracing::debug!(
			key = %binding.key(),
			kind = ?binding.kind(),
			"registering binding"
		);
		self.bindings.insert(binding.key().clone(), binding);
	}

	/// Registers the first binding of a chain.
	pub fn bind(&mut self, binding: Binding) -> &mut Self {
		self.register(binding);
		self
	}

	/// Registers a follow-up binding of a chain.
	///
	/// Fails when nothing has been bound yet; start the chain with [`Container::bind`].
	pub fn add_binding(&mut self, binding: Binding) -> DiResult<&mut Self> {
		if self.bindings.is_empty() {
			return Err(DiError::usage(
				"must establish an initial binding first (call `bind` before `add_binding`)",
			));
		}
		Ok(self.bind(binding))
	}

	/// Builds a fresh `T`, resolving its declared dependencies.
	///
	/// `T` must be the thing being constructed: if `T` itself was registered as a
	/// binding key the call fails with [`DiError::Usage`].
	pub fn build<T: Injectable>(&self) -> DiResult<T> {
		let key = Key::of::<T>();
		self.ensure_unbound(&key)?;

		let type_name = std::any::type_name::<T>();
		tracing::trace!(target_type = type_name, "building target");
		let mut args = self.resolve_arguments(type_name, T::parameters())?;
		T::construct(&mut args)
	}

	/// Untyped form of [`Container::build`] accepting a class or a token.
	///
	/// A class with no binding is built from its own declarations. A token with no
	/// binding cannot be resolved and fails with [`DiError::MissingDependency`].
	pub fn build_target(&self, target: impl Into<Target>) -> DiResult<Instance> {
		let target = target.into();
		let key = target.key();
		self.ensure_unbound(&key)?;

		match (self.bindings.get(&key), &target) {
			(Some(binding), _) => self.resolve(&key, Some(binding)),
			(None, Target::Class(class)) => self.resolve_class(class),
			(None, Target::Token(_)) => self.resolve(&key, None),
		}
	}

	/// Number of registered bindings.
	pub fn len(&self) -> usize {
		self.bindings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bindings.is_empty()
	}

	pub fn contains(&self, key: impl AsKey) -> bool {
		self.bindings.contains_key(&key.as_key())
	}

	pub fn get(&self, key: impl AsKey) -> Option<&Binding> {
		self.bindings.get(&key.as_key())
	}

	fn ensure_unbound(&self, key: &Key) -> DiResult<()> {
		if self.bindings.contains_key(key) {
			return Err(DiError::usage(format!(
				"target {key} was directly injected, not built"
			)));
		}
		Ok(())
	}

	fn resolve(&self, key: &Key, binding: Option<&Binding>) -> DiResult<Instance> {
		let Some(binding) = binding else {
			tracing::debug!(key = %key, "dependency missing");
			return Err(DiError::MissingDependency {
				key: key.to_string(),
			});
		};

		match binding.provider() {
			Provider::Value(instance) => Ok(instance.clone()),
			Provider::Class(class) => self.resolve_class(class),
		}
	}

	fn resolve_class(&self, class: &Class) -> DiResult<Instance> {
		tracing::trace!(class = class.name(), "constructing class");
		let args = self.resolve_arguments(class.name(), class.parameters())?;
		class.construct(args)
	}

	fn resolve_arguments(&self, owner: &'static str, params: Vec<ParamInfo>) -> DiResult<Arguments> {
		let mut resolved = Vec::with_capacity(params.len());

		for (position, param) in params.iter().enumerate() {
			let Some(key) = param.lookup_key() else {
				tracing::trace!(owner, position, "skipping parameter without a key");
				continue;
			};

			let instance = match (self.bindings.get(key), param.implicit_class()) {
				(Some(binding), _) => self.resolve(key, Some(binding)),
				(None, Some(class)) if self.config.implicit_dependencies => self.resolve_class(class),
				(None, _) => self.resolve(key, None),
			}
			.inspect_err(|e| {
				tracing::debug!(owner, position, key = %key, error = %e, "parameter resolution failed");
			})?;

			resolved.push((key.clone(), instance));
		}

		Ok(Arguments::new(owner, resolved))
	}
}
