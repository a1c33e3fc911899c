//! Dependency declarations
//!
//! A constructible type describes its constructor parameters through
//! [`Injectable::parameters`], and receives the resolved values, in the same order,
//! through [`Injectable::construct`]. Implementations are either written by hand or
//! generated by the `#[injectable]` attribute.

use crate::binding::{Class, Instance};
use crate::error::{DiError, DiResult};
use crate::key::{AsKey, Key};
use std::any::Any;
use std::sync::Arc;

/// Declaration of one constructor parameter.
///
/// The lookup key is the override key when present, otherwise the declared type.
/// A parameter with neither has no usable key and is left out of the argument list.
#[derive(Debug, Clone, Default)]
pub struct ParamInfo {
	declared_type: Option<Key>,
	override_key: Option<Key>,
	class: Option<Class>,
}

impl ParamInfo {
	/// Parameter whose declared type is `T`.
	pub fn of<T: ?Sized + Any>() -> Self {
		Self {
			declared_type: Some(Key::of::<T>()),
			..Self::default()
		}
	}

	/// Parameter whose declared type is the constructible type `T`.
	///
	/// Carries the class descriptor so that a container running with implicit
	/// dependencies can build `T` without a registration.
	pub fn injectable<T: Injectable>() -> Self {
		Self {
			declared_type: Some(Key::of::<T>()),
			override_key: None,
			class: Some(Class::of::<T>()),
		}
	}

	/// Parameter identified only by an explicit key.
	pub fn keyed(key: impl AsKey) -> Self {
		Self {
			override_key: Some(key.as_key()),
			..Self::default()
		}
	}

	/// Parameter without any key. Never resolved, never passed to the constructor.
	pub fn skipped() -> Self {
		Self::default()
	}

	/// Replaces the lookup key while keeping the declared type for reference.
	pub fn with_override(mut self, key: impl AsKey) -> Self {
		self.override_key = Some(key.as_key());
		self
	}

	pub fn declared_type(&self) -> Option<&Key> {
		self.declared_type.as_ref()
	}

	pub fn override_key(&self) -> Option<&Key> {
		self.override_key.as_ref()
	}

	/// Key used to look the parameter up in the binding table.
	pub fn lookup_key(&self) -> Option<&Key> {
		self.override_key.as_ref().or(self.declared_type.as_ref())
	}

	/// Class of the declared type, only when no override key replaces it.
	pub(crate) fn implicit_class(&self) -> Option<&Class> {
		if self.override_key.is_some() {
			return None;
		}
		self.class.as_ref()
	}
}

/// A type the container can construct.
///
/// # Examples
///
/// ```
/// use armature_di::{Arguments, DiResult, Identifier, Injectable, ParamInfo};
/// use std::sync::LazyLock;
///
/// static LOG_FILE: LazyLock<Identifier> = LazyLock::new(|| Identifier::new("LOG_FILE"));
///
/// struct FileLogger {
///     path: String,
/// }
///
/// impl Injectable for FileLogger {
///     fn parameters() -> Vec<ParamInfo> {
///         vec![ParamInfo::of::<String>().with_override(&LOG_FILE)]
///     }
///
///     fn construct(args: &mut Arguments) -> DiResult<Self> {
///         Ok(Self { path: args.next()? })
///     }
/// }
/// ```
pub trait Injectable: Sized + Send + Sync + 'static {
	/// Ordered constructor parameters. Types without declarations take none.
	fn parameters() -> Vec<ParamInfo> {
		Vec::new()
	}

	/// Builds the value from the resolved arguments, in declaration order.
	fn construct(args: &mut Arguments) -> DiResult<Self>;
}

/// The constructor injects `T` and then wraps it.
impl<T: Injectable> Injectable for Arc<T> {
	fn parameters() -> Vec<ParamInfo> {
		T::parameters()
	}

	fn construct(args: &mut Arguments) -> DiResult<Self> {
		T::construct(args).map(Arc::new)
	}
}

/// Resolved constructor arguments, consumed front to back.
pub struct Arguments {
	owner: &'static str,
	entries: std::vec::IntoIter<(Key, Instance)>,
	position: usize,
}

impl Arguments {
	pub(crate) fn new(owner: &'static str, entries: Vec<(Key, Instance)>) -> Self {
		Self {
			owner,
			entries: entries.into_iter(),
			position: 0,
		}
	}

	/// Number of arguments not yet consumed.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.len() == 0
	}

	/// Takes the next argument as an owned `T`.
	///
	/// Moves the value out when nothing else holds it and clones it otherwise, so
	/// value bindings stay intact for later resolutions.
	pub fn next<T: Any + Send + Sync + Clone>(&mut self) -> DiResult<T> {
		let arc = self.next_arc::<T>()?;
		Ok(Arc::try_unwrap(arc).unwrap_or_else(|arc| (*arc).clone()))
	}

	/// Takes the next argument as a shared `Arc<T>` without cloning the value.
	pub fn next_arc<T: Any + Send + Sync>(&mut self) -> DiResult<Arc<T>> {
		let (key, instance) = self.next_entry()?;
		instance
			.downcast_arc::<T>()
			.map_err(|_| DiError::TypeMismatch {
				key: key.to_string(),
				expected: std::any::type_name::<T>(),
			})
	}

	/// Takes the next argument without inspecting its type.
	pub fn next_instance(&mut self) -> DiResult<Instance> {
		self.next_entry().map(|(_, instance)| instance)
	}

	fn next_entry(&mut self) -> DiResult<(Key, Instance)> {
		let entry = self
			.entries
			.next()
			.ok_or_else(|| DiError::MissingArgument {
				type_name: self.owner,
				index: self.position,
			})?;
		self.position += 1;
		Ok(entry)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::token::Identifier;
	use rstest::rstest;

	#[derive(Clone, Debug, PartialEq)]
	struct Port(u16);

	impl Injectable for Port {
		fn construct(_args: &mut Arguments) -> DiResult<Self> {
			Ok(Port(8080))
		}
	}

	#[rstest]
	fn override_key_takes_precedence() {
		// Arrange
		let token = Identifier::new("PORT");

		// Act
		let param = ParamInfo::of::<u16>().with_override(&token);

		// Assert
		assert_eq!(param.lookup_key(), Some(&Key::from(&token)));
		assert_eq!(param.declared_type(), Some(&Key::of::<u16>()));
	}

	#[rstest]
	fn declared_type_is_the_fallback_key() {
		// Act
		let param = ParamInfo::of::<Port>();

		// Assert
		assert_eq!(param.lookup_key(), Some(&Key::of::<Port>()));
		assert!(param.override_key().is_none());
	}

	#[rstest]
	fn skipped_parameter_has_no_key() {
		// Act
		let param = ParamInfo::skipped();

		// Assert
		assert!(param.lookup_key().is_none());
	}

	#[rstest]
	fn override_hides_the_implicit_class() {
		// Arrange
		let token = Identifier::new("PORT");

		// Act
		let plain = ParamInfo::injectable::<Port>();
		let overridden = ParamInfo::injectable::<Port>().with_override(&token);

		// Assert
		assert!(plain.implicit_class().is_some());
		assert!(overridden.implicit_class().is_none());
	}

	#[rstest]
	fn arguments_are_consumed_in_order() {
		// Arrange
		let mut args = Arguments::new(
			"Pair",
			vec![
				(Key::of::<String>(), Instance::new("first".to_string())),
				(Key::of::<u32>(), Instance::new(2u32)),
			],
		);

		// Act
		let first: String = args.next().unwrap();
		let second: u32 = args.next().unwrap();

		// Assert
		assert_eq!(first, "first");
		assert_eq!(second, 2);
		assert!(args.is_empty());
	}

	#[rstest]
	fn wrong_type_is_a_mismatch() {
		// Arrange
		let mut args = Arguments::new("Pair", vec![(Key::of::<u32>(), Instance::new(2u32))]);

		// Act
		let result = args.next::<String>();

		// Assert
		assert!(matches!(
			result,
			Err(DiError::TypeMismatch { ref key, expected }) if key == "u32" && expected == "alloc::string::String"
		));
	}

	#[rstest]
	fn exhausted_arguments_report_position() {
		// Arrange
		let mut args = Arguments::new("Pair", vec![(Key::of::<u32>(), Instance::new(2u32))]);
		let _ = args.next::<u32>().unwrap();

		// Act
		let result = args.next::<u32>();

		// Assert
		assert!(matches!(
			result,
			Err(DiError::MissingArgument { type_name: "Pair", index: 1 })
		));
	}

	#[rstest]
	fn shared_instance_is_cloned_not_moved() {
		// Arrange
		let shared = Instance::new(Port(443));
		let mut args = Arguments::new("Server", vec![(Key::of::<Port>(), shared.clone())]);

		// Act
		let port: Port = args.next().unwrap();

		// Assert
		assert_eq!(port, Port(443));
		assert!(shared.downcast_arc::<Port>().is_ok());
	}
}
