//! Bindings and the values they produce

use crate::declaration::{Arguments, Injectable, ParamInfo};
use crate::error::DiResult;
use crate::key::{AsKey, Key, TypeKey};
use crate::token::Identifier;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A resolved, type-erased value.
///
/// Cloning is cheap and shares the underlying allocation.
#[derive(Clone)]
pub struct Instance(Arc<dyn Any + Send + Sync>);

impl Instance {
	pub fn new<T: Any + Send + Sync>(value: T) -> Self {
		Self(Arc::new(value))
	}

	pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
		Self(value)
	}

	pub fn is<T: Any>(&self) -> bool {
		self.0.is::<T>()
	}

	pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
		self.0.downcast_ref::<T>()
	}

	/// Converts into `Arc<T>`, handing the instance back on a type mismatch.
	pub fn downcast_arc<T: Any + Send + Sync>(self) -> Result<Arc<T>, Self> {
		self.0.downcast::<T>().map_err(Self)
	}

	/// Converts into an owned `T`, cloning only when the value is shared.
	pub fn downcast<T: Any + Send + Sync + Clone>(self) -> Result<T, Self> {
		self.downcast_arc::<T>()
			.map(|arc| Arc::try_unwrap(arc).unwrap_or_else(|arc| (*arc).clone()))
	}

	/// Whether both instances point at the same allocation.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

impl fmt::Debug for Instance {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Instance").finish_non_exhaustive()
	}
}

type Constructor = dyn Fn(Arguments) -> DiResult<Instance> + Send + Sync;

/// A constructible type: its declarations plus a way to build it.
///
/// # Examples
///
/// ```
/// use armature_di::{Arguments, Class, DiResult, Injectable};
/// use std::sync::Arc;
///
/// trait Logger: Send + Sync {}
///
/// struct ConsoleLogger;
/// impl Logger for ConsoleLogger {}
///
/// impl Injectable for ConsoleLogger {
///     fn construct(_args: &mut Arguments) -> DiResult<Self> {
///         Ok(ConsoleLogger)
///     }
/// }
///
/// // Built as a ConsoleLogger, handed out as an `Arc<dyn Logger>`.
/// let class = Class::of_with(|logger: ConsoleLogger| Arc::new(logger) as Arc<dyn Logger>);
/// assert!(class.name().ends_with("ConsoleLogger"));
/// ```
#[derive(Clone)]
pub struct Class {
	ty: TypeKey,
	parameters: fn() -> Vec<ParamInfo>,
	construct: Arc<Constructor>,
}

impl Class {
	/// Describes the constructible type `T`.
	pub fn of<T: Injectable>() -> Self {
		Self {
			ty: TypeKey::of::<T>(),
			parameters: T::parameters,
			construct: Arc::new(|mut args: Arguments| T::construct(&mut args).map(Instance::new)),
		}
	}

	/// Describes `T`, but yields `convert(t)` once constructed.
	///
	/// Lets a concrete class stand in for a key whose consumers expect another type,
	/// usually a trait object.
	pub fn of_with<T, U, F>(convert: F) -> Self
	where
		T: Injectable,
		U: Any + Send + Sync,
		F: Fn(T) -> U + Send + Sync + 'static,
	{
		Self {
			ty: TypeKey::of::<T>(),
			parameters: T::parameters,
			construct: Arc::new(move |mut args: Arguments| {
				T::construct(&mut args).map(|value| Instance::new(convert(value)))
			}),
		}
	}

	pub fn type_key(&self) -> TypeKey {
		self.ty
	}

	pub fn name(&self) -> &'static str {
		self.ty.name()
	}

	/// Queries the declared constructor parameters.
	pub fn parameters(&self) -> Vec<ParamInfo> {
		(self.parameters)()
	}

	pub(crate) fn construct(&self, args: Arguments) -> DiResult<Instance> {
		(self.construct)(args)
	}
}

impl fmt::Debug for Class {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Class").field(&self.ty.name()).finish()
	}
}

/// What a binding produces.
#[derive(Debug, Clone)]
pub enum Provider {
	/// Construct a fresh instance of the class on every resolution.
	Class(Class),
	/// Hand out the stored value as-is.
	Value(Instance),
}

/// Discriminant of [`Provider`], for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
	Class,
	Value,
}

/// A key mapped to a class or a value.
///
/// # Examples
///
/// ```
/// use armature_di::{Binding, BindingKind, Identifier, Key};
///
/// let log_file = Identifier::new("LOG_FILE");
/// let binding = Binding::value(&log_file, "log.txt".to_string());
///
/// assert_eq!(binding.key(), &Key::from(&log_file));
/// assert_eq!(binding.kind(), BindingKind::Value);
/// ```
#[derive(Debug, Clone)]
pub struct Binding {
	key: Key,
	provider: Provider,
}

impl Binding {
	/// Class binding: `key` resolves to a fresh instance of `class`.
	pub fn class(key: impl AsKey, class: Class) -> Self {
		Self {
			key: key.as_key(),
			provider: Provider::Class(class),
		}
	}

	/// Value binding: `key` resolves to `value` itself.
	pub fn value<V: Any + Send + Sync>(key: impl AsKey, value: V) -> Self {
		Self::instance(key, Instance::new(value))
	}

	/// Value binding for an already type-erased instance.
	pub fn instance(key: impl AsKey, instance: Instance) -> Self {
		Self {
			key: key.as_key(),
			provider: Provider::Value(instance),
		}
	}

	/// Class binding of `T` under its own type.
	pub fn to_self<T: Injectable>() -> Self {
		Self::class(Key::of::<T>(), Class::of::<T>())
	}

	pub fn key(&self) -> &Key {
		&self.key
	}

	pub fn provider(&self) -> &Provider {
		&self.provider
	}

	pub fn kind(&self) -> BindingKind {
		match self.provider {
			Provider::Class(_) => BindingKind::Class,
			Provider::Value(_) => BindingKind::Value,
		}
	}
}

/// Something the container is asked to build.
#[derive(Debug, Clone)]
pub enum Target {
	/// A constructible type.
	Class(Class),
	/// A bare token, which only has meaning through a binding.
	Token(Identifier),
}

impl Target {
	pub fn key(&self) -> Key {
		match self {
			Self::Class(class) => Key::Type(class.type_key()),
			Self::Token(token) => Key::Token(token.clone()),
		}
	}
}

impl From<Class> for Target {
	fn from(class: Class) -> Self {
		Self::Class(class)
	}
}

impl From<Identifier> for Target {
	fn from(token: Identifier) -> Self {
		Self::Token(token)
	}
}

impl From<&Identifier> for Target {
	fn from(token: &Identifier) -> Self {
		Self::Token(token.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[derive(Clone, Debug, PartialEq)]
	struct Greeting(String);

	impl Injectable for Greeting {
		fn construct(_args: &mut Arguments) -> DiResult<Self> {
			Ok(Greeting("hello".to_string()))
		}
	}

	#[rstest]
	fn value_instance_shares_allocation() {
		// Arrange
		let instance = Instance::new(Greeting("hi".to_string()));
		let copy = instance.clone();

		// Assert
		assert!(instance.ptr_eq(&copy));
		assert_eq!(copy.downcast_ref::<Greeting>(), Some(&Greeting("hi".to_string())));
	}

	#[rstest]
	fn downcast_failure_returns_the_instance() {
		// Arrange
		let instance = Instance::new(7u8);

		// Act
		let result = instance.downcast::<String>();

		// Assert
		let instance = result.unwrap_err();
		assert!(instance.is::<u8>());
	}

	#[rstest]
	fn class_constructs_with_its_declarations() {
		// Arrange
		let class = Class::of::<Greeting>();

		// Act
		let instance = class.construct(Arguments::new(class.name(), Vec::new())).unwrap();

		// Assert
		assert!(class.parameters().is_empty());
		assert_eq!(instance.downcast::<Greeting>().unwrap(), Greeting("hello".to_string()));
	}

	#[rstest]
	fn converted_class_yields_the_converted_type() {
		// Arrange
		let class = Class::of_with(|greeting: Greeting| greeting.0.len());

		// Act
		let instance = class.construct(Arguments::new(class.name(), Vec::new())).unwrap();

		// Assert
		assert_eq!(class.type_key(), TypeKey::of::<Greeting>());
		assert_eq!(instance.downcast::<usize>().unwrap(), 5);
	}

	#[rstest]
	fn self_binding_is_keyed_by_its_type() {
		// Act
		let binding = Binding::to_self::<Greeting>();

		// Assert
		assert_eq!(binding.key(), &Key::of::<Greeting>());
		assert_eq!(binding.kind(), BindingKind::Class);
	}

	#[rstest]
	fn target_key_matches_binding_key() {
		// Arrange
		let token = Identifier::new("TARGET");

		// Assert
		assert_eq!(Target::from(&token).key(), Key::from(&token));
		assert_eq!(Target::from(Class::of::<Greeting>()).key(), Key::of::<Greeting>());
	}
}
