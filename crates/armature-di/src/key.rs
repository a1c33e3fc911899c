//! Binding keys

use crate::token::Identifier;
use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

/// A Rust type used as a binding key.
///
/// Equality and hashing only look at the `TypeId`; the name is kept for messages.
#[derive(Clone, Copy)]
pub struct TypeKey {
	id: TypeId,
	name: &'static str,
}

impl TypeKey {
	/// Key for the type `T`.
	pub fn of<T: ?Sized + Any>() -> Self {
		Self {
			id: TypeId::of::<T>(),
			name: std::any::type_name::<T>(),
		}
	}

	pub fn id(&self) -> TypeId {
		self.id
	}

	pub fn name(&self) -> &'static str {
		self.name
	}
}

impl PartialEq for TypeKey {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl fmt::Debug for TypeKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("TypeKey").field(&self.name).finish()
	}
}

/// The name under which a binding is registered and looked up.
///
/// # Examples
///
/// ```
/// use armature_di::{Identifier, Key};
///
/// let token = Identifier::new("API_URL");
///
/// assert_eq!(Key::from(&token), Key::from(token.clone()));
/// assert_eq!(Key::of::<String>(), Key::of::<String>());
/// assert_ne!(Key::of::<String>(), Key::of::<u32>());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Key {
	/// An identity-keyed token.
	Token(Identifier),
	/// A Rust type.
	Type(TypeKey),
}

impl Key {
	/// Type key for `T`.
	pub fn of<T: ?Sized + Any>() -> Self {
		Self::Type(TypeKey::of::<T>())
	}

	pub fn is_token(&self) -> bool {
		matches!(self, Self::Token(_))
	}
}

impl fmt::Debug for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Token(token) => fmt::Debug::fmt(token, f),
			Self::Type(ty) => fmt::Debug::fmt(ty, f),
		}
	}
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Token(token) => fmt::Display::fmt(token, f),
			Self::Type(ty) => f.write_str(ty.name),
		}
	}
}

impl From<Identifier> for Key {
	fn from(token: Identifier) -> Self {
		Self::Token(token)
	}
}

impl From<&Identifier> for Key {
	fn from(token: &Identifier) -> Self {
		Self::Token(token.clone())
	}
}

impl From<TypeKey> for Key {
	fn from(ty: TypeKey) -> Self {
		Self::Type(ty)
	}
}

/// Anything that can name a binding.
///
/// Used by `#[inject(KEY)]` so that the key expression may be a token, a key, or a
/// lazily initialized static holding either.
pub trait AsKey {
	fn as_key(&self) -> Key;
}

impl AsKey for Key {
	fn as_key(&self) -> Key {
		self.clone()
	}
}

impl AsKey for Identifier {
	fn as_key(&self) -> Key {
		Key::Token(self.clone())
	}
}

impl AsKey for TypeKey {
	fn as_key(&self) -> Key {
		Key::Type(*self)
	}
}

impl<T: AsKey + ?Sized> AsKey for &T {
	fn as_key(&self) -> Key {
		(**self).as_key()
	}
}

impl<T: AsKey, F: FnOnce() -> T> AsKey for LazyLock<T, F> {
	fn as_key(&self) -> Key {
		(**self).as_key()
	}
}
