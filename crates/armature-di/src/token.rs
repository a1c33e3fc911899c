//! Identity-keyed tokens
//!
//! An [`Identifier`] names a dependency that has no type of its own to serve as a key,
//! such as a configuration string or a trait object slot. Identity, not the label,
//! is what matters: two tokens created with the same label are different keys.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[derive(Debug)]
struct TokenInner {
	label: String,
}

/// Opaque binding key compared by identity.
///
/// Cloning an `Identifier` yields another handle to the same token, so clones compare
/// equal to their source.
///
/// # Examples
///
/// ```
/// use armature_di::Identifier;
///
/// let a = Identifier::new("LOG_FILE");
/// let b = Identifier::new("LOG_FILE");
///
/// assert_ne!(a, b);
/// assert_eq!(a, a.clone());
/// assert_eq!(a.label(), "LOG_FILE");
/// ```
#[derive(Clone)]
pub struct Identifier {
	inner: Arc<TokenInner>,
}

impl Identifier {
	/// Creates a fresh token, distinct from every other token.
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			inner: Arc::new(TokenInner {
				label: label.into(),
			}),
		}
	}

	/// Diagnostic label given at creation.
	pub fn label(&self) -> &str {
		&self.inner.label
	}

	fn addr(&self) -> usize {
		Arc::as_ptr(&self.inner) as usize
	}
}

impl PartialEq for Identifier {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}
}

impl Eq for Identifier {}

impl Hash for Identifier {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.addr().hash(state);
	}
}

impl fmt::Debug for Identifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Identifier").field(&self.inner.label).finish()
	}
}

impl fmt::Display for Identifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Identifier({})", self.inner.label)
	}
}
