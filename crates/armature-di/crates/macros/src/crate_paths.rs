//! Resolution of the runtime crate path used in generated code

use proc_macro2::TokenStream;
use quote::quote;

/// Path to `armature_di`, reached either directly or through the `armature` facade.
pub(crate) fn get_armature_di_crate() -> TokenStream {
	use proc_macro_crate::{FoundCrate, crate_name};

	match crate_name("armature") {
		Ok(FoundCrate::Itself) => return quote!(::armature::di),
		Ok(FoundCrate::Name(name)) => {
			let ident = syn::Ident::new(&name, proc_macro2::Span::call_site());
			return quote!(::#ident::di);
		}
		Err(_) => {}
	}

	match crate_name("armature-di") {
		Ok(FoundCrate::Name(name)) => {
			let ident = syn::Ident::new(&name, proc_macro2::Span::call_site());
			quote!(::#ident)
		}
		// Inside armature-di itself, or when the crate cannot be located at all.
		Ok(FoundCrate::Itself) | Err(_) => quote!(::armature_di),
	}
}
