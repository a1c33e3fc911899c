//! Implementation of the `#[injectable]` macro

use crate::crate_paths::get_armature_di_crate;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Expr, Fields, MetaNameValue, Result, Type};

/// How a single field is supplied
enum FieldSource {
	/// Looked up by the field type
	Declared,
	/// Looked up by the field type, declared as constructible
	Constructible,
	/// Looked up by an explicit key expression
	Override(Expr),
	/// Not resolved; initialized with `Default::default()`
	Default,
	/// Not resolved; initialized with the given expression
	DefaultExpr(Expr),
}

struct FieldInfo {
	name: syn::Ident,
	ty: Type,
	source: FieldSource,
}

fn is_inject_attr(attr: &Attribute) -> bool {
	attr.path().is_ident("inject")
}

fn is_no_inject_attr(attr: &Attribute) -> bool {
	attr.path().is_ident("no_inject")
}

/// Parse `#[inject]`, `#[inject(constructible)]` or `#[inject(KEY)]`
fn parse_inject(attr: &Attribute) -> Result<FieldSource> {
	if matches!(attr.meta, syn::Meta::Path(_)) {
		return Ok(FieldSource::Declared);
	}

	let expr: Expr = attr.parse_args()?;
	if let Expr::Path(path) = &expr
		&& path.qself.is_none()
		&& path.path.is_ident("constructible")
	{
		return Ok(FieldSource::Constructible);
	}
	Ok(FieldSource::Override(expr))
}

/// Parse `#[no_inject]` or `#[no_inject(default = EXPR)]`
fn parse_no_inject(attr: &Attribute) -> Result<FieldSource> {
	if matches!(attr.meta, syn::Meta::Path(_)) {
		return Ok(FieldSource::Default);
	}

	let pair: MetaNameValue = attr.parse_args()?;
	if !pair.path.is_ident("default") {
		return Err(syn::Error::new_spanned(
			&pair.path,
			"unknown argument. Expected `default = <expr>`",
		));
	}
	Ok(FieldSource::DefaultExpr(pair.value))
}

fn field_source(field: &syn::Field) -> Result<FieldSource> {
	let inject: Vec<&Attribute> = field.attrs.iter().filter(|a| is_inject_attr(a)).collect();
	let no_inject: Vec<&Attribute> = field
		.attrs
		.iter()
		.filter(|a| is_no_inject_attr(a))
		.collect();

	match (inject.as_slice(), no_inject.as_slice()) {
		([attr], []) => parse_inject(attr),
		([], [attr]) => parse_no_inject(attr),
		([], []) => Err(syn::Error::new_spanned(
			field,
			"Field must have either #[inject] or #[no_inject] attribute. Use #[inject] for dependency injection, or #[no_inject] for default initialization.",
		)),
		([_], [_]) => Err(syn::Error::new_spanned(
			field,
			"Field cannot have both #[inject] and #[no_inject] attributes",
		)),
		_ => Err(syn::Error::new_spanned(
			field,
			"Field can carry only one #[inject] or #[no_inject] attribute",
		)),
	}
}

/// Implementation of the `#[injectable]` attribute macro
///
/// Keeps the struct as written (minus the field attributes) and adds an
/// `Injectable` implementation whose declarations follow field order.
pub(crate) fn injectable_impl(args: TokenStream, mut input: DeriveInput) -> Result<TokenStream> {
	if !args.is_empty() {
		return Err(syn::Error::new_spanned(
			args,
			"#[injectable] does not take arguments",
		));
	}

	let struct_name = input.ident.clone();

	let fields = match &mut input.data {
		Data::Struct(data_struct) => match &mut data_struct.fields {
			Fields::Named(fields) => Some(&mut fields.named),
			Fields::Unit => None,
			Fields::Unnamed(_) => {
				return Err(syn::Error::new_spanned(
					&struct_name,
					"#[injectable] does not support tuple structs",
				));
			}
		},
		_ => {
			return Err(syn::Error::new_spanned(
				&struct_name,
				"#[injectable] can only be applied to structs",
			));
		}
	};

	let mut field_infos = Vec::new();
	if let Some(fields) = fields {
		for field in fields.iter_mut() {
			let source = field_source(field)?;
			let Some(name) = field.ident.clone() else {
				return Err(syn::Error::new_spanned(field, "expected a named field"));
			};
			field
				.attrs
				.retain(|attr| !is_inject_attr(attr) && !is_no_inject_attr(attr));

			field_infos.push(FieldInfo {
				name,
				ty: field.ty.clone(),
				source,
			});
		}
	}

	let di_crate = get_armature_di_crate();

	let param_infos = field_infos.iter().map(|info| {
		let ty = &info.ty;
		match &info.source {
			FieldSource::Declared => quote! { #di_crate::ParamInfo::of::<#ty>() },
			FieldSource::Constructible => quote! { #di_crate::ParamInfo::injectable::<#ty>() },
			FieldSource::Override(key) => {
				quote! { #di_crate::ParamInfo::of::<#ty>().with_override(&#key) }
			}
			FieldSource::Default | FieldSource::DefaultExpr(_) => {
				quote! { #di_crate::ParamInfo::skipped() }
			}
		}
	});

	let extract_stmts = field_infos.iter().filter_map(|info| {
		let name = &info.name;
		let ty = &info.ty;
		match info.source {
			FieldSource::Declared | FieldSource::Constructible | FieldSource::Override(_) => {
				Some(quote! {
					let #name = __di_args.next::<#ty>().map_err(|e| {
						#di_crate::__private::tracing::debug!(
							field = stringify!(#name),
							target_type = stringify!(#struct_name),
							error = %e,
							"dependency injection argument extraction failed"
						);
						e
					})?;
				})
			}
			FieldSource::Default | FieldSource::DefaultExpr(_) => None,
		}
	});

	let field_inits = field_infos.iter().map(|info| {
		let name = &info.name;
		match &info.source {
			FieldSource::Default => quote! { #name: ::std::default::Default::default() },
			FieldSource::DefaultExpr(expr) => quote! { #name: #expr },
			_ => quote! { #name },
		}
	});

	let args_ident = if field_infos
		.iter()
		.any(|info| !matches!(info.source, FieldSource::Default | FieldSource::DefaultExpr(_)))
	{
		quote! { __di_args }
	} else {
		quote! { _ }
	};

	let struct_init = if field_infos.is_empty() {
		quote! { Self }
	} else {
		quote! { Self { #(#field_inits),* } }
	};

	let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

	Ok(quote! {
		#input

		impl #impl_generics #di_crate::Injectable for #struct_name #ty_generics #where_clause {
			fn parameters() -> ::std::vec::Vec<#di_crate::ParamInfo> {
				::std::vec![#(#param_infos),*]
			}

			fn construct(#args_ident: &mut #di_crate::Arguments) -> #di_crate::DiResult<Self> {
				#(#extract_stmts)*

				::std::result::Result::Ok(#struct_init)
			}
		}
	})
}
