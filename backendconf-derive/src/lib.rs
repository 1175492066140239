//! Derive macro implementation for backendconf

use proc_macro::TokenStream;
use quote::{quote, ToTokens};
use syn::{parse_macro_input, Data, DeriveInput, Fields, Type};

mod attrs;

use attrs::FieldAttrs;

/// Extract inner type from Option<T>
fn extract_option_inner_type(ty: &Type) -> &Type {
    if let Type::Path(type_path) = ty {
        if let Some(seg) = type_path.path.segments.last() {
            if let syn::PathArguments::AngleBracketed(args) = &seg.arguments {
                if let Some(syn::GenericArgument::Type(inner)) = args.args.first() {
                    return inner;
                }
            }
        }
    }
    ty
}

fn is_option(ty: &Type) -> bool {
    if let Type::Path(type_path) = ty {
        type_path
            .path
            .segments
            .last()
            .map(|seg| seg.ident == "Option")
            .unwrap_or(false)
    } else {
        false
    }
}

/// `Profile` derive macro
///
/// Implements `backendconf::Profile`: a static descriptor table plus a
/// `bind` method that populates every field from an environment source.
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[conf(prefix = "PREFIX_")]`: Add prefix to all env var names
///
/// **Field-level**:
/// - `#[conf(name = "KEY")]`: Environment variable name
/// - `#[conf(default = "literal")]`: Value used when the variable is unset
/// - `#[conf(required)]`: Fail when the variable is unset
#[proc_macro_derive(Profile, attributes(conf))]
pub fn derive_profile(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let prefix = attrs::struct_prefix(&input.attrs)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Profile only supports structs with named fields",
                ))
            }
        },
        _ => return Err(syn::Error::new_spanned(input, "Profile only supports structs")),
    };

    let mut descriptors = Vec::with_capacity(fields.len());
    let mut initializers = Vec::with_capacity(fields.len());
    let mut errors: Option<syn::Error> = None;

    for (index, field) in fields.iter().enumerate() {
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let field_type = &field.ty;
        let optional = is_option(field_type);

        let attrs = match FieldAttrs::from_field(field).and_then(|attrs| {
            attrs.validate(optional)?;
            Ok(attrs)
        }) {
            Ok(attrs) => attrs,
            Err(err) => {
                match errors.as_mut() {
                    Some(existing) => existing.combine(err),
                    None => errors = Some(err),
                }
                continue;
            }
        };

        let base_name = attrs
            .name
            .unwrap_or_else(|| field_name.to_string().to_uppercase());
        let key = format!("{}{}", prefix, base_name);
        let field_str = field_name.to_string();
        let type_name = field_type.to_token_stream().to_string().replace(' ', "");

        descriptors.push(match (&attrs.default, attrs.required.is_some()) {
            (Some(default), _) => quote! {
                ::backendconf::FieldDescriptor::with_default(#field_str, #key, #default, #type_name)
            },
            (None, true) => quote! {
                ::backendconf::FieldDescriptor::required(#field_str, #key, #type_name)
            },
            (None, false) => quote! {
                ::backendconf::FieldDescriptor::optional(#field_str, #key, #type_name)
            },
        });

        let binder = if optional {
            let inner_type = extract_option_inner_type(field_type);
            quote! { ::backendconf::de::bind_optional::<#inner_type, __L> }
        } else {
            quote! { ::backendconf::de::bind_field::<#field_type, __L> }
        };

        initializers.push(quote! {
            #field_name: #binder(
                __env,
                &<Self as ::backendconf::Profile>::FIELDS[#index],
            )?
        });
    }

    if let Some(errors) = errors {
        return Err(errors);
    }

    let name_str = struct_name.to_string();

    Ok(quote! {
        impl ::backendconf::Profile for #struct_name {
            const NAME: &'static str = #name_str;

            const FIELDS: &'static [::backendconf::FieldDescriptor] = &[
                #(#descriptors),*
            ];

            fn bind<__L: ::backendconf::Lookup + ?Sized>(
                __env: &__L,
            ) -> ::core::result::Result<Self, ::backendconf::ConfError> {
                ::core::result::Result::Ok(Self {
                    #(#initializers),*
                })
            }
        }
    })
}
