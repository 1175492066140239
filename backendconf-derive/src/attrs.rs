//! Attribute parsing for `#[conf(...)]` annotations.
//!
//! Extracts the binding metadata of each struct field during macro expansion
//! and rejects combinations that have no meaningful runtime behavior.

use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Attribute, Expr, ExprLit, Field, Lit, LitStr};

/// Parsed `#[conf(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Environment variable name override.
    ///
    /// If `None`, the field name is converted to upper case.
    pub name: Option<String>,

    /// Literal used when the variable is unset.
    pub default: Option<LitStr>,

    /// Span of the `required` flag, if present.
    pub required: Option<Span>,
}

impl FieldAttrs {
    /// Extract and parse `#[conf(...)]` attributes from a struct field.
    ///
    /// Attributes other than `conf` are left for other macros.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("conf") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                // name = "..."
                if meta.path.is_ident("name") {
                    let name: LitStr = meta.value()?.parse()?;
                    attrs.name = Some(name.value());
                    return Ok(());
                }

                // default = "..."
                if meta.path.is_ident("default") {
                    let expr: Expr = meta.value()?.parse()?;
                    match expr {
                        Expr::Lit(ExprLit {
                            lit: Lit::Str(lit), ..
                        }) => attrs.default = Some(lit),
                        other => {
                            return Err(syn::Error::new_spanned(
                                other,
                                "default must be a string literal, e.g. `default = \"60s\"`",
                            ))
                        }
                    }
                    return Ok(());
                }

                // required
                if meta.path.is_ident("required") {
                    attrs.required = Some(meta.path.span());
                    return Ok(());
                }

                Err(meta.error("unsupported conf attribute"))
            })?;
        }

        Ok(attrs)
    }

    /// Reject attribute combinations that cannot be honored.
    pub fn validate(&self, is_option: bool) -> syn::Result<()> {
        if let (Some(_), Some(default)) = (self.required, &self.default) {
            return Err(syn::Error::new(
                default.span(),
                "a required field cannot declare a default",
            ));
        }

        if is_option {
            if let Some(default) = &self.default {
                return Err(syn::Error::new(
                    default.span(),
                    "Option<T> fields cannot have a default (they bind to None when unset)",
                ));
            }
            if let Some(span) = self.required {
                return Err(syn::Error::new(span, "Option<T> fields cannot be required"));
            }
        }

        Ok(())
    }
}

/// Parse the struct-level `#[conf(prefix = "...")]` attribute.
pub fn struct_prefix(attrs: &[Attribute]) -> syn::Result<String> {
    let mut prefix = String::new();

    for attr in attrs {
        if !attr.path().is_ident("conf") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("prefix") {
                let lit: LitStr = meta.value()?.parse()?;
                prefix = lit.value();
                return Ok(());
            }

            Err(meta.error("unsupported struct-level conf attribute"))
        })?;
    }

    Ok(prefix)
}
