use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Error, Expr, Fields, Meta, Type, parse_macro_input};

/// Maps each unit variant of an enum onto a field of `tesserae_css_theme::Theme`.
///
/// ```ignore
/// #[derive(IntoThemeField)]
/// #[field(ThemeRoleColors)]
/// pub enum ColorName {
///     #[theme(colors.primary)]
///     Primary,
/// }
/// ```
///
/// generates `ColorName::resolve(&self, theme: &Theme) -> &ThemeRoleColors`.
#[proc_macro_derive(IntoThemeField, attributes(theme, field))]
pub fn into_theme_field_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = input.ident;

    let variants = match input.data {
        Data::Enum(data_enum) => data_enum.variants,
        _ => {
            return Err(Error::new_spanned(
                &name,
                "#[derive(IntoThemeField)] can only be used on enums",
            ));
        }
    };

    let field_type = get_enum_field_type(&name, &input.attrs)?;

    let variant_matches = variants
        .iter()
        .map(|variant| {
            if !matches!(variant.fields, Fields::Unit) {
                return Err(Error::new_spanned(
                    variant,
                    "#[derive(IntoThemeField)] only supports unit variants",
                ));
            }

            let ident = &variant.ident;
            let field_path = get_theme_expr(variant, &variant.attrs)?;

            Ok(quote! {
                #name::#ident => &theme.#field_path,
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        impl #name {
            /// Looks up the theme field this variant stands for.
            pub fn resolve<'a>(&self, theme: &'a tesserae_css_theme::Theme) -> &'a #field_type {
                match self {
                    #(#variant_matches)*
                }
            }
        }
    })
}

fn get_theme_expr(spanned: &impl quote::ToTokens, attrs: &[Attribute]) -> syn::Result<Expr> {
    let theme_attr = attrs
        .iter()
        .find(|attr| attr.path().is_ident("theme"))
        .ok_or_else(|| Error::new_spanned(spanned, "variant is missing #[theme(...)] attribute"))?;

    match &theme_attr.meta {
        Meta::List(list) => syn::parse2(list.tokens.clone()),
        _ => Err(Error::new_spanned(theme_attr, "#[theme(...)] must be a list")),
    }
}

fn get_enum_field_type(spanned: &impl quote::ToTokens, attrs: &[Attribute]) -> syn::Result<Type> {
    let field_attr = attrs
        .iter()
        .find(|attr| attr.path().is_ident("field"))
        .ok_or_else(|| Error::new_spanned(spanned, "enum is missing #[field(...)] attribute"))?;

    match &field_attr.meta {
        Meta::List(meta_list) => syn::parse2::<Type>(meta_list.tokens.clone()),
        _ => Err(Error::new_spanned(
            field_attr,
            "#[field(...)] must be a list, like #[field(ThemeRoleColors)]",
        )),
    }
}
