use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr, Path};

struct CollectionAttrs {
    key: String,
    seed: Option<Path>,
}

pub fn derive_collection(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let attrs = match extract_collection_attrs(&input) {
        Ok(attrs) => attrs,
        Err(err) => return err.to_compile_error().into(),
    };

    let id_field = match extract_id_field(&input) {
        Ok(field) => field,
        Err(err) => return err.to_compile_error().into(),
    };

    let key = attrs.key;
    let seed = attrs.seed.map(|path| {
        quote! {
            fn seed() -> ::std::vec::Vec<Self> {
                #path()
            }
        }
    });

    let expanded = quote! {
        impl ::vessel_registry::Collection for #name {
            const KEY: &'static str = #key;

            fn id(&self) -> &str {
                &self.#id_field
            }

            #seed
        }
    };

    TokenStream::from(expanded)
}

fn extract_collection_attrs(input: &DeriveInput) -> syn::Result<CollectionAttrs> {
    let mut key = None;
    let mut seed = None;

    for attr in &input.attrs {
        if !attr.path().is_ident("collection") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("key") {
                let value: LitStr = meta.value()?.parse()?;
                key = Some(value.value());
                Ok(())
            } else if meta.path.is_ident("seed") {
                let value: Path = meta.value()?.parse()?;
                seed = Some(value);
                Ok(())
            } else {
                Err(meta.error("expected `key = \"...\"` or `seed = path`"))
            }
        })?;
    }

    // Default: snake_case struct name + "s"
    let key = key.unwrap_or_else(|| format!("{}s", to_snake_case(&input.ident.to_string())));

    Ok(CollectionAttrs { key, seed })
}

fn extract_id_field(input: &DeriveInput) -> syn::Result<syn::Ident> {
    let fields = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "Collection derive requires a struct with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Collection derive only supports structs",
            ))
        }
    };

    for field in fields {
        for attr in &field.attrs {
            if !attr.path().is_ident("collection") {
                continue;
            }
            let mut is_id = false;
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("id") {
                    is_id = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `id`"))
                }
            })?;
            if is_id {
                if let Some(ident) = &field.ident {
                    return Ok(ident.clone());
                }
            }
        }
    }

    // Default: look for a field named "id"
    fields
        .iter()
        .filter_map(|field| field.ident.as_ref())
        .find(|ident| *ident == "id")
        .cloned()
        .ok_or_else(|| {
            syn::Error::new_spanned(
                &input.ident,
                "Collection derive: no field marked with #[collection(id)] and no field named `id`",
            )
        })
}

fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}
