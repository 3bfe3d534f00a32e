use proc_macro::TokenStream;
use quote::quote;
use syn::{
    FnArg, Ident, ItemFn, LitStr, ReturnType, Token, Type,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// Turn a plain function into a log module.
///
/// ```rust,ignore
/// #[logdispatch::log_module(key = "net")]
/// fn network_log(value: &Value) -> bool {
///     println!("net: {value}");
///     true
/// }
///
/// registry.register(network_log);
/// ```
///
/// Generates a unit struct (named after the function, or `name = "..."`)
/// implementing `LogModule<V>` where `&V` is the argument type, plus a
/// `KEY` associated constant. Other attributes on the function move to the
/// struct. The function cannot be generic, and `key`/`name` may each appear
/// once.
#[proc_macro_attribute]
pub fn log_module(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as ModuleArgs);
    let input = parse_macro_input!(item as ItemFn);

    match expand_log_module(&args, &input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_log_module(args: &ModuleArgs, input: &ItemFn) -> syn::Result<proc_macro2::TokenStream> {
    let fn_name = &input.sig.ident;
    let fn_vis = &input.vis;
    let fn_block = &input.block;
    let fn_attrs = &input.attrs;

    let generics = &input.sig.generics;
    if !generics.params.is_empty() || generics.where_clause.is_some() {
        return Err(syn::Error::new_spanned(
            generics,
            "log module functions cannot be generic; the payload type must be concrete",
        ));
    }

    if let Some(asyncness) = &input.sig.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            "log modules are synchronous; remove `async`",
        ));
    }

    let key = match &args.key {
        Some(key) => key,
        None => {
            return Err(syn::Error::new_spanned(
                &input.sig.ident,
                "missing module key: #[log_module(key = \"...\")]",
            ));
        }
    };

    let inputs = &input.sig.inputs;
    if inputs.len() != 1 {
        return Err(syn::Error::new_spanned(
            inputs,
            "log module function must take exactly one argument: fn(value: &Value) -> bool",
        ));
    }
    let (value_pat, value_type) = match inputs.first() {
        Some(FnArg::Typed(pat_type)) => match &*pat_type.ty {
            Type::Reference(type_ref) if type_ref.mutability.is_none() => {
                (&pat_type.pat, &type_ref.elem)
            }
            _ => {
                return Err(syn::Error::new_spanned(
                    &pat_type.ty,
                    "log module argument must be a shared reference (&Value)",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                inputs,
                "log module function cannot take `self`",
            ));
        }
    };

    if !returns_bool(&input.sig.output) {
        return Err(syn::Error::new_spanned(
            &input.sig.output,
            "log module function must return `bool` (true = handled)",
        ));
    }

    let struct_name = match &args.name {
        Some(custom) => Ident::new(&custom.value(), custom.span()),
        None => fn_name.clone(),
    };

    Ok(quote! {
        #(#fn_attrs)*
        #[allow(non_camel_case_types)]
        #[derive(Clone, Copy, Debug, Default)]
        #[doc = concat!("Log module generated by `#[log_module]` on `", stringify!(#fn_name), "`")]
        #fn_vis struct #struct_name;

        impl #struct_name {
            /// The key this module claims.
            pub const KEY: &'static str = #key;
        }

        impl ::logdispatch::LogModule<#value_type> for #struct_name {
            fn key(&self) -> &str {
                #key
            }

            fn process(&self, #value_pat: &#value_type) -> bool #fn_block
        }
    })
}

fn returns_bool(output: &ReturnType) -> bool {
    match output {
        ReturnType::Type(_, ty) => match &**ty {
            Type::Path(path) => path.qself.is_none() && path.path.is_ident("bool"),
            _ => false,
        },
        ReturnType::Default => false,
    }
}

struct ModuleArgs {
    key: Option<LitStr>,
    name: Option<LitStr>,
}

impl Parse for ModuleArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut key = None;
        let mut name = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            let slot = match ident.to_string().as_str() {
                "key" => &mut key,
                "name" => &mut name,
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            };
            if slot.is_some() {
                return Err(syn::Error::new(
                    ident.span(),
                    format!("duplicate attribute: {}", ident),
                ));
            }
            *slot = Some(input.parse::<LitStr>()?);

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(ModuleArgs { key, name })
    }
}
