//! Procedural macros for the stepunit framework
//!
//! This crate provides the `#[case]` and `#[task]` attribute macros that shape a
//! function into the `fn(&mut ResultRecord)` signature the sequencer schedules.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{FnArg, ItemFn, ReturnType, parse_macro_input, parse_quote};

/// Marks a function as a test case.
///
/// # Example
///
/// ```rust,ignore
/// use stepunit::{assert_ieq, case};
///
/// #[case]
/// fn case_a() {
///     assert_ieq!(result, -1, -1);
/// }
/// ```
///
/// A function declared without parameters receives an injected
/// `result: &mut stepunit::ResultRecord` parameter, so the assertion macros can
/// refer to `result` directly. A function that already takes exactly one
/// parameter is left as written and must accept `&mut ResultRecord`.
#[proc_macro_attribute]
pub fn case(attr: TokenStream, item: TokenStream) -> TokenStream {
    expand(attr, item, "case")
}

/// Marks a function as a driver task.
///
/// Driver tasks share the test case signature; the attribute only differs in
/// the diagnostics it produces.
#[proc_macro_attribute]
pub fn task(attr: TokenStream, item: TokenStream) -> TokenStream {
    expand(attr, item, "task")
}

fn expand(attr: TokenStream, item: TokenStream, kind: &str) -> TokenStream {
    if !attr.is_empty() {
        let attr = proc_macro2::TokenStream::from(attr);
        return syn::Error::new_spanned(attr, format!("#[{kind}] takes no arguments"))
            .to_compile_error()
            .into();
    }

    let mut input = parse_macro_input!(item as ItemFn);

    match shape(&mut input, kind) {
        Ok(()) => quote!(#input).into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn shape(input: &mut ItemFn, kind: &str) -> syn::Result<()> {
    let sig = &mut input.sig;

    if let Some(asyncness) = &sig.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            format!("a {kind} cannot be async, it runs to completion within one step"),
        ));
    }
    if !sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &sig.generics,
            format!("a {kind} cannot be generic"),
        ));
    }
    if let ReturnType::Type(_, ty) = &sig.output {
        return Err(syn::Error::new_spanned(
            ty,
            format!("a {kind} returns nothing, failures are recorded in the result record"),
        ));
    }

    match sig.inputs.len() {
        0 => {
            // Call-site span so the body can refer to `result`.
            let ident = syn::Ident::new("result", Span::call_site());
            let arg: FnArg = parse_quote!(#ident: &mut ::stepunit::ResultRecord);
            sig.inputs.push(arg);
            Ok(())
        }
        1 => match sig.inputs.first() {
            Some(FnArg::Typed(_)) => Ok(()),
            Some(receiver) => Err(syn::Error::new_spanned(
                receiver,
                format!("a {kind} cannot take `self`"),
            )),
            None => Ok(()),
        },
        _ => Err(syn::Error::new_spanned(
            &sig.inputs,
            format!("a {kind} takes at most one `&mut ResultRecord` parameter"),
        )),
    }
}
