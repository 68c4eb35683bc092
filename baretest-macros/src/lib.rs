//! Procedural macros for the baretest harness.
//!
//! This crate provides the `#[bare_test]` attribute macro for defining test
//! functions. Each marked function is wrapped into the runner's dispatch
//! signature and its registration descriptor is placed into the `.baretest`
//! link section, where `TestRunner::register_linked()` collects it.

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{ItemFn, MetaNameValue, parse_macro_input};

/// Marks a function as a test case.
///
/// # Example
///
/// ```rust,ignore
/// use baretest::{assert_eq, bare_test};
///
/// #[bare_test(suite = "BasicMath")]
/// fn addition() {
///     assert_eq!(2 + 2, 4);
/// }
/// ```
///
/// The suite name defaults to the defining module path when the `suite`
/// argument is omitted.
///
/// The function may optionally return `TestResult` itself. Otherwise the
/// body is wrapped to return `TestResult::Ok` on completion, which is what
/// lets the fatal assertion macros abort the body with an early `return`.
#[proc_macro_attribute]
pub fn bare_test(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);

    // Optional `suite = "Name"` argument.
    let suite_lit = if attr.is_empty() {
        None
    } else {
        let name_value = parse_macro_input!(attr as MetaNameValue);
        if !name_value.path.is_ident("suite") {
            return syn::Error::new_spanned(&name_value.path, "expected `suite = \"...\"`")
                .to_compile_error()
                .into();
        }
        match name_value.value {
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(s),
                ..
            }) => Some(s),
            other => {
                return syn::Error::new_spanned(other, "suite name must be a string literal")
                    .to_compile_error()
                    .into();
            }
        }
    };

    let fn_name = &input.sig.ident;
    let fn_attrs = &input.attrs;
    let fn_stmts = &input.block.stmts;

    // Check if the function already returns TestResult.
    let has_return_type = !matches!(input.sig.output, syn::ReturnType::Default);

    // Generate a unique identifier for the test descriptor.
    let descriptor_name = format_ident!(
        "__BARETEST_DESC_{}",
        fn_name.to_string().to_uppercase()
    );

    // The test function itself becomes the dispatch wrapper - the body is
    // embedded directly so the assertion macros can use `return` correctly.
    let test_fn = if has_return_type {
        quote! {
            #(#fn_attrs)*
            fn #fn_name() -> baretest::TestResult {
                #(#fn_stmts)*
            }
        }
    } else {
        quote! {
            #(#fn_attrs)*
            fn #fn_name() -> baretest::TestResult {
                #(#fn_stmts)*
                baretest::TestResult::Ok
            }
        }
    };

    let fn_name_str = fn_name.to_string();
    let suite_expr = match suite_lit {
        Some(lit) => quote!(#lit),
        None => quote!(module_path!()),
    };

    let output = quote! {
        #test_fn

        #[used]
        #[unsafe(link_section = ".baretest")]
        #[allow(non_upper_case_globals)]
        static #descriptor_name: baretest::TestDescriptor = baretest::TestDescriptor::new(
            #suite_expr,
            #fn_name_str,
            #fn_name,
        );
    };

    output.into()
}
