//! Procedural macros for the aoc-runner library

use proc_macro::TokenStream;
use proc_macro2::{Literal, Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{DeriveInput, Ident, LitInt, LitStr, Token, parse_macro_input};

/// Derive macro registering a puzzle unit with the runner's registry
///
/// # Attributes
///
/// - `year`: Required. The Advent of Code year (e.g., 2023)
/// - `day`: Required. The day number (1-25)
/// - `parts`: Optional. The entry points the unit defines, `[a]`, `[b]` or
///   `[a, b]` (default `[a, b]`). Each listed part needs a matching
///   `EntryPoint<'a'>` / `EntryPoint<'b'>` impl.
/// - `tags`: Optional. Array of string literals for filtering
///
/// # Example
///
/// ```ignore
/// use aoc_runner::{EntryPoint, Puzzle, SolveError};
///
/// #[derive(Puzzle)]
/// #[puzzle(year = 2023, day = 1, parts = [a], tags = ["strings"])]
/// pub struct Solver;
///
/// impl EntryPoint<'a'> for Solver {
///     type Answer = u32;
///     fn solve(input: &str) -> Result<u32, SolveError> { Ok(0) }
/// }
/// ```
///
/// A listed part without an impl fails to compile with
/// `the trait bound `Solver: EntryPoint<'b'>` is not satisfied`.
#[proc_macro_derive(Puzzle, attributes(puzzle))]
pub fn derive_puzzle(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

struct PuzzleArgs {
    year: u16,
    day: u8,
    parts: Vec<char>,
    tags: Vec<String>,
}

fn parse_args(input: &DeriveInput) -> syn::Result<PuzzleArgs> {
    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle"))
        .ok_or_else(|| {
            syn::Error::new(
                Span::call_site(),
                "Puzzle derive macro requires #[puzzle(year = .., day = ..)] attribute",
            )
        })?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut parts: Option<Vec<char>> = None;
    let mut tags: Vec<String> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let lit: LitInt = meta.value()?.parse()?;
            year = Some(lit.base10_parse()?);
        } else if meta.path.is_ident("day") {
            let lit: LitInt = meta.value()?.parse()?;
            let value: u8 = lit.base10_parse()?;
            if !(1..=25).contains(&value) {
                return Err(syn::Error::new(lit.span(), "day must be between 1 and 25"));
            }
            day = Some(value);
        } else if meta.path.is_ident("parts") {
            // parts = [a, b]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            let idents = content.parse_terminated(|input| input.parse::<Ident>(), Token![,])?;
            let mut letters = Vec::new();
            for ident in idents {
                let letter = match ident.to_string().as_str() {
                    "a" => 'a',
                    "b" => 'b',
                    _ => return Err(syn::Error::new(ident.span(), "part must be `a` or `b`")),
                };
                if letters.contains(&letter) {
                    return Err(syn::Error::new(ident.span(), "duplicate part"));
                }
                letters.push(letter);
            }
            parts = Some(letters);
        } else if meta.path.is_ident("tags") {
            // tags = ["grid", "parsing"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            let lits = content.parse_terminated(|input| input.parse::<LitStr>(), Token![,])?;
            tags.extend(lits.iter().map(LitStr::value));
        } else {
            return Err(meta.error("expected `year`, `day`, `parts` or `tags`"));
        }
        Ok(())
    })?;

    Ok(PuzzleArgs {
        year: year.ok_or_else(|| syn::Error::new_spanned(attr, "missing required `year`"))?,
        day: day.ok_or_else(|| syn::Error::new_spanned(attr, "missing required `day`"))?,
        parts: parts.unwrap_or_else(|| vec!['a', 'b']),
        tags,
    })
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let PuzzleArgs {
        year,
        day,
        parts,
        tags,
    } = parse_args(input)?;

    let entry = |letter: char| {
        if parts.contains(&letter) {
            let letter = Literal::character(letter);
            quote! {
                ::core::option::Option::Some(
                    ::aoc_runner::entry_fn::<#name, #letter> as ::aoc_runner::EntryFn
                )
            }
        } else {
            quote! { ::core::option::Option::None }
        }
    };
    let a = entry('a');
    let b = entry('b');

    Ok(quote! {
        ::aoc_runner::inventory::submit! {
            ::aoc_runner::SolverPlugin {
                year: #year,
                day: #day,
                entry_points: ::aoc_runner::EntryPoints { a: #a, b: #b },
                tags: &[#(#tags),*],
            }
        }
    })
}
