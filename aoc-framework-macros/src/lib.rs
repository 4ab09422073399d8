//! Procedural macros for the `aoc-framework` crate.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Error, Expr, Ident, Item, Result, Token, Type, parse_macro_input};

/// The properties accepted by [`macro@solution_runner`].
struct RunnerArgs {
    name: Expr,
    parsed: Option<Type>,
    part_one: Type,
    part_two: Option<Type>,
}

/// A single `key = value` property; the value is parsed according to the key.
enum RunnerProperty {
    Name(Expr),
    Parsed(Type),
    PartOne(Type),
    PartTwo(Type),
}

impl Parse for RunnerProperty {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        match key.to_string().as_str() {
            "name" => Ok(Self::Name(input.parse()?)),
            "parsed" => Ok(Self::Parsed(input.parse()?)),
            "part_one" => Ok(Self::PartOne(input.parse()?)),
            "part_two" => Ok(Self::PartTwo(input.parse()?)),
            other => Err(Error::new(
                key.span(),
                format!("unsupported solution runner property: '{other}'"),
            )),
        }
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, key: &str) -> Result<()> {
    if slot.is_some() {
        return Err(Error::new(
            Span::call_site(),
            format!("duplicate '{key}' property"),
        ));
    }
    *slot = Some(value);
    Ok(())
}

impl Parse for RunnerArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut name = None;
        let mut parsed = None;
        let mut part_one = None;
        let mut part_two = None;

        for property in Punctuated::<RunnerProperty, Token![,]>::parse_terminated(input)? {
            match property {
                RunnerProperty::Name(expr) => set_once(&mut name, expr, "name")?,
                RunnerProperty::Parsed(ty) => set_once(&mut parsed, ty, "parsed")?,
                RunnerProperty::PartOne(ty) => set_once(&mut part_one, ty, "part_one")?,
                RunnerProperty::PartTwo(ty) => set_once(&mut part_two, ty, "part_two")?,
            }
        }

        let missing = |key: &str| {
            Error::new(
                Span::call_site(),
                format!("missing required property: '{key}'"),
            )
        };
        Ok(Self {
            name: name.ok_or_else(|| missing("name"))?,
            parsed,
            part_one: part_one.ok_or_else(|| missing("part_one"))?,
            part_two,
        })
    }
}

impl RunnerArgs {
    /// The body of `SolutionRunner::run`, driving an `aoc_framework::runner::Run`.
    fn run_body(&self) -> TokenStream2 {
        let Self {
            name,
            parsed,
            part_one,
            part_two,
        } = self;

        let data = match parsed {
            Some(parsed) => quote! {
                let parsed = run.parse::<#parsed>(input)?;
                let data = &parsed;
            },
            None => quote! { let data: &str = input; },
        };
        let second_part = part_two.as_ref().map(|part_two| {
            quote! { run.part::<::aoc_framework::PartTwo, #part_two>(data)?; }
        });

        quote! {
            let mut run = ::aoc_framework::runner::Run::start(#name, handler, timed);
            #data
            run.part::<::aoc_framework::PartOne, #part_one>(data)?;
            #second_part
            Ok(())
        }
    }
}

/// Implements `aoc_framework::runner::SolutionRunner` for the annotated struct or impl block.
///
/// # Properties
///
/// - `name` (required): expression evaluating to `&str`, shown when the solution starts.
/// - `part_one` (required): type implementing `Solution<PartOne>`.
/// - `part_two` (optional): type implementing `Solution<PartTwo>`.
/// - `parsed` (optional): type implementing `ParseData`; when given, the solutions receive it
///   instead of the raw `str`.
///
/// ```ignore
/// #[solution_runner(name = "Day 3", parsed = Grid, part_one = Day03, part_two = Day03)]
/// impl super::AdventOfCode2023<3> {}
/// ```
///
/// A compile error is produced for missing or repeated properties, unknown keys, or when applied
/// to anything other than a struct or impl block.
#[proc_macro_attribute]
pub fn solution_runner(args: TokenStream, input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(args as RunnerArgs);
    let item = parse_macro_input!(input as Item);

    let self_ty: TokenStream2 = match &item {
        Item::Struct(item_struct) => {
            let ident = &item_struct.ident;
            quote! { #ident }
        }
        Item::Impl(item_impl) => {
            let self_ty = &item_impl.self_ty;
            quote! { #self_ty }
        }
        _ => {
            return Error::new(
                Span::call_site(),
                "the #[solution_runner] macro can only be applied to a struct or an impl block",
            )
            .to_compile_error()
            .into();
        }
    };
    let body = args.run_body();

    TokenStream::from(quote! {
        #item

        impl ::aoc_framework::runner::SolutionRunner for #self_ty {
            fn run(
                input: &str,
                handler: &mut dyn ::aoc_framework::runner::OutputHandler,
                timed: bool,
            ) -> ::aoc_framework::DynamicResult<()> {
                #body
            }
        }
    })
}
