use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::{parse_macro_input, Ident, Token};

/// Binary connectives the macro understands, loosest first
#[derive(Clone, Copy)]
enum BinaryOp {
    Or,
    And,
    Xor,
}

impl BinaryOp {
    /// Precedence tiers for `climb`; one past the end is the unary tier
    const LEVELS: [BinaryOp; 3] = [BinaryOp::Or, BinaryOp::And, BinaryOp::Xor];

    fn peek(self, input: ParseStream) -> bool {
        match self {
            BinaryOp::Or => input.peek(Token![+]) || input.peek(Token![|]),
            BinaryOp::And => input.peek(Token![*]) || input.peek(Token![&]),
            BinaryOp::Xor => input.peek(Token![^]),
        }
    }

    fn eat(self, input: ParseStream) -> Result<()> {
        match self {
            BinaryOp::Or => {
                if input.peek(Token![+]) {
                    input.parse::<Token![+]>()?;
                } else {
                    input.parse::<Token![|]>()?;
                }
            }
            BinaryOp::And => {
                if input.peek(Token![*]) {
                    input.parse::<Token![*]>()?;
                } else {
                    input.parse::<Token![&]>()?;
                }
            }
            BinaryOp::Xor => {
                input.parse::<Token![^]>()?;
            }
        }
        Ok(())
    }

    /// The combinator method this connective lowers to
    fn method(self) -> proc_macro2::TokenStream {
        match self {
            BinaryOp::Or => quote! { or },
            BinaryOp::And => quote! { and },
            BinaryOp::Xor => quote! { xor },
        }
    }
}

/// Parsed form of the macro input
enum Ast {
    /// An in-scope `Node` binding, used by reference
    Binding(Ident),
    /// A quoted name, turned into a fresh variable node
    Name(syn::LitStr),
    /// `0` or `1`
    Constant(bool),
    Negated(Box<Ast>),
    Binary(BinaryOp, Box<Ast>, Box<Ast>),
}

impl Ast {
    /// Emit the combinator calls for this subtree
    ///
    /// Operands are always borrowed: the `Node` combinators take `&self` and
    /// clone what they keep, so bindings named in the macro stay usable
    /// afterwards.
    fn lower(&self) -> proc_macro2::TokenStream {
        match self {
            Ast::Binding(ident) => quote! { #ident },
            Ast::Name(lit) => quote! { Node::variable(#lit) },
            Ast::Constant(value) => quote! { Node::constant(#value) },
            Ast::Negated(inner) => {
                let inner = inner.lower();
                quote! { (&(#inner)).not() }
            }
            Ast::Binary(op, lhs, rhs) => {
                let method = op.method();
                let lhs = lhs.lower();
                let rhs = rhs.lower();
                quote! { (&(#lhs)).#method(&(#rhs)) }
            }
        }
    }
}

struct ExprInput {
    ast: Ast,
}

impl Parse for ExprInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let ast = climb(input, 0)?;
        Ok(ExprInput { ast })
    }
}

/// Precedence climbing over `BinaryOp::LEVELS`
///
/// Each tier parses the tighter tier as its operands and folds left, so
/// repeated connectives associate left.
fn climb(input: ParseStream, level: usize) -> Result<Ast> {
    let op = match BinaryOp::LEVELS.get(level) {
        Some(&op) => op,
        None => return parse_unary(input),
    };

    let mut lhs = climb(input, level + 1)?;
    while op.peek(input) {
        op.eat(input)?;
        let rhs = climb(input, level + 1)?;
        lhs = Ast::Binary(op, Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

/// `!` and `~` both negate; negation stacks and binds tightest
fn parse_unary(input: ParseStream) -> Result<Ast> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
    } else if input.peek(Token![~]) {
        input.parse::<Token![~]>()?;
    } else {
        return parse_atom(input);
    }
    let inner = parse_unary(input)?;
    Ok(Ast::Negated(Box::new(inner)))
}

/// Atoms: parenthesized groups, quoted names, 0/1 constants, identifiers
fn parse_atom(input: ParseStream) -> Result<Ast> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        return climb(&content, 0);
    }
    if input.peek(syn::LitStr) {
        return Ok(Ast::Name(input.parse()?));
    }
    if input.peek(syn::LitInt) {
        let lit: syn::LitInt = input.parse()?;
        return match lit.base10_parse::<u8>()? {
            0 => Ok(Ast::Constant(false)),
            1 => Ok(Ast::Constant(true)),
            _ => Err(syn::Error::new(lit.span(), "boolean constants are written 0 or 1")),
        };
    }
    let ident: Ident = input.parse()?;
    Ok(Ast::Binding(ident))
}

/// The `expr!` procedural macro for boolean expressions
///
/// Provides compact syntax for building expression nodes from identifiers in
/// scope, string literals and constants, with proper operator precedence.
/// The expansion calls the `Node` combinators, so `Node` must be in scope at
/// the call site.
///
/// # Supported Syntax
///
/// - `a` - Any `Node` identifier in scope
/// - `"a"` - String literal (creates `Node::variable("a")` automatically)
/// - `0` / `1` - Constants (create `Node::constant(false)` / `Node::constant(true)`)
/// - `!a` or `~a` - NOT operation (both syntaxes supported, like the parser)
/// - `a * b` or `a & b` - AND operation
/// - `a ^ b` - XOR operation
/// - `a + b` or `a | b` - OR operation
/// - `(a + b) * c` - Parentheses for grouping
///
/// # Operator Precedence
///
/// From highest to lowest:
/// 1. `( )` (Parentheses)
/// 2. `!` / `~` (NOT)
/// 3. `^` (XOR)
/// 4. `*` / `&` (AND)
/// 5. `+` / `|` (OR)
///
/// XOR binding tighter than AND mirrors the text parser's grammar, so the two
/// surfaces agree on every input they both accept.
///
/// # Examples
///
/// ```ignore
/// use quine_logic::{expr, Node};
///
/// // String literals create variables on the spot
/// let xor = expr!("a" * !"b" + !"a" * "b");
/// let grouped = expr!(("a" + "b") * "c");
///
/// // Existing Node values compose by identifier
/// let a = Node::variable("a");
/// let b = Node::variable("b");
/// let nand = expr!(!(a * b));
///
/// // Constants and mixed styles
/// let gated = expr!(a * 1 + "c" * 0);
///
/// // Sub-expressions compose like any other identifier
/// let lhs = expr!(a * b);
/// let full = expr!(lhs + !a * !b);
/// ```
#[proc_macro]
pub fn expr(input: TokenStream) -> TokenStream {
    let parsed = parse_macro_input!(input as ExprInput);
    TokenStream::from(parsed.ast.lower())
}
