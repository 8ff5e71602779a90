use std::fmt::Write;

use crate::ast::Expr;

/// Draws an expression tree as indented text, one node per line.
///
/// Literals are labelled with their rendered value, variables as
/// `Var: <name>`, operators by their symbol and calls by the function name.
///
/// # Example
/// ```
/// use cplx::{parse, render::tree};
///
/// let expr = parse("-x + root(4)").unwrap();
/// let expected = "\
/// +
/// ├── -
/// │   ├── 0 + 0i
/// │   └── Var: x
/// └── root
///     └── 4 + 0i
/// ";
/// assert_eq!(tree(&expr), expected);
/// ```
#[must_use]
pub fn tree(expr: &Expr) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", label(expr));
    write_children(expr, "", &mut out);
    out
}

fn label(expr: &Expr) -> String {
    match expr {
        Expr::Literal { value } => value.to_string(),
        Expr::Variable { name } => format!("Var: {name}"),
        Expr::BinaryOp { op, .. } => op.to_string(),
        Expr::FunctionCall { function, .. } => function.to_string(),
    }
}

fn children(expr: &Expr) -> Vec<&Expr> {
    match expr {
        Expr::Literal { .. } | Expr::Variable { .. } => Vec::new(),
        Expr::BinaryOp { left, right, .. } => vec![left.as_ref(), right.as_ref()],
        Expr::FunctionCall { argument, .. } => vec![argument.as_ref()],
    }
}

fn write_children(expr: &Expr, prefix: &str, out: &mut String) {
    let kids = children(expr);
    let last = kids.len().saturating_sub(1);

    for (idx, child) in kids.into_iter().enumerate() {
        let (branch, indent) = if idx == last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        let _ = writeln!(out, "{prefix}{branch}{}", label(child));
        write_children(child, &format!("{prefix}{indent}"), out);
    }
}
