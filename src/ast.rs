use std::{collections::BTreeSet, fmt::Display};

use crate::interpreter::value::complex::ComplexNumber;

/// A built-in function applied to exactly one parenthesised argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// `conjugate(z)`: negates the imaginary part.
    Conjugate,
    /// `root(z)`: principal square root.
    Root,
}

impl Function {
    /// Looks a function up by its reserved name.
    ///
    /// # Example
    /// ```
    /// use cplx::ast::Function;
    ///
    /// assert_eq!(Function::from_name("root"), Some(Function::Root));
    /// assert_eq!(Function::from_name("sqrt"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "conjugate" => Some(Self::Conjugate),
            "root" => Some(Self::Root),
            _ => None,
        }
    }

    /// The reserved name of the function.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjugate => "conjugate",
            Self::Root => "root",
        }
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Binary operators, from lowest to highest precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `**`, right-associative.
    Pow,
}

impl BinaryOperator {
    /// The operator as written in source text.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "**",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Each node exclusively owns its children. The tree is built bottom-up by the
/// parser and is read-only afterwards: the evaluator walks it, and the
/// renderer in [`crate::render`] draws it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal number, real or imaginary.
    Literal {
        /// The constant value.
        value: ComplexNumber,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A binary operation. Unary minus is represented as `0 - operand`.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A call to a built-in function.
    FunctionCall {
        /// The function being called.
        function: Function,
        /// The single argument.
        argument: Box<Self>,
    },
}

impl Expr {
    /// Returns the names of all variables referenced by the expression, in
    /// sorted order and without duplicates.
    ///
    /// ## Example
    /// ```
    /// use cplx::parse;
    ///
    /// let expr = parse("b * a + conjugate(a)").unwrap();
    /// let names: Vec<_> = expr.variables().into_iter().collect();
    /// assert_eq!(names, ["a", "b"]);
    /// ```
    #[must_use]
    pub fn variables(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables<'a>(&'a self, names: &mut BTreeSet<&'a str>) {
        match self {
            Self::Literal { .. } => {},
            Self::Variable { name } => {
                names.insert(name);
            },
            Self::BinaryOp { left, right, .. } => {
                left.collect_variables(names);
                right.collect_variables(names);
            },
            Self::FunctionCall { argument, .. } => argument.collect_variables(names),
        }
    }
}

impl Display for Expr {
    /// Writes the expression back as fully parenthesised infix text.
    ///
    /// ## Example
    /// ```
    /// use cplx::parse;
    ///
    /// let expr = parse("1 + x * root(2i)").unwrap();
    /// assert_eq!(expr.to_string(), "((1 + 0i) + (x * root(0 + 2i)))");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{value}"),
            Self::Variable { name } => write!(f, "{name}"),
            Self::BinaryOp { left, op, right } => {
                write!(f, "(")?;
                left.fmt_operand(f)?;
                write!(f, " {op} ")?;
                right.fmt_operand(f)?;
                write!(f, ")")
            },
            Self::FunctionCall { function, argument } => write!(f, "{function}({argument})"),
        }
    }
}

impl Expr {
    /// Writes an operand of a binary operator. Literals render with their
    /// own sign, so they are wrapped.
    fn fmt_operand(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "({value})"),
            other => write!(f, "{other}"),
        }
    }
}
