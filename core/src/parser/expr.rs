use core::fmt;

/// Expression tree produced by the parser.
///
/// Nodes live in a [`bumpalo::Bump`] arena owned by the caller and are
/// dropped together with it. Grouping parentheses leave no trace in the tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expr<'a> {
    Number(f64),
    /// Identifier, already lowercased.
    Ident(&'a str),
    Unary {
        op: UnaryOp,
        operand: &'a Expr<'a>,
    },
    Binary {
        op: BinaryOp,
        left: &'a Expr<'a>,
        right: &'a Expr<'a>,
    },
    Call {
        name: &'a str,
        args: &'a [Argument<'a>],
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Argument<'a> {
    Positional(&'a Expr<'a>),
    Keyword { name: &'a str, value: &'a Expr<'a> },
}

impl<'a> Argument<'a> {
    pub fn value(&self) -> &'a Expr<'a> {
        match self {
            Argument::Positional(value) | Argument::Keyword { value, .. } => value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Pos,
    Neg,
    Invert,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Pos => "+",
            UnaryOp::Neg => "-",
            UnaryOp::Invert => "~",
        }
    }
}

/// Binary operators the grammar accepts. The bitwise ones parse so that they
/// can be rejected with a precise error instead of a syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Rem,
    Pow,
    BitAnd,
    BitOr,
    Shl,
    Shr,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::FloorDiv => "//",
            BinaryOp::Rem => "%",
            BinaryOp::Pow => "**",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitOr => "|",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
        }
    }
}

// Fully parenthesized rendering, mostly useful for inspecting how the
// parser grouped things.
impl fmt::Display for Expr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{value}"),
            Expr::Ident(name) => f.write_str(name),
            Expr::Unary { op, operand } => write!(f, "({}{operand})", op.symbol()),
            Expr::Binary { op, left, right } => write!(f, "({left} {} {right})", op.symbol()),
            Expr::Call { name, args } => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    match arg {
                        Argument::Positional(value) => write!(f, "{value}")?,
                        Argument::Keyword { name, value } => write!(f, "{name}={value}")?,
                    }
                }
                f.write_str(")")
            }
        }
    }
}
