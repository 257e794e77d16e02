use super::expressions::{
    Accessed, Binary, Call, FloatLiteral, Identifier, IntLiteral, Special, StringLiteral, Tagged,
    Unary,
};

/// Index of an expression in the parser's arena.
pub type ExprIdx = usize;

/// Comma or newline separated expressions, in source order.
pub type ExpressionList = Vec<ExprIdx>;

/// Expression Types
///
/// Every child is referenced by arena index. Children are always pushed
/// before their parent, so a child index is strictly smaller than the index
/// of the node referencing it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    IntLiteral(IntLiteral),
    FloatLiteral(FloatLiteral),
    ImaginaryLiteral(FloatLiteral),
    StringLiteral(StringLiteral),
    Special(Special),
    Identifier(Identifier),
    Tagged(Tagged),
    Accessed(Accessed),
    Call(Call),
    Binary(Binary),
    Unary(Unary),
    /// Stands in for a span that failed to parse.
    Invalid,
    /// Elided slot, e.g. `()`.
    Nothing,
}

impl Expression {
    /// Arena indices of the direct children, in source order.
    pub fn children(&self) -> Vec<ExprIdx> {
        match self {
            Expression::Tagged(tagged) => vec![tagged.value],
            Expression::Accessed(accessed) => vec![accessed.base],
            Expression::Call(call) => {
                let mut children = Vec::with_capacity(call.args.len() + 1);
                children.push(call.callee);
                children.extend(call.args.iter().copied());
                children
            }
            Expression::Binary(binary) => vec![binary.lhs, binary.rhs],
            Expression::Unary(unary) => vec![unary.operand],
            Expression::IntLiteral(_)
            | Expression::FloatLiteral(_)
            | Expression::ImaginaryLiteral(_)
            | Expression::StringLiteral(_)
            | Expression::Special(_)
            | Expression::Identifier(_)
            | Expression::Invalid
            | Expression::Nothing => vec![],
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Expression::Invalid)
    }
}
