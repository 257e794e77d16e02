use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::lexer::tokens::TokenKind;

/// Binding power of binary operators, loosest first.
///
/// `Postfix` is never looked up: member access and calls are folded onto a
/// primary before any binary operator is considered.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Pipe,
    Or,
    And,
    Relational,
    BitOr,
    BitXor,
    BitAnd,
    Shift,
    Additive,
    Multiplicative,
    Exponent,
    Postfix,
}

impl BindingPower {
    /// The next tighter level, saturating at `Postfix`.
    pub fn tighter(self) -> BindingPower {
        match self {
            BindingPower::Default => BindingPower::Pipe,
            BindingPower::Pipe => BindingPower::Or,
            BindingPower::Or => BindingPower::And,
            BindingPower::And => BindingPower::Relational,
            BindingPower::Relational => BindingPower::BitOr,
            BindingPower::BitOr => BindingPower::BitXor,
            BindingPower::BitXor => BindingPower::BitAnd,
            BindingPower::BitAnd => BindingPower::Shift,
            BindingPower::Shift => BindingPower::Additive,
            BindingPower::Additive => BindingPower::Multiplicative,
            BindingPower::Multiplicative => BindingPower::Exponent,
            BindingPower::Exponent | BindingPower::Postfix => BindingPower::Postfix,
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Associativity {
    Left,
    Right,
}

lazy_static! {
    pub static ref BINARY_LOOKUP: HashMap<TokenKind, (BindingPower, Associativity)> = {
        use Associativity::*;

        let mut map = HashMap::new();
        map.insert(TokenKind::Pipe, (BindingPower::Pipe, Left));

        // Logical
        map.insert(TokenKind::Or, (BindingPower::Or, Left));
        map.insert(TokenKind::And, (BindingPower::And, Left));

        // Relational
        map.insert(TokenKind::Equal, (BindingPower::Relational, Left));
        map.insert(TokenKind::GreaterEquals, (BindingPower::Relational, Left));
        map.insert(TokenKind::Greater, (BindingPower::Relational, Left));
        map.insert(TokenKind::LessEquals, (BindingPower::Relational, Left));
        map.insert(TokenKind::Less, (BindingPower::Relational, Left));

        // Bitwise
        map.insert(TokenKind::BitOr, (BindingPower::BitOr, Left));
        map.insert(TokenKind::BitXor, (BindingPower::BitXor, Left));
        map.insert(TokenKind::BitAnd, (BindingPower::BitAnd, Left));
        map.insert(TokenKind::LeftShift, (BindingPower::Shift, Left));
        map.insert(TokenKind::RightShift, (BindingPower::Shift, Left));

        // Additive and multiplicative
        map.insert(TokenKind::Plus, (BindingPower::Additive, Left));
        map.insert(TokenKind::Minus, (BindingPower::Additive, Left));
        map.insert(TokenKind::Times, (BindingPower::Multiplicative, Left));
        map.insert(TokenKind::Divide, (BindingPower::Multiplicative, Left));
        map.insert(TokenKind::Modulo, (BindingPower::Multiplicative, Left));

        map.insert(TokenKind::Exponent, (BindingPower::Exponent, Right));
        map
    };
}

/// Binding power and associativity of `kind` used as a binary operator.
pub fn binary_operator(kind: TokenKind) -> Option<(BindingPower, Associativity)> {
    BINARY_LOOKUP.get(&kind).copied()
}

pub fn is_unary_operator(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Plus | TokenKind::Minus | TokenKind::BitNot | TokenKind::Not
    )
}
