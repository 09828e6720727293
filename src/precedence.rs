//! Operator precedence relation used by the infix-to-postfix converter.

use crate::token::Token;

/// Returns true when `top`, the symbol on top of the operator stack, has to be
/// emitted before `incoming` is handled.
///
/// - `(` on top never yields; it stays parked until its `)` arrives.
/// - An incoming `(` never forces emission.
/// - An incoming `)` forces emission of every operator above the matching `(`.
/// - A stray `)` on top (pushed onto an empty stack) never yields.
/// - Between arithmetic operators, `top` is emitted when it binds at least as tight
///   as `incoming`, so equal precedence associates left to right.
///
/// Characters that are not operators or parentheses never take precedence.
pub fn has_precedence(top: char, incoming: char) -> bool {
    match (Token::classify(top), Token::classify(incoming)) {
        (Token::LeftParen | Token::RightParen, _) => false,
        (_, Token::LeftParen) => false,
        (Token::Operator(_), Token::RightParen) => true,
        (Token::Operator(top), Token::Operator(incoming)) => top.rank() >= incoming.rank(),
        _ => false,
    }
}
