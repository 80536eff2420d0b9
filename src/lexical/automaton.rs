//! The token recognition automaton
//!
//! An explicit DFA drives recognition of every multi-character token.
//! Recognition is one-shot: feeding any symbol from an accepting state
//! lands in the absorbing invalid state, so each accepting state marks
//! exactly one complete token.
//!
//! Number recognition is deliberately permissive. Digits, dots, and
//! signs in any order stay in the number state; whether the span is a
//! well-formed number is judged later by the semantic rules.

/// DFA states. The `*End` states are the accepting ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Start,
    /// Absorbing failure state
    Invalid,

    NumberBody,
    NumberEnd,

    StringBody,
    StringEnd,

    // 't' 'r' 'u' 'e'
    TrueT,
    TrueR,
    TrueU,
    TrueEnd,

    // 'f' 'a' 'l' 's' 'e'
    FalseF,
    FalseA,
    FalseL,
    FalseS,
    FalseEnd,

    // 'n' 'u' 'l' 'l'
    NullN,
    NullU,
    NullL,
    NullEnd,
}

/// Characters that keep a number span going
pub fn is_number_shaped(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.' || ch == '-' || ch == '+'
}

/// One DFA step. `None` is the end-of-input symbol: it closes an open
/// number span and fails everything else still in flight.
pub fn transition(state: State, symbol: Option<char>) -> State {
    match state {
        State::Start => match symbol {
            Some(ch) if is_number_shaped(ch) => State::NumberBody,
            Some('"') => State::StringBody,
            Some('t') => State::TrueT,
            Some('f') => State::FalseF,
            Some('n') => State::NullN,
            _ => State::Invalid,
        },

        State::NumberBody => match symbol {
            Some(ch) if is_number_shaped(ch) => State::NumberBody,
            // Terminator reached; the caller must not consume it
            _ => State::NumberEnd,
        },

        State::StringBody => match symbol {
            Some('"') => State::StringEnd,
            Some('\n') | Some('\t') | Some('\r') => State::Invalid,
            Some(_) => State::StringBody,
            None => State::Invalid,
        },

        State::TrueT => expect(symbol, 'r', State::TrueR),
        State::TrueR => expect(symbol, 'u', State::TrueU),
        State::TrueU => expect(symbol, 'e', State::TrueEnd),

        State::FalseF => expect(symbol, 'a', State::FalseA),
        State::FalseA => expect(symbol, 'l', State::FalseL),
        State::FalseL => expect(symbol, 's', State::FalseS),
        State::FalseS => expect(symbol, 'e', State::FalseEnd),

        State::NullN => expect(symbol, 'u', State::NullU),
        State::NullU => expect(symbol, 'l', State::NullL),
        State::NullL => expect(symbol, 'l', State::NullEnd),

        // Accepting states take no further symbols
        State::NumberEnd
        | State::StringEnd
        | State::TrueEnd
        | State::FalseEnd
        | State::NullEnd => State::Invalid,

        State::Invalid => State::Invalid,
    }
}

fn expect(symbol: Option<char>, wanted: char, next: State) -> State {
    match symbol {
        Some(ch) if ch == wanted => next,
        _ => State::Invalid,
    }
}

/// Whether a state marks a complete token
pub fn is_accepting(state: State) -> bool {
    matches!(
        state,
        State::NumberEnd | State::StringEnd | State::TrueEnd | State::FalseEnd | State::NullEnd
    )
}
