//! Action classification.
//!
//! A method body is split into spans, and each span becomes one
//! [`Action`]. Spans are matched by a single-token prefix at a fixed
//! position; the first rule that matches wins:
//!
//! | Priority | Token | Prefix     | Action                                  |
//! |----------|-------|------------|-----------------------------------------|
//! | 1        | 1     | `print`    | `Print { expr: 2.. }`                   |
//! | 2        | 2     | `increase` | `Increase { var: 0, amount: 4.. }`      |
//! | 3        | 2     | `decrease` | `Decrease { var: 0, amount: 4.. }`      |
//! | 4        | 2     | `is`       | `Assign { var: 0, expr: 3.. }`          |
//! | 5        | 0     | `return`   | `Return { expr: 1.. }`                  |
//! | 6        | 1     | `use`      | `Call { expr: 2.. }`                    |

use parlance_foundation::{Error, Result};
use parlance_language::{Action, Expr};

use crate::tagger::TaggedToken;

/// Classifies a span of words, or returns `None` if no rule matches.
#[must_use]
pub fn classify_words(words: &[&str]) -> Option<Action> {
    let starts = |i: usize, prefix: &str| words.get(i).is_some_and(|w| w.starts_with(prefix));
    let tail = |from: usize| -> Expr { words.get(from..).unwrap_or_default().iter().copied().collect() };
    let var = || words[0].to_string();
    let len = words.len();

    if len > 1 && starts(1, "print") {
        Some(Action::Print { expr: tail(2) })
    } else if len > 2 && starts(2, "increase") {
        Some(Action::Increase {
            var: var(),
            amount: tail(4),
        })
    } else if len > 2 && starts(2, "decrease") {
        Some(Action::Decrease {
            var: var(),
            amount: tail(4),
        })
    } else if len > 2 && starts(2, "is") {
        Some(Action::Assign {
            var: var(),
            expr: tail(3),
        })
    } else if len > 1 && starts(0, "return") {
        Some(Action::Return { expr: tail(1) })
    } else if len > 1 && starts(1, "use") {
        Some(Action::Call { expr: tail(2) })
    } else {
        None
    }
}

/// Classifies one action span of `method`.
///
/// # Errors
///
/// Returns `UnrecognizedAction` if the span matches no rule.
pub fn classify(method: &str, span: &[&TaggedToken]) -> Result<Action> {
    let words: Vec<&str> = span.iter().map(|t| t.text()).collect();
    classify_words(&words).ok_or_else(|| {
        let at = span.first().map_or(0, |t| t.index());
        Error::unrecognized_action(method, words.join(" "), at)
    })
}
