//! Action classifier tests.
//!
//! Adversarial spans that could match more than one rule.

use parlance_language::{Action, ActionKind, Expr};
use parlance_parser::classify_words;

fn kind(span: &str) -> Option<ActionKind> {
    let words: Vec<&str> = span.split(' ').collect();
    classify_words(&words).map(|a| a.kind())
}

#[test]
fn each_rule_on_its_own() {
    assert_eq!(kind("he prints 1"), Some(ActionKind::Print));
    assert_eq!(kind("x then increases by 1"), Some(ActionKind::Increase));
    assert_eq!(kind("x then decreases by 1"), Some(ActionKind::Decrease));
    assert_eq!(kind("x now is 1"), Some(ActionKind::Assign));
    assert_eq!(kind("return 1"), Some(ActionKind::Return));
    assert_eq!(kind("he uses f()"), Some(ActionKind::Call));
}

#[test]
fn print_beats_everything() {
    assert_eq!(kind("return printed increases"), Some(ActionKind::Print));
    assert_eq!(kind("x print is 1"), Some(ActionKind::Print));
}

#[test]
fn increase_beats_decrease_assign_return_and_call() {
    assert_eq!(kind("return uses increases decreases"), Some(ActionKind::Increase));
}

#[test]
fn decrease_beats_assign() {
    assert_eq!(kind("x y decrease is"), Some(ActionKind::Decrease));
}

#[test]
fn assign_beats_return_and_call() {
    assert_eq!(kind("returns uses is 1"), Some(ActionKind::Assign));
}

#[test]
fn return_beats_call() {
    assert_eq!(kind("return uses f()"), Some(ActionKind::Return));
}

#[test]
fn prefix_match_only() {
    assert_eq!(kind("he reprints 1"), None);
    assert_eq!(kind("x then nonincreasing 1"), None);
}

#[test]
fn operands_are_positional() {
    assert_eq!(
        classify_words(&["self.mood", "now", "is", "\"tired\"", "+", "\"!\""]),
        Some(Action::Assign {
            var: "self.mood".into(),
            expr: ["\"tired\"", "+", "\"!\""].into_iter().collect::<Expr>(),
        })
    );
    assert_eq!(
        classify_words(&["self.x", "will", "increase", "by"]),
        Some(Action::Increase {
            var: "self.x".into(),
            amount: Expr::default(),
        })
    );
}

#[test]
fn nothing_matches() {
    assert_eq!(kind("he jumps"), None);
    assert_eq!(kind("sleep"), None);
}
