//! Class description tree tests.

use parlance_language::{Action, ActionKind, ClassDecl, Expr, MethodDecl, PropertyDecl};

fn expr(tokens: &[&str]) -> Expr {
    tokens.iter().copied().collect()
}

#[test]
fn class_keeps_given_order() {
    let class = ClassDecl::new(
        "dog",
        vec![PropertyDecl::new("y", "0"), PropertyDecl::new("x", "0")],
        vec![
            MethodDecl::new("run", None, vec![]),
            MethodDecl::new("bark", None, vec![]),
        ],
    );
    let properties: Vec<_> = class.properties().iter().map(|p| p.name.as_str()).collect();
    let methods: Vec<_> = class.methods().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(properties, vec!["y", "x"]);
    assert_eq!(methods, vec!["run", "bark"]);
}

#[test]
fn every_action_has_a_kind() {
    let actions = [
        (Action::Print { expr: expr(&["1"]) }, ActionKind::Print),
        (
            Action::Increase {
                var: "x".into(),
                amount: expr(&["1"]),
            },
            ActionKind::Increase,
        ),
        (
            Action::Decrease {
                var: "x".into(),
                amount: expr(&["1"]),
            },
            ActionKind::Decrease,
        ),
        (
            Action::Assign {
                var: "x".into(),
                expr: expr(&["1"]),
            },
            ActionKind::Assign,
        ),
        (Action::Return { expr: expr(&["1"]) }, ActionKind::Return),
        (Action::Call { expr: expr(&["f()"]) }, ActionKind::Call),
    ];
    for (action, kind) in actions {
        assert_eq!(action.kind(), kind);
    }
}

#[test]
fn expr_is_verbatim() {
    let e = expr(&["\"energy: \"", "+", "str(self.energy)"]);
    assert_eq!(e.tokens().len(), 3);
    assert_eq!(e.to_string(), "\"energy: \" + str(self.energy)");
}

#[test]
fn classes_compare_structurally() {
    let a = ClassDecl::new("cat", vec![PropertyDecl::new("x", "1")], vec![]);
    let b = ClassDecl::new("cat", vec![PropertyDecl::new("x", "1")], vec![]);
    let c = ClassDecl::new("cat", vec![PropertyDecl::new("x", "2")], vec![]);
    assert_eq!(a, b);
    assert_ne!(a, c);
}
