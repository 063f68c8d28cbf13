//! The dog class, end to end.

use parlance::{ErrorKind, Transpiler, transpile};

const DOG: &str = include_str!("../../demos/dog.txt");
const DOG_PY: &str = include_str!("../../demos/dog.py");

#[test]
fn dog_transpiles_exactly() {
    assert_eq!(transpile(DOG).unwrap(), DOG_PY);
}

#[test]
fn dog_output_shape() {
    let code = transpile(DOG).unwrap();
    assert!(code.starts_with("class Dog:\n"));
    let property_lines = code.lines().skip(1).take_while(|l| !l.is_empty()).count();
    assert_eq!(property_lines, 4);
    assert_eq!(code.matches("    def ").count(), 7);
    assert!(code.ends_with("\n\n"));
}

#[test]
fn transpile_is_idempotent() {
    let transpiler = Transpiler::new();
    let first = transpiler.transpile(DOG).unwrap();
    let second = transpiler.transpile(DOG).unwrap();
    assert_eq!(first, second);
}

#[test]
fn curly_quotes_match_straight_quotes() {
    let curly = DOG.replacen("\"happy\"", "“happy”", 1);
    assert_eq!(transpile(&curly).unwrap(), DOG_PY);
}

#[test]
fn no_partial_output_on_failure() {
    let broken = DOG.replace("return self.energy, end.", "return self.energy.");
    let err = transpile(&broken).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnterminatedMethodBody { .. }));
}

#[test]
fn shared_across_threads() {
    let transpiler = Transpiler::new();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| transpiler.transpile(DOG).unwrap())).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), DOG_PY);
        }
    });
}
