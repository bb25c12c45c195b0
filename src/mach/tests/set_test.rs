use super::*;

#[test]
fn test_postfix_arithmetic() {
    let mut r = Runtime::default();
    let (_, s) = run(&mut r, "{ SET A := 2 3 * ; SET B := 10 4 - ; SET C := 8 2 / ; }");
    assert_eq!(s, "");
    assert_eq!(r.turtle().var(0), 6.0);
    assert_eq!(r.turtle().var(1), 6.0);
    assert_eq!(r.turtle().var(2), 4.0);
}

#[test]
fn test_set_then_move() {
    let mut r = Runtime::default();
    let (rec, s) = run(&mut r, "{ SET A := 2 3 * 4 + ; FD A }");
    assert_eq!(s, "");
    assert_eq!(rec.lines().len(), 1);
    assert!(close(r.turtle().travelled(), 10.0));
}

#[test]
fn test_operator_without_operands() {
    let mut r = Runtime::default();
    let (_, s) = run(&mut r, "{ SET A := 1 + ; }");
    assert_eq!(
        s,
        "Error: OP operated on a non-existent number. Issue encountered at word 6: +.\n"
    );
    let (_, s) = run(&mut r, "{ SET A := 1 1 1.1 + + + + ; }");
    assert_eq!(
        s,
        "Error: OP operated on a non-existent number. Issue encountered at word 10: +.\n"
    );
}

#[test]
fn test_leftover_operands() {
    let mut r = Runtime::default();
    let (_, s) = run(&mut r, "{ SET A := 1 2 ; }");
    assert_eq!(
        s,
        "Error: Incorrect POLISH notation. Issue encountered at word 7: ;.\n"
    );
}

#[test]
fn test_empty_expression() {
    let mut r = Runtime::default();
    let (_, s) = run(&mut r, "{ SET A := ; }");
    assert_eq!(
        s,
        "Error: Attempted to use SET with null value. Issue encountered at word 5: ;.\n"
    );
}

#[test]
fn test_detached_skips_arithmetic() {
    let mut r = Runtime::default();
    assert!(r.check("{ SET A := 1 + + ; }").is_ok());
    assert!(r.check("{ SET A := 4 ; }").is_ok());
    assert_eq!(r.turtle().var(0), 0.0);
}

#[test]
fn test_expression_too_long() {
    let mut r = Runtime::default();
    let operands = vec!["1"; 70000].join(" ");
    let (_, s) = run(&mut r, &format!("{{ SET A := {} ; }}", operands));
    assert_eq!(
        s,
        "Error: POLISH expression is too long. Issue encountered at word 65540: 1.\n"
    );
}
