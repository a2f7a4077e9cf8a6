use descent_calc::*;

#[test]
fn it_calculates() {
    assert_eq!(evaluate("2+2"), Ok(4.0));
    assert_eq!(evaluate("1 + 2 * 3"), Ok(7.0));
    assert_eq!(evaluate("(1 + 2) * 3"), Ok(9.0));
    assert_eq!(evaluate("(2+3)*4/5"), Ok(4.0));
    assert_eq!(evaluate("\t-1.5 *\n-(2 - 4) "), Ok(-3.0));
}

#[test]
fn it_returns_error() {
    assert_eq!(evaluate(""), Err(Error::UnexpectedEnd));
    assert_eq!(evaluate("Âµ"), Err(Error::UnexpectedCharacter('Â')));
    assert_eq!(evaluate("2+"), Err(Error::UnexpectedEnd));
    assert_eq!(evaluate("foo bar"), Err(Error::UnexpectedCharacter('f')));
    assert_eq!(evaluate("(2+3"), Err(Error::MissingCloseParen));
    assert_eq!(evaluate("2+3)"), Err(Error::TrailingInput(")".to_owned())));
    assert_eq!(evaluate("1.2.3"), Err(Error::TrailingInput(".3".to_owned())));
}

#[test]
fn it_rejects_division_by_zero() {
    for input in ["1/0", "0/0", "(3*4)/0", "1/(1-1)", "2 / 0.0"] {
        assert_eq!(evaluate(input), Err(Error::DivisionByZero), "{}", input);
    }
}

#[test]
fn it_has_no_hidden_state() {
    let inputs = ["2+3*4", "(1", "1/3", "--3", "1/0"];
    let first: Vec<_> = inputs.iter().map(|input| evaluate(input)).collect();
    let second: Vec<_> = inputs.iter().map(|input| evaluate(input)).collect();
    assert_eq!(first, second);
}

#[test]
fn it_round_trips_results() {
    let value = evaluate("22/7").unwrap();
    assert_eq!(evaluate(&format_value(value)), Ok(value));
}

#[test]
fn it_limits_nesting() {
    let input = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
    assert_eq!(evaluate(&input), Err(Error::NestingTooDeep(MAX_DEPTH)));
}

#[test]
fn it_runs_a_session() {
    let mut output = Vec::new();
    run_repl(
        "1 + 1\n\n8 / 0\nquit\n9\n".as_bytes(),
        &mut output,
        ReplOptions::default(),
    )
    .unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        "= 2\nError: division by zero\n"
    );
}
