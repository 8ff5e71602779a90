use cplx::{
    ComplexNumber,
    error::{Error, ParseError, RuntimeError},
    evaluate,
    interpreter::evaluator::{
        core::{Context, SENTINEL},
        scripted::{RecordingNotifier, ScriptedSource},
    },
    parse,
};

fn run_with(src: &str, values: &mut ScriptedSource) -> (Result<ComplexNumber, Error>, RecordingNotifier) {
    let mut notifier = RecordingNotifier::new();
    let result = evaluate(src, values, &mut notifier).map(|(value, _)| value);
    (result, notifier)
}

#[test]
fn variable_is_requested_once() {
    let mut values = ScriptedSource::new(["1+2i"]);
    let (result, notifier) = run_with("x*x + x", &mut values);

    assert_eq!(result.unwrap(), ComplexNumber::new(-2.0, 6.0));
    assert_eq!(values.requested(), ["x"]);
    assert_eq!(notifier.texts().collect::<Vec<_>>(),
               ["starting parse: x*x + x", "variable bound: x = 1 + 2i"]);
    assert!(notifier.messages.iter().all(|(_, is_error)| !is_error));
}

#[test]
fn variables_are_requested_left_to_right() {
    let mut values = ScriptedSource::new(["1", "2i"]);
    let (result, _) = run_with("y - x", &mut values);

    assert_eq!(result.unwrap(), ComplexNumber::new(1.0, -2.0));
    assert_eq!(values.requested(), ["y", "x"]);
}

#[test]
fn typed_value_is_an_expression() {
    let mut values = ScriptedSource::new(["root(4) * conjugate(i)"]);
    let (result, notifier) = run_with("z + 1", &mut values);

    assert_eq!(result.unwrap().to_string(), "1 - 2i");
    assert!(notifier.texts().any(|t| t == "variable bound: z = 0 - 2i"));
}

#[test]
fn typed_value_can_prompt_for_another_variable() {
    let mut values = ScriptedSource::new(["y*2", "3"]);
    let (result, notifier) = run_with("x+1", &mut values);

    assert_eq!(result.unwrap(), ComplexNumber::new(7.0, 0.0));
    assert_eq!(values.requested(), ["x", "y"]);
    assert_eq!(notifier.texts().collect::<Vec<_>>(),
               ["starting parse: x+1", "variable bound: y = 3 + 0i", "variable bound: x = 6 + 0i"]);
}

#[test]
fn typed_value_does_not_share_bindings() {
    // `y` bound while typing `x` stays local to that value.
    let mut values = ScriptedSource::new(["y*2", "3", "5"]);
    let (result, _) = run_with("x + y", &mut values);

    assert_eq!(result.unwrap(), ComplexNumber::new(11.0, 0.0));
    assert_eq!(values.requested(), ["x", "y", "y"]);
}

#[test]
fn each_evaluation_starts_empty() {
    let mut values = ScriptedSource::new(["1", "2"]);

    let (first, _) = run_with("x", &mut values);
    let (second, _) = run_with("x", &mut values);

    assert_eq!(first.unwrap(), ComplexNumber::new(1.0, 0.0));
    assert_eq!(second.unwrap(), ComplexNumber::new(2.0, 0.0));
    assert_eq!(values.requested(), ["x", "x"]);
}

#[test]
fn context_keeps_its_bindings() {
    let mut values = ScriptedSource::new(["2", "3i"]);
    let mut notifier = RecordingNotifier::new();
    let mut ctx = Context::interactive(&mut values, &mut notifier);
    assert!(ctx.variables().is_empty());

    assert_eq!(ctx.eval(&parse("a").unwrap()).unwrap(), ComplexNumber::new(2.0, 0.0));
    assert!(ctx.variables().contains("a"));
    assert!(!ctx.variables().contains("b"));

    // Reusing the context reuses `a` and only asks for `b`.
    assert_eq!(ctx.eval(&parse("a * b").unwrap()).unwrap(), ComplexNumber::new(0.0, 6.0));
    assert_eq!(ctx.variables().len(), 2);
    assert_eq!(ctx.variables().get("b"), Some(ComplexNumber::new(0.0, 3.0)));

    assert_eq!(values.requested(), ["a", "b"]);
}

#[test]
fn comparison_context_binds_nothing() {
    let mut ctx = Context::comparison();
    assert_eq!(ctx.eval(&parse("x").unwrap()).unwrap(), SENTINEL);
    assert!(ctx.variables().is_empty());
}

#[test]
fn cancelled_input_aborts() {
    let mut values = ScriptedSource::new(["1"]).then_cancel();
    let (result, notifier) = run_with("x + y + z", &mut values);

    match result {
        Err(Error::Runtime(RuntimeError::InputCancelled { name })) => assert_eq!(name, "y"),
        other => panic!("expected cancellation, got {other:?}"),
    }
    // `z` is never reached.
    assert_eq!(values.requested(), ["x", "y"]);
    assert_eq!(notifier.messages.len(), 2);
}

#[test]
fn closure_source_can_cancel() {
    let mut values = |_: &str| -> Option<String> { None };
    let mut messages = Vec::new();
    let mut notifier = |message: &str, _: bool| messages.push(message.to_string());

    let result = evaluate("a", &mut values, &mut notifier);

    assert!(matches!(result, Err(Error::Runtime(RuntimeError::InputCancelled { .. }))));
    assert_eq!(messages, ["starting parse: a"]);
}

#[test]
fn blank_input_is_rejected() {
    let mut values = ScriptedSource::new(["   "]);
    let (result, _) = run_with("x", &mut values);

    match result {
        Err(Error::Runtime(RuntimeError::InputEmpty { name })) => assert_eq!(name, "x"),
        other => panic!("expected empty input error, got {other:?}"),
    }
}

#[test]
fn invalid_input_is_wrapped_with_the_name() {
    let mut values = ScriptedSource::new(["2+"]);
    let (result, _) = run_with("1 + w", &mut values);

    let Err(err) = result else {
        panic!("expected invalid input to fail");
    };
    assert_eq!(err.to_string(), "Invalid value typed for 'w': Unexpected end of expression.");

    match err {
        Error::Runtime(RuntimeError::InputInvalid { name, source }) => {
            assert_eq!(name, "w");
            assert!(matches!(*source, Error::Parse(ParseError::UnexpectedEndOfInput)));
        },
        other => panic!("expected wrapped input error, got {other:?}"),
    }
}

#[test]
fn failing_typed_value_is_wrapped() {
    let mut values = ScriptedSource::new(["1/0"]);
    let (result, notifier) = run_with("q", &mut values);

    let err = result.unwrap_err();
    let source = std::error::Error::source(&err).expect("wrapped error has a source");
    assert_eq!(source.to_string(), "Math error: Division by zero.");
    // Nothing was bound.
    assert_eq!(notifier.messages.len(), 1);
}

#[test]
fn nested_cancellation_is_wrapped() {
    let mut values = ScriptedSource::new(["y"]).then_cancel();
    let (result, _) = run_with("x", &mut values);

    match result {
        Err(Error::Runtime(RuntimeError::InputInvalid { name, source })) => {
            assert_eq!(name, "x");
            assert!(matches!(*source,
                             Error::Runtime(RuntimeError::InputCancelled { ref name }) if name == "y"));
        },
        other => panic!("expected wrapped cancellation, got {other:?}"),
    }
}
