//! End-to-end tests for overload registration and dispatch.
//!
//! These exercise the full path from variant definition through scope
//! attachment, registration, and call-time resolution.

use std::cell::RefCell;
use std::rc::Rc;

use multifn::{
    args, scope, ConfigurationError, FnDef, Overloaded, Overloads, ResolutionError, ScopeId,
    Value,
};
use pretty_assertions::assert_eq;

/// Registers the three-variant `log` set from the crate's motivating
/// example, writing rendered lines into a shared buffer.
fn register_log(overloads: &mut Overloads, scope: ScopeId) -> (Overloaded, Rc<RefCell<Vec<String>>>) {
    let lines = Rc::new(RefCell::new(Vec::new()));

    let sink = lines.clone();
    overloads
        .overload(
            scope,
            FnDef::new("log", move |mut args| {
                let msg: String = args.remove(0).downcast().unwrap();
                sink.borrow_mut().push(msg);
                Value::new(())
            })
            .param::<String>("msg")
            .returns::<()>(),
        )
        .unwrap();

    let sink = lines.clone();
    overloads
        .overload(
            scope,
            FnDef::new("log", move |mut args| {
                let level: i64 = args.remove(1).downcast().unwrap();
                let msg: String = args.remove(0).downcast().unwrap();
                sink.borrow_mut().push(format!("[{level}] {msg}"));
                Value::new(())
            })
            .param::<String>("msg")
            .param::<i64>("level")
            .returns::<()>(),
        )
        .unwrap();

    let sink = lines.clone();
    let log = overloads
        .overload(
            scope,
            FnDef::new("log", move |mut args| {
                let level: String = args.remove(1).downcast().unwrap();
                let msg: String = args.remove(0).downcast().unwrap();
                sink.borrow_mut().push(format!("[{level}] {msg}"));
                Value::new(())
            })
            .param::<String>("msg")
            .param::<String>("level")
            .returns::<()>(),
        )
        .unwrap();

    (log, lines)
}

#[test]
fn dispatches_each_variant_by_exact_argument_types() {
    let mut overloads = Overloads::new();
    let (log, lines) = register_log(&mut overloads, scope!());

    log.call(args!["Hello".to_string()]).unwrap();
    log.call(args!["Hello".to_string(), 1_i64]).unwrap();
    log.call(args!["Hello".to_string(), "INFO".to_string()])
        .unwrap();

    assert_eq!(
        *lines.borrow(),
        vec!["Hello", "[1] Hello", "[INFO] Hello"]
    );
}

#[test]
fn unmatched_calls_enumerate_every_registered_signature() {
    let mut overloads = Overloads::new();
    let (log, _lines) = register_log(&mut overloads, scope!());

    let ResolutionError::NoMatch {
        name,
        attempted,
        registered,
    } = log
        .call(args![1_i64, 2_i64, 3_i64])
        .unwrap_err();

    assert_eq!(name, "log");
    assert_eq!(attempted, "log(i64, i64, i64)");
    assert_eq!(
        registered,
        vec![
            "log(String) -> ()",
            "log(String, i64) -> ()",
            "log(String, String) -> ()",
        ]
    );

    // Wrong types at the right arity fail the same way, as does the empty
    // tuple when no zero-arity variant exists.
    assert!(log.call(args![1_i64, 2_i64]).is_err());
    assert!(log.call(args![]).is_err());
}

#[test]
fn int_and_str_variants_do_not_accept_a_float() {
    let mut overloads = Overloads::new();
    let registry = overloads.scope(scope!());

    registry
        .overload(
            FnDef::new("f", |_| Value::new("int"))
                .param::<i64>("x")
                .returns::<()>(),
        )
        .unwrap();
    let f = registry
        .overload(
            FnDef::new("f", |_| Value::new("str"))
                .param::<String>("x")
                .returns::<()>(),
        )
        .unwrap();

    let result = f.call(args![5_i64]).unwrap();
    assert_eq!(result.downcast::<&str>().unwrap(), "int");

    let result = f.call(args!["a".to_string()]).unwrap();
    assert_eq!(result.downcast::<&str>().unwrap(), "str");

    let err = f.call(args![5.0_f64]).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("f(f64)"), "unexpected message: {message}");
    assert!(message.contains("f(i64) -> ()"), "unexpected message: {message}");
    assert!(message.contains("f(String) -> ()"), "unexpected message: {message}");
}

#[test]
fn missing_annotation_fails_at_definition_time() {
    let mut overloads = Overloads::new();
    let scope = scope!();

    let err = overloads
        .overload(scope, FnDef::new("g", |_| Value::new(())).untyped("x"))
        .unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::MissingAnnotation {
            function: "g".to_string(),
            param: "x".to_string(),
        }
    );

    // Nothing was registered under the name.
    assert!(!overloads.scope(scope).contains("g"));
}

#[test]
fn variadic_definitions_fail_at_definition_time() {
    let mut overloads = Overloads::new();

    let err = overloads
        .overload(
            scope!(),
            FnDef::new("g", |_| Value::new(()))
                .param::<i64>("x")
                .rest("rest"),
        )
        .unwrap_err();
    assert!(matches!(err, ConfigurationError::Variadic { .. }));
}

#[test]
fn same_named_sets_in_different_scopes_do_not_interfere() {
    let mut overloads = Overloads::new();
    let parser = ScopeId::new("app::parser");
    let render = ScopeId::new("app::render");

    let in_parser = overloads
        .overload(
            parser,
            FnDef::new("emit", |_| Value::new("parsed")).param::<String>("x"),
        )
        .unwrap();
    let in_render = overloads
        .overload(
            render,
            FnDef::new("emit", |_| Value::new("rendered")).param::<i64>("x"),
        )
        .unwrap();

    // Each scope's dispatcher only knows its own variant.
    assert_eq!(in_parser.signatures(), vec!["emit(String) -> _"]);
    assert_eq!(in_render.signatures(), vec!["emit(i64) -> _"]);

    assert!(in_parser.call(args![1_i64]).is_err());
    let result = in_render.call(args![1_i64]).unwrap();
    assert_eq!(result.downcast::<&str>().unwrap(), "rendered");
}

#[test]
fn duplicate_signature_overwrites_the_implementation() {
    let mut overloads = Overloads::new();
    let registry = overloads.scope(scope!());

    registry
        .overload(FnDef::new("f", |_| Value::new("first")).param::<i64>("x"))
        .unwrap();
    let f = registry
        .overload(FnDef::new("f", |_| Value::new("second")).param::<i64>("x"))
        .unwrap();

    assert_eq!(f.len(), 1);
    let result = f.call(args![1_i64]).unwrap();
    assert_eq!(result.downcast::<&str>().unwrap(), "second");
}

#[test]
fn bool_and_int_are_distinct_parameter_types() {
    let mut overloads = Overloads::new();
    let registry = overloads.scope(scope!());

    registry
        .overload(FnDef::new("f", |_| Value::new("bool")).param::<bool>("x"))
        .unwrap();
    let f = registry
        .overload(FnDef::new("f", |_| Value::new("int")).param::<i64>("x"))
        .unwrap();

    let result = f.call(args![true]).unwrap();
    assert_eq!(result.downcast::<&str>().unwrap(), "bool");
    let result = f.call(args![0_i64]).unwrap();
    assert_eq!(result.downcast::<&str>().unwrap(), "int");
}

#[test]
fn results_pass_through_the_dispatcher_unchanged() {
    let mut overloads = Overloads::new();

    let concat = overloads
        .overload(
            scope!(),
            FnDef::new("concat", |mut args| {
                let b: String = args.remove(1).downcast().unwrap();
                let a: String = args.remove(0).downcast().unwrap();
                Value::new(format!("{a}{b}"))
            })
            .param::<String>("a")
            .param::<String>("b")
            .returns::<String>(),
        )
        .unwrap();

    let result = concat
        .call(args!["over".to_string(), "load".to_string()])
        .unwrap();
    assert_eq!(result.downcast::<String>().unwrap(), "overload");
}

#[test]
fn handles_taken_early_observe_later_registrations() {
    let mut overloads = Overloads::new();
    let registry = overloads.scope(scope!());

    let early = registry
        .overload(FnDef::new("f", |_| Value::new(1_i64)).param::<i64>("x"))
        .unwrap();
    assert!(early.call(args!["a".to_string()]).is_err());

    registry
        .overload(FnDef::new("f", |_| Value::new(2_i64)).param::<String>("x"))
        .unwrap();

    // The earlier handle now resolves the String variant too.
    let result = early.call(args!["a".to_string()]).unwrap();
    assert_eq!(result.downcast::<i64>().unwrap(), 2);
    assert_eq!(early.len(), 2);
}
