//! Overloading demo: a `log` function with three variants.
//!
//! Run with `cargo run --example logging`. Set `RUST_LOG=multifn=trace` to
//! watch registration and dispatch events.

use multifn::{args, scope, FnDef, Overloads, Value};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut overloads = Overloads::new();
    let registry = overloads.scope(scope!());

    registry
        .overload(
            FnDef::new("log", |mut args| {
                let msg: String = args.remove(0).downcast().unwrap();
                println!("{msg}");
                Value::new(())
            })
            .param::<String>("msg")
            .returns::<()>(),
        )
        .expect("log(msg) registers");

    registry
        .overload(
            FnDef::new("log", |mut args| {
                let level: i64 = args.remove(1).downcast().unwrap();
                let msg: String = args.remove(0).downcast().unwrap();
                println!("[{level}] {msg}");
                Value::new(())
            })
            .param::<String>("msg")
            .param::<i64>("level")
            .returns::<()>(),
        )
        .expect("log(msg, level: i64) registers");

    let log = registry
        .overload(
            FnDef::new("log", |mut args| {
                let level: String = args.remove(1).downcast().unwrap();
                let msg: String = args.remove(0).downcast().unwrap();
                println!("[{level}] {msg}");
                Value::new(())
            })
            .param::<String>("msg")
            .param::<String>("level")
            .returns::<()>(),
        )
        .expect("log(msg, level: String) registers");

    log.call(args!["Hello".to_string()]).unwrap();
    log.call(args!["Hello".to_string(), 1_i64]).unwrap();
    log.call(args!["Hello".to_string(), "INFO".to_string()])
        .unwrap();

    // A call with no matching variant reports the attempted tuple and every
    // registered signature.
    if let Err(err) = log.call(args![1_i64, 2_i64]) {
        eprintln!("{err}");
    }
}
