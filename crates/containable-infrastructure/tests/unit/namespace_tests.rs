//! Namespace Tests

use containable_domain::{Error, Key};
use containable_infrastructure::container::Container;

#[test]
fn test_registers_namespaced_dependency() {
    let container = Container::new();

    container
        .namespace(Key::symbol("one"), |one| {
            one.namespace(Key::symbol("two"), |two| two.register(Key::symbol("three"), 3_i32))
        })
        .unwrap();

    assert_eq!(container.keys().unwrap(), vec!["one.two.three".to_string()]);
    assert_eq!(*container.resolve_as::<i32>("one.two.three").unwrap(), 3);
}

#[test]
fn test_registers_multiple_namespaced_dependencies() {
    let container = Container::new();

    container
        .namespace("one", |one| {
            one.namespace("two", |two| two.register("three", 3_i32))?;
            one.namespace("four", |four| four.register("five", 5_i32))
        })
        .unwrap();

    assert_eq!(
        container.keys().unwrap(),
        vec!["one.two.three".to_string(), "one.four.five".to_string()]
    );
}

#[test]
fn test_top_level_siblings_do_not_leak() {
    let container = Container::new();

    container
        .namespace("a", |a| a.namespace("b", |b| b.register("c", 3_i32)))
        .unwrap();
    container
        .namespace("d", |d| d.register("e", 5_i32))
        .unwrap();

    assert_eq!(
        container.keys().unwrap(),
        vec!["a.b.c".to_string(), "d.e".to_string()]
    );
    assert_eq!(*container.resolve_as::<i32>("d.e").unwrap(), 5);
}

#[test]
fn test_empty_block_registers_nothing() {
    let container = Container::new();

    container.namespace("one", |_| Ok(())).unwrap();
    container.register("two", 2_i32).unwrap();

    assert_eq!(container.keys().unwrap(), vec!["two".to_string()]);
}

#[test]
fn test_failed_block_closes_namespace() {
    let container = Container::new();
    container.register("taken", 1_i32).unwrap();

    let error = container
        .namespace("outer", |outer| {
            outer.register("ok", 1_i32)?;
            outer.namespace("", |_| Err(Error::internal("stop")))
        })
        .unwrap_err();
    assert!(matches!(error, Error::Internal { .. }));

    container.register("after", 2_i32).unwrap();
    assert!(container.contains_key("after").unwrap());
    assert!(container.contains_key("outer.ok").unwrap());
}

#[test]
fn test_duplicate_inside_namespace_reports_local_key() {
    let container = Container::new();
    container
        .namespace("db", |db| db.register(Key::symbol("url"), "a"))
        .unwrap();

    let error = container
        .namespace("db", |db| db.register(Key::symbol("url"), "b"))
        .unwrap_err();

    assert_eq!(error.to_string(), "Dependency is already registered: :url.");
}

#[test]
fn test_custom_separator() {
    let container = Container::builder().separator("/").build();

    container
        .namespace("http", |http| http.register("port", 80_u16))
        .unwrap();

    assert!(container.contains_key("http/port").unwrap());
}
