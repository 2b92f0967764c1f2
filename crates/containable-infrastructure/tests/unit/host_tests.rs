//! Container host Tests

use containable_domain::Error;
use containable_infrastructure::container::{Container, ContainerHost};

static PRIMARY: ContainerHost = ContainerHost::new("primary");
static SECONDARY: ContainerHost = ContainerHost::new("secondary");
static EMPTY: ContainerHost = ContainerHost::new("empty");

#[test]
fn test_attach_once() {
    let container = PRIMARY.attach(Container::new()).unwrap();
    container.register("port", 8080_u16).unwrap();

    let attached = PRIMARY.get().unwrap();
    assert_eq!(*attached.resolve_as::<u16>("port").unwrap(), 8080);
    assert!(PRIMARY.is_attached());
}

#[test]
fn test_second_attach_is_invalid_host() {
    SECONDARY.attach(Container::new()).unwrap();

    let error = SECONDARY.attach(Container::new()).unwrap_err();

    assert!(matches!(error, Error::InvalidHost { .. }));
    assert!(error.to_string().contains("secondary"));
}

#[test]
fn test_unattached_host() {
    assert!(EMPTY.get().is_none());
    assert!(!EMPTY.is_attached());
    assert_eq!(EMPTY.name(), "empty");
}
