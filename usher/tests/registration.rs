//! Registration shape tests: keyed entries, tables, batches, derived keys,
//! and the permissive no-op arm.

use serde_json::json;
use std::collections::HashMap;
use usher::{
    Config, Controllers, Descriptor, Registration, controller, controllers,
    testing::StaticController, underscore,
};

mod common;
use common::{Hello, Ola};

#[test]
fn registers_a_type_under_its_derived_key() {
    let controllers = Controllers::new();
    controllers.register(controller!(Hello));

    assert!(controllers.contains("hello"));
    assert_eq!(controllers.len(), 1);
}

#[test]
fn derived_key_registration_matches_explicit_normalization() {
    let derived = Controllers::new();
    derived.register(controller!(Hello));

    let explicit = Controllers::new();
    explicit.register((underscore("Hello").as_str(), Descriptor::construct::<Hello>()));

    assert!(derived.contains("hello"));
    assert!(explicit.contains("hello"));
    assert_eq!(derived.len(), explicit.len());
}

#[test]
fn registers_under_an_explicit_key() {
    let controllers = Controllers::new();
    controllers.register(("hi", Descriptor::construct::<Hello>()));

    assert!(controllers.contains("hi"));
    assert!(!controllers.contains("hello"));
}

#[test]
fn batch_registration_equals_sequential_registration() {
    let batch = Controllers::new();
    batch.register(controllers![Hello, Ola]);

    let sequential = Controllers::new();
    sequential.register(controller!(Hello));
    sequential.register(controller!(Ola));

    for registry in [&batch, &sequential] {
        assert!(registry.contains("hello"));
        assert!(registry.contains("ola"));
        assert_eq!(registry.len(), 2);
    }
}

#[test]
fn table_registration_merges_and_overwrites() {
    let controllers = Controllers::new();
    controllers.register(("hello", Descriptor::construct::<Hello>()));

    let mut table = HashMap::new();
    table.insert(
        "hello".to_string(),
        Descriptor::value(StaticController::new(json!("replaced"))),
    );
    table.insert(
        "static".to_string(),
        Descriptor::value(StaticController::new(json!("fixed"))),
    );
    controllers.register(table);

    assert_eq!(controllers.len(), 2);

    // The overwritten entry answers with the replacement behavior.
    let mut scope: HashMap<String, usher::Value> = HashMap::new();
    let response = controllers.dispatch("hello#anything", &mut scope).unwrap();
    assert_eq!(response, json!("replaced"));
}

#[test]
fn reregistration_overwrites_the_same_key() {
    let controllers = Controllers::new();
    controllers.register(("greeter", Descriptor::value(StaticController::new(json!("first")))));
    controllers.register(("greeter", Descriptor::value(StaticController::new(json!("second")))));

    assert_eq!(controllers.len(), 1);

    let mut scope: HashMap<String, usher::Value> = HashMap::new();
    let response = controllers.dispatch("greeter#show", &mut scope).unwrap();
    assert_eq!(response, json!("second"));
}

#[test]
fn skip_registers_nothing() {
    let controllers = Controllers::new();
    controllers.register(());
    controllers.register(Registration::Skip);

    assert!(controllers.is_empty());
}

#[test]
fn nested_batches_register_recursively() {
    let controllers = Controllers::new();
    controllers.register(Registration::Batch(vec![
        Registration::Batch(vec![controller!(Hello).into()]),
        controller!(Ola).into(),
        Registration::Skip,
    ]));

    assert!(controllers.contains("hello"));
    assert!(controllers.contains("ola"));
    assert_eq!(controllers.len(), 2);
}

#[test]
fn configure_stores_the_reserved_args_default() {
    let controllers = Controllers::configure(Config::new().args(json!(["reserved"])));

    assert_eq!(controllers.default_args(), Some(&json!(["reserved"])));
}

#[test]
fn configure_applies_the_controllers_option() {
    let controllers = Controllers::configure(Config::new().controllers(controllers![Hello, Ola]));

    assert!(controllers.contains("hello"));
    assert!(controllers.contains("ola"));
}

#[test]
fn namespaced_type_paths_become_path_keys() {
    mod admin {
        pub use crate::common::Hello as UsersController;
    }

    let controllers = Controllers::new();
    controllers.register(controller!(admin::UsersController));

    assert!(controllers.contains("admin/users"));
}
