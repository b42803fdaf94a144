mod helpers;

use deleg_dns_domain::{Config, ConfigError};
use deleg_dns_infrastructure::dns::{DelegationTableLoader, DelegationTableStore};
use helpers::builders::{block, name};

fn config(toml: &str) -> Config {
    Config::from_toml(toml).unwrap()
}

#[test]
fn test_default_store_is_empty() {
    let store = DelegationTableStore::default();
    assert!(store.load().is_empty());
}

#[test]
fn test_publish_replaces_table_but_not_snapshots() {
    let store = DelegationTableStore::default();
    let before = store.load();

    let table = DelegationTableLoader::from_blocks(
        &[block(&["example.org."], &["example.org. TXT hello"])],
        &[".".to_string()],
    )
    .unwrap();
    store.publish(table);

    assert!(before.is_empty());
    assert!(store.load().contains_zone(&name("example.org.")));
}

#[test]
fn test_reload_publishes_new_table() {
    let store = DelegationTableStore::from_config(&config(
        r#"
[[deleg]]
zones = ["example.org."]
responses = ["example.org. TXT one"]
"#,
    ))
    .unwrap();

    store
        .reload(&config(
            r#"
[[deleg]]
zones = ["example.com."]
responses = ["example.com. TXT two"]
"#,
        ))
        .unwrap();

    let table = store.load();
    assert!(!table.contains_zone(&name("example.org.")));
    assert_eq!(table.records(&name("example.com.")).len(), 1);
}

#[test]
fn test_failed_reload_keeps_current_table() {
    let store = DelegationTableStore::from_config(&config(
        r#"
[[deleg]]
zones = ["example.org."]
responses = ["example.org. TXT one"]
"#,
    ))
    .unwrap();

    let result = store.reload(&config(
        r#"
[[deleg]]
zones = ["example.org."]
responses = ["example.org. TXT one", "example.org. A nope"]
"#,
    ));

    assert!(matches!(result, Err(ConfigError::RecordSyntax { .. })));
    assert_eq!(store.load().records(&name("example.org.")).len(), 1);
}
