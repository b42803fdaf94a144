mod helpers;

use deleg_dns_application::services::DelegationTable;
use helpers::{name, txt};

#[test]
fn test_repeated_zone_concatenates_in_declaration_order() {
    let mut builder = DelegationTable::builder();
    builder.append(&name("example.net."), vec![txt("example.net.", "first")]);
    builder.append(&name("example.org."), vec![txt("example.org.", "other")]);
    builder.append(
        &name("example.net."),
        vec![txt("example.net.", "second"), txt("example.net.", "third")],
    );
    let table = builder.build();

    assert_eq!(
        table.records(&name("example.net.")),
        &[
            txt("example.net.", "first"),
            txt("example.net.", "second"),
            txt("example.net.", "third"),
        ]
    );
    assert_eq!(table.len(), 2);
    assert_eq!(table.record_count(), 4);
}

#[test]
fn test_zones_keep_first_declaration_order() {
    let mut builder = DelegationTable::builder();
    builder.append(&name("example.org."), vec![]);
    builder.append(&name("example.com."), vec![]);
    builder.append(&name("example.org."), vec![txt("example.org.", "late")]);
    let table = builder.build();

    assert_eq!(table.zones(), &[name("example.org."), name("example.com.")]);
}

#[test]
fn test_every_record_is_owned_by_its_zone() {
    let mut builder = DelegationTable::builder();
    builder.append(
        &name("example.org."),
        vec![txt("a.example.com.", "one"), txt("b.example.net.", "two")],
    );
    let table = builder.build();

    for (zone, records) in table.iter() {
        for record in records {
            assert_eq!(record.name(), zone);
        }
    }
}

#[test]
fn test_zone_lookup_ignores_case() {
    let mut builder = DelegationTable::builder();
    builder.append(&name("example.org."), vec![txt("example.org.", "x")]);
    let table = builder.build();

    assert!(table.contains_zone(&name("EXAMPLE.ORG.")));
    assert_eq!(table.records(&name("Example.Org.")).len(), 1);
}
