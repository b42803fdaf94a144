use hickory_proto::rr::{Name, Record};
use std::collections::HashMap;

use super::zone_matcher::ZoneMatcher;

/// Configured records to inject per zone.
///
/// Every stored record is owned by the zone it is stored under. Zones keep
/// the order in which they were first declared; records keep declaration
/// order across every block that named the zone. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct DelegationTable {
    zones: Vec<Name>,
    records: HashMap<Name, Vec<Record>>,
}

impl DelegationTable {
    pub fn builder() -> DelegationTableBuilder {
        DelegationTableBuilder::default()
    }

    pub fn zones(&self) -> &[Name] {
        &self.zones
    }

    /// Records configured for `zone`; empty when the zone is unknown.
    pub fn records(&self, zone: &Name) -> &[Record] {
        self.records.get(zone).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_zone(&self, zone: &Name) -> bool {
        self.records.contains_key(zone)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, &[Record])> {
        self.zones.iter().map(move |zone| (zone, self.records(zone)))
    }

    pub fn matcher(&self) -> ZoneMatcher<'_> {
        ZoneMatcher::new(&self.zones)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }
}

#[derive(Debug, Default)]
pub struct DelegationTableBuilder {
    table: DelegationTable,
}

impl DelegationTableBuilder {
    /// Appends `records` to `zone`, stamping each with the zone as owner.
    ///
    /// Naming a zone again extends its list instead of replacing it. A zone
    /// named with no records is still registered and matches.
    pub fn append<I>(&mut self, zone: &Name, records: I) -> &mut Self
    where
        I: IntoIterator<Item = Record>,
    {
        let mut zone = zone.to_lowercase();
        zone.set_fqdn(true);

        if !self.table.records.contains_key(&zone) {
            self.table.zones.push(zone.clone());
        }

        let entry = self.table.records.entry(zone.clone()).or_default();
        entry.extend(
            records
                .into_iter()
                .map(|record| Record::from_rdata(zone.clone(), record.ttl(), record.data().clone())),
        );
        self
    }

    pub fn build(self) -> DelegationTable {
        self.table
    }
}
