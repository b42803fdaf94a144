use hickory_proto::op::Message;
use hickory_proto::rr::{Name, RecordType};
use std::sync::Arc;
use tracing::{debug, trace};

use super::delegation_table::DelegationTable;

/// What [`ResponseAugmentor::augment`] did to a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Augmentation {
    /// Authority section was empty; nothing was inspected.
    EmptyAuthority,
    /// Authority section holds no NS record.
    NoDelegation,
    /// The first NS record's owner is not a configured zone apex.
    Unmatched { owner: Name },
    /// `records` configured records of `zone` were appended.
    Injected {
        zone: Name,
        owner: Name,
        records: usize,
    },
}

impl Augmentation {
    pub fn is_injected(&self) -> bool {
        matches!(self, Self::Injected { .. })
    }
}

/// Appends configured records to referrals for configured zones.
pub struct ResponseAugmentor {
    table: Arc<DelegationTable>,
}

impl ResponseAugmentor {
    pub fn new(table: Arc<DelegationTable>) -> Self {
        Self { table }
    }

    /// Inspects the authority section of `response` and, when its first NS
    /// record is owned by a configured zone apex, appends that zone's records
    /// after the existing ones.
    ///
    /// The first NS record decides for the whole section: the section is
    /// assumed to carry a single delegation, so an unmatched first NS ends the
    /// scan even if a later NS record has a different, configured owner.
    /// Records are injected as stored, owned by the zone itself.
    ///
    /// Calling this twice on one message injects twice.
    pub fn augment(&self, response: &mut Message) -> Augmentation {
        if response.name_servers().is_empty() {
            return Augmentation::EmptyAuthority;
        }

        let Some(delegation) = response
            .name_servers()
            .iter()
            .find(|record| record.record_type() == RecordType::NS)
        else {
            return Augmentation::NoDelegation;
        };

        let owner = delegation.name().clone();
        let Some(zone) = self.table.matcher().find(&owner) else {
            trace!(owner = %owner, "Delegation owner is not a configured zone");
            return Augmentation::Unmatched { owner };
        };

        let records = self.table.records(zone);
        if !records.is_empty() {
            response.add_name_servers(records.iter().cloned());
        }

        debug!(
            zone = %zone,
            owner = %owner,
            records = records.len(),
            "Injected delegation records"
        );

        Augmentation::Injected {
            zone: zone.clone(),
            owner,
            records: records.len(),
        }
    }
}
