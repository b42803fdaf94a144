use hickory_proto::rr::Name;

/// Number of labels in `name`, the root label excluded.
pub fn label_count(name: &Name) -> usize {
    name.iter().count()
}

/// Finds the configured zone whose apex is exactly a given owner name.
///
/// A zone matches when it has as many labels as the owner and is a suffix of
/// it (labels compared case-insensitively). Delegations deeper inside a zone
/// do not match it. Zones are tried in configuration order and the first
/// match wins; overlapping configuration is not ranked.
#[derive(Debug, Clone, Copy)]
pub struct ZoneMatcher<'a> {
    zones: &'a [Name],
}

impl<'a> ZoneMatcher<'a> {
    pub fn new(zones: &'a [Name]) -> Self {
        Self { zones }
    }

    pub fn find(&self, owner: &Name) -> Option<&'a Name> {
        let depth = label_count(owner);
        self.zones
            .iter()
            .find(|zone| label_count(zone) == depth && zone.zone_of(owner))
    }
}
