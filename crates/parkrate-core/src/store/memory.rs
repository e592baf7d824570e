// ── In-memory rate table ──
//
// Lock-free reads over an `ArcSwap`ed table. A replacement is built in
// full off to the side, then installed with one pointer swap; readers
// keep whichever table they loaded until they finish scanning.

use std::sync::Arc;

use arc_swap::ArcSwap;
use chrono::{DateTime, FixedOffset};

use super::{RateStore, TimeBasis};
use crate::error::RangeError;
use crate::model::RateRule;
use crate::validate::validate_range;

/// Process-local rate table. Nothing survives a restart.
pub struct InMemoryRateStore {
    table: ArcSwap<Vec<RateRule>>,
    basis: TimeBasis,
}

impl InMemoryRateStore {
    /// Empty table, wall-clock matching.
    pub fn new() -> Self {
        Self::with_basis(TimeBasis::default())
    }

    pub fn with_basis(basis: TimeBasis) -> Self {
        Self {
            table: ArcSwap::from_pointee(Vec::new()),
            basis,
        }
    }

    pub fn basis(&self) -> TimeBasis {
        self.basis
    }

    pub fn len(&self) -> usize {
        self.table.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.load().is_empty()
    }
}

impl Default for InMemoryRateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RateStore for InMemoryRateStore {
    fn set_rates(&self, rules: &[RateRule]) {
        let table = Arc::new(rules.to_vec());
        tracing::debug!(rules = table.len(), "installing rate table");
        self.table.store(table);
    }

    fn get_rate_for_time_range(
        &self,
        start: &DateTime<FixedOffset>,
        end: &DateTime<FixedOffset>,
    ) -> Result<Option<RateRule>, RangeError> {
        validate_range(start, end)?;

        let table = self.table.load();
        let found = table
            .iter()
            .find(|rule| self.basis.covers(rule, start, end))
            .copied();

        tracing::debug!(%start, %end, price = found.map(|r| r.price()), "rate lookup");
        Ok(found)
    }

    fn rules(&self) -> Vec<RateRule> {
        self.table.load().to_vec()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::convert::parse_definitions;
    use crate::model::RateDefinition;
    use pretty_assertions::assert_eq;

    fn ts(raw: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(raw).unwrap()
    }

    fn initial_definitions() -> Vec<RateDefinition> {
        vec![
            RateDefinition::new("mon,tues,thurs", "0900-2100", "America/Chicago", 1500),
            RateDefinition::new("fri,sat,sun", "0900-2100", "America/Chicago", 2000),
            RateDefinition::new("wed", "0600-1800", "America/Chicago", 1750),
            RateDefinition::new("mon,wed,sat", "0100-0500", "America/Chicago", 1000),
            RateDefinition::new("sun,tues", "0100-0700", "America/Chicago", 925),
        ]
    }

    fn seeded(basis: TimeBasis) -> InMemoryRateStore {
        let store = InMemoryRateStore::with_basis(basis);
        store.set_rates(&parse_definitions(&initial_definitions()).unwrap());
        store
    }

    fn price(store: &InMemoryRateStore, start: &str, end: &str) -> Option<u64> {
        store
            .get_rate_for_time_range(&ts(start), &ts(end))
            .unwrap()
            .map(|r| r.price())
    }

    #[test]
    fn starts_empty() {
        let store = InMemoryRateStore::new();
        assert!(store.is_empty());
        assert_eq!(
            store
                .get_rate_for_time_range(&ts("2015-07-01T07:00:00-05:00"), &ts("2015-07-01T12:00:00-05:00"))
                .unwrap(),
            None
        );
    }

    #[test]
    fn matches_wednesday_rate() {
        let store = seeded(TimeBasis::WallClock);
        assert_eq!(
            price(&store, "2015-07-01T07:00:00-05:00", "2015-07-01T12:00:00-05:00"),
            Some(1750)
        );
    }

    #[test]
    fn matches_saturday_rate_by_wall_clock() {
        let store = seeded(TimeBasis::WallClock);
        assert_eq!(
            price(&store, "2015-07-04T15:00:00+00:00", "2015-07-04T20:00:00+00:00"),
            Some(2000)
        );
    }

    #[test]
    fn interval_outside_every_rule_is_unavailable() {
        let store = seeded(TimeBasis::WallClock);
        assert_eq!(price(&store, "2015-07-04T07:00:00+05:00", "2015-07-04T20:00:00+05:00"), None);
    }

    #[test]
    fn interval_spanning_two_rules_matches_neither() {
        let store = seeded(TimeBasis::WallClock);
        // Wednesday 0100-0500 and 0600-1800 are both on the table.
        assert_eq!(price(&store, "2015-07-01T04:00:00-05:00", "2015-07-01T07:00:00-05:00"), None);
    }

    #[test]
    fn rule_edges_are_accepted() {
        let store = seeded(TimeBasis::WallClock);
        assert_eq!(
            price(&store, "2015-07-01T06:00:00-05:00", "2015-07-01T18:00:00-05:00"),
            Some(1750)
        );
        assert_eq!(price(&store, "2015-07-01T06:00:00-05:00", "2015-07-01T18:00:01-05:00"), None);
    }

    #[test]
    fn validation_errors_propagate() {
        let store = seeded(TimeBasis::WallClock);
        assert_eq!(
            store.get_rate_for_time_range(&ts("2015-07-01T13:00:00-05:00"), &ts("2015-07-01T12:00:00-05:00")),
            Err(RangeError::StartAfterEnd)
        );
        assert_eq!(
            store.get_rate_for_time_range(&ts("2015-07-01T13:00:00-05:00"), &ts("2015-07-02T15:00:00-05:00")),
            Err(RangeError::CrossDateRange)
        );
    }

    #[test]
    fn first_rule_in_table_order_wins() {
        let store = InMemoryRateStore::new();
        let rules = parse_definitions(&[
            RateDefinition::new("mon", "0800-2000", "UTC", 300),
            RateDefinition::new("mon", "0900-1000", "UTC", 100),
        ])
        .unwrap();
        store.set_rates(&rules);
        assert_eq!(
            price(&store, "2015-07-06T09:15:00+00:00", "2015-07-06T09:45:00+00:00"),
            Some(300)
        );
    }

    #[test]
    fn set_rates_replaces_whole_table() {
        let store = seeded(TimeBasis::WallClock);
        let replacement = parse_definitions(&[RateDefinition::new("sat", "0900-2100", "America/Chicago", 1000)]).unwrap();
        store.set_rates(&replacement);

        assert_eq!(store.rules(), replacement);
        assert_eq!(price(&store, "2015-07-01T07:00:00-05:00", "2015-07-01T12:00:00-05:00"), None);
        assert_eq!(
            price(&store, "2015-07-04T15:00:00+00:00", "2015-07-04T20:00:00+00:00"),
            Some(1000)
        );
    }

    #[test]
    fn set_rates_copies_input() {
        let store = InMemoryRateStore::new();
        let mut rules = parse_definitions(&[RateDefinition::new("mon", "0900-1000", "UTC", 100)]).unwrap();
        store.set_rates(&rules);
        rules.clear();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn round_trip_returns_defined_price() {
        let store = InMemoryRateStore::new();
        store.set_rates(&parse_definitions(&[RateDefinition::new("fri", "1130-1400", "Europe/Paris", 450)]).unwrap());
        assert_eq!(
            price(&store, "2015-07-03T11:30:00+02:00", "2015-07-03T13:59:00+02:00"),
            Some(450)
        );
    }

    #[test]
    fn rule_zone_basis_converts_query_into_rule_zone() {
        // 15:00-20:00 UTC on 2015-07-04 is 10:00-15:00 in Chicago (CDT, -05:00).
        let store = InMemoryRateStore::with_basis(TimeBasis::RuleZone);
        store.set_rates(&parse_definitions(&[RateDefinition::new("sat", "1000-1500", "America/Chicago", 2000)]).unwrap());
        assert_eq!(
            price(&store, "2015-07-04T15:00:00+00:00", "2015-07-04T20:00:00+00:00"),
            Some(2000)
        );

        let wall = InMemoryRateStore::new();
        assert_eq!(store.basis(), TimeBasis::RuleZone);
        assert_eq!(wall.basis(), TimeBasis::WallClock);
        wall.set_rates(&store.rules());
        assert_eq!(price(&wall, "2015-07-04T15:00:00+00:00", "2015-07-04T20:00:00+00:00"), None);
    }

    #[test]
    fn rule_zone_basis_rejects_interval_crossing_local_midnight() {
        // 03:00-06:00 UTC is 22:00 Friday to 01:00 Saturday in Chicago.
        let store = InMemoryRateStore::with_basis(TimeBasis::RuleZone);
        store.set_rates(&parse_definitions(&[RateDefinition::new("fri", "0000-2359", "America/Chicago", 10)]).unwrap());
        assert_eq!(price(&store, "2015-07-04T03:00:00+00:00", "2015-07-04T06:00:00+00:00"), None);
    }

    #[test]
    fn readers_never_observe_a_mixed_table() {
        use std::thread;

        let store = Arc::new(InMemoryRateStore::new());
        let table_a = parse_definitions(&[RateDefinition::new("mon,tues,wed,thurs,fri,sat,sun", "0000-2359", "UTC", 1)]).unwrap();
        let table_b = parse_definitions(&[RateDefinition::new("mon,tues,wed,thurs,fri,sat,sun", "0000-2359", "UTC", 2)]).unwrap();
        store.set_rates(&table_a);

        let writer = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..500 {
                    store.set_rates(if i % 2 == 0 { &table_b } else { &table_a });
                }
            })
        };

        for _ in 0..500 {
            let snapshot = store.rules();
            assert_eq!(snapshot.len(), 7);
            let first = snapshot[0].price();
            assert!(snapshot.iter().all(|r| r.price() == first));
        }
        writer.join().unwrap();
    }
}
