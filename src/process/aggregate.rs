use std::collections::BTreeMap;

use crate::process::date_parser::DateKey;

/// Number of records sharing one date key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountRow {
    pub key: DateKey,
    pub count: u64,
}

/// Group keys by equality and count them, ascending by key.
pub fn count_by_date<I>(keys: I) -> Vec<CountRow>
where
    I: IntoIterator<Item = DateKey>,
{
    let mut groups: BTreeMap<DateKey, u64> = BTreeMap::new();
    for key in keys {
        *groups.entry(key).or_default() += 1;
    }
    groups
        .into_iter()
        .map(|(key, count)| CountRow { key, count })
        .collect()
}
