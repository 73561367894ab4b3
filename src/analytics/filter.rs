//! List filtering: a free-text query ANDed with categorical facets.

/// Selects one text field of a record for the search box.
pub type SearchField<T> = fn(&T) -> &str;

/// A categorical filter selection. `All` is the "filter inactive" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Choice<V> {
    #[default]
    All,
    Only(V),
}

impl<V: PartialEq> Choice<V> {
    pub fn admits(&self, value: &V) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(v) => v == value,
        }
    }
}

/// One categorical filter over a record type.
pub trait Facet<T> {
    fn admits(&self, record: &T) -> bool;
}

/// A facet comparing one field of the record against a [`Choice`].
pub struct FieldFacet<T, V> {
    pub choice: Choice<V>,
    pub field: fn(&T) -> V,
}

impl<T, V> FieldFacet<T, V> {
    pub fn new(choice: Choice<V>, field: fn(&T) -> V) -> Self {
        Self { choice, field }
    }
}

impl<T, V: PartialEq> Facet<T> for FieldFacet<T, V> {
    fn admits(&self, record: &T) -> bool {
        self.choice.admits(&(self.field)(record))
    }
}

/// True when `query` is empty or is a case-insensitive substring of at least
/// one of `fields`. Whitespace counts as part of the query.
pub fn matches<T>(record: &T, query: &str, fields: &[SearchField<T>]) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields
        .iter()
        .any(|field| field(record).to_lowercase().contains(&needle))
}

/// Keeps the records that match the query and every facet, in input order.
pub fn filter_records<'a, T>(
    records: &'a [T],
    query: &str,
    fields: &[SearchField<T>],
    facets: &[&dyn Facet<T>],
) -> Vec<&'a T> {
    records
        .iter()
        .filter(|r| matches(*r, query, fields) && facets.iter().all(|f| f.admits(r)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: String,
        tag: u8,
    }

    const BY_NAME: [SearchField<Row>; 1] = [|r| r.name.as_str()];

    fn rows(names: &[(&str, u8)]) -> Vec<Row> {
        names
            .iter()
            .map(|(n, t)| Row {
                name: n.to_string(),
                tag: *t,
            })
            .collect()
    }

    #[test]
    fn query_is_case_insensitive() {
        let data = rows(&[("Acme Corp", 0), ("TechFlow AI", 1), ("NeuralBase", 0)]);
        let hits = filter_records(&data, "ACME", &BY_NAME, &[]);
        assert_eq!(hits, vec![&data[0]]);
        let hits = filter_records(&data, "bAsE", &BY_NAME, &[]);
        assert_eq!(hits, vec![&data[2]]);
    }

    #[test]
    fn whitespace_is_part_of_the_query() {
        let data = rows(&[("Acme Corp", 0), ("NeuralBase", 0)]);
        assert!(filter_records(&data, "   ", &BY_NAME, &[]).is_empty());
        assert!(filter_records(&data, "corp ", &BY_NAME, &[]).is_empty());
        assert_eq!(filter_records(&data, "corp", &BY_NAME, &[]), vec![&data[0]]);
        assert_eq!(filter_records(&data, "e c", &BY_NAME, &[]), vec![&data[0]]);
    }

    #[test]
    fn choice_admits_by_sentinel_or_equality() {
        assert!(Choice::<u8>::All.admits(&3));
        assert!(Choice::Only(3u8).admits(&3));
        assert!(!Choice::Only(3u8).admits(&2));
        assert_eq!(Choice::<u8>::default(), Choice::All);
    }

    #[test]
    fn facets_and_query_combine_with_and() {
        let data = rows(&[("alpha", 0), ("alpine", 1), ("beta", 1)]);
        let tag = FieldFacet::new(Choice::Only(1), |r: &Row| r.tag);
        let hits = filter_records(&data, "al", &BY_NAME, &[&tag]);
        assert_eq!(hits, vec![&data[1]]);
    }

    #[test]
    fn empty_result_is_representable() {
        let data = rows(&[("alpha", 0)]);
        assert!(filter_records(&data, "zzz", &BY_NAME, &[]).is_empty());
    }

    fn row_strategy() -> impl Strategy<Value = Row> {
        ("[a-zA-Z ]{0,12}", 0u8..4).prop_map(|(name, tag)| Row { name, tag })
    }

    proptest! {
        #[test]
        fn empty_query_without_facets_is_identity(data in proptest::collection::vec(row_strategy(), 0..20)) {
            let all = Choice::All;
            let tag = FieldFacet::new(all, |r: &Row| r.tag);
            let hits = filter_records(&data, "", &BY_NAME, &[&tag]);
            let expected: Vec<&Row> = data.iter().collect();
            prop_assert_eq!(hits, expected);
        }

        #[test]
        fn excluded_rows_fail_query_or_facet(
            data in proptest::collection::vec(row_strategy(), 0..20),
            query in "[a-z]{1,3}",
            wanted in 0u8..4,
        ) {
            let tag = FieldFacet::new(Choice::Only(wanted), |r: &Row| r.tag);
            let hits = filter_records(&data, &query, &BY_NAME, &[&tag]);
            for row in &data {
                let text_hit = row.name.to_lowercase().contains(&query);
                let kept = hits.iter().any(|h| std::ptr::eq(*h, row));
                prop_assert_eq!(kept, text_hit && row.tag == wanted);
            }
        }
    }
}
