//! Adjacent-pair sequencing over an ordered version list.
//!
//! The sequencer is deliberately dumb: no re-ordering, no filtering,
//! no deduplication. Duplicate or out-of-order input versions pass
//! through faithfully; validation is the caller's concern.

use crate::domain::{Version, VersionPair};

/// Lazily yield the consecutive pairs of `versions`.
///
/// N input versions produce exactly `max(N - 1, 0)` pairs, where the
/// i-th pair is `(versions[i], versions[i + 1])`. The first element is
/// only ever consumed as the initial "older" anchor. Zero- and
/// one-element sequences yield nothing.
pub fn consecutive_pairs(versions: &[Version]) -> impl Iterator<Item = VersionPair> + '_ {
    versions
        .windows(2)
        .map(|w| VersionPair::new(w[0].clone(), w[1].clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(name: &str) -> Version {
        Version::new(name, format!("/builds/{}", name))
    }

    #[test]
    fn test_three_versions_yield_two_ordered_pairs() {
        let versions = vec![version("A"), version("B"), version("C")];
        let pairs: Vec<VersionPair> = consecutive_pairs(&versions).collect();

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].older.name, "A");
        assert_eq!(pairs[0].newer.name, "B");
        assert_eq!(pairs[1].older.name, "B");
        assert_eq!(pairs[1].newer.name, "C");
    }

    #[test]
    fn test_pair_count_is_len_minus_one() {
        for n in 0usize..6 {
            let versions: Vec<Version> = (0..n).map(|i| version(&format!("v{}", i))).collect();
            let count = consecutive_pairs(&versions).count();
            assert_eq!(count, n.saturating_sub(1));
        }
    }

    #[test]
    fn test_empty_and_singleton_yield_nothing() {
        assert_eq!(consecutive_pairs(&[]).count(), 0);
        assert_eq!(consecutive_pairs(&[version("only")]).count(), 0);
    }

    #[test]
    fn test_duplicates_pass_through() {
        let versions = vec![version("A"), version("A"), version("B")];
        let pairs: Vec<VersionPair> = consecutive_pairs(&versions).collect();

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].older.name, "A");
        assert_eq!(pairs[0].newer.name, "A");
        assert_eq!(pairs[1].newer.name, "B");
    }

    #[test]
    fn test_sequencer_is_lazy() {
        let versions = vec![version("A"), version("B"), version("C"), version("D")];
        let first = consecutive_pairs(&versions).next().expect("first pair");
        assert_eq!(first.label(), "A-B");
    }
}
