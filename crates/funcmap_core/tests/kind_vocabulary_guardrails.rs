use std::collections::HashMap;

use funcmap_core::kinds::{self, Kind};

#[test]
fn kind_spellings_unique_and_resolvable() {
    let mut seen: HashMap<String, Kind> = HashMap::new();

    for info in kinds::KINDS {
        assert_eq!(
            kinds::from_str(info.canonical),
            Some(info.id),
            "kind canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            kinds::as_str(info.id),
            info.canonical,
            "kind as_str mismatch for {:?}",
            info.id
        );
        assert!(!info.description.is_empty(), "kind {:?} has no description", info.id);

        // Lookup is case-insensitive, so uniqueness is checked on lowercased spellings.
        if let Some(prev) = seen.insert(info.canonical.to_ascii_lowercase(), info.id) {
            panic!(
                "duplicate kind spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }

        for &alias in kinds::aliases(info.id) {
            assert_eq!(
                kinds::from_str(alias),
                Some(info.id),
                "kind alias not resolvable: {}",
                alias
            );
            if let Some(prev) = seen.insert(alias.to_ascii_lowercase(), info.id) {
                panic!("duplicate kind alias spelling {:?}: {:?} and {:?}", alias, prev, info.id);
            }
        }
    }
}

#[test]
fn every_kind_has_exactly_one_entry() {
    let all = [
        Kind::Bool,
        Kind::Int64,
        Kind::Float64,
        Kind::String,
        Kind::Sequence,
        Kind::Any,
    ];
    assert_eq!(kinds::KINDS.len(), all.len());
    for kind in all {
        let count = kinds::KINDS.iter().filter(|info| info.id == kind).count();
        assert_eq!(count, 1, "expected exactly one KINDS entry for {kind:?}");
    }
}

#[test]
fn kind_spellings_work_as_literal_prefixes() {
    use funcmap_core::literal::parse_literal;

    for info in kinds::KINDS {
        let forced = parse_literal(&format!("{}:1", info.canonical));
        match info.id {
            Kind::Sequence => assert!(forced.is_err()),
            Kind::Bool => assert!(forced.is_err(), "`1` is not a bool literal"),
            _ => assert!(forced.is_ok(), "prefix {} rejected", info.canonical),
        }
    }
}
