#![allow(clippy::unwrap_used, clippy::expect_used)]

use modedit_core::errors::ExErrorKind;
use modedit_core::sources::{resolve_path, resolve_source};
use modedit_core::FileSourceDescriptor;
use proptest::prelude::*;

fn invalid(name: &str, path: &str) -> FileSourceDescriptor {
    FileSourceDescriptor::from_checks(name, path, vec![format!("File '{}' does not exist.", path)])
}

#[test]
fn test_invalid_then_two_valid_picks_first_valid() {
    let sources = vec![
        invalid("X", "/x.json"),
        FileSourceDescriptor::valid("A", "/a.json"),
        FileSourceDescriptor::valid("B", "/b.json"),
    ];
    let chosen = resolve_source(&sources, None).unwrap();
    assert_eq!(chosen.name(), "A");
}

#[test]
fn test_invalid_source_error_carries_descriptor_message() {
    let sources = vec![invalid("X", "/x.json")];
    let err = resolve_source(&sources, Some("/x.json")).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidSource);
    assert_eq!(
        err.message(),
        "File source 'X' is invalid: File '/x.json' does not exist."
    );
}

#[test]
fn test_path_match_is_exact() {
    let sources = vec![FileSourceDescriptor::valid("A", "/a.json")];
    for near_miss in ["/a.json ", "/A.json", "a.json", "/a.json/"] {
        let err = resolve_path(&sources, Some(near_miss)).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::NotFound, "{near_miss:?}");
    }
}

fn descriptor_list() -> impl Strategy<Value = Vec<FileSourceDescriptor>> {
    prop::collection::vec((0u8..4, any::<bool>()), 0..8).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (slot, valid))| {
                // A small path space so duplicates show up
                let path = format!("/sources/{}.json", slot);
                let name = format!("S{}", i);
                if valid {
                    FileSourceDescriptor::valid(name, path)
                } else {
                    invalid(&name, &path)
                }
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_default_is_first_valid(sources in descriptor_list()) {
        match sources.iter().position(|d| d.is_valid()) {
            Some(idx) => {
                let chosen = resolve_source(&sources, None).unwrap();
                prop_assert_eq!(chosen, &sources[idx]);
            }
            None => {
                let err = resolve_source(&sources, None).unwrap_err();
                prop_assert_eq!(err.kind(), ExErrorKind::NoDefaultSource);
            }
        }
    }

    #[test]
    fn prop_explicit_request_uses_first_match_only(
        sources in descriptor_list(),
        slot in 0u8..5,
    ) {
        let requested = format!("/sources/{}.json", slot);
        let result = resolve_source(&sources, Some(&requested));

        match sources.iter().find(|d| d.path() == requested) {
            None => prop_assert_eq!(result.unwrap_err().kind(), ExErrorKind::NotFound),
            Some(first) if !first.is_valid() => {
                prop_assert_eq!(result.unwrap_err().kind(), ExErrorKind::InvalidSource)
            }
            Some(first) => prop_assert!(std::ptr::eq(result.unwrap(), first)),
        }
    }
}
