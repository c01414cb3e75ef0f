//! Room definition files: canonical content, file round trips, edge cases.

use qrescape::game::catalog::ContentCatalog;
use qrescape::game::errors::GameError;
use qrescape::game::seed::{
    canonical_room_seed, load_catalog_seed, write_catalog_seed, CatalogSeed, HintSeed,
};
use qrescape::game::types::ContentKind;
use tempfile::TempDir;

#[test]
fn canonical_room_matches_the_printed_signage() {
    let catalog = ContentCatalog::from_seed(canonical_room_seed());
    assert_eq!(catalog.len(), 10);
    assert_eq!(catalog.count_kind(ContentKind::Hint), 3);
    assert_eq!(catalog.count_kind(ContentKind::Riddle), 3);
    assert_eq!(catalog.count_kind(ContentKind::EasterEgg), 4);

    let expected = [
        ("pista1", "hint-1"),
        ("pista2", "hint-2"),
        ("pista3", "hint-3"),
        ("acertijo1", "riddle-1"),
        ("acertijo2", "riddle-2"),
        ("acertijo3", "riddle-3"),
        ("huevo1", "egg-1"),
        ("huevo2", "egg-2"),
        ("huevo3", "egg-3"),
        ("huevo4", "egg-4"),
    ];
    for (code, id) in expected {
        assert_eq!(
            catalog.lookup_content_id(code),
            Some(id),
            "code {} should map to {}",
            code,
            id
        );
    }

    assert_eq!(catalog.get("hint-1").expect("hint-1").title, "El Primer Paso");
    assert_eq!(
        catalog.get("riddle-1").expect("riddle-1").title,
        "El Enigma del Tiempo"
    );
    assert_eq!(
        catalog.get("egg-2").expect("egg-2").title,
        "El Gato de Schrödinger"
    );
}

#[test]
fn seed_file_round_trips_through_disk() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("rooms").join("room.json");

    write_catalog_seed(&path, &canonical_room_seed()).expect("write seed");
    let loaded = load_catalog_seed(&path).expect("load seed");

    let catalog = ContentCatalog::from_seed(loaded);
    assert_eq!(catalog.len(), 10);
    assert_eq!(catalog.lookup_content_id("pista1"), Some("hint-1"));
    let riddle = catalog.get("riddle-1").expect("riddle-1");
    assert!(riddle.answer_matches("reloj"));
}

#[test]
fn missing_seed_file_is_an_io_error() {
    let err = load_catalog_seed("no/such/room.json").expect_err("must fail");
    assert!(matches!(err, GameError::Io(_)));
}

#[test]
fn malformed_seed_file_names_the_path() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{\"hints\": [oops]}").expect("write broken file");

    match load_catalog_seed(&path).expect_err("must fail") {
        GameError::Seed { path: reported, .. } => {
            assert!(
                reported.ends_with("broken.json"),
                "error should carry the offending path, got {}",
                reported
            );
        }
        other => panic!("expected a seed parse error, got {:?}", other),
    }
}

#[test]
fn duplicate_ids_keep_the_last_entry() {
    let seed = CatalogSeed {
        hints: vec![
            HintSeed {
                id: "hint-1".to_string(),
                title: "Borrador".to_string(),
                content: "Primera versión.".to_string(),
            },
            HintSeed {
                id: "hint-1".to_string(),
                title: "Definitiva".to_string(),
                content: "Segunda versión.".to_string(),
            },
        ],
        ..CatalogSeed::default()
    };

    let catalog = ContentCatalog::from_seed(seed);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get("hint-1").expect("hint-1").title, "Definitiva");
}

#[test]
fn empty_document_is_a_valid_empty_room() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("empty.json");
    std::fs::write(&path, "{}").expect("write empty doc");

    let seed = load_catalog_seed(&path).expect("load");
    let catalog = ContentCatalog::from_seed(seed);
    assert!(catalog.is_empty());
    assert_eq!(catalog.lookup_content_id("pista1"), None);
}
