use std::fs;

use tempfile::tempdir;

use wordseed::config::EngineConfig;
use wordseed::pool::{Lexicon, LexiconError, PoolError, WordPool};
use wordseed::seeding::SeedingOrchestrator;
use wordseed::store::MemorySeedStore;
use wordseed::SeedingError;

#[test]
fn fixture_pool_keeps_document_order() {
    let pool = WordPool::from_json_str(include_str!("fixtures/pool.json")).unwrap();
    assert_eq!(pool.version, "2025.10-fixture");

    let keys: Vec<&str> = pool.themes.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["harvest", "voyage"]);

    let harvest = pool.theme_at(0).unwrap();
    let slots: Vec<&str> = harvest.slots.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(slots, vec!["subject", "action", "setting", "mood"]);
}

#[test]
fn slot_order_is_not_alphabetical() {
    let pool = WordPool::from_json_str(
        r#"{"version": "1", "themes": {"z": {"name": "Z", "slots": {
            "zeta": {"words": ["a"], "clusters": ["a"]},
            "alpha": {"words": ["b"], "clusters": ["b"]}
        }}}}"#,
    )
    .unwrap();
    let slots: Vec<&str> = pool.themes[0].1.slots.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(slots, vec!["zeta", "alpha"]);
}

#[test]
fn flatten_dedupes_across_slots() {
    let pool = WordPool::from_json_str(
        r#"{"version": "1", "themes": {"t": {"name": "T", "slots": {
            "a": {"words": ["red", "blue"], "clusters": ["c1", "c2"]},
            "b": {"words": ["green", "red"], "clusters": ["c3", "c1"]}
        }}}}"#,
    )
    .unwrap();
    assert_eq!(pool.theme_at(0).unwrap().flatten(), vec!["red", "blue", "green"]);
}

#[test]
fn pool_requires_version_and_themes() {
    assert!(matches!(
        WordPool::from_json_str(r#"{"version": "", "themes": {"t": {"name": "T", "slots": {}}}}"#),
        Err(PoolError::MissingVersion)
    ));
    assert!(matches!(
        WordPool::from_json_str(r#"{"version": "1", "themes": {}}"#),
        Err(PoolError::NoThemes)
    ));
    assert!(matches!(
        WordPool::from_json_str(r#"{"themes": {}}"#),
        Err(PoolError::Json(_))
    ));
}

#[test]
fn pool_rejects_misaligned_slots() {
    let result = WordPool::from_json_str(
        r#"{"version": "1", "themes": {"t": {"name": "T", "slots": {
            "a": {"words": ["x", "y"], "clusters": ["c"]}
        }}}}"#,
    );
    match result {
        Err(PoolError::SlotLengthMismatch { slot, words, clusters, .. }) => {
            assert_eq!(slot, "a");
            assert_eq!((words, clusters), (2, 1));
        }
        other => panic!("expected slot length mismatch, got {other:?}"),
    }
}

#[test]
fn lexicon_requires_version_and_mappings() {
    assert!(matches!(
        Lexicon::from_json_str(r#"{"version": "", "mappings": {}}"#),
        Err(LexiconError::MissingVersion)
    ));
    assert!(matches!(
        Lexicon::from_json_str(r#"{"version": "1"}"#),
        Err(LexiconError::Json(_))
    ));

    let lexicon = Lexicon::from_json_str(include_str!("fixtures/lexicon.json")).unwrap();
    assert_eq!(lexicon.cluster_of("crow"), Some("birds"));
    assert_eq!(lexicon.cluster_of("unicorn"), None);
}

const SINGLE_SLOT_POOL: &str = r#"{"version": "1", "themes": {"t": {"name": "T", "slots": {
    "a": {"words": ["x"], "clusters": ["cx"]}
}}}}"#;

#[test]
fn check_lexicon_accepts_the_fixtures() {
    let pool = WordPool::from_json_str(include_str!("fixtures/pool.json")).unwrap();
    let lexicon = Lexicon::from_json_str(include_str!("fixtures/lexicon.json")).unwrap();
    pool.check_lexicon(&lexicon).unwrap();
}

#[test]
fn check_lexicon_rejects_unmapped_words() {
    let pool = WordPool::from_json_str(SINGLE_SLOT_POOL).unwrap();
    let lexicon = Lexicon::from_json_str(r#"{"version": "1", "mappings": {}}"#).unwrap();

    match pool.check_lexicon(&lexicon) {
        Err(PoolError::MissingLexiconEntry { theme, slot, word }) => {
            assert_eq!((theme.as_str(), slot.as_str(), word.as_str()), ("t", "a", "x"));
        }
        other => panic!("expected missing lexicon entry, got {other:?}"),
    }
}

#[test]
fn check_lexicon_rejects_cluster_disagreement() {
    let pool = WordPool::from_json_str(SINGLE_SLOT_POOL).unwrap();
    let lexicon = Lexicon::from_json_str(
        r#"{"version": "1", "mappings": {"x": {"canonical": "x", "slot": "a", "cluster": "other"}}}"#,
    )
    .unwrap();

    match pool.check_lexicon(&lexicon) {
        Err(PoolError::ClusterMismatch { word, slot_cluster, lexicon_cluster, .. }) => {
            assert_eq!(word, "x");
            assert_eq!(slot_cluster, "cx");
            assert_eq!(lexicon_cluster, "other");
        }
        other => panic!("expected cluster mismatch, got {other:?}"),
    }
}

#[test]
fn orchestrator_refuses_a_lexicon_that_could_repeat_words() {
    // With no entry for "x", slot coverage and diversity fill would both pick it.
    let pool = WordPool::from_json_str(SINGLE_SLOT_POOL).unwrap();
    let lexicon = Lexicon::from_json_str(r#"{"version": "1", "mappings": {}}"#).unwrap();

    match SeedingOrchestrator::new("s", pool, lexicon, MemorySeedStore::new()) {
        Err(SeedingError::Configuration(msg)) => assert!(msg.contains("\"x\""), "{msg}"),
        Err(other) => panic!("expected configuration error, got {other:?}"),
        Ok(_) => panic!("expected configuration error"),
    }
}

#[test]
fn config_load_fails_on_unmapped_pool_words() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("pool.json"), SINGLE_SLOT_POOL).unwrap();
    fs::write(dir.path().join("lexicon.json"), r#"{"version": "1", "mappings": {}}"#).unwrap();

    assert!(matches!(
        config_for(dir.path(), "s").load(),
        Err(SeedingError::Configuration(_))
    ));
}

fn config_for(dir: &std::path::Path, secret: &str) -> EngineConfig {
    EngineConfig {
        secret: secret.to_string(),
        pool_path: dir.join("pool.json"),
        lexicon_path: dir.join("lexicon.json"),
        store_dir: None,
    }
}

#[test]
fn config_loads_documents_from_disk() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("pool.json"), include_str!("fixtures/pool.json")).unwrap();
    fs::write(dir.path().join("lexicon.json"), include_str!("fixtures/lexicon.json")).unwrap();

    let engine = config_for(dir.path(), "cfg-secret").build_orchestrator().unwrap();
    let words = engine.generate_user_word_set("alice", "2025-10-15", 12).unwrap();
    assert!(!words.is_empty());
}

#[test]
fn config_with_store_dir_writes_records() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("pool.json"), include_str!("fixtures/pool.json")).unwrap();
    fs::write(dir.path().join("lexicon.json"), include_str!("fixtures/lexicon.json")).unwrap();

    let mut config = config_for(dir.path(), "cfg-secret");
    config.store_dir = Some(dir.path().join("seeds"));

    let engine = config.build_orchestrator().unwrap();
    engine.generate_user_word_set("alice", "2025-10-15", 12).unwrap();
    assert!(dir.path().join("seeds").join("2025-10-15.json").exists());
}

#[test]
fn config_failures_are_fatal_configuration_errors() {
    let dir = tempdir().unwrap();

    // Missing files.
    assert!(matches!(
        config_for(dir.path(), "s").load(),
        Err(SeedingError::Configuration(_))
    ));

    // Malformed pool.
    fs::write(dir.path().join("pool.json"), "[]").unwrap();
    fs::write(dir.path().join("lexicon.json"), include_str!("fixtures/lexicon.json")).unwrap();
    assert!(matches!(
        config_for(dir.path(), "s").load(),
        Err(SeedingError::Configuration(_))
    ));

    // Empty secret, even with good documents.
    fs::write(dir.path().join("pool.json"), include_str!("fixtures/pool.json")).unwrap();
    assert!(matches!(
        config_for(dir.path(), "").load(),
        Err(SeedingError::Configuration(_))
    ));
}

#[test]
fn config_debug_redacts_the_secret() {
    let config = config_for(std::path::Path::new("/tmp"), "very-secret-value");
    let rendered = format!("{config:?}");
    assert!(!rendered.contains("very-secret-value"));
    assert!(rendered.contains("<redacted>"));
}
