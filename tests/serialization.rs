use std::fs;
use tempdir::TempDir;
use wordtok::{Tokenizer, TokenizerConfig};

const CORPUS: &str = "the low lower lowest tide hello world hello the low";

fn trained_tokenizer(dir: &TempDir) -> Tokenizer {
    let config = TokenizerConfig::new(100_000)
        .with_min_frequency(1)
        .with_output_dir(dir.path());
    let mut tokenizer = Tokenizer::new(config);
    tokenizer.train(CORPUS);
    tokenizer
}

#[test]
fn save_then_load_restores_identical_state() {
    let dir = TempDir::new("wordtok_ser").expect("failed to create temp dir");
    let trained = trained_tokenizer(&dir);
    trained.save().expect("save failed");

    let mut restored = Tokenizer::new(trained.config().clone());
    assert!(restored.load().expect("load failed"));

    assert_eq!(restored.vocab(), trained.vocab());
    let trained_rules: Vec<_> = trained.merges().iter().cloned().collect();
    let restored_rules: Vec<_> = restored.merges().iter().cloned().collect();
    assert_eq!(restored_rules, trained_rules);
}

#[test]
fn loaded_tokenizer_encodes_identically() {
    let dir = TempDir::new("wordtok_ser").expect("failed to create temp dir");
    let trained = trained_tokenizer(&dir);
    trained.save().expect("save failed");

    let mut restored = Tokenizer::new(trained.config().clone());
    assert!(restored.load().expect("load failed"));

    for sample in ["hello world", "the lowest low", "lows and highs"] {
        assert_eq!(
            restored.encode(sample, true),
            trained.encode(sample, true),
            "sample: {sample:?}"
        );
        let ids = trained.encode(sample, true);
        assert_eq!(restored.decode(&ids), trained.decode(&ids));
    }
}

#[test]
fn resaving_loaded_state_is_byte_identical() {
    let dir = TempDir::new("wordtok_ser").expect("failed to create temp dir");
    let trained = trained_tokenizer(&dir);
    trained.save().expect("save failed");

    let vocab_bytes = fs::read(trained.config().vocab_path()).expect("read failed");
    let merges_bytes = fs::read(trained.config().merges_path()).expect("read failed");

    let mut restored = Tokenizer::new(trained.config().clone());
    assert!(restored.load().expect("load failed"));
    restored.save().expect("resave failed");

    assert_eq!(
        fs::read(trained.config().vocab_path()).expect("read failed"),
        vocab_bytes
    );
    assert_eq!(
        fs::read(trained.config().merges_path()).expect("read failed"),
        merges_bytes
    );
}

#[test]
fn load_without_artifacts_returns_false() {
    let dir = TempDir::new("wordtok_ser").expect("failed to create temp dir");
    let config = TokenizerConfig::new(100_000).with_output_dir(dir.path());

    let mut tokenizer = Tokenizer::new(config);
    let before = tokenizer.vocab().clone();

    assert!(!tokenizer.load().expect("load should not error"));
    assert_eq!(tokenizer.vocab(), &before);
    assert!(tokenizer.merges().is_empty());
}

#[test]
fn load_with_only_one_artifact_returns_false() {
    let dir = TempDir::new("wordtok_ser").expect("failed to create temp dir");
    let trained = trained_tokenizer(&dir);
    trained.save().expect("save failed");

    fs::remove_file(trained.config().merges_path()).expect("remove failed");

    let mut restored = Tokenizer::new(trained.config().clone());
    assert!(!restored.load().expect("load should not error"));
    assert!(restored.merges().is_empty());
}

#[test]
fn further_training_after_load_allocates_fresh_ids() {
    let dir = TempDir::new("wordtok_ser").expect("failed to create temp dir");
    let trained = trained_tokenizer(&dir);
    trained.save().expect("save failed");

    let max_loaded = trained.vocab().next_id() - 1;

    let mut restored = Tokenizer::new(trained.config().clone());
    assert!(restored.load().expect("load failed"));
    assert_eq!(restored.vocab().next_id(), max_loaded + 1);

    // New symbols from resumed training land strictly above loaded ids.
    restored.train("zig zag zig zag zig zag");
    let zig_id = restored.vocab().lookup_id("zig").expect("zig not learned");
    assert!(zig_id > max_loaded);
}