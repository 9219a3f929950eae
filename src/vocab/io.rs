//! # Vocabulary and Merge Table IO
//!
//! Two artifacts, both human-readable UTF-8: `vocab.json` maps each symbol
//! to its id, and `merges.txt` lists one `left right` rule per line under a
//! version header. Line order in the merges artifact IS the rank order.

use crate::merges::MergeTable;
use crate::types::{Symbol, SymbolToIdMap, TokenId};
use crate::vocab::Vocabulary;
use anyhow::Context;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Version header written at the top of the merges artifact.
pub const MERGES_HEADER: &str = "#version: 1";

/// Save the vocabulary and merge table to their two artifacts.
///
/// Creates containing directories as needed. Both files are staged as
/// temporaries and renamed into place only after both writes succeed, so a
/// failed merges write never leaves a fresh vocabulary artifact as the only
/// trace of the run.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `merges` - the merge table to save.
/// * `vocab_path` - destination of the vocabulary artifact.
/// * `merges_path` - destination of the merges artifact.
pub fn save_artifacts(
    vocab: &Vocabulary,
    merges: &MergeTable,
    vocab_path: &Path,
    merges_path: &Path,
) -> anyhow::Result<()> {
    for path in [vocab_path, merges_path] {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
    }

    let vocab_staged = staging_path(vocab_path);
    let merges_staged = staging_path(merges_path);

    let written = write_vocab(vocab, &vocab_staged).and_then(|()| write_merges(merges, &merges_staged));
    if let Err(err) = written {
        let _ = fs::remove_file(&vocab_staged);
        let _ = fs::remove_file(&merges_staged);
        return Err(err);
    }

    fs::rename(&vocab_staged, vocab_path)
        .with_context(|| format!("failed to move vocabulary into {}", vocab_path.display()))?;
    fs::rename(&merges_staged, merges_path)
        .with_context(|| format!("failed to move merges into {}", merges_path.display()))?;

    Ok(())
}

/// Load the vocabulary and merge table from their two artifacts.
///
/// Returns `Ok(None)` when either artifact is missing; malformed content is
/// an error.
pub fn load_artifacts(
    vocab_path: &Path,
    merges_path: &Path,
) -> anyhow::Result<Option<(Vocabulary, MergeTable)>> {
    if !vocab_path.is_file() || !merges_path.is_file() {
        log::warn!(
            "tokenizer artifacts not found at {} / {}",
            vocab_path.display(),
            merges_path.display()
        );
        return Ok(None);
    }

    let vocab = read_vocab(vocab_path)?;
    let merges = read_merges(merges_path)?;
    Ok(Some((vocab, merges)))
}

fn staging_path(path: &Path) -> PathBuf {
    let mut staged = path.as_os_str().to_os_string();
    staged.push(".tmp");
    PathBuf::from(staged)
}

fn write_vocab(
    vocab: &Vocabulary,
    path: &Path,
) -> anyhow::Result<()> {
    let file =
        fs::File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    // BTreeMap keeps the artifact deterministic across runs.
    let entries: BTreeMap<&str, TokenId> = vocab
        .iter()
        .map(|(symbol, &id)| (symbol.as_str(), id))
        .collect();
    serde_json::to_writer_pretty(&mut writer, &entries)
        .with_context(|| format!("failed to write {}", path.display()))?;

    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

fn write_merges(
    merges: &MergeTable,
    path: &Path,
) -> anyhow::Result<()> {
    let file =
        fs::File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{MERGES_HEADER}")?;
    for (left, right) in merges.iter() {
        writeln!(writer, "{left} {right}")?;
    }

    writer.flush()?;
    Ok(())
}

fn read_vocab(path: &Path) -> anyhow::Result<Vocabulary> {
    let file =
        fs::File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(file);

    let entries: HashMap<String, TokenId> = serde_json::from_reader(reader)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    let map: SymbolToIdMap = entries
        .into_iter()
        .map(|(symbol, id)| (Symbol::from(symbol), id))
        .collect();

    Ok(Vocabulary::from_symbol_map(map))
}

fn read_merges(path: &Path) -> anyhow::Result<MergeTable> {
    let file =
        fs::File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut rules = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read {}", path.display()))?;
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (left, right) = line.split_once(' ').with_context(|| {
            format!("malformed merge rule at {}:{}", path.display(), lineno + 1)
        })?;
        rules.push((Symbol::from(left), Symbol::from(right)));
    }

    Ok(MergeTable::from_rules(rules))
}
