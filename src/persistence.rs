// File: src/persistence.rs
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Error, ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::core::types::Dictionary;
use crate::error::{Result, VocabError};

/// Reads the dictionary document. Any structural problem, down to a
/// single entry missing its source word, fails the whole run; nothing is
/// skipped entry by entry.
pub fn load_dictionary(path: &Path) -> Result<Dictionary> {
    let file = File::open(path).map_err(VocabError::DictionaryRead)?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(VocabError::DictionaryParse)
}

/// Writes the document into a temp file in the destination directory and
/// renames it into place, so a failed run never leaves a half-written
/// file at the destination. Output is pretty-printed raw UTF-8, the
/// format the app bundles. Writing over the input file is fine.
pub fn save_dictionary(dictionary: &Dictionary, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(VocabError::DictionaryWrite)?;

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(VocabError::DictionaryWrite)?;
    let mut writer = BufWriter::new(&temp_file);

    serde_json::to_writer_pretty(&mut writer, dictionary)
        .map_err(|e| VocabError::DictionaryWrite(Error::new(ErrorKind::Other, e)))?;
    writer.write_all(b"\n").map_err(VocabError::DictionaryWrite)?;
    writer.flush().map_err(VocabError::DictionaryWrite)?;
    drop(writer);

    temp_file
        .persist(path)
        .map_err(|e| VocabError::DictionaryWrite(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_dictionary_is_a_read_error() {
        let err = load_dictionary(Path::new("/no/such/dictionary.json")).unwrap_err();
        assert!(matches!(err, VocabError::DictionaryRead(_)));
    }

    #[test]
    fn entry_without_a_source_word_fails_the_run() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dictionary.json");
        fs::write(&path, r#"{"words": [{"english": "hello"}]}"#).unwrap();

        let err = load_dictionary(&path).unwrap_err();
        assert!(matches!(err, VocabError::DictionaryParse(_)));
    }

    #[test]
    fn absent_words_key_is_an_empty_dictionary() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dictionary.json");
        fs::write(&path, r#"{"version": 2}"#).unwrap();

        let dictionary = load_dictionary(&path).unwrap();
        assert!(dictionary.words.is_empty());
        assert_eq!(dictionary.extra["version"], 2);
    }

    #[test]
    fn save_writes_unescaped_utf8_with_indentation() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dictionary.json");
        fs::write(
            &path,
            r#"{"words": [{"swedish": "sjö", "english": "lake"}]}"#,
        )
        .unwrap();

        let dictionary = load_dictionary(&path).unwrap();
        let out = dir.path().join("out.json");
        save_dictionary(&dictionary, &out).unwrap();

        let text = fs::read_to_string(&out).unwrap();
        assert!(text.contains("sjö"));
        assert!(!text.contains("\\u"));
        assert!(text.contains("  \"words\""));
    }
}
