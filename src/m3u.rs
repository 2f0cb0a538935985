//! M3U playlist serialization
//!
//! Emits the playlist text consumed by IPTV players: a header line, then
//! per entry one `#EXTINF` metadata line followed by the playback URL.

use std::io::Write;
use std::path::Path;

use crate::assemble::ResolvedEntry;
use crate::error::Result;

/// Serialize entries into M3U playlist text.
pub fn serialize(entries: &[ResolvedEntry]) -> String {
    let mut output = String::new();

    output.push_str("#EXTM3U\n");
    for entry in entries {
        output.push_str(&format!(
            "#EXTINF:-1 tvg-id=\"{}\" tvg-name=\"{}\" tvg-logo=\"{}\",{}\n",
            entry.id, entry.display_title, entry.poster, entry.display_title
        ));
        output.push_str(&format!("{}\n", entry.playback_url));
    }

    output
}

/// Write the playlist for `entries` to `path`, overwriting any previous
/// file wholesale. The text goes to a sibling temp file first and is
/// renamed over the target, so a failed write neither leaves a partial
/// playlist nor destroys the previous run's file. The pipeline checks
/// for emptiness first; this is never called with zero entries.
pub fn write_playlist(path: &Path, entries: &[ResolvedEntry]) -> Result<()> {
    let content = serialize(entries);

    // The temp file must live in the target's directory so the rename
    // stays on one filesystem.
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64, title: &str, poster: &str, url: &str) -> ResolvedEntry {
        ResolvedEntry {
            id,
            display_title: title.to_string(),
            poster: poster.to_string(),
            playback_url: url.to_string(),
            start_time: None,
        }
    }

    #[test]
    fn test_serialize_exact_format() {
        let entries = vec![entry(42, "Foo - 24/7", "http://p", "http://x.m3u8")];
        assert_eq!(
            serialize(&entries),
            "#EXTM3U\n\
             #EXTINF:-1 tvg-id=\"42\" tvg-name=\"Foo - 24/7\" tvg-logo=\"http://p\",Foo - 24/7\n\
             http://x.m3u8\n"
        );
    }

    #[test]
    fn test_serialize_preserves_entry_order() {
        let entries = vec![
            entry(1, "One", "", "http://a"),
            entry(2, "Two", "", "http://b"),
        ];
        let text = serialize(&entries);
        let a = text.find("http://a").unwrap();
        let b = text.find("http://b").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_write_playlist_overwrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("playlist.m3u");

        std::fs::write(&path, "stale content").unwrap();
        let entries = vec![entry(7, "Bar - 24/7", "http://p/7", "http://y.m3u8")];
        write_playlist(&path, &entries).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("#EXTM3U\n"));
        assert!(written.contains("http://y.m3u8"));
        assert!(!written.contains("stale content"));
    }

    #[test]
    fn test_write_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("playlist.m3u");

        let entries = vec![entry(1, "One", "", "http://a")];
        write_playlist(&path, &entries).unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec!["playlist.m3u"]);
    }

    #[test]
    fn test_unwritable_sink_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-a-dir").join("playlist.m3u");

        let entries = vec![entry(1, "One", "", "http://a")];
        assert!(write_playlist(&path, &entries).is_err());
    }

    #[test]
    fn test_failed_write_preserves_target() {
        let dir = tempfile::tempdir().unwrap();
        // Target is an existing directory: the final rename fails.
        let path = dir.path().join("playlist.m3u");
        std::fs::create_dir(&path).unwrap();

        let entries = vec![entry(1, "One", "", "http://a")];
        assert!(write_playlist(&path, &entries).is_err());

        // The target is untouched and the temp file was cleaned up.
        assert!(path.is_dir());
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec!["playlist.m3u"]);
    }
}
