use std::path::{Path, PathBuf};

use lofty::{AudioFile, ItemKey, TaggedFileExt};
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::{Track, TrackId};

/// Turns locally supplied files into tracks.
///
/// Files are filtered to audio-typed ones by extension. Titles come from the
/// file name (extension stripped, `-`/`_` replaced with spaces); artist and
/// genre come from embedded tags when a probe succeeds and default to
/// "Unknown" otherwise. Ids are generated collision-free by a running
/// counter owned by the ingestor.
#[derive(Debug)]
pub struct Ingestor {
    next_id: u64,
    settings: LibrarySettings,
}

impl Ingestor {
    pub fn new(settings: LibrarySettings) -> Self {
        Self {
            next_id: 0,
            settings,
        }
    }

    /// Ingest a batch of supplied files, skipping anything non-audio.
    ///
    /// Per-file metadata probes resolve independently, so batches may be
    /// ingested in any interleaving without affecting id uniqueness.
    pub fn ingest<P: AsRef<Path>>(&mut self, files: &[P]) -> Vec<Track> {
        let extensions = self.settings.extensions.clone();
        files
            .iter()
            .map(AsRef::as_ref)
            .filter(|p| is_audio_file(p, &extensions))
            .map(|p| self.track_from_path(p))
            .collect()
    }

    /// Walk a directory and ingest every audio file found.
    pub fn ingest_dir(&mut self, dir: &Path) -> Vec<Track> {
        let mut walker = WalkDir::new(dir).follow_links(self.settings.follow_links);
        let depth_cap = if self.settings.recursive {
            self.settings.max_depth
        } else {
            Some(1)
        };
        if let Some(d) = depth_cap {
            walker = walker.max_depth(d);
        }

        let mut files: Vec<PathBuf> = walker
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.path().is_file())
            .map(|e| e.path().to_path_buf())
            .collect();
        files.sort();

        self.ingest(&files)
    }

    fn track_from_path(&mut self, path: &Path) -> Track {
        let id = TrackId::new(self.next_id);
        self.next_id += 1;

        let title = path
            .file_name()
            .and_then(|s| s.to_str())
            .map(title_from_filename)
            .unwrap_or_else(|| String::from("Unknown"));

        let mut track = Track::new(id, title, path);

        if let Ok(tagged) = lofty::read_from_path(path) {
            track.duration = Some(tagged.properties().duration());

            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                if let Some(v) = tag.get_string(&ItemKey::TrackArtist) {
                    let v = v.trim();
                    if !v.is_empty() {
                        track.artist = v.to_string();
                    }
                }
                if let Some(v) = tag.get_string(&ItemKey::Genre) {
                    let v = v.trim();
                    if !v.is_empty() {
                        track.genre = v.to_string();
                    }
                }
            }
        }

        track
    }
}

/// Strip the extension and replace `-`/`_` separators with spaces.
pub(super) fn title_from_filename(name: &str) -> String {
    let stem = match name.rfind('.') {
        Some(0) | None => name,
        Some(dot) => &name[..dot],
    };
    stem.replace(['-', '_'], " ")
}

pub(super) fn is_audio_file(path: &Path, extensions: &[String]) -> bool {
    let exts: Vec<String> = extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}
