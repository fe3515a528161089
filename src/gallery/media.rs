use serde::{Deserialize, Serialize};

/// Extensions rendered with a `<video>` element. Compared case-insensitively.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4"];

/// How a media item is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// Classifies an asset path by its extension.
///
/// Total over any input: a path without an extension, or with one that isn't
/// in [`VIDEO_EXTENSIONS`], is an image.
pub fn classify(path: &str) -> MediaKind {
    // Only the last path segment can carry the extension.
    let file_name = path.rsplit('/').next().unwrap_or(path);
    let file_name = file_name
        .split(&['?', '#'][..])
        .next()
        .unwrap_or(file_name);

    match file_name.rsplit_once('.') {
        Some((_, ext))
            if VIDEO_EXTENSIONS
                .iter()
                .any(|video| video.eq_ignore_ascii_case(ext)) =>
        {
            MediaKind::Video
        }
        _ => MediaKind::Image,
    }
}

/// One piece of portfolio media. The kind is derived from the path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaItem {
    path: String,
}

impl MediaItem {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> MediaKind {
        classify(&self.path)
    }

    pub fn is_video(&self) -> bool {
        self.kind() == MediaKind::Video
    }

    /// File name without directories, used for alt text.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mp4_paths_are_videos() {
        assert_eq!(classify("/images/VID-20250712-WA0004.mp4"), MediaKind::Video);
        assert_eq!(classify("clip.mp4"), MediaKind::Video);
        assert_eq!(classify("/a/b/CLIP.MP4"), MediaKind::Video);
    }

    #[test]
    fn other_extensions_are_images() {
        assert_eq!(classify("/books/1.jpg"), MediaKind::Image);
        assert_eq!(classify("/machine1.png"), MediaKind::Image);
        assert_eq!(classify("/images/poster.webp"), MediaKind::Image);
        assert_eq!(classify("/images/clip.mov"), MediaKind::Image);
    }

    #[test]
    fn classify_is_total() {
        assert_eq!(classify(""), MediaKind::Image);
        assert_eq!(classify("no-extension"), MediaKind::Image);
        assert_eq!(classify("/videos.mp4/cover.jpg"), MediaKind::Image);
        assert_eq!(classify(".mp4"), MediaKind::Video);
        assert_eq!(classify("trailing."), MediaKind::Image);
        assert_eq!(classify("/hero.mp4?v=2"), MediaKind::Video);
    }

    #[test]
    fn item_exposes_derived_kind_and_file_name() {
        let item = MediaItem::new("/images/VID-20250711-WA0002.mp4");
        assert!(item.is_video());
        assert_eq!(item.file_name(), "VID-20250711-WA0002.mp4");

        let item = MediaItem::new("/books/3.jpg");
        assert_eq!(item.kind(), MediaKind::Image);
        assert_eq!(item.path(), "/books/3.jpg");
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&MediaKind::Video).unwrap(), "\"video\"");
    }
}
