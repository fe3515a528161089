use yew::prelude::*;

use super::media::{MediaItem, MediaKind};

/// Where a media item is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Grid tile: non-interactive preview.
    Preview,
    /// Lightbox: full playback.
    Lightbox,
}

/// The element a media item renders to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Image,
    Video {
        muted: bool,
        looped: bool,
        controls: bool,
        autoplay: bool,
    },
}

/// Picks the element for `kind` in `mode`. Depends on nothing else.
pub fn presentation(kind: MediaKind, mode: ViewMode) -> Presentation {
    match (kind, mode) {
        (MediaKind::Image, _) => Presentation::Image,
        (MediaKind::Video, ViewMode::Preview) => Presentation::Video {
            muted: true,
            looped: true,
            controls: false,
            autoplay: false,
        },
        (MediaKind::Video, ViewMode::Lightbox) => Presentation::Video {
            muted: false,
            looped: false,
            controls: true,
            autoplay: true,
        },
    }
}

/// Badge text shown on grid tiles.
pub fn kind_label(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Image => "Image",
        MediaKind::Video => "Video",
    }
}

#[derive(Properties, PartialEq)]
pub struct MediaViewProps {
    pub item: MediaItem,
    pub mode: ViewMode,
    #[prop_or_default]
    pub alt: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(MediaView)]
pub fn media_view(props: &MediaViewProps) -> Html {
    let src = crate::config::asset_url(props.item.path());
    let alt = props
        .alt
        .clone()
        .unwrap_or_else(|| AttrValue::from(props.item.file_name().to_string()));

    match presentation(props.item.kind(), props.mode) {
        Presentation::Image => html! {
            <img src={src} alt={alt} class={props.class.clone()} loading="lazy" />
        },
        Presentation::Video {
            muted,
            looped,
            controls,
            autoplay,
        } => html! {
            <video
                src={src}
                class={props.class.clone()}
                muted={muted}
                loop={looped}
                controls={controls}
                autoplay={autoplay}
                playsinline=true
            />
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn images_render_the_same_everywhere() {
        assert_eq!(presentation(MediaKind::Image, ViewMode::Preview), Presentation::Image);
        assert_eq!(presentation(MediaKind::Image, ViewMode::Lightbox), Presentation::Image);
    }

    #[test]
    fn video_previews_are_muted_loops_without_controls() {
        assert_eq!(
            presentation(MediaKind::Video, ViewMode::Preview),
            Presentation::Video {
                muted: true,
                looped: true,
                controls: false,
                autoplay: false,
            }
        );
    }

    #[test]
    fn lightbox_videos_get_controls() {
        match presentation(MediaKind::Video, ViewMode::Lightbox) {
            Presentation::Video { controls, autoplay, .. } => {
                assert!(controls);
                assert!(autoplay);
            }
            Presentation::Image => panic!("video rendered as image"),
        }
    }

    #[test]
    fn dispatch_follows_the_item_kind() {
        for path in ["/books/1.jpg", "/images/VID-20250712-WA0004.mp4"] {
            let item = MediaItem::new(path);
            let is_video_element = matches!(
                presentation(item.kind(), ViewMode::Preview),
                Presentation::Video { .. }
            );
            assert_eq!(is_video_element, item.is_video());
            assert_eq!(kind_label(item.kind()), if item.is_video() { "Video" } else { "Image" });
        }
    }
}
