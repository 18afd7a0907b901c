//! Embedded YouTube player markup.
//!
//! The core hands this module `{url, thumbnail, title}` and gets back a
//! self-contained HTML fragment. The embed URL scheme lives here only;
//! nothing upstream knows about it.

use super::escape_attr;

/// Extract the video id from the YouTube URL forms we accept.
pub fn extract_youtube_id(url: &str) -> Option<String> {
    for prefix in ["youtube.com/watch?v=", "youtu.be/", "youtube.com/embed/"] {
        if let Some(pos) = url.find(prefix) {
            let id_start = pos + prefix.len();
            let id_end = url[id_start..]
                .find(['&', '#', '?', '/'])
                .unwrap_or(url.len() - id_start)
                + id_start;
            let id = &url[id_start..id_end];
            if id.is_empty() {
                return None;
            }
            return Some(id.to_string());
        }
    }
    None
}

/// Check if a URL points at YouTube.
pub fn is_youtube_url(url: &str) -> bool {
    url.contains("youtube.com/watch")
        || url.contains("youtu.be/")
        || url.contains("youtube.com/embed/")
}

/// Render the embedded player for one item.
///
/// YouTube URLs become a privacy-enhanced embed iframe with the
/// thumbnail as preview image and the title as accessible label. Other
/// URLs fall back to a plain `<video>` element with the same bindings.
pub fn embed(url: &str, thumbnail: &str, title: &str) -> String {
    let title = escape_attr(title);
    let thumbnail = escape_attr(thumbnail);

    let video_id = if is_youtube_url(url) {
        extract_youtube_id(url)
    } else {
        None
    };

    match video_id {
        Some(id) => {
            let id = escape_attr(&id);
            format!(
                "<img class=\"player-preview\" src=\"{thumbnail}\" alt=\"{title}\">\n\
                 <iframe class=\"embedded-player\" \
                 src=\"https://www.youtube-nocookie.com/embed/{id}\" \
                 title=\"{title}\" allowfullscreen></iframe>"
            )
        }
        None => {
            let url = escape_attr(url);
            format!(
                "<video class=\"embedded-player\" src=\"{url}\" \
                 poster=\"{thumbnail}\" title=\"{title}\" controls></video>"
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_watch_url() {
        assert_eq!(
            extract_youtube_id("https://www.youtube.com/watch?v=iKfb3ZHHKzc"),
            Some("iKfb3ZHHKzc".to_string())
        );
        // Trailing query parameters are not part of the id
        assert_eq!(
            extract_youtube_id("https://www.youtube.com/watch?v=iKfb3ZHHKzc&t=30"),
            Some("iKfb3ZHHKzc".to_string())
        );
    }

    #[test]
    fn test_extract_short_and_embed_urls() {
        assert_eq!(
            extract_youtube_id("https://youtu.be/iKfb3ZHHKzc"),
            Some("iKfb3ZHHKzc".to_string())
        );
        assert_eq!(
            extract_youtube_id("https://www.youtube.com/embed/iKfb3ZHHKzc?rel=0"),
            Some("iKfb3ZHHKzc".to_string())
        );
    }

    #[test]
    fn test_extract_rejects_non_youtube() {
        assert_eq!(extract_youtube_id("https://example.com/clip.mp4"), None);
        assert_eq!(extract_youtube_id("https://youtu.be/"), None);
        assert!(!is_youtube_url("https://vimeo.com/12345"));
        assert!(is_youtube_url("https://youtu.be/abc"));
    }

    #[test]
    fn test_embed_youtube() {
        let html = embed(
            "https://www.youtube.com/watch?v=iKfb3ZHHKzc",
            "https://img.youtube.com/vi/iKfb3ZHHKzc/0.jpg",
            "Yoga For First Responders",
        );

        assert!(html.contains("youtube-nocookie.com/embed/iKfb3ZHHKzc"));
        assert!(html.contains("title=\"Yoga For First Responders\""));
        assert!(html.contains("src=\"https://img.youtube.com/vi/iKfb3ZHHKzc/0.jpg\""));
    }

    #[test]
    fn test_embed_escapes_a_quoted_video_id() {
        // The id scan stops at &#?/ but not at quotes; a hostile
        // catalog URL must not break out of the src attribute.
        let html = embed(
            "https://youtu.be/abc\"def",
            "https://example.com/thumb.jpg",
            "T",
        );

        assert!(html.contains("youtube-nocookie.com/embed/abc&quot;def"));
        assert!(!html.contains("embed/abc\"def"));
    }

    #[test]
    fn test_embed_fallback_and_escaping() {
        let html = embed(
            "https://example.com/clip.mp4?a=1&b=2",
            "https://example.com/thumb.jpg",
            "Rise & \"Shine\"",
        );

        assert!(html.contains("<video"));
        assert!(html.contains("src=\"https://example.com/clip.mp4?a=1&amp;b=2\""));
        assert!(html.contains("title=\"Rise &amp; &quot;Shine&quot;\""));
    }
}
