//! Resolution Integration Tests
//!
//! Covers lookup soundness, rejection of every malformed key form, and
//! purity of repeated resolution.

use yffr_player::{
    Catalog, Category, ContentItem, MediaType, ResolutionKey, Resolver,
};

/// The reference catalog: one video under energy, audio reserved empty.
fn reference_catalog() -> Catalog {
    serde_json::from_str(
        r#"{"video":{"energy":[{"title":"T1","url":"u1","thumbnail":"t1"}]},"audio":{}}"#,
    )
    .unwrap()
}

#[test]
fn test_hit_returns_item_plus_type() {
    let resolver = Resolver::new(reference_catalog());

    let resolved = resolver
        .resolve(&ResolutionKey::new("video", "energy", "0"))
        .expect("key addresses a stored item");

    assert_eq!(resolved.media_type, MediaType::Video);
    assert_eq!(resolved.title, "T1");
    assert_eq!(resolved.url, "u1");
    assert_eq!(resolved.thumbnail, "t1");
}

#[test]
fn test_numeric_string_id_resolves() {
    // Ids arrive as text from routing; a clean base-10 parse matches.
    let resolver = Resolver::new(reference_catalog());
    assert!(resolver
        .resolve(&ResolutionKey::new("video", "energy", "0"))
        .is_some());
}

#[test]
fn test_out_of_range_id_misses() {
    let resolver = Resolver::new(reference_catalog());
    assert!(resolver
        .resolve(&ResolutionKey::new("video", "energy", "5"))
        .is_none());
}

#[test]
fn test_category_absent_under_type_misses() {
    // "audio" is a valid type key but holds no categories.
    let resolver = Resolver::new(reference_catalog());
    assert!(resolver
        .resolve(&ResolutionKey::new("audio", "energy", "0"))
        .is_none());
}

#[test]
fn test_missing_type_misses() {
    let resolver = Resolver::new(reference_catalog());
    let key = ResolutionKey {
        media_type: None,
        category: Some("energy".to_string()),
        id: Some("0".to_string()),
    };
    assert!(resolver.resolve(&key).is_none());
}

#[test]
fn test_garbage_key_fields_miss_without_fault() {
    let resolver = Resolver::new(reference_catalog());

    let garbage = ["foo", "34", "", "  video", "VIDEO"];
    for bad_type in garbage {
        assert!(resolver
            .resolve(&ResolutionKey::new(bad_type, "energy", "0"))
            .is_none());
    }
    for bad_category in garbage {
        assert!(resolver
            .resolve(&ResolutionKey::new("video", bad_category, "0"))
            .is_none());
    }
    for bad_id in ["-1", "0.5", "abc", "", " 0", "+0x1"] {
        assert!(resolver
            .resolve(&ResolutionKey::new("video", "energy", bad_id))
            .is_none());
    }
}

#[test]
fn test_empty_sequence_misses_at_index_zero() {
    let catalog: Catalog = serde_json::from_str(r#"{"video":{"energy":[]}}"#).unwrap();
    let resolver = Resolver::new(catalog);
    assert!(resolver
        .resolve(&ResolutionKey::new("video", "energy", "0"))
        .is_none());
}

#[test]
fn test_resolution_is_pure_and_leaves_catalog_unchanged() {
    let mut catalog = Catalog::new();
    for title in ["a", "b", "c"] {
        catalog.insert(
            MediaType::Video,
            Category::OhShit,
            ContentItem {
                title: title.to_string(),
                url: format!("https://example.com/{title}"),
                thumbnail: format!("https://example.com/{title}.jpg"),
            },
        );
    }

    let resolver = Resolver::new(catalog);
    let hit = ResolutionKey::new("video", "oh-shit", "2");
    let miss = ResolutionKey::new("video", "oh-shit", "3");

    for _ in 0..10 {
        assert_eq!(
            resolver.resolve(&hit).unwrap().title,
            "c",
            "identical inputs must keep producing identical results"
        );
        assert!(resolver.resolve(&miss).is_none());
    }

    assert_eq!(resolver.catalog().len(), 3);
}

#[test]
fn test_resolved_content_json_shape() {
    // Exactly the four fields, with the type tag joined in.
    let resolver = Resolver::new(reference_catalog());
    let resolved = resolver
        .resolve(&ResolutionKey::new("video", "energy", "0"))
        .unwrap();

    let value = serde_json::to_value(&resolved).unwrap();
    let obj = value.as_object().unwrap();

    let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["media_type", "thumbnail", "title", "url"]);
    assert_eq!(obj["media_type"], "video");
}
