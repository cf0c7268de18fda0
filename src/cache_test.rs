use super::*;

fn entry(created_at: Instant) -> CacheEntry {
    CacheEntry {
        body: Bytes::from_static(b"\xff\xd8\xff"),
        content_type: "image/jpeg".into(),
        quality: "hqdefault",
        created_at,
    }
}

#[test]
fn cache_key_is_stable_and_distinguishes_quality() {
    let a = make_cache_key("dQw4w9WgXcQ", "maxresdefault");
    assert_eq!(a, make_cache_key("dQw4w9WgXcQ", "maxresdefault"));
    assert_ne!(a, make_cache_key("dQw4w9WgXcQ", "hqdefault"));
    assert_eq!(a.len(), 64);
}

#[test]
fn fresh_entry_is_returned() {
    let cache = ThumbnailCache::new(Duration::from_secs(60));
    cache.insert("k".into(), entry(Instant::now()));

    let hit = cache.get("k").expect("entry should be cached");
    assert_eq!(hit.quality, "hqdefault");
    assert_eq!(&hit.body[..], b"\xff\xd8\xff");
}

#[test]
fn expired_entry_is_evicted_on_read() {
    let cache = ThumbnailCache::new(Duration::from_millis(10));
    cache.insert("k".into(), entry(Instant::now()));
    std::thread::sleep(Duration::from_millis(30));

    assert!(cache.get("k").is_none());
    assert_eq!(cache.len(), 0);
}

#[test]
fn zero_ttl_disables_caching() {
    let cache = ThumbnailCache::new(Duration::ZERO);
    cache.insert("k".into(), entry(Instant::now()));
    assert_eq!(cache.len(), 0);
}

#[test]
fn sweep_keeps_live_entries() {
    let cache = ThumbnailCache::new(Duration::from_millis(50));
    cache.insert("old".into(), entry(Instant::now()));
    std::thread::sleep(Duration::from_millis(80));
    cache.insert("new".into(), entry(Instant::now()));

    assert_eq!(cache.sweep_expired(), 1);
    assert!(cache.get("new").is_some());
}
