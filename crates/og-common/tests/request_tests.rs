//! Tests for render request construction and background selection.

use og_common::{
    BackgroundVariant, PreviewParams, RenderRequest, DEFAULT_DESCRIPTION, DEFAULT_TITLE,
    MAX_TEXT_CHARS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

// ============================================================================
// Defaults and truncation
// ============================================================================

#[test]
fn test_absent_params_use_defaults() {
    let params: PreviewParams = serde_json::from_str("{}").unwrap();
    let req = RenderRequest::from_params(&params);

    assert_eq!(req.title, DEFAULT_TITLE);
    assert_eq!(req.description, DEFAULT_DESCRIPTION);
}

#[test]
fn test_supplied_params_are_used() {
    let params = PreviewParams {
        title: Some("Hello".to_string()),
        description: Some("World".to_string()),
    };
    let req: RenderRequest = params.into();

    assert_eq!(req.title, "Hello");
    assert_eq!(req.description, "World");
}

#[test]
fn test_only_title_supplied() {
    let req = RenderRequest::new(Some("Benchmarks"), None);
    assert_eq!(req.title, "Benchmarks");
    assert_eq!(req.description, DEFAULT_DESCRIPTION);
}

#[test]
fn test_long_title_is_exact_prefix() {
    let title: String = (0..500)
        .map(|i| char::from(b'a' + (i % 26) as u8))
        .collect();
    let req = RenderRequest::new(Some(&title), None);

    assert_eq!(req.title.chars().count(), MAX_TEXT_CHARS);
    assert_eq!(req.title, title[..100]);
}

#[test]
fn test_long_description_is_exact_prefix() {
    let description = "0123456789".repeat(20);
    let req = RenderRequest::new(None, Some(&description));

    assert_eq!(req.description, "0123456789".repeat(10));
}

#[test]
fn test_effective_text_never_exceeds_limit() {
    for len in [0, 1, 99, 100, 101, 250, 1000] {
        let text = "x".repeat(len);
        let req = RenderRequest::new(Some(&text), Some(&text));
        assert!(req.title.chars().count() <= MAX_TEXT_CHARS);
        assert!(req.description.chars().count() <= MAX_TEXT_CHARS);
        assert_eq!(req.title.chars().count(), len.min(MAX_TEXT_CHARS));
    }
}

#[test]
fn test_multibyte_truncation() {
    let title = "零知识".repeat(50);
    let req = RenderRequest::new(Some(&title), None);

    assert_eq!(req.title.chars().count(), 100);
    assert!(title.starts_with(&req.title));
}

#[test]
fn test_defaults_fit_within_limit() {
    assert!(DEFAULT_TITLE.chars().count() <= MAX_TEXT_CHARS);
    assert!(DEFAULT_DESCRIPTION.chars().count() <= MAX_TEXT_CHARS);
}

// ============================================================================
// Background selection
// ============================================================================

#[test]
fn test_background_choice_reaches_all_variants() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut seen = HashMap::new();
    for _ in 0..300 {
        *seen.entry(BackgroundVariant::choose(&mut rng)).or_insert(0) += 1;
    }
    assert_eq!(seen.len(), 3, "all three backgrounds must be reachable: {seen:?}");
}

#[test]
fn test_background_distribution_is_uniform() {
    let mut rng = StdRng::seed_from_u64(42);
    let trials = 30_000;
    let mut counts = [0u32; 3];
    for _ in 0..trials {
        let variant = BackgroundVariant::choose(&mut rng);
        counts[(variant.index() - 1) as usize] += 1;
    }

    let expected = trials as f64 / 3.0;
    for (i, count) in counts.iter().enumerate() {
        let deviation = (*count as f64 - expected).abs() / expected;
        assert!(
            deviation < 0.05,
            "background {} chosen {} times, expected about {}",
            i + 1,
            count,
            expected
        );
    }
}

#[test]
fn test_random_uses_thread_rng() {
    for _ in 0..50 {
        let index = BackgroundVariant::random().index();
        assert!((1..=3).contains(&index));
    }
}
