use super::mock::MockTextProvider;
use super::{ProviderError, TextProvider};

#[tokio::test]
async fn test_mock_embed_is_deterministic() {
    let provider = MockTextProvider::new(8);

    let v1 = provider.embed("senior video editor").await.unwrap();
    let v2 = provider.embed("senior video editor").await.unwrap();

    assert_eq!(v1, v2);
    assert_eq!(v1.len(), 8);
}

#[tokio::test]
async fn test_mock_embed_differs_per_text() {
    let provider = MockTextProvider::new(8);

    let v1 = provider.embed("video editor").await.unwrap();
    let v2 = provider.embed("operations manager").await.unwrap();

    assert_ne!(v1, v2);
}

#[tokio::test]
async fn test_mock_embed_values_in_range() {
    let provider = MockTextProvider::new(32);

    let v = provider.embed("range check").await.unwrap();

    assert!(v.iter().all(|x| (-1.0..=1.0).contains(x)));
}

#[tokio::test]
async fn test_mock_embed_failure_injection() {
    let provider = MockTextProvider::new(8);
    provider.set_fail_embed(true);

    let result = provider.embed("anything").await;
    assert!(matches!(result, Err(ProviderError::RequestFailed { .. })));

    provider.set_fail_embed(false);
    assert!(provider.embed("anything").await.is_ok());
}

#[tokio::test]
async fn test_mock_call_counters() {
    let provider = MockTextProvider::new(8);

    let _ = provider.embed("one").await;
    let _ = provider.embed("two").await;
    let _ = provider.complete("prompt").await;

    assert_eq!(provider.embed_calls(), 2);
    assert_eq!(provider.complete_calls(), 1);
}

#[tokio::test]
async fn test_mock_scripted_completions_served_in_order() {
    let provider = MockTextProvider::new(8);
    provider.push_completion("first");
    provider.push_completion("second");

    assert_eq!(provider.complete("p").await.unwrap(), "first");
    assert_eq!(provider.complete("p").await.unwrap(), "second");

    let fallback = provider.complete("p").await.unwrap();
    assert!(fallback.starts_with("Mock response for:"));
}

#[tokio::test]
async fn test_mock_complete_failure_injection() {
    let provider = MockTextProvider::new(8);
    provider.set_fail_complete(true);

    let result = provider.complete("prompt").await;
    assert!(matches!(result, Err(ProviderError::RequestFailed { .. })));
}

#[test]
fn test_provider_error_display() {
    let err = ProviderError::Timeout { secs: 30 };
    assert!(err.to_string().contains("30"));

    let err = ProviderError::DimensionMismatch {
        expected: 768,
        actual: 4,
    };
    assert!(err.to_string().contains("768"));
    assert!(err.to_string().contains("4"));
}
