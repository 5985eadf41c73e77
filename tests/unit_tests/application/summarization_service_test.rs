use std::sync::Arc;

use pdf_summarizer::application::ports::{ApiKey, LlmClientError, TextExtractorError};
use pdf_summarizer::application::services::{SummarizationService, SummarizeError};
use pdf_summarizer::domain::{SummaryLimits, SummaryMode, SummaryModeError, Upload};
use pdf_summarizer::infrastructure::llm::MockLlmClient;

use crate::helpers::stub_extractor::StubExtractor;

fn pdf_upload() -> Upload {
    Upload::new(
        "doc.pdf".to_string(),
        Some("application/pdf".to_string()),
        b"%PDF-1.5 stub".to_vec(),
    )
}

fn service(
    extractor: &Arc<StubExtractor>,
    llm: &Arc<MockLlmClient>,
    api_key: Option<ApiKey>,
) -> SummarizationService<StubExtractor, MockLlmClient> {
    SummarizationService::new(
        Arc::clone(extractor),
        Arc::clone(llm),
        api_key,
        SummaryLimits::default(),
    )
}

fn test_key() -> Option<ApiKey> {
    Some(ApiKey::new("test-key"))
}

#[tokio::test]
async fn given_valid_pdf_when_summarizing_then_returns_trimmed_summary() {
    let extractor = Arc::new(StubExtractor::with_text("Hello world. This is about cats."));
    let llm = Arc::new(MockLlmClient::new("  Cats are test subjects.\n"));
    let service = service(&extractor, &llm, test_key());

    let summary = service
        .summarize_upload(&pdf_upload(), "short", None)
        .await
        .unwrap();

    assert_eq!(summary.as_str(), "Cats are test subjects.");
    assert_eq!(llm.call_count(), 1);
    assert_eq!(
        llm.prompts()[0],
        "Provide a very brief summary (2-3 sentences) of this text:\n\nHello world. This is about cats."
    );
}

#[tokio::test]
async fn given_non_pdf_upload_when_summarizing_then_rejects_before_extraction() {
    let extractor = Arc::new(StubExtractor::with_text("text"));
    let llm = Arc::new(MockLlmClient::new("summary"));
    let service = service(&extractor, &llm, test_key());
    let upload = Upload::new(
        "notes.txt".to_string(),
        Some("text/plain".to_string()),
        b"plain".to_vec(),
    );

    let err = service
        .summarize_upload(&upload, "medium", None)
        .await
        .unwrap_err();

    assert!(matches!(err, SummarizeError::UnsupportedContentType(ref ct) if ct == "text/plain"));
    assert!(err.is_client_error());
    assert_eq!(err.to_string(), "Please upload a PDF file.");
    assert_eq!(extractor.call_count(), 0);
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn given_unreadable_pdf_when_summarizing_then_returns_server_side_extraction_error() {
    let extractor = Arc::new(StubExtractor::failing());
    let llm = Arc::new(MockLlmClient::new("summary"));
    let service = service(&extractor, &llm, test_key());

    let err = service
        .summarize_upload(&pdf_upload(), "medium", None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SummarizeError::Extraction(TextExtractorError::InvalidDocument(_))
    ));
    assert!(!err.is_client_error());
    assert!(err.to_string().starts_with("Could not read PDF: invalid PDF:"));
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn given_only_blank_pages_when_summarizing_then_returns_no_readable_text() {
    let extractor = Arc::new(StubExtractor::with_pages(&["  ", "\n", ""]));
    let llm = Arc::new(MockLlmClient::new("summary"));
    let service = service(&extractor, &llm, test_key());

    let err = service
        .summarize_upload(&pdf_upload(), "medium", None)
        .await
        .unwrap_err();

    assert!(matches!(err, SummarizeError::NoReadableText));
    assert_eq!(err.to_string(), "No readable text found in the PDF.");
    assert!(err.is_client_error());
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn given_custom_mode_without_prompt_when_summarizing_then_rejects_without_network_call() {
    let extractor = Arc::new(StubExtractor::with_text("content"));
    let llm = Arc::new(MockLlmClient::new("summary"));
    let service = service(&extractor, &llm, test_key());

    let err = service
        .summarize_upload(&pdf_upload(), "custom", None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SummarizeError::InvalidMode(SummaryModeError::MissingCustomPrompt)
    ));
    assert_eq!(
        err.to_string(),
        "Custom prompt is required when prompt_type is 'custom'"
    );
    assert!(err.is_client_error());
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn given_invalid_mode_when_summarizing_then_error_lists_accepted_modes() {
    let extractor = Arc::new(StubExtractor::with_text("content"));
    let llm = Arc::new(MockLlmClient::new("summary"));
    let service = service(&extractor, &llm, test_key());

    let err = service
        .summarize_upload(&pdf_upload(), "invalid_value", None)
        .await
        .unwrap_err();

    assert!(err.is_client_error());
    assert_eq!(
        err.to_string(),
        "Invalid prompt_type. Must be one of: short, medium, long, custom"
    );
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn given_custom_mode_with_prompt_when_summarizing_then_sends_custom_instruction() {
    let extractor = Arc::new(StubExtractor::with_text("Recipe text"));
    let llm = Arc::new(MockLlmClient::new("Ingredients: flour"));
    let service = service(&extractor, &llm, test_key());

    service
        .summarize_upload(&pdf_upload(), "custom", Some("List the ingredients:"))
        .await
        .unwrap();

    assert_eq!(llm.prompts(), vec!["List the ingredients:\n\nRecipe text"]);
}

#[tokio::test]
async fn given_missing_api_key_when_summarizing_then_returns_configuration_error_without_network_call() {
    let extractor = Arc::new(StubExtractor::with_text("content"));
    let llm = Arc::new(MockLlmClient::new("summary"));
    let service = service(&extractor, &llm, None);

    let err = service
        .summarize_upload(&pdf_upload(), "medium", None)
        .await
        .unwrap_err();

    assert!(matches!(err, SummarizeError::MissingCredential));
    assert!(err.is_client_error());
    assert!(err.to_string().contains("GEMINI_API_KEY"));
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn given_long_text_when_summarizing_then_prompt_carries_at_most_char_cap() {
    let extractor = Arc::new(StubExtractor::with_text("cat "));
    let llm = Arc::new(MockLlmClient::new("summary"));
    let service = SummarizationService::new(
        Arc::clone(&extractor),
        Arc::clone(&llm),
        test_key(),
        SummaryLimits {
            max_pages: 20,
            max_chars: 100,
        },
    );
    let text = "x".repeat(500);

    service
        .summarize_text(&text, &SummaryMode::Short)
        .await
        .unwrap();

    let prompt = &llm.prompts()[0];
    let body = prompt.split_once("\n\n").unwrap().1;
    assert_eq!(body, "x".repeat(100));
}

#[tokio::test]
async fn given_default_limits_when_summarizing_huge_text_then_prompt_keeps_8000_chars() {
    let extractor = Arc::new(StubExtractor::with_text("unused"));
    let llm = Arc::new(MockLlmClient::new("summary"));
    let service = service(&extractor, &llm, test_key());
    let text = "y".repeat(20_000);

    service
        .summarize_text(&text, &SummaryMode::Medium)
        .await
        .unwrap();

    let body = llm.prompts()[0].split_once("\n\n").unwrap().1.to_string();
    assert_eq!(body.chars().count(), 8000);
}

#[tokio::test]
async fn given_blank_text_when_summarizing_text_then_returns_no_content() {
    let extractor = Arc::new(StubExtractor::with_text("unused"));
    let llm = Arc::new(MockLlmClient::new("summary"));
    let service = service(&extractor, &llm, test_key());

    let err = service
        .summarize_text("   \n", &SummaryMode::Medium)
        .await
        .unwrap_err();

    assert!(matches!(err, SummarizeError::NoContent));
    assert!(err.is_client_error());
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn given_blank_provider_reply_when_summarizing_then_returns_empty_summary_error() {
    let extractor = Arc::new(StubExtractor::with_text("content"));
    let llm = Arc::new(MockLlmClient::new("  \n "));
    let service = service(&extractor, &llm, test_key());

    let err = service
        .summarize_upload(&pdf_upload(), "long", None)
        .await
        .unwrap_err();

    assert!(matches!(err, SummarizeError::EmptySummary));
    assert!(!err.is_client_error());
}

#[tokio::test]
async fn given_provider_failure_when_summarizing_then_returns_server_side_provider_error() {
    let extractor = Arc::new(StubExtractor::with_text("content"));
    let llm = Arc::new(MockLlmClient::failing());
    let service = service(&extractor, &llm, test_key());

    let err = service
        .summarize_upload(&pdf_upload(), "medium", None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SummarizeError::Provider(LlmClientError::ApiRequestFailed(_))
    ));
    assert!(!err.is_client_error());
    assert!(
        err.to_string()
            .starts_with("Something went wrong while calling the Gemini API:")
    );
    assert_eq!(llm.call_count(), 1);
}

#[tokio::test]
async fn given_many_pages_when_summarizing_then_extractor_receives_page_cap() {
    let pages: Vec<String> = (1..=30).map(|n| format!("page-{n}")).collect();
    let refs: Vec<&str> = pages.iter().map(String::as_str).collect();
    let extractor = Arc::new(StubExtractor::with_pages(&refs));
    let llm = Arc::new(MockLlmClient::new("summary"));
    let service = service(&extractor, &llm, test_key());

    service
        .summarize_upload(&pdf_upload(), "medium", None)
        .await
        .unwrap();

    let prompt = &llm.prompts()[0];
    assert!(prompt.contains("page-20"));
    assert!(!prompt.contains("page-21"));
    assert_eq!(service.limits().max_pages, 20);
}
