mod common;

use common::{build_pdf, upload, FakeClient, FakeExtractor};
use pitch_deck_analyzer::models::report::{MISSING_KEY_DIAGNOSTIC, MISSING_KEY_MESSAGE, NO_ERRORS_MARKER};
use pitch_deck_analyzer::services::prompt_builder::EVALUATION_QUESTIONS;
use pitch_deck_analyzer::{BatchOutcome, BatchProcessor, PdfTextExtractor, UploadedFile};

#[tokio::test]
async fn test_missing_key_skips_all_files() {
    let extractor = FakeExtractor::new();
    let client = FakeClient::without_key();
    let processor = BatchProcessor::with_parts(extractor.clone(), client.clone());

    let files = vec![upload("a.pdf"), upload("b.pdf")];
    let (report, diagnostics) = processor.evaluate_pitch_decks(&files).await;

    assert_eq!(report, MISSING_KEY_MESSAGE);
    assert_eq!(diagnostics, MISSING_KEY_DIAGNOSTIC);
    assert!(extractor.calls().is_empty(), "不应尝试提取任何文件");
    assert!(client.prompts().is_empty());
}

#[tokio::test]
async fn test_two_files_succeed_in_order() {
    let extractor = FakeExtractor::new()
        .with_text("first.pdf", "Acme Robotics")
        .with_text("second.pdf", "Globex Energy");
    let client = FakeClient::new();
    let processor = BatchProcessor::with_parts(extractor.clone(), client.clone());

    let files = vec![upload("first.pdf"), upload("second.pdf")];
    let (report, diagnostics) = processor.evaluate_pitch_decks(&files).await;

    assert_eq!(diagnostics, NO_ERRORS_MARKER);
    assert_eq!(
        report,
        "\n\n---\n📄 **first.pdf**:\nanswer for Acme Robotics\n\
         \n\n---\n📄 **second.pdf**:\nanswer for Globex Energy\n"
    );
    assert_eq!(report.matches("\n---\n📄").count(), 2);
    assert_eq!(extractor.calls(), vec!["first.pdf", "second.pdf"]);
}

#[tokio::test]
async fn test_failure_on_second_file_stops_batch() {
    let extractor = FakeExtractor::new()
        .with_text("one.pdf", "Deck one")
        .failing_on("two.pdf")
        .with_text("three.pdf", "Deck three");
    let client = FakeClient::new();
    let processor = BatchProcessor::with_parts(extractor.clone(), client.clone());

    let files = vec![upload("one.pdf"), upload("two.pdf"), upload("three.pdf")];
    let (report, diagnostics) = processor.evaluate_pitch_decks(&files).await;

    // 只有第一个文件的结果
    assert!(report.starts_with("❌ An error occurred: could not read PDF 'two.pdf'"));
    assert_eq!(report.matches("📄").count(), 1);
    assert!(report.contains("📄 **one.pdf**:\nanswer for Deck one\n"));
    assert!(!report.contains("three.pdf"));

    // 诊断包含完整错误链
    assert!(!diagnostics.is_empty());
    assert_ne!(diagnostics, NO_ERRORS_MARKER);
    assert!(diagnostics.contains("two.pdf"));
    assert!(diagnostics.contains("Caused by"));
    assert!(diagnostics.contains("invalid file header"));

    // 第三个文件从未被处理
    assert_eq!(extractor.calls(), vec!["one.pdf", "two.pdf"]);
    assert_eq!(client.prompts().len(), 1);
}

#[tokio::test]
async fn test_model_rejection_stops_batch() {
    let extractor = FakeExtractor::new()
        .with_text("ok.pdf", "Fine deck")
        .with_text("bad.pdf", "FORBIDDEN content")
        .with_text("later.pdf", "Never read");
    let client = FakeClient::rejecting("FORBIDDEN");
    let processor = BatchProcessor::with_parts(extractor.clone(), client.clone());

    let files = vec![upload("ok.pdf"), upload("bad.pdf"), upload("later.pdf")];
    let outcome = processor.run(&files).await;

    assert!(!outcome.is_success());
    assert_eq!(outcome.results().len(), 1);
    assert_eq!(outcome.results()[0].display_name, "ok.pdf");

    let (report, _) = outcome.render();
    assert!(report.starts_with("❌ An error occurred: model 'gpt-4' rejected the request: content policy"));
    assert_eq!(extractor.calls(), vec!["ok.pdf", "bad.pdf"]);
}

#[tokio::test]
async fn test_prompt_sent_for_each_file() {
    let extractor = FakeExtractor::new().with_text("deck.pdf", "Team of 4, based in Lisbon");
    let client = FakeClient::new();
    let processor = BatchProcessor::with_parts(extractor, client.clone());

    processor.evaluate_pitch_decks(&[upload("deck.pdf")]).await;

    let prompts = client.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("You are a startup evaluator."));
    assert!(prompts[0].contains("\"\"\"\nTeam of 4, based in Lisbon\n\"\"\""));
    for question in EVALUATION_QUESTIONS {
        assert!(prompts[0].contains(question));
    }
}

#[tokio::test]
async fn test_empty_batch() {
    let processor = BatchProcessor::with_parts(FakeExtractor::new(), FakeClient::new());
    let outcome = processor.run(&[]).await;
    assert!(matches!(outcome, BatchOutcome::Completed { ref results } if results.is_empty()));
    assert_eq!(outcome.render(), (String::new(), NO_ERRORS_MARKER.to_string()));
}

#[tokio::test]
async fn test_real_pdfs_end_to_end() {
    let client = FakeClient::new();
    let processor = BatchProcessor::with_parts(PdfTextExtractor::new(), client.clone());

    let files = vec![
        UploadedFile::from_bytes("acme.pdf", build_pdf(&["Acme Robotics", "Berlin"])),
        UploadedFile::from_bytes("scan.pdf", build_pdf(&[])),
    ];
    let (report, diagnostics) = processor.evaluate_pitch_decks(&files).await;

    assert_eq!(diagnostics, NO_ERRORS_MARKER);
    let acme = report.find("📄 **acme.pdf**").unwrap();
    let scan = report.find("📄 **scan.pdf**").unwrap();
    assert!(acme < scan);

    let prompts = client.prompts();
    assert_eq!(prompts.len(), 2);
    let company = prompts[0].find("Acme Robotics").unwrap();
    let city = prompts[0].find("Berlin").unwrap();
    assert!(company < city, "页面顺序应当保持");
    // 0 页文档得到空文本
    assert!(prompts[1].ends_with("PDF Content:\n\"\"\"\n\n\"\"\"\n"));
}

#[tokio::test]
async fn test_corrupt_pdf_end_to_end() {
    let client = FakeClient::new();
    let processor = BatchProcessor::with_parts(PdfTextExtractor::new(), client.clone());

    let files = vec![
        UploadedFile::from_bytes("good.pdf", build_pdf(&["Good deck"])),
        UploadedFile::from_bytes("corrupt.pdf", b"%PDF-1.4\nnot really".to_vec()),
    ];
    let (report, diagnostics) = processor.evaluate_pitch_decks(&files).await;

    assert!(report.starts_with("❌ An error occurred: could not read PDF 'corrupt.pdf'"));
    assert!(report.contains("📄 **good.pdf**"));
    assert!(diagnostics.contains("corrupt.pdf"));
    assert_eq!(client.prompts().len(), 1);
}
