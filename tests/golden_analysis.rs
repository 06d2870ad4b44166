use editorial_core::document::{CandidateDocument, ContentDocument};
use editorial_core::linking::LinkFinder;
use editorial_core::seo::SeoAnalyzer;
use editorial_core::types::identifiers::DocumentId;

#[test]
fn golden_analysis_snapshot() {
    let doc = ContentDocument::new(
        "Practical Guide",
        "A concise guide to writing content that both readers and search engines enjoy.",
        "<h1>Guide</h1> <p>Alpha beta gamma.</p>",
    );

    let result = SeoAnalyzer::default().analyze(&doc);
    let json = serde_json::to_string_pretty(&result).unwrap();

    let expected = r#"{
  "score": 85,
  "issues": [
    {
      "severity": "warning",
      "message": "Content is too short (4 words, recommended at least 300)",
      "field": "content",
      "recommendation": "Expand the content to cover the topic in more depth"
    },
    {
      "severity": "info",
      "message": "Only 0 internal link(s) found, recommended at least 2",
      "field": "content",
      "recommendation": "Link to related content on the same site"
    }
  ],
  "suggestions": [
    "Add more internal links to related content"
  ],
  "readability_score": 100.0,
  "word_count": 4,
  "reading_time_minutes": 1
}"#;

    assert_eq!(json.trim(), expected.trim(), "golden snapshot mismatch");
}

#[test]
fn golden_link_suggestion_snapshot() {
    let corpus = vec![CandidateDocument::new(
        "post-a",
        "React Hooks Guide",
        "react-hooks",
        "A guide to hooks",
    )];
    let content = "<p>Read the react hooks guide for details.</p>";

    let suggestions =
        LinkFinder::default().find_opportunities(content, &DocumentId::new("post-b"), &corpus);
    let json = serde_json::to_string_pretty(&suggestions).unwrap();

    let expected = r#"[
  {
    "id": "lnk-de13a98026889339",
    "source_document_id": "post-b",
    "target_document_id": "post-a",
    "anchor_text": "React Hooks Guide",
    "relevance_score": 90,
    "context_snippet": "Read the react hooks guide for details.",
    "applied": false
  }
]"#;

    assert_eq!(json.trim(), expected.trim(), "golden snapshot mismatch");
}
