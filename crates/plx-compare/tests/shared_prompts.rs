use plx_compare::{CommonalityAnalyzer, VersionRecord};
use plx_core::Role;
use serde_json::json;

fn version(value: serde_json::Value) -> VersionRecord {
    VersionRecord::from_value(&value)
}

#[test]
fn parallel_prompts_share_per_position_content() {
    let versions = [
        version(json!({"prompt": [
            {"role": "system", "content": "You are a helpful assistant. Answer briefly."},
            {"role": "user", "content": "Tell me about cats"},
        ]})),
        version(json!({"prompt": [
            {"role": "system", "content": "You are a helpful assistant. Answer at length."},
            {"role": "user", "content": "Tell me about dogs"},
        ]})),
    ];
    let mut analyzer = CommonalityAnalyzer::default();
    let shared = analyzer.shared_prompt_content(&versions);
    assert_eq!(shared.len(), 2);
    assert_eq!(shared[0].role, Role::System);
    assert!(
        shared[0].plain_text().contains("You are a helpful assistant"),
        "got: {}",
        shared[0].plain_text()
    );
    assert_eq!(shared[1].role, Role::User);
    assert!(shared[1].plain_text().contains("Tell me about"));
}

#[test]
fn a_single_prompted_version_is_returned_as_is() {
    let versions = [
        version(json!({"model": "a"})),
        version(json!({"prompt": [
            {"role": "system", "content": "Only me"},
        ]})),
    ];
    let mut analyzer = CommonalityAnalyzer::default();
    let shared = analyzer.shared_prompt_content(&versions);
    assert_eq!(shared.len(), 1);
    assert_eq!(shared[0].plain_text(), "Only me");
}

#[test]
fn role_mismatch_at_a_position_contributes_nothing() {
    let versions = [
        version(json!({"prompt": [
            {"role": "system", "content": "Grade the essay fairly"},
            {"role": "user", "content": "Here is the essay text"},
        ]})),
        version(json!({"prompt": [
            {"role": "system", "content": "Grade the essay strictly"},
            {"role": "assistant", "content": "Here is the essay text"},
        ]})),
    ];
    let mut analyzer = CommonalityAnalyzer::default();
    let shared = analyzer.shared_prompt_content(&versions);
    assert_eq!(shared.len(), 1);
    assert_eq!(shared[0].role, Role::System);
}

#[test]
fn reordered_prompts_share_nothing_positionally() {
    let versions = [
        version(json!({"prompt": [
            {"role": "system", "content": "Analyze the server logs"},
            {"role": "user", "content": "Thanks for the help today"},
        ]})),
        version(json!({"prompt": [
            {"role": "user", "content": "Thanks for the help today"},
            {"role": "system", "content": "Analyze the server logs"},
        ]})),
    ];
    let mut analyzer = CommonalityAnalyzer::default();
    assert!(analyzer.shared_prompt_content(&versions).is_empty());
}

#[test]
fn non_text_parts_are_ignored_but_text_parts_participate() {
    let versions = [
        version(json!({"prompt": [
            {"role": "user", "content": [
                {"type": "text", "text": "Describe the attached image"},
                {"type": "file", "file_id": "f-1"},
            ]},
        ]})),
        version(json!({"prompt": [
            {"role": "user", "content": [
                {"type": "text", "text": "Describe the attached image"},
                {"type": "file", "file_id": "f-2"},
            ]},
        ]})),
    ];
    let mut analyzer = CommonalityAnalyzer::default();
    let shared = analyzer.shared_prompt_content(&versions);
    assert_eq!(shared.len(), 1);
    assert_eq!(shared[0].plain_text(), "Describe the attached image");
}

#[test]
fn a_position_with_only_non_text_content_is_skipped() {
    let versions = [
        version(json!({"prompt": [
            {"role": "tool", "content": [{"type": "tool_result", "id": "t-1"}]},
        ]})),
        version(json!({"prompt": [
            {"role": "tool", "content": [{"type": "tool_result", "id": "t-2"}]},
        ]})),
    ];
    let mut analyzer = CommonalityAnalyzer::default();
    assert!(analyzer.shared_prompt_content(&versions).is_empty());
}

#[test]
fn uneven_prompt_lengths_only_share_covered_positions() {
    let versions = [
        version(json!({"prompt": [
            {"role": "system", "content": "Translate to French please"},
            {"role": "user", "content": "An extra trailing message"},
        ]})),
        version(json!({"prompt": [
            {"role": "system", "content": "Translate to French please"},
        ]})),
    ];
    let mut analyzer = CommonalityAnalyzer::default();
    let shared = analyzer.shared_prompt_content(&versions);
    assert_eq!(shared.len(), 1);
    assert_eq!(shared[0].plain_text(), "Translate to French please");
}
