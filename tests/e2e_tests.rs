// File: e2e_tests.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

mod common;

use common::*;
use juejin_stats::config::ConfigParameter;
use juejin_stats::extractor::StatExtractor;
use juejin_stats::http::HttpSource;
use juejin_stats::runner::{RunReport, Runner};
use juejin_stats::stats::{StatField, Stats};
use juejin_stats::storage::{HistoryStore, UpsertOutcome};
use pretty_assertions::assert_eq;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::ResponseTemplate;

async fn run_for(config: ConfigParameter, date: &'static str) -> anyhow::Result<RunReport> {
    tokio::task::spawn_blocking(move || {
        let source = HttpSource::from_config(&config)?;
        Runner::new(
            source,
            StatExtractor::default(),
            HistoryStore::new(config.history_file()),
        )
        .run_for(date)
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn test_complete_collect_workflow() {
    let mock_server = setup_mock_server().await;
    mount_profile(&mock_server, create_html_response(&sample_profile_text())).await;

    let temp_dir = TempDir::new().unwrap();
    let history_file = temp_dir.path().join("data").join("history.json");
    let config = test_config(&mock_server, &history_file, 5);

    let report = run_for(config, "2024-06-01").await.unwrap();

    assert_eq!(report.outcome, UpsertOutcome::Inserted);
    assert_eq!(
        report.stats,
        Stats {
            followers: Some(3456),
            following: Some(12),
            articles: Some(65),
            likes: Some(1024),
            views: Some(98765),
        }
    );

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&history_file).unwrap()).unwrap();
    assert_eq!(
        written,
        serde_json::json!([{
            "date": "2024-06-01",
            "followers": 3456,
            "following": 12,
            "articles": 65,
            "likes": 1024,
            "views": 98765
        }])
    );
}

#[tokio::test]
async fn test_partial_page_writes_nulls() {
    let mock_server = setup_mock_server().await;
    mount_profile(&mock_server, create_html_response("关注者 1,234 文章 56")).await;

    let temp_dir = TempDir::new().unwrap();
    let history_file = temp_dir.path().join("history.json");
    let config = test_config(&mock_server, &history_file, 5);

    run_for(config, "2024-06-01").await.unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&history_file).unwrap()).unwrap();
    assert_eq!(
        written,
        serde_json::json!([{
            "date": "2024-06-01",
            "followers": 1234,
            "following": null,
            "articles": 56,
            "likes": null,
            "views": null
        }])
    );
}

#[tokio::test]
async fn test_appends_new_day_in_order() {
    let mock_server = setup_mock_server().await;
    mount_profile(&mock_server, create_html_response("关注者 20")).await;

    let temp_dir = TempDir::new().unwrap();
    let history_file = temp_dir.path().join("history.json");
    fs::write(
        &history_file,
        r#"[
  {"date": "2024-06-03", "followers": 30, "following": null, "articles": null, "likes": null, "views": null},
  {"date": "2024-06-01", "followers": 10, "following": null, "articles": null, "likes": null, "views": null}
]"#,
    )
    .unwrap();
    let config = test_config(&mock_server, &history_file, 5);

    let report = run_for(config, "2024-06-02").await.unwrap();
    assert_eq!(report.total_records, 3);

    let history = HistoryStore::new(&history_file).load();
    assert_eq!(
        history.series(StatField::Followers),
        vec![
            ("2024-06-01", Some(10)),
            ("2024-06-02", Some(20)),
            ("2024-06-03", Some(30)),
        ]
    );
}

#[tokio::test]
async fn test_timeout_leaves_history_unmodified() {
    let mock_server = setup_mock_server().await;
    mount_profile(
        &mock_server,
        create_html_response("关注者 999").set_delay(Duration::from_secs(3)),
    )
    .await;

    let temp_dir = TempDir::new().unwrap();
    let history_file = temp_dir.path().join("history.json");
    let before = r#"[{"date":"2024-01-01","followers":100}]"#;
    fs::write(&history_file, before).unwrap();
    let config = test_config(&mock_server, &history_file, 1);

    let err = run_for(config, "2024-01-01").await.unwrap_err();

    assert!(format!("{:#}", err).starts_with("Failed to fetch data: "));
    assert_eq!(fs::read_to_string(&history_file).unwrap(), before);
}

#[tokio::test]
async fn test_server_error_writes_nothing() {
    let mock_server = setup_mock_server().await;
    mount_profile(&mock_server, ResponseTemplate::new(502)).await;

    let temp_dir = TempDir::new().unwrap();
    let history_file = temp_dir.path().join("data").join("history.json");
    let config = test_config(&mock_server, &history_file, 5);

    assert!(run_for(config, "2024-01-01").await.is_err());
    assert!(!history_file.exists());
    assert!(!history_file.parent().unwrap().exists());
}
