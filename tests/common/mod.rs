// File: common/mod.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

#![allow(dead_code)]

use juejin_stats::config::ConfigParameter;
use std::path::Path;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const PROFILE_PATH: &str = "/user/3659622444970574";

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn create_html_response(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(content)
        .insert_header("content-type", "text/html; charset=utf-8")
}

pub async fn mount_profile(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(PROFILE_PATH))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

pub fn profile_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), PROFILE_PATH)
}

pub fn test_config(server: &MockServer, history_file: &Path, timeout: u64) -> ConfigParameter {
    let mut config = ConfigParameter::new();
    config.set_url(profile_url(server));
    config.set_history_file(history_file);
    config.set_timeout(timeout);
    config
}

pub fn sample_profile_text() -> String {
    r#"<!DOCTYPE html>
<html lang="zh">
<head><title>掘金用户主页</title></head>
<body>
    <div class="stat-block">
        <span>文章被点赞 1,024</span>
        <span>文章被阅读 98,765</span>
    </div>
    <div class="follow-block">关注了 12 关注者 3,456</div>
    <nav>文章 65</nav>
</body>
</html>"#
        .to_string()
}
