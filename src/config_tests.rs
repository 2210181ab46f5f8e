// File: config_tests.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

#[cfg(test)]
mod tests {
    use crate::config::*;
    use rstest::*;
    use std::path::Path;

    #[test]
    fn test_config_parameter_default() {
        let config = ConfigParameter::default();

        assert_eq!(config.url(), "https://juejin.cn/user/3659622444970574");
        assert_eq!(config.history_file(), Path::new("data/history.json"));
        assert_eq!(config.timeout(), 30);
        assert!(config.user_agent().contains("Firefox/110.0"));
    }

    #[test]
    fn test_config_parameter_new_matches_default() {
        assert_eq!(ConfigParameter::new(), ConfigParameter::default());
    }

    #[test]
    fn test_set_url() {
        let mut config = ConfigParameter::new();

        config.set_url("https://juejin.cn/user/42");
        assert_eq!(config.url(), "https://juejin.cn/user/42");
    }

    #[test]
    fn test_set_history_file() {
        let mut config = ConfigParameter::new();

        config.set_history_file("/tmp/stats/history.json");
        assert_eq!(config.history_file(), Path::new("/tmp/stats/history.json"));
    }

    #[rstest]
    #[case(1)]
    #[case(30)]
    #[case(300)]
    fn test_set_timeout(#[case] timeout: u64) {
        let mut config = ConfigParameter::new();

        config.set_timeout(timeout);
        assert_eq!(config.timeout(), timeout);
    }

    #[test]
    fn test_set_user_agent() {
        let mut config = ConfigParameter::new();

        config.set_user_agent("curl/8.0");
        assert_eq!(config.user_agent(), "curl/8.0");
    }

    #[rstest]
    #[case(None, DEFAULT_URL)]
    #[case(Some(""), DEFAULT_URL)]
    #[case(Some("   "), DEFAULT_URL)]
    #[case(Some("https://juejin.cn/user/7"), "https://juejin.cn/user/7")]
    #[case(Some(" https://juejin.cn/user/8\n"), "https://juejin.cn/user/8")]
    fn test_env_value_override(#[case] value: Option<&str>, #[case] expected: &str) {
        let config = ConfigParameter::from_env_value(value.map(str::to_string));

        assert_eq!(config.url(), expected);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.history_file(), Path::new(DEFAULT_HISTORY_FILE));
    }
}
