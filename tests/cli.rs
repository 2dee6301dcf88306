mod cli {
    #![allow(non_snake_case)]

    use assert_cmd::prelude::*;
    use predicates::prelude::*;
    use predicates::str::contains;
    use serde_json::Value;

    use std::fs;
    use std::process::Command;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const NAME: &str = "trace-extractor";

    const TRACE: &str = r#"{
        "location": "NYC",
        "chain_of_thought": [
            {"tool_executions": [{"tool_name": "flights", "params": {}, "output": [1]}]}
        ],
        "notes": "see https://flights.example.com/search?x=1"
    }"#;

    #[test]
    fn test_output__end_to_end() -> TestResult {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("trace.json");
        fs::write(&input, TRACE)?;
        let output_dir = dir.path().join("out");
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(dir.path())
            .arg(&input)
            .arg(&output_dir)
            .arg("--no-config");

        cmd.assert()
            .success()
            .stdout(contains("Data extraction complete. Files saved:"))
            .stdout(contains("extracted_data.json"))
            .stdout(contains("tool_executions.csv"))
            .stdout(contains("urls.csv"));

        let report: Value =
            serde_json::from_str(&fs::read_to_string(output_dir.join("extracted_data.json"))?)?;
        assert_eq!(report["metadata"]["location"], "NYC");
        assert_eq!(report["tool_executions"].as_array().unwrap().len(), 1);
        assert_eq!(
            report["sorted_urls"],
            serde_json::json!(["https://flights.example.com/search?x=1"])
        );
        assert_eq!(
            fs::read_to_string(output_dir.join("urls.csv"))?,
            "url\r\nhttps://flights.example.com/search?x=1\r\n"
        );
        Ok(())
    }

    #[test]
    fn test_output__when_defaults_used() -> TestResult {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("input.json"), TRACE)?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(dir.path()).arg("--no-config");

        cmd.assert().success();
        assert!(dir.path().join("extracted_data.json").exists());
        assert!(dir.path().join("tool_executions.csv").exists());
        assert!(dir.path().join("urls.csv").exists());
        Ok(())
    }

    #[test]
    fn test_output__when_no_urls_or_tool_executions() -> TestResult {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("trace.json");
        fs::write(&input, r#"{"location": "Oslo"}"#)?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(dir.path())
            .arg(&input)
            .arg(dir.path())
            .arg("--no-config");

        cmd.assert()
            .success()
            .stdout(contains(
                "Warning: 'chain_of_thought' key not found in JSON. Using an empty list.",
            ))
            .stdout(contains("No URLs were found in the JSON data."))
            .stdout(contains("No tool execution details found to export."));

        assert!(dir.path().join("extracted_data.json").exists());
        assert!(!dir.path().join("tool_executions.csv").exists());
        assert!(!dir.path().join("urls.csv").exists());
        Ok(())
    }

    #[test]
    fn test_output__when_non_existing_file_provided() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(dir.path())
            .arg("some-file-that-doesnt-exist.json")
            .arg("--no-config");

        cmd.assert()
            .success()
            .stdout(contains("Error loading JSON file"));
        assert!(!dir.path().join("extracted_data.json").exists());
        Ok(())
    }

    #[test]
    fn test_output__when_malformed_json() -> TestResult {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("trace.json");
        fs::write(&input, "{\"chain_of_thought\": [")?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(dir.path()).arg(&input).arg("--no-config");

        cmd.assert()
            .success()
            .stdout(contains("Error loading JSON file: JSON error:"));
        assert!(!dir.path().join("extracted_data.json").exists());
        Ok(())
    }

    #[test]
    fn test_output__when_deeply_nested_json() -> TestResult {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("trace.json");
        let depth = 1_000;
        fs::write(
            &input,
            format!(
                r#"{{"chain_of_thought": [{{"thought": {}"see https://maps.example.com"{}}}]}}"#,
                "[".repeat(depth),
                "]".repeat(depth)
            ),
        )?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(dir.path()).arg(&input).arg("--no-config");

        cmd.assert()
            .success()
            .stdout(contains("Data extraction complete. Files saved:"));
        assert_eq!(
            fs::read_to_string(dir.path().join("urls.csv"))?,
            "url\r\nhttps://maps.example.com\r\n"
        );
        Ok(())
    }

    #[test]
    fn test_output__keeps_large_integers_exact() -> TestResult {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("trace.json");
        fs::write(
            &input,
            r#"{"chain_of_thought": [{"id": 123456789012345678901234567890, "tool_executions": [{"tool_name": "maps", "params": {"n": 98765432109876543210987654321}, "output": 1.000}]}]}"#,
        )?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(dir.path()).arg(&input).arg("--no-config");

        cmd.assert().success();
        let report = fs::read_to_string(dir.path().join("extracted_data.json"))?;
        assert!(report.contains(r#""id": 123456789012345678901234567890"#));
        assert!(report.contains(r#""n": 98765432109876543210987654321"#));
        let tools = fs::read_to_string(dir.path().join("tool_executions.csv"))?;
        assert!(tools.contains(r#"{""n"": 98765432109876543210987654321}"#));
        assert!(tools.contains(",1.000\r\n"));
        Ok(())
    }

    #[test]
    fn test_output__when_invalid_config_file_in_working_dir() -> TestResult {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join(".trace-extractor.toml"), "keywords = []\n")?;
        fs::write(dir.path().join("input.json"), TRACE)?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(dir.path()).env_remove("RUST_LOG");

        cmd.assert()
            .success()
            .stdout(contains("Ignoring config file: Configuration error:"))
            .stdout(contains("Data extraction complete. Files saved:"));
        assert!(dir.path().join("urls.csv").exists());
        Ok(())
    }

    #[test]
    fn test_output__rust_log_sets_level() -> TestResult {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("trace.json");
        fs::write(&input, TRACE)?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(dir.path())
            .arg(&input)
            .arg("--no-config")
            .env("RUST_LOG", "debug");

        cmd.assert()
            .success()
            .stdout(contains("Found 1 unique URLs (from 1 total)"));
        Ok(())
    }

    #[test]
    fn test_output__debug_lines_hidden_by_default() -> TestResult {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("trace.json");
        fs::write(&input, TRACE)?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(dir.path())
            .arg(&input)
            .arg("--no-config")
            .env_remove("RUST_LOG");

        cmd.assert()
            .success()
            .stdout(contains("Found 1 unique URLs").not());
        Ok(())
    }

    #[test]
    fn test_output__quiet() -> TestResult {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("trace.json");
        fs::write(&input, TRACE)?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(dir.path())
            .arg(&input)
            .arg("--no-config")
            .arg("--quiet");

        cmd.assert().success().stdout("");
        assert!(dir.path().join("urls.csv").exists());
        Ok(())
    }

    #[test]
    fn test_output__keywords_flag() -> TestResult {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("trace.json");
        fs::write(
            &input,
            r#"{"links": ["https://maps.example.com", "https://menu.example.com"]}"#,
        )?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(dir.path())
            .arg(&input)
            .arg("--no-config")
            .arg("--keywords")
            .arg("menu");

        cmd.assert().success();
        assert_eq!(
            fs::read_to_string(dir.path().join("urls.csv"))?,
            "url\r\nhttps://menu.example.com\r\nhttps://maps.example.com\r\n"
        );
        Ok(())
    }

    #[test]
    fn test_output__config_file_in_working_dir() -> TestResult {
        let dir = tempfile::tempdir()?;
        fs::write(
            dir.path().join(".trace-extractor.toml"),
            "keywords = [\"menu\"]\n",
        )?;
        fs::write(
            dir.path().join("input.json"),
            r#"{"links": ["https://maps.example.com", "https://menu.example.com"]}"#,
        )?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(dir.path());

        cmd.assert().success();
        assert_eq!(
            fs::read_to_string(dir.path().join("urls.csv"))?,
            "url\r\nhttps://menu.example.com\r\nhttps://maps.example.com\r\n"
        );
        Ok(())
    }

    #[test]
    fn test_output__when_invalid_config_file_provided() -> TestResult {
        let dir = tempfile::tempdir()?;
        let config = dir.path().join("bad.toml");
        fs::write(&config, "keywords = [")?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(dir.path()).arg("--config").arg(&config);

        cmd.assert()
            .failure()
            .stderr(contains("Configuration error: Invalid TOML in config file"));
        Ok(())
    }

    #[test]
    fn test_output__when_too_many_arguments() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("a.json").arg("out").arg("extra");

        cmd.assert().failure();
        Ok(())
    }
}
