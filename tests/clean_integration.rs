use credclean::{
    CleanEngine, CleanError, CliConfig, CsvCleanPipeline, FieldProfile, LocalStorage,
};
use tempfile::TempDir;

fn config_for(input_file: String, output_path: String) -> CliConfig {
    CliConfig {
        input_file,
        output_path,
        output_prefix: "bitwarden".to_string(),
        profile: None,
        json_summary: false,
        verbose: false,
        monitor: false,
        field_profile: FieldProfile::default(),
    }
}

fn expected_output_name(prefix: &str, extension: &str) -> String {
    format!(
        "{}_cleaned_{}.{}",
        prefix,
        chrono::Local::now().format("%Y-%m-%d"),
        extension
    )
}

#[tokio::test]
async fn test_end_to_end_cleaning_run() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out");
    let input_path = temp_dir.path().join("export.csv");

    std::fs::write(
        &input_path,
        "\
folder,favorite,name,login_uri,login_username,login_password
,,Bank,https://bank.com/login,u,p
,,Bank,https://bank.com/login,u,p
,,Bank short,https://bank.com,u,p
,,Mail,https://www.mail.example/inbox,m,q
,,Mail root,https://mail.example,m,q
,,Solo,not a url,s,s
",
    )
    .unwrap();

    let output_str = output_path.to_str().unwrap().to_string();
    let config = config_for(input_path.to_str().unwrap().to_string(), output_str.clone());

    let storage = LocalStorage::new(output_str.clone());
    let pipeline = CsvCleanPipeline::new(storage, config);
    let engine = CleanEngine::new(pipeline);

    let result_path = engine.run().await.unwrap();

    let file_name = expected_output_name("bitwarden", "csv");
    assert!(result_path.ends_with(&file_name));

    let written = std::fs::read_to_string(output_path.join(&file_name)).unwrap();
    let lines: Vec<&str> = written.lines().collect();

    // Header round-trips with the full declared field set
    assert_eq!(
        lines[0],
        "folder,favorite,name,login_uri,login_username,login_password"
    );
    // 6 in, 1 exact duplicate + 2 domain duplicates out
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], ",,Bank short,https://bank.com,u,p");
    assert_eq!(lines[2], ",,Mail root,https://mail.example,m,q");
    assert_eq!(lines[3], ",,Solo,not a url,s,s");
}

#[tokio::test]
async fn test_header_only_file_fails_with_empty_input() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("export.csv");
    std::fs::write(&input_path, "name,login_username,login_password\n").unwrap();

    let output_str = temp_dir.path().join("out").to_str().unwrap().to_string();
    let config = config_for(input_path.to_str().unwrap().to_string(), output_str.clone());

    let storage = LocalStorage::new(output_str);
    let engine = CleanEngine::new(CsvCleanPipeline::new(storage, config));

    let result = engine.run().await;
    assert!(matches!(result, Err(CleanError::EmptyInput)));

    // No partial output on a failed run
    assert!(!temp_dir.path().join("out").exists());
}

#[tokio::test]
async fn test_missing_input_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let output_str = temp_dir.path().join("out").to_str().unwrap().to_string();
    let config = config_for(
        temp_dir
            .path()
            .join("nope.csv")
            .to_str()
            .unwrap()
            .to_string(),
        output_str.clone(),
    );

    let storage = LocalStorage::new(output_str);
    let engine = CleanEngine::new(CsvCleanPipeline::new(storage, config));

    let result = engine.run().await;
    assert!(matches!(result, Err(CleanError::IoError(_))));
}

#[tokio::test]
async fn test_custom_field_profile_run() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("keepass.csv");
    let profile_path = temp_dir.path().join("keepass.toml");
    let output_path = temp_dir.path().join("out");

    std::fs::write(
        &input_path,
        "\
Title,Username,Password,URL
Bank,u,p,https://www.bank.com/login
Bank,u,p,https://bank.com
",
    )
    .unwrap();

    std::fs::write(
        &profile_path,
        r#"
[fields]
name = "Title"
username = "Username"
password = "Password"
uri = "URL"
"#,
    )
    .unwrap();

    let output_str = output_path.to_str().unwrap().to_string();
    let mut config = config_for(input_path.to_str().unwrap().to_string(), output_str.clone());
    config.output_prefix = "keepass".to_string();
    config.profile = Some(profile_path.to_str().unwrap().to_string());
    config.resolve_profile().unwrap();

    let storage = LocalStorage::new(output_str);
    let engine = CleanEngine::new(CsvCleanPipeline::new(storage, config));
    engine.run().await.unwrap();

    let file_name = expected_output_name("keepass", "csv");
    let written = std::fs::read_to_string(output_path.join(&file_name)).unwrap();
    let lines: Vec<&str> = written.lines().collect();

    assert_eq!(lines[0], "Title,Username,Password,URL");
    // Same triple: exact stage collapses to the first record regardless of URI
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "Bank,u,p,https://www.bank.com/login");
}

#[tokio::test]
async fn test_json_summary_written_alongside_csv() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("export.csv");
    let output_path = temp_dir.path().join("out");

    std::fs::write(
        &input_path,
        "name,login_uri,login_username,login_password\nBank,https://bank.com,u,p\nBank,https://bank.com,u,p\n",
    )
    .unwrap();

    let output_str = output_path.to_str().unwrap().to_string();
    let mut config = config_for(input_path.to_str().unwrap().to_string(), output_str.clone());
    config.json_summary = true;

    let storage = LocalStorage::new(output_str);
    let engine = CleanEngine::new(CsvCleanPipeline::new(storage, config));
    engine.run().await.unwrap();

    let summary_name = expected_output_name("bitwarden", "json");
    let summary: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(output_path.join(&summary_name)).unwrap())
            .unwrap();

    assert_eq!(summary["original_count"], 2);
    assert_eq!(summary["exact_duplicates_removed"], 1);
    assert_eq!(summary["domain_duplicates_removed"], 0);
    assert_eq!(summary["cleaned_count"], 1);
    assert_eq!(
        summary["log"].as_array().unwrap()[1],
        "Exact duplicate removed: Bank"
    );
}
