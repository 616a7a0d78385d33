use piimask_sources::SourceHandlerRegistry;

#[tokio::test]
async fn test_text_handler() {
    let registry = SourceHandlerRegistry::new();

    let content = registry.load("text:Hello, world!").await.unwrap();
    assert_eq!(content, "Hello, world!");
}

#[tokio::test]
async fn test_file_handler_bare_path() {
    let temp_dir = tempfile::tempdir().unwrap();
    let test_file = temp_dir.path().join("input.txt");
    std::fs::write(&test_file, "Aadhaar 2345 6789 1234").unwrap();

    let registry = SourceHandlerRegistry::new();
    let content = registry
        .load(&test_file.display().to_string())
        .await
        .unwrap();
    assert_eq!(content, "Aadhaar 2345 6789 1234");
}

#[tokio::test]
async fn test_unknown_scheme_is_read_as_path() {
    let registry = SourceHandlerRegistry::new();
    let err = registry.load("s3:bucket/key").await.unwrap_err();
    assert!(err.to_string().contains("Failed to read file s3:bucket/key"));
}
