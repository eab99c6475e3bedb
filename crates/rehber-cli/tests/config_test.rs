use rehber_testing::TestWorld;

#[test]
fn test_config_file_in_working_directory() {
    let world = TestWorld::new().with_config("name = \"Config\"\n");
    let result = world.run(&["hello"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(
        result.stdout(),
        "Using config file: config.toml\nHello, Config!\n"
    );
}

#[test]
fn test_env_overrides_config_file() {
    let world = TestWorld::new()
        .with_config("name = \"Config\"\n")
        .with_env("REHBER_NAME", "Env");
    let result = world.run(&["hello"]).unwrap();

    assert!(result.stdout().ends_with("Hello, Env!\n"));
}

#[test]
fn test_flag_overrides_env() {
    let world = TestWorld::new().with_env("REHBER_NAME", "Env");
    let result = world.run(&["hello", "--name", "Flag"]).unwrap();

    assert_eq!(result.stdout(), "Hello, Flag!\n");
}

#[test]
fn test_dotenv_file_is_read() {
    let world = TestWorld::new();
    std::fs::write(world.root().join(".env"), "REHBER_NAME=Dotenv\n").unwrap();
    let result = world.run(&["hello"]).unwrap();

    assert_eq!(result.stdout(), "Hello, Dotenv!\n");
}

#[test]
fn test_config_source_printed_before_verbose_notice() {
    let world = TestWorld::new().with_config("verbose = true\n");
    let result = world.run(&["hello"]).unwrap();

    let lines: Vec<&str> = result.stdout().lines().collect();
    assert_eq!(
        lines,
        vec!["Using config file: config.toml", "Verbose mode is ON", "Hello, world!"]
    );
}

#[test]
fn test_data_dir_from_config_file() {
    let world = TestWorld::new()
        .with_sample_data()
        .with_config("data_dir = \"data\"\nlog_file = \"from-config.log\"\n");
    let result = world.run_bare(&["check"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().starts_with("Using config file: config.toml\n"));
    assert!(world.root().join("from-config.log").exists());
}

#[test]
fn test_no_config_file_prints_no_source() {
    let world = TestWorld::new();
    let result = world.run(&["hello"]).unwrap();

    assert!(!result.stdout().contains("Using config file"));
}

#[test]
fn test_explicit_config_path_is_printed() {
    let world = TestWorld::new();
    std::fs::write(world.root().join("custom.toml"), "name = \"Custom\"\n").unwrap();
    let result = world.run(&["--config", "custom.toml", "hello"]).unwrap();

    assert_eq!(
        result.stdout(),
        "Using config file: custom.toml\nHello, Custom!\n"
    );
}

#[test]
fn test_explicit_missing_config_fails() {
    let world = TestWorld::new();
    let result = world.run(&["--config", "nope.toml", "hello"]).unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().starts_with("Error: Config file not found"));
}

#[test]
fn test_malformed_config_fails() {
    let world = TestWorld::new().with_config("name = [\n");
    let result = world.run(&["hello"]).unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().contains("Failed to parse config file"));
}
