use rehber_testing::TestWorld;

#[test]
fn test_hello_greets_world_by_default() {
    let world = TestWorld::new();
    let result = world.run(&["hello"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(result.stdout(), "Hello, world!\n");
}

#[test]
fn test_hello_name_flag() {
    let world = TestWorld::new();
    let result = world.run(&["hello", "--name", "Ada"]).unwrap();

    assert!(result.success());
    assert_eq!(result.stdout(), "Hello, Ada!\n");

    let result = world.run(&["hello", "-n", "Grace"]).unwrap();
    assert_eq!(result.stdout(), "Hello, Grace!\n");
}

#[test]
fn test_hello_verbose_announces_itself_first() {
    let world = TestWorld::new();
    let result = world.run(&["-v", "hello"]).unwrap();

    assert!(result.success());
    let lines: Vec<&str> = result.stdout().lines().collect();
    assert_eq!(lines, vec!["Verbose mode is ON", "Hello, world!"]);
}

#[test]
fn test_hello_does_not_touch_data_or_log() {
    // empty data dir: hello must still work
    let world = TestWorld::new();
    let result = world.run(&["hello"]).unwrap();

    assert!(result.success());
    assert!(!world.log_file().exists());
}
