use rehber_testing::{TestWorld, assertions, fixtures};

#[test]
fn test_check_reports_counts() {
    let world = TestWorld::new().with_sample_data();
    let result = world.run(&["check"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Directory OK"));
    assert_eq!(assertions::count_after(&result, "People:").unwrap(), 3);
    assert_eq!(assertions::count_after(&result, "Departments:").unwrap(), 3);
    assert!(result.stdout().contains("(2 top-level)"));
}

#[test]
fn test_check_writes_log_file() {
    let world = TestWorld::new().with_sample_data();
    let result = world.run(&["check"]).unwrap();

    assert!(result.success());
    let log = world.log_contents();
    assert!(log.contains("starting"), "log: {}", log);
    assert!(log.contains("check passed: 3 people, 3 departments"), "log: {}", log);
}

#[test]
fn test_check_missing_manager_fails() {
    let world = TestWorld::new().with_data(
        fixtures::sample_people(),
        fixtures::departments_with_missing_manager(),
    );
    let result = world.run(&["check"]).unwrap();

    assert_eq!(result.code(), Some(1));
    assertions::assert_failed_with(&result, "failed to get manager of department d9").unwrap();
    assert!(result.stderr().contains("person with id 99 not found"));
}

#[test]
fn test_check_missing_file_fails() {
    let world = TestWorld::new();
    world
        .write_data_file("people.json", &fixtures::sample_people().to_string())
        .unwrap();
    let result = world.run(&["check"]).unwrap();

    assertions::assert_failed_with(&result, "departments.json").unwrap();
}

#[test]
fn test_check_malformed_file_fails() {
    let world = TestWorld::new().with_sample_data();
    world.write_data_file("people.json", "[{\"id\": ").unwrap();
    let result = world.run(&["check"]).unwrap();

    assertions::assert_failed_with(&result, "people.json").unwrap();
}

#[test]
fn test_check_rejects_department_cycle() {
    let world =
        TestWorld::new().with_data(fixtures::sample_people(), fixtures::departments_with_cycle());
    let result = world.run(&["check"]).unwrap();

    assertions::assert_failed_with(&result, "cycle").unwrap();
}
