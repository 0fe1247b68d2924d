use kudos::setup_logging;

// setup_logging installs the global subscriber; this binary is its only
// caller, so the single invocation here must succeed without panicking.
#[test]
fn test_logging_setup() {
    let result = std::panic::catch_unwind(setup_logging);

    assert!(result.is_ok(), "setup_logging should not panic");
}
