//! Declarative macros for generating CLI parsing tests.
//!
//! This module provides macros to reduce boilerplate in CLI argument parsing tests.
//! Instead of writing repetitive test functions, you can declare the test cases
//! and let the macro generate the actual test code. The invoking module must
//! have `Args`, `clap::Parser` and `rstest::rstest` in scope.

/// Generate a test for default values when the shell is invoked with no flags.
#[macro_export]
macro_rules! cli_defaults_test {
    (
        defaults: {
            $($def_field:ident : $def_expected:expr),* $(,)?
        } $(,)?
    ) => {
        #[rstest]
        fn test_defaults() {
            let args = Args::try_parse_from(["sqlsh"]).unwrap();
            $(
                assert_eq!(args.$def_field, $def_expected,
                    concat!("Default value mismatch for field: ", stringify!($def_field)));
            )*
        }
    };
}

/// Generate a single CLI option test.
///
/// # Example
///
/// ```ignore
/// cli_option_test! {
///     test_name: test_with_host,
///     args: ["-h", "db"],
///     field: host,
///     expected: Some("db".to_string()),
/// }
/// ```
#[macro_export]
macro_rules! cli_option_test {
    (
        test_name: $test_name:ident,
        args: [$($arg:literal),+],
        field: $field:ident,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let args = Args::try_parse_from([
                "sqlsh",
                $($arg),+
            ]).unwrap();
            assert_eq!(args.$field, $expected,
                concat!("Field ", stringify!($field), " mismatch"));
        }
    };
}

/// Generate a test that verifies parsing fails with specific invalid args.
///
/// # Example
///
/// ```ignore
/// cli_error_test! {
///     test_name: test_port_not_a_number,
///     args: ["-P", "abc"],
/// }
/// ```
#[macro_export]
macro_rules! cli_error_test {
    (
        test_name: $test_name:ident,
        args: [$($arg:literal),+] $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let result = Args::try_parse_from([
                "sqlsh",
                $($arg),+
            ]);
            assert!(result.is_err());
        }
    };
}
