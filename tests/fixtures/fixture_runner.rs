use super::fixture_loader::{FixtureFailure, FixtureResult, TestCase, load_fixtures};
/// Fixture runner
///
/// Splits every fixture input and compares each expected view.
use urlview::Url;

fn check(
    failures: &mut Vec<FixtureFailure>,
    test_num: usize,
    input: &str,
    field: &str,
    expected: Option<&str>,
    actual: &str,
) {
    if let Some(expected) = expected {
        if expected != actual {
            failures.push(FixtureFailure {
                test_num,
                input: input.to_string(),
                field: field.to_string(),
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }
    }
}

/// Run fixture cases and return results
pub fn run_fixtures(tests: Vec<TestCase>) -> FixtureResult {
    let mut result = FixtureResult::default();
    let mut test_num = 0;

    for test in tests {
        let TestCase::UrlCase {
            input,
            scheme,
            username,
            password,
            host,
            port,
            path,
            query,
            fragment,
            query_count,
            query_at,
        } = test
        else {
            continue;
        };
        test_num += 1;

        let url = Url::parse(&input);
        let mut failures = Vec::new();

        check(
            &mut failures,
            test_num,
            &input,
            "scheme",
            scheme.as_deref(),
            url.scheme(),
        );
        check(
            &mut failures,
            test_num,
            &input,
            "username",
            username.as_deref(),
            url.username(),
        );
        check(
            &mut failures,
            test_num,
            &input,
            "password",
            password.as_deref(),
            url.password(),
        );
        check(
            &mut failures,
            test_num,
            &input,
            "host",
            host.as_deref(),
            url.host(),
        );
        check(
            &mut failures,
            test_num,
            &input,
            "port",
            port.as_deref(),
            url.port(),
        );
        check(
            &mut failures,
            test_num,
            &input,
            "path",
            path.as_deref(),
            url.path(),
        );
        check(
            &mut failures,
            test_num,
            &input,
            "query",
            query.as_deref(),
            url.querys(),
        );
        check(
            &mut failures,
            test_num,
            &input,
            "fragment",
            fragment.as_deref(),
            url.fragment(),
        );

        if let Some(expected) = query_count {
            let actual = url.query_count().to_string();
            check(
                &mut failures,
                test_num,
                &input,
                "query_count",
                Some(expected.to_string().as_str()),
                &actual,
            );
        }
        for (index, expected) in query_at.iter().flatten().enumerate() {
            let field = format!("query_at({index})");
            check(
                &mut failures,
                test_num,
                &input,
                &field,
                Some(expected.as_str()),
                url.query_at(index),
            );
        }

        if failures.is_empty() {
            result.passed += 1;
        } else {
            result.failed += 1;
            result.failures.extend(failures);
        }
    }

    result
}

#[test]
fn test_bundled_fixtures() {
    let result = run_fixtures(load_fixtures());
    for failure in &result.failures {
        eprintln!(
            "#{} {:?} {}: expected {:?}, got {:?}",
            failure.test_num, failure.input, failure.field, failure.expected, failure.actual
        );
    }
    assert!(result.failures.is_empty(), "{}", result.summary());
    assert!(result.passed > 0);
}

#[test]
fn test_runner_reports_mismatches() {
    let tests: Vec<TestCase> = serde_json::from_str(
        r#"["comment", {"input": "http://h/p", "host": "wrong", "path": "p"}]"#,
    )
    .unwrap();
    let result = run_fixtures(tests);
    assert_eq!(result.passed, 0);
    assert_eq!(result.failed, 1);
    assert_eq!(result.failures[0].field, "host");
    assert_eq!(result.failures[0].actual, "h");
}
