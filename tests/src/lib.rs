#[cfg(test)]
mod integration_tests {
    use std::path::{Path, PathBuf};

    use clap::Parser;
    use secret_recovery::{run_batch, CaseOutcome, RecoveryError, TestCase};
    use secret_recovery_cli::{input::load_case, run, Cli};

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
    }

    fn run_cli(args: &[&str]) -> (bool, String, String) {
        let cli = Cli::parse_from(
            std::iter::once("recover-secret").chain(args.iter().copied()),
        );
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let ok = run(&cli, &mut out, &mut err).expect("run completes");
        (
            ok,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn exact_case_reports_secret_only() {
        let case = load_case(&fixture("exact.json")).unwrap();
        let outcome = secret_recovery::run_case(&case).unwrap();
        assert_eq!(
            outcome,
            CaseOutcome {
                secret: 5,
                wrong_points: None
            }
        );
    }

    #[test]
    fn extra_points_flag_the_mutated_sample() {
        let case = load_case(&fixture("one_wrong.json")).unwrap();
        assert_eq!(case.k(), 3);
        assert_eq!(case.n(), 6);
        let outcome = secret_recovery::run_case(&case).unwrap();
        assert_eq!(outcome.secret, 42);
        assert_eq!(outcome.wrong_points, Some(vec![5]));
    }

    #[test]
    fn invalid_digit_is_case_fatal_but_isolated() {
        let cases: Vec<TestCase> = ["bad_digit.json", "exact.json"]
            .iter()
            .map(|name| load_case(&fixture(name)).unwrap())
            .collect();
        let results = run_batch(&cases);
        assert_eq!(
            results[0],
            Err(RecoveryError::InvalidDigit {
                point: 2,
                digit: '8',
                position: 1,
                base: 8
            })
        );
        assert_eq!(results[1].as_ref().unwrap().secret, 5);
    }

    #[test]
    fn cli_human_report_matches_reference_layout() {
        let exact = fixture("exact.json");
        let wrong = fixture("one_wrong.json");
        let (ok, out, err) =
            run_cli(&[exact.to_str().unwrap(), wrong.to_str().unwrap()]);
        assert!(ok);
        assert!(err.is_empty());
        assert_eq!(
            out,
            "Test Case 1 - Secret: 5\n\
             Test Case 2 - Secret: 42\n\
             Test Case 2 - Wrong points: 5\n"
        );
    }

    #[test]
    fn cli_json_report_has_one_record_per_case() {
        let exact = fixture("exact.json");
        let bad = fixture("bad_digit.json");
        let (ok, out, _) = run_cli(&[
            "--format",
            "json",
            bad.to_str().unwrap(),
            exact.to_str().unwrap(),
        ]);
        assert!(!ok);

        let records: Vec<serde_json::Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["case"], 1);
        assert!(records[0]["error"]
            .as_str()
            .unwrap()
            .contains("invalid digit '8'"));
        assert_eq!(records[1]["secret"], 5);
        assert_eq!(records[1]["wrong_points"], serde_json::Value::Null);
    }

    #[test]
    fn cli_reports_singular_system_under_strict_tolerance() {
        let exact = fixture("exact.json");
        let (ok, out, err) = run_cli(&[
            "--elimination-tolerance",
            "100",
            exact.to_str().unwrap(),
        ]);
        assert!(!ok);
        assert!(out.is_empty());
        assert!(err.contains("singular"), "{err}");
    }

    #[test]
    fn loose_match_tolerance_accepts_the_mutated_sample() {
        let wrong = fixture("one_wrong.json");
        let (ok, out, _) =
            run_cli(&["--match-tolerance", "2", wrong.to_str().unwrap()]);
        assert!(ok);
        assert!(out.ends_with("Test Case 1 - Wrong points: None\n"), "{out}");
    }
}
