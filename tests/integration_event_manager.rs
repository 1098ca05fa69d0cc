//! End-to-end tests for a complete event manager run
//!
//! Each test lays out the attendee export, credential and template in a
//! temporary directory and runs the pipeline against it, checking the
//! letters and report that land on disk.

use event_manager::cli::commands::{run_with_config, run_with_lookup};
use event_manager::constants::LEGISLATOR_FALLBACK_MESSAGE;
use event_manager::{Config, Error, Legislator};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ATTENDEES: &str = "\
,RegDate,first_Name,last_Name,Email_Address,HomePhone,Street,City,State,Zipcode
1,11/12/08 10:47,Allison,Nguyen,arannon@jumpstartlab.com,6154385000,3155 19th St NW,Washington,DC,20010
2,11/12/08 13:23,SArah,Hankins,pinalevitsky@jumpstartlab.com,414-520-5000,2022 15th Street NW,Washington,DC,20009
3,11/12/08 13:30,Sarah,Xx,lqrm4462@jumpstartlab.com,(941)979-2000,4175 3rd Street North,Saint Petersburg,FL,33703
4,11/25/08 19:21,David,Thomas,gdlia.lepping@jumpstartlab.com,650-799-0000,9 garrison ave,Jersey City,NJ,7306
5,2/2/09 11:29,Chris,Sackett,ffbbieucf@jumpstartlab.com,778.232.7000,,,,
";

const TEMPLATE: &str = "<p>Dear {{name}},</p>\n<p>Zip {{zipcode}}: {{legislators}}</p>\n";

const EXPECTED_REPORT: &str = "\
TOP 5 Peak Hours
13: 2
10: 1
19: 1
11: 1

TOP 3 Peak Weekdays
Wednesday: 3
Tuesday: 1
Monday: 1
";

/// Write every input into `dir` and return a config pointing at it
fn workspace(dir: &Path) -> Config {
    fs::write(dir.join("event_attendees.csv"), ATTENDEES).unwrap();
    fs::write(dir.join("secret.key"), "test-key\n").unwrap();
    fs::write(dir.join("form_letter.html"), TEMPLATE).unwrap();

    Config::default()
        .with_attendees_path(dir.join("event_attendees.csv"))
        .with_secret_key_path(dir.join("secret.key"))
        .with_template_path(dir.join("form_letter.html"))
        .with_letters_dir(dir.join("output"))
        .with_report_path(dir.join("peak_registration_times.txt"))
}

fn offline(_zipcode: &str) -> event_manager::Result<Vec<Legislator>> {
    Err(Error::lookup("directory offline"))
}

#[test]
fn test_run_with_unavailable_directory_writes_fallback_letters() {
    let dir = TempDir::new().unwrap();
    let config = workspace(dir.path());

    let outcome = run_with_lookup(&config, offline, false).unwrap();

    assert_eq!(outcome.stats.records_processed, 5);
    assert_eq!(outcome.stats.letters_written, 5);
    assert_eq!(outcome.stats.lookup_fallbacks, 5);
    assert_eq!(outcome.stats.output_failures, 0);

    let letters = dir.path().join("output");
    for name in [
        "thanks_1_allison.html",
        "thanks_2_sarah.html",
        "thanks_3_sarah.html",
        "thanks_4_david.html",
        "thanks_5_chris.html",
    ] {
        assert!(letters.join(name).is_file(), "missing letter {}", name);
    }

    let letter = fs::read_to_string(letters.join("thanks_4_david.html")).unwrap();
    assert!(letter.contains("Dear David,"));
    assert!(letter.contains("Zip 07306"));
    assert!(letter.contains(LEGISLATOR_FALLBACK_MESSAGE));

    // Missing postal code pads to all zeros
    let letter = fs::read_to_string(letters.join("thanks_5_chris.html")).unwrap();
    assert!(letter.contains("Zip 00000"));

    let report = fs::read_to_string(dir.path().join("peak_registration_times.txt")).unwrap();
    assert_eq!(report, EXPECTED_REPORT);
    assert_eq!(outcome.report.render(), EXPECTED_REPORT);
}

#[test]
fn test_run_with_directory_answers() {
    let dir = TempDir::new().unwrap();
    let config = workspace(dir.path());

    let lookup = |zipcode: &str| -> event_manager::Result<Vec<Legislator>> {
        Ok(vec![
            Legislator::new(format!("Senator {}", zipcode)),
            Legislator::new("Representative Smith"),
        ])
    };
    let outcome = run_with_lookup(&config, lookup, false).unwrap();

    assert_eq!(outcome.stats.lookup_fallbacks, 0);
    let letter = fs::read_to_string(dir.path().join("output/thanks_1_allison.html")).unwrap();
    assert!(letter.contains("Senator 20010, Representative Smith"));
    assert!(!letter.contains(LEGISLATOR_FALLBACK_MESSAGE));
}

#[test]
fn test_repeated_runs_produce_identical_report() {
    let dir = TempDir::new().unwrap();
    let config = workspace(dir.path());
    let report_path = dir.path().join("peak_registration_times.txt");

    run_with_lookup(&config, offline, false).unwrap();
    let first = fs::read_to_string(&report_path).unwrap();

    run_with_lookup(&config, offline, false).unwrap();
    let second = fs::read_to_string(&report_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_missing_template_stops_before_any_output() {
    let dir = TempDir::new().unwrap();
    let config = workspace(dir.path());
    fs::remove_file(dir.path().join("form_letter.html")).unwrap();

    let result = run_with_lookup(&config, offline, false);

    match result {
        Err(error) => {
            assert!(error.is_missing_prerequisite());
            assert!(error.to_string().contains("form_letter.html"));
        }
        Ok(_) => panic!("run should fail without a template"),
    }
    assert!(!dir.path().join("output").exists());
    assert!(!dir.path().join("peak_registration_times.txt").exists());
}

#[test]
fn test_missing_attendee_data_is_reported_first() {
    let dir = TempDir::new().unwrap();
    let config = workspace(dir.path());
    fs::remove_file(dir.path().join("event_attendees.csv")).unwrap();
    fs::remove_file(dir.path().join("secret.key")).unwrap();

    let error = run_with_config(&config, false).unwrap_err();
    assert!(matches!(
        error,
        Error::MissingPrerequisite { ref name, .. } if name == "attendee data"
    ));
}

#[test]
fn test_unreachable_directory_falls_back() {
    let dir = TempDir::new().unwrap();
    let mut config = workspace(dir.path()).with_lookup_url("http://127.0.0.1:9/representatives");
    config.lookup.timeout_secs = 2;

    let outcome = run_with_config(&config, false).unwrap();

    assert_eq!(outcome.stats.letters_written, 5);
    assert_eq!(outcome.stats.lookup_fallbacks, 5);
    assert!((outcome.stats.lookup_success_rate() - 0.0).abs() < f64::EPSILON);
}
