mod common;

use common::{ScriptedTransport, hh_page, superjob_page};
use salary_stats::{
    Error, HhClient, HhConfig, Languages, SalaryPolicy, StatsPipeline, SuperJobClient,
    SuperJobConfig, collect_language_stats,
};
use std::collections::BTreeMap;

fn languages() -> Languages {
    Languages::new([("Java", "Java NOT Javascript"), ("Go", "Go"), ("Python", "Python")])
}

#[test]
fn runs_each_language_in_order_with_its_search_term() {
    let transport = ScriptedTransport::ok([
        hh_page(
            0,
            1,
            7,
            r#"{"salary": {"from": 200000, "to": 300000, "currency": "RUR"}}"#,
        ),
        hh_page(0, 1, 0, ""),
        hh_page(
            0,
            1,
            2,
            r#"{"salary": {"from": null, "to": 100000, "currency": "RUR"}}"#,
        ),
    ]);
    let client = HhClient::new(&transport, HhConfig::default());

    let results = collect_language_stats(&client, &languages(), &SalaryPolicy::default()).unwrap();

    assert_eq!(
        transport.query_values("text"),
        vec!["Java NOT Javascript", "Go", "Python"]
    );
    let names: Vec<_> = results.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["Java", "Go", "Python"]);

    assert_eq!(results.get("Java").map(|s| s.average_salary), Some(250_000));
    assert_eq!(results.get("Go").map(|s| (s.total, s.processed)), Some((0, 0)));
    assert_eq!(results.get("Python").map(|s| s.average_salary), Some(120_000));
}

#[test]
fn failing_language_aborts_the_source() {
    let transport = ScriptedTransport::new([
        Some(superjob_page(false, 1, "")),
        None,
        Some(superjob_page(false, 1, "")),
    ]);
    let client = SuperJobClient::new(&transport, SuperJobConfig::new("token")).unwrap();

    let err = collect_language_stats(&client, &languages(), &SalaryPolicy::default()).unwrap_err();

    assert!(matches!(err, Error::Status { status: 500, .. }));
    assert_eq!(transport.query_values("keyword"), vec!["Java NOT Javascript", "Go"]);
    assert_eq!(transport.remaining(), 1);
}

#[test]
fn pipeline_saves_json_and_csv() {
    let dir = tempfile::tempdir().unwrap();
    let transport = ScriptedTransport::ok([
        superjob_page(
            false,
            3,
            r#"{"payment_from": 100000, "payment_to": 0, "currency": "rub"}"#,
        ),
        superjob_page(false, 0, ""),
        superjob_page(false, 0, ""),
    ]);
    let client = SuperJobClient::new(&transport, SuperJobConfig::new("token")).unwrap();
    let languages = languages();
    let policy = SalaryPolicy::default();

    let results = StatsPipeline::new(&languages, &policy)
        .collect(client)
        .unwrap()
        .save_and_then(dir.path().join("superjob_salaries.json"))
        .save_csv_and_then(dir.path().join("superjob_salaries.csv"))
        .into_results();

    assert_eq!(results.len(), 3);

    let json = std::fs::read_to_string(dir.path().join("superjob_salaries.json")).unwrap();
    let parsed: BTreeMap<String, salary_stats::LanguageStats> =
        serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["Java"].total, 3);
    assert_eq!(parsed["Java"].average_salary, 80_000);

    let csv = std::fs::read_to_string(dir.path().join("superjob_salaries.csv")).unwrap();
    assert_eq!(csv.lines().count(), 4);
    assert_eq!(csv.lines().nth(1), Some("Java,3,1,80000"));
}

#[test]
fn failed_save_does_not_break_the_chain() {
    let dir = tempfile::tempdir().unwrap();
    let transport = ScriptedTransport::ok([hh_page(0, 1, 0, "")]);
    let client = HhClient::new(&transport, HhConfig::default());
    let languages = Languages::new([("Go", "Go")]);
    let policy = SalaryPolicy::default();

    let results = StatsPipeline::new(&languages, &policy)
        .collect(client)
        .unwrap()
        .save_and_then(dir.path().join("missing").join("hh.json"))
        .print("hh.ru Moscow");

    assert_eq!(results.len(), 1);
}
