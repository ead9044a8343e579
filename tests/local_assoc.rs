mod common;

use common::network;
use knowrep::inherit::{LocalAssoc, ValueShare};
use knowrep::network::SemanticNetwork;
use knowrep::relation::{Declaration, Relation, Value};
use knowrep::settings::Settings;

fn likes(values: &[&str]) -> SemanticNetwork {
    network(
        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let user = if i % 2 == 0 { "u1" } else { "u2" };
                (user, Relation::association("socrates", "gosta", *v))
            })
            .collect(),
    )
}

fn values(summary: Option<LocalAssoc>) -> Vec<String> {
    match summary {
        Some(LocalAssoc::Many(shares)) => shares.iter().map(|s| s.value.to_string()).collect(),
        other => panic!("expected a multi-valued summary, got {:?}", other),
    }
}

#[test]
fn single_valued_reports_most_frequent_share() {
    let sn = network(vec![
        ("simao", Relation::assoc_one("socrates", "pai", "sofronisco")),
        ("simonoff", Relation::assoc_one("socrates", "pai", "pericles")),
        ("kant", Relation::assoc_one("socrates", "pai", "sofronisco")),
    ]);
    let summary = sn.query_local_assoc("socrates", "pai").expect("query ok");
    match summary {
        Some(LocalAssoc::One { value, share }) => {
            assert_eq!(value, Value::from("sofronisco"));
            assert!((share - 2.0 / 3.0).abs() < 1e-9);
        }
        other => panic!("expected a single-valued summary, got {:?}", other),
    }
}

#[test]
fn numeric_reports_the_mean() {
    let sn = network(vec![
        ("simao", Relation::assoc_num("socrates", "altura", 1.75)),
        ("simonoff", Relation::assoc_num("socrates", "altura", 1.85)),
    ]);
    match sn.query_local_assoc("socrates", "altura").expect("query ok") {
        Some(LocalAssoc::Mean(mean)) => assert!((mean - 1.8).abs() < 1e-9),
        other => panic!("expected a mean, got {:?}", other),
    }
}

#[test]
fn multi_valued_stops_once_threshold_is_reached() {
    let sn = likes(&["a", "a", "b", "c"]);
    let summary = sn.query_local_assoc("socrates", "gosta").expect("query ok");
    assert_eq!(
        summary,
        Some(LocalAssoc::Many(vec![
            ValueShare {
                value: Value::from("a"),
                share: 0.5,
                cumulative: 0.5
            },
            ValueShare {
                value: Value::from("b"),
                share: 0.25,
                cumulative: 0.75
            },
        ]))
    );
    let sn = likes(&["a", "b", "c", "d"]);
    assert_eq!(
        values(sn.query_local_assoc("socrates", "gosta").expect("query ok")),
        vec!["a", "b", "c"]
    );
    let sn = likes(&["a", "a", "a", "b"]);
    assert_eq!(values(sn.query_local_assoc("socrates", "gosta").expect("query ok")), vec!["a"]);
}

#[test]
fn threshold_comes_from_settings() {
    let settings = Settings {
        multi_value_threshold: 0.5,
        ..Settings::default()
    };
    let mut sn = SemanticNetwork::with_settings(settings);
    for v in ["a", "a", "b", "c"] {
        sn.insert(Declaration::new("u", Relation::association("socrates", "gosta", v)));
    }
    assert_eq!(values(sn.query_local_assoc("socrates", "gosta").expect("query ok")), vec!["a"]);
}

#[test]
fn kind_of_the_first_declaration_decides() {
    let sn = network(vec![
        ("u1", Relation::assoc_one("socrates", "mestre", "anaxagoras")),
        ("u2", Relation::association("socrates", "mestre", "diotima")),
    ]);
    match sn.query_local_assoc("socrates", "mestre").expect("query ok") {
        Some(LocalAssoc::One { value, share }) => {
            assert_eq!(value, Value::from("anaxagoras"));
            assert_eq!(share, 0.5);
        }
        other => panic!("expected a single-valued summary, got {:?}", other),
    }
}

#[test]
fn nothing_declared_locally() {
    let sn = network(vec![
        ("u", Relation::member("socrates", "homem")),
        ("u", Relation::association("homem", "gosta", "carne")),
    ]);
    assert_eq!(sn.query_local_assoc("socrates", "gosta").expect("query ok"), None, "inherited values are not local");
    assert_eq!(sn.query_local_assoc("kant", "gosta").expect("query ok"), None);
}

#[test]
fn summaries_serialize_to_json() {
    let sn = likes(&["a", "a"]);
    let summary = sn.query_local_assoc("socrates", "gosta").expect("query ok");
    let json = serde_json::to_string(&summary).expect("serializable");
    assert_eq!(json, r#"{"Many":[{"value":"a","share":1.0,"cumulative":1.0}]}"#);
}
