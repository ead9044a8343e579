//! Runs the classic teaching scenario against both engines and prints the
//! answers, the declarations in their textual form and the summaries as JSON.

use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use knowrep::bayes::{BayesNet, Mothers};
use knowrep::network::SemanticNetwork;
use knowrep::relation::{Declaration, Relation};
use knowrep::settings::Settings;

fn teaching_network(settings: Settings) -> SemanticNetwork {
    let mut sn = SemanticNetwork::with_settings(settings);
    let declarations = [
        ("descartes", Relation::association("socrates", "professor", "filosofia")),
        ("darwin", Relation::subtype("homem", "mamifero")),
        ("descartes", Relation::member("socrates", "homem")),
        ("darwin", Relation::subtype("mamifero", "vertebrado")),
        ("descartes", Relation::member("platao", "homem")),
        ("simao", Relation::assoc_one("socrates", "pai", "sofronisco")),
        ("simonoff", Relation::assoc_one("socrates", "pai", "pericles")),
        ("simao", Relation::assoc_num("socrates", "altura", 1.75)),
        ("simonoff", Relation::assoc_num("socrates", "altura", 1.8)),
        ("darwin", Relation::association("mamifero", "mamar", "sim")),
        ("darwin", Relation::association("homem", "gosta", "carne")),
        ("darwin", Relation::association("vertebrado", "gosta", "agua")),
        ("descartes", Relation::association("socrates", "gosta", "filosofia")),
        ("descartes", Relation::association("platao", "gosta", "filosofia")),
        ("simao", Relation::association("platao", "gosta", "carne")),
    ];
    for (user, relation) in declarations {
        sn.insert(Declaration::new(user, relation));
    }
    sn
}

fn rain_network(settings: Settings) -> knowrep::Result<BayesNet> {
    let mut bn = BayesNet::with_settings(settings);
    bn.add("rain", Mothers::none(), 0.2)?;
    bn.add("sprinkler", Mothers::new([("rain", true)]), 0.01)?;
    bn.add("sprinkler", Mothers::new([("rain", false)]), 0.4)?;
    bn.add("wet_grass", Mothers::new([("rain", true), ("sprinkler", true)]), 0.99)?;
    bn.add("wet_grass", Mothers::new([("rain", true), ("sprinkler", false)]), 0.9)?;
    bn.add("wet_grass", Mothers::new([("rain", false), ("sprinkler", true)]), 0.9)?;
    bn.add("wet_grass", Mothers::new([("rain", false), ("sprinkler", false)]), 0.0)?;
    Ok(bn)
}

fn main() -> Result<(), Box<dyn Error>> {
    let settings = Settings::load("knowrep")?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let sn = teaching_network(settings.clone());
    info!(declarations = sn.len(), users = sn.list_users().len(), "semantic network ready");
    println!("{}", sn);
    for d in sn.query("socrates", None)? {
        println!("query: {}", d);
    }
    for d in sn.query_cancel("platao", "gosta")? {
        println!("query_cancel: {}", d);
    }
    println!("predecessor_path: {:?}", sn.predecessor_path("vertebrado", "socrates")?);
    println!("query_induce: {:?}", sn.query_induce("homem", "gosta")?);
    println!("query_assoc_value: {:?}", sn.query_assoc_value("platao", "gosta")?);
    for rel in ["pai", "altura", "gosta"] {
        let summary = sn.query_local_assoc("socrates", rel)?;
        println!("query_local_assoc({}): {}", rel, serde_json::to_string(&summary)?);
    }

    let bn = rain_network(settings)?;
    info!(variables = bn.len(), "bayesian network ready");
    let joint = bn.joint_prob(&[("rain", true), ("sprinkler", true), ("wet_grass", true)])?;
    println!("joint_prob(rain, sprinkler, wet_grass) = {}", joint);
    for var in ["rain", "sprinkler", "wet_grass"] {
        println!("individual_prob({}) = {}", var, bn.individual_prob(var, true)?);
    }
    Ok(())
}
