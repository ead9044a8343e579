#![allow(dead_code)]

use knowrep::network::SemanticNetwork;
use knowrep::relation::{Declaration, Relation};

pub fn network(declarations: Vec<(&str, Relation)>) -> SemanticNetwork {
    let mut sn = SemanticNetwork::new();
    for (user, relation) in declarations {
        sn.insert(Declaration::new(user, relation));
    }
    sn
}

// The philosophers network used by most inheritance tests:
//  0 professor(socrates,filosofia)   6 gosta(homem,carne)
//  1 subtype(homem,mamifero)          7 gosta(vertebrado,agua)
//  2 member(socrates,homem)           8 gosta(socrates,filosofia)
//  3 subtype(mamifero,vertebrado)     9 gosta(platao,carne)
//  4 member(platao,homem)            10 gosta(platao,filosofia)
//  5 mamar(mamifero,sim)             11 member(aristoteles,homem)
pub fn philosophers() -> SemanticNetwork {
    network(vec![
        ("descartes", Relation::association("socrates", "professor", "filosofia")),
        ("darwin", Relation::subtype("homem", "mamifero")),
        ("descartes", Relation::member("socrates", "homem")),
        ("darwin", Relation::subtype("mamifero", "vertebrado")),
        ("descartes", Relation::member("platao", "homem")),
        ("darwin", Relation::association("mamifero", "mamar", "sim")),
        ("darwin", Relation::association("homem", "gosta", "carne")),
        ("darwin", Relation::association("vertebrado", "gosta", "agua")),
        ("descartes", Relation::association("socrates", "gosta", "filosofia")),
        ("simao", Relation::association("platao", "gosta", "carne")),
        ("descartes", Relation::association("platao", "gosta", "filosofia")),
        ("descartes", Relation::member("aristoteles", "homem")),
    ])
}

pub fn strings<T: ToString>(items: &[T]) -> Vec<String> {
    items.iter().map(|i| i.to_string()).collect()
}
