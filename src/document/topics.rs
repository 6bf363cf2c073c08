//! Topic keywords derived from chapter titles

use super::models::FALLBACK_TOPIC;

/// Key phrase (matched case-insensitively against the title) and the topics it contributes
pub const TOPIC_TABLE: &[(&str, &[&str])] = &[
    ("holy scripture", &["scripture", "revelation", "authority", "word of god"]),
    ("god", &["god", "trinity", "attributes"]),
    ("eternal decree", &["predestination", "election", "sovereignty", "decrees"]),
    ("creation", &["creation", "providence"]),
    ("providence", &["providence", "sovereignty"]),
    ("fall", &["sin", "fall", "adam", "original sin"]),
    ("covenant", &["covenant", "grace", "works"]),
    ("christ", &["christ", "mediator", "jesus", "incarnation", "atonement"]),
    ("free will", &["free will", "depravity"]),
    ("calling", &["calling", "regeneration", "holy spirit"]),
    ("justification", &["justification", "faith", "salvation"]),
    ("adoption", &["adoption", "sonship"]),
    ("sanctification", &["sanctification", "holiness"]),
    ("faith", &["faith", "belief"]),
    ("repentance", &["repentance"]),
    ("good works", &["good works", "obedience"]),
    ("perseverance", &["perseverance", "assurance"]),
    ("assurance", &["assurance", "salvation"]),
    ("law", &["law", "ten commandments", "moral law"]),
    ("liberty", &["liberty", "conscience", "freedom"]),
    ("worship", &["worship", "sabbath"]),
    ("oath", &["oaths", "vows"]),
    ("magistrate", &["civil government", "authority"]),
    ("marriage", &["marriage", "divorce"]),
    ("church", &["church", "ecclesiology"]),
    ("communion", &["communion of saints", "fellowship"]),
    ("sacrament", &["sacraments", "ordinances"]),
    ("baptism", &["baptism"]),
    ("lord's supper", &["lord's supper", "eucharist", "communion"]),
    ("censure", &["church discipline", "excommunication"]),
    ("synod", &["synods", "councils", "church government"]),
    ("death", &["death", "resurrection", "intermediate state"]),
    ("judgment", &["last judgment", "final judgment", "eschatology"]),
];

/// Collect the topics for a raw chapter title.
///
/// The segmenter passes the title before variant resolution, so key phrases
/// from either reading count.
///
/// Topics are appended in table order and are not de-duplicated here; the
/// document-level index is the only place duplicates collapse.
pub fn topics_for(title: &str) -> Vec<String> {
    let title_lower = title.to_lowercase();

    let topics: Vec<String> = TOPIC_TABLE
        .iter()
        .filter(|(phrase, _)| title_lower.contains(phrase))
        .flat_map(|(_, topics)| topics.iter().map(|topic| topic.to_string()))
        .collect();

    if topics.is_empty() {
        vec![FALLBACK_TOPIC.to_string()]
    } else {
        topics
    }
}
