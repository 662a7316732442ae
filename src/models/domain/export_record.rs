use serde::{Deserialize, Serialize, Serializer};

/// One row of the persisted question table. Field order is the column order
/// downstream consumers expect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExportRecord {
    #[serde(rename = "QTYPE")]
    pub question_type: QuestionType,
    #[serde(rename = "QID")]
    pub question_id: u64,
    #[serde(rename = "category_id")]
    pub category_code: u32,
    #[serde(rename = "QEN")]
    pub question_text: String,
    #[serde(rename = "ACEN")]
    pub correct_answer: String,
    #[serde(rename = "AW1EN")]
    pub wrong_answer_1: String,
    #[serde(rename = "AW2EN")]
    pub wrong_answer_2: String,
    #[serde(rename = "ACID")]
    pub correct_answer_id: u64,
    #[serde(rename = "AWID1")]
    pub wrong_answer_1_id: u64,
    #[serde(rename = "AWID2")]
    pub wrong_answer_2_id: u64,
    #[serde(rename = "tags", serialize_with = "serialize_tag_ids")]
    pub tag_ids: Vec<u32>,
}

pub const EXPORT_COLUMNS: [&str; 11] = [
    "QTYPE",
    "QID",
    "category_id",
    "QEN",
    "ACEN",
    "AW1EN",
    "AW2EN",
    "ACID",
    "AWID1",
    "AWID2",
    "tags",
];

impl ExportRecord {
    pub fn answers(&self) -> [&str; 3] {
        [
            &self.correct_answer,
            &self.wrong_answer_1,
            &self.wrong_answer_2,
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Text,
}

pub fn join_tag_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn serialize_tag_ids<S: Serializer>(ids: &[u32], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&join_tag_ids(ids))
}

/// Row of the auxiliary tag lookup table.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TagDefinition {
    pub id: u32,
    pub tag: String,
    pub category: String,
}
