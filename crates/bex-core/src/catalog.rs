//! Wire types for the batch catalog API.
//!
//! Every field carries an explicit default: the upstream service omits keys
//! freely, and a missing key must never fail the parse.

use std::fmt;

use serde::Deserialize;

/// A purchasable course offering, as returned by `GET /batches`.
#[derive(Clone, Debug, Deserialize)]
pub struct Batch {
    #[serde(rename = "batchId", default)]
    pub id: String,
    #[serde(rename = "batchName", default)]
    pub name: String,
    #[serde(rename = "discountPrice", default)]
    pub price: Price,
    #[serde(rename = "batchThumb", default)]
    pub thumbnail: String,
}

/// The catalog serves prices both as numbers and as display strings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Price {
    Number(f64),
    Text(String),
}

impl Default for Price {
    fn default() -> Self {
        Price::Text("N/A".to_string())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            Price::Number(n) => write!(f, "{n}"),
            Price::Text(s) => f.write_str(s),
        }
    }
}

/// Full per-batch document from `GET /extract/batch_id={id}`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BatchDetail {
    #[serde(default)]
    pub topics: Vec<Topic>,
    #[serde(rename = "studyMaterial", default)]
    pub study_material: Vec<MaterialGroup>,
}

/// A named grouping of lectures within a batch.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Topic {
    #[serde(rename = "topicName", default)]
    pub name: String,
    #[serde(default)]
    pub lectures: Vec<Lecture>,
}

/// One video (in several quality variants) plus its attached PDFs.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Lecture {
    #[serde(rename = "videoTitle", default)]
    pub title: String,
    #[serde(rename = "videoLinks", default)]
    pub video_links: Vec<VideoLink>,
    #[serde(rename = "pdfLinks", default)]
    pub pdf_links: Vec<PdfLink>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct VideoLink {
    #[serde(default)]
    pub quality: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PdfLink {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Standalone study material grouped under a topic label.
#[derive(Clone, Debug, Deserialize)]
pub struct MaterialGroup {
    #[serde(default = "default_material_topic")]
    pub topic: String,
    #[serde(default)]
    pub pdfs: Vec<MaterialPdf>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct MaterialPdf {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "link", default)]
    pub url: String,
}

fn default_material_topic() -> String {
    "Study Material".to_string()
}
