//! Flattening of a [`BatchDetail`] into an ordered list of link records.

use crate::catalog::{BatchDetail, VideoLink};

/// Fixed quality precedence for picking one video URL per lecture.
///
/// This is a priority lookup, not a numeric comparison: a quality string not
/// listed here (say `1080p`) never matches.
pub const QUALITY_PREFERENCE: [&str; 4] = ["720p", "480p", "360p", "240p"];

/// What a flattened link points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    Video,
    Pdf,
    StudyPdf,
}

/// The flattened output unit: one downloadable thing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkRecord {
    pub kind: LinkKind,
    pub topic: String,
    pub title: String,
    pub url: String,
}

/// Pick the URL of the best recognized quality variant.
///
/// The whole list is scanned once per preference entry, so list order never
/// matters; preference order does.
pub fn pick_video_url(links: &[VideoLink]) -> Option<&str> {
    QUALITY_PREFERENCE.iter().find_map(|quality| {
        links
            .iter()
            .find(|link| link.quality == *quality)
            .map(|link| link.url.as_str())
    })
}

/// Flatten a batch detail document into link records.
///
/// Topic-derived records come first, study material last, both in source
/// order. No de-duplication, no sorting. Lecture PDFs are emitted even with
/// an empty URL; a video only when a non-empty URL was selected. What the
/// user actually sees is decided at render time ([`crate::report`]).
pub fn extract_links(detail: &BatchDetail) -> Vec<LinkRecord> {
    let mut records = Vec::new();

    for topic in &detail.topics {
        for lecture in &topic.lectures {
            match pick_video_url(&lecture.video_links) {
                Some(url) if !url.is_empty() => records.push(LinkRecord {
                    kind: LinkKind::Video,
                    topic: topic.name.clone(),
                    title: lecture.title.clone(),
                    url: url.to_string(),
                }),
                _ => {}
            }

            for pdf in &lecture.pdf_links {
                records.push(LinkRecord {
                    kind: LinkKind::Pdf,
                    topic: topic.name.clone(),
                    title: pdf.name.clone(),
                    url: pdf.url.clone(),
                });
            }
        }
    }

    for material in &detail.study_material {
        for pdf in &material.pdfs {
            records.push(LinkRecord {
                kind: LinkKind::StudyPdf,
                topic: material.topic.clone(),
                title: pdf.title.clone(),
                url: pdf.url.clone(),
            });
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(quality: &str, url: &str) -> VideoLink {
        VideoLink {
            quality: quality.to_string(),
            url: url.to_string(),
        }
    }

    fn detail(value: serde_json::Value) -> BatchDetail {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn quality_selection_follows_preference_order_not_list_order() {
        let links = vec![video("480p", "A"), video("720p", "B"), video("240p", "C")];
        assert_eq!(pick_video_url(&links), Some("B"));
    }

    #[test]
    fn unrecognized_quality_never_matches() {
        let links = vec![video("1080p", "X")];
        assert_eq!(pick_video_url(&links), None);
    }

    #[test]
    fn falls_through_to_lower_qualities() {
        let links = vec![video("240p", "low"), video("360p", "mid")];
        assert_eq!(pick_video_url(&links), Some("mid"));
    }

    #[test]
    fn no_video_record_without_a_usable_url() {
        let d = detail(serde_json::json!({
            "topics": [{
                "topicName": "T",
                "lectures": [
                    {"videoTitle": "unlisted", "videoLinks": [{"quality": "1080p", "url": "x"}]},
                    {"videoTitle": "empty", "videoLinks": [{"quality": "720p", "url": ""}]}
                ]
            }]
        }));
        assert!(extract_links(&d).is_empty());
    }

    #[test]
    fn lecture_pdfs_are_emitted_even_with_empty_urls() {
        let d = detail(serde_json::json!({
            "topics": [{
                "topicName": "T",
                "lectures": [{
                    "videoTitle": "L",
                    "pdfLinks": [{"name": "blank", "url": ""}, {"name": "notes", "url": "n.pdf"}]
                }]
            }]
        }));

        let records = extract_links(&d);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind, LinkKind::Pdf);
        assert_eq!(records[0].url, "");
        assert_eq!(records[1].url, "n.pdf");
    }

    #[test]
    fn topic_records_precede_study_material_in_source_order() {
        let d = detail(serde_json::json!({
            "topics": [
                {"topicName": "T1", "lectures": [{
                    "videoTitle": "L1",
                    "videoLinks": [{"quality": "720p", "url": "v1.mp4"}],
                    "pdfLinks": [{"name": "p1", "url": "p1.pdf"}]
                }]},
                {"topicName": "T2", "lectures": [{
                    "videoTitle": "L2",
                    "videoLinks": [{"quality": "480p", "url": "v2.mp4"}]
                }]}
            ],
            "studyMaterial": [
                {"topic": "M1", "pdfs": [{"title": "s1", "link": "s1.pdf"}]},
                {"pdfs": [{"title": "s2", "link": "s2.pdf"}]}
            ]
        }));

        let records = extract_links(&d);
        let urls: Vec<&str> = records.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, vec!["v1.mp4", "p1.pdf", "v2.mp4", "s1.pdf", "s2.pdf"]);

        assert_eq!(records[3].topic, "M1");
        // Absent topic key falls back to the default label.
        assert_eq!(records[4].topic, "Study Material");
        assert_eq!(records[4].kind, LinkKind::StudyPdf);
    }

    #[test]
    fn flatten_is_idempotent() {
        let d = detail(serde_json::json!({
            "topics": [{
                "topicName": "T",
                "lectures": [{
                    "videoTitle": "L",
                    "videoLinks": [{"quality": "360p", "url": "v.mp4"}],
                    "pdfLinks": [{"name": "n", "url": "n.pdf"}]
                }]
            }],
            "studyMaterial": [{"topic": "M", "pdfs": [{"title": "s", "link": "s.pdf"}]}]
        }));

        assert_eq!(extract_links(&d), extract_links(&d));
    }
}
