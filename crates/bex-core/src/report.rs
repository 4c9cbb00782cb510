//! Rendering of an extraction into the deliverable text file and its caption.

use crate::extract::{LinkKind, LinkRecord};
use crate::formatting::escape_html;

/// Maximum length of the sanitized file-name stem (before `.txt`).
const FILE_NAME_MAX: usize = 50;

/// Sanitized `.txt` file name derived from the batch name: spaces become
/// underscores, slashes become hyphens, then the stem is cut to 50 chars.
pub fn file_name(batch_name: &str) -> String {
    let stem: String = batch_name
        .replace(' ', "_")
        .replace('/', "-")
        .chars()
        .take(FILE_NAME_MAX)
        .collect();
    format!("{stem}.txt")
}

/// Per-kind totals for the summary caption.
///
/// `videos` and `pdfs` count every extracted record, empty URLs included;
/// `valid` counts only records with a non-empty URL. The rendered body and
/// the "Total Links" caption line use `valid`, the kind lines do not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinkTotals {
    pub valid: usize,
    pub videos: usize,
    pub pdfs: usize,
}

pub fn summarize(records: &[LinkRecord]) -> LinkTotals {
    let mut totals = LinkTotals::default();
    for record in records {
        if !record.url.is_empty() {
            totals.valid += 1;
        }
        match record.kind {
            LinkKind::Video => totals.videos += 1,
            LinkKind::Pdf | LinkKind::StudyPdf => totals.pdfs += 1,
        }
    }
    totals
}

/// Body of the `.txt` deliverable: a two-line header, a blank line, then one
/// `(<topic>) <title> : <url>` line per record with a non-empty URL.
pub fn render_body(batch_name: &str, thumbnail: &str, records: &[LinkRecord]) -> String {
    let mut out = format!("Batch: {batch_name}\nBatch Image: {thumbnail}\n\n");
    for record in records {
        if record.url.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "({}) {} : {}\n",
            record.topic, record.title, record.url
        ));
    }
    out
}

/// Telegram-HTML caption attached to the uploaded document.
pub fn caption(batch_name: &str, totals: &LinkTotals) -> String {
    format!(
        "✅ <b>{}</b>\n📊 Total Links: {}\n📁 Videos: {}\n📄 PDFs: {}",
        escape_html(batch_name),
        totals.valid,
        totals.videos,
        totals.pdfs
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BatchDetail;
    use crate::extract::extract_links;

    fn record(kind: LinkKind, topic: &str, title: &str, url: &str) -> LinkRecord {
        LinkRecord {
            kind,
            topic: topic.to_string(),
            title: title.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn file_name_sanitizes_and_truncates() {
        assert_eq!(file_name("JEE 2026 / Physics"), "JEE_2026_-_Physics.txt");

        let long = "a".repeat(80);
        let named = file_name(&long);
        assert_eq!(named.len(), 50 + 4);
        assert!(named.ends_with(".txt"));

        assert_eq!(file_name(""), ".txt");
    }

    #[test]
    fn body_has_header_and_skips_empty_urls() {
        let records = vec![
            record(LinkKind::Video, "T", "L1", "v.mp4"),
            record(LinkKind::Pdf, "T", "blank", ""),
            record(LinkKind::StudyPdf, "M", "sheet", "s.pdf"),
        ];

        let body = render_body("Physics", "https://cdn/t.png", &records);
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Batch: Physics",
                "Batch Image: https://cdn/t.png",
                "",
                "(T) L1 : v.mp4",
                "(M) sheet : s.pdf",
            ]
        );
    }

    #[test]
    fn totals_count_empty_urls_by_kind_but_not_as_valid() {
        let records = vec![
            record(LinkKind::Video, "T", "L1", "v.mp4"),
            record(LinkKind::Pdf, "T", "blank", ""),
            record(LinkKind::StudyPdf, "M", "sheet", "s.pdf"),
        ];

        let totals = summarize(&records);
        assert_eq!(
            totals,
            LinkTotals {
                valid: 2,
                videos: 1,
                pdfs: 2,
            }
        );
    }

    #[test]
    fn caption_reports_totals_and_escapes_the_name() {
        let totals = LinkTotals {
            valid: 3,
            videos: 1,
            pdfs: 2,
        };
        let caption = caption("A <b> & B", &totals);
        assert!(caption.contains("<b>A &lt;b&gt; &amp; B</b>"));
        assert!(caption.contains("Total Links: 3"));
        assert!(caption.contains("Videos: 1"));
        assert!(caption.contains("PDFs: 2"));
    }

    #[test]
    fn one_lecture_end_to_end() {
        let detail: BatchDetail = serde_json::from_value(serde_json::json!({
            "topics": [{
                "topicName": "Kinematics",
                "lectures": [{
                    "videoTitle": "Lecture 1",
                    "videoLinks": [{"quality": "720p", "url": "v.mp4"}],
                    "pdfLinks": [{"name": "notes", "url": "n.pdf"}]
                }]
            }]
        }))
        .unwrap();

        let records = extract_links(&detail);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind, LinkKind::Video);
        assert_eq!(records[1].kind, LinkKind::Pdf);

        let body = render_body("B", "thumb", &records);
        assert_eq!(body.lines().count(), 3 + 2);
        assert!(body.ends_with("(Kinematics) Lecture 1 : v.mp4\n(Kinematics) notes : n.pdf\n"));

        assert_eq!(summarize(&records).valid, 2);
    }
}
