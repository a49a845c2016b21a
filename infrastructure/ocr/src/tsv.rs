//! Reader for the `tsv` output format of the tesseract CLI.
//!
//! Each row describes one layout element. Word rows (level 5) carry the
//! recognized text and a 0-100 confidence; the page, block, paragraph and
//! line numbers tell which visual line the word belongs to.

use business::domain::scan::services::RawRecognition;

const WORD_LEVEL: &str = "5";
const COLUMNS: usize = 12;

/// Rebuilds the text line by line and averages the word confidences.
///
/// Confidence is returned on a 0-1 scale; it is 0 when no word was found.
pub fn parse_tsv(output: &str) -> RawRecognition {
    let mut lines: Vec<(LineKey, Vec<&str>)> = Vec::new();
    let mut confidences: Vec<f32> = Vec::new();

    for row in output.lines().skip(1) {
        let Some(word) = WordRow::parse(row) else {
            continue;
        };
        if word.confidence >= 0.0 {
            confidences.push(word.confidence);
        }
        match lines.last_mut() {
            Some((key, words)) if *key == word.line => words.push(word.text),
            _ => lines.push((word.line, vec![word.text])),
        }
    }

    let text = lines
        .iter()
        .map(|(_, words)| words.join(" "))
        .collect::<Vec<_>>()
        .join("\n");
    let confidence = if confidences.is_empty() {
        0.0
    } else {
        confidences.iter().sum::<f32>() / confidences.len() as f32 / 100.0
    };

    RawRecognition { text, confidence }
}

type LineKey = (u32, u32, u32, u32);

struct WordRow<'a> {
    line: LineKey,
    confidence: f32,
    text: &'a str,
}

impl<'a> WordRow<'a> {
    fn parse(row: &'a str) -> Option<Self> {
        let columns: Vec<&str> = row.split('\t').collect();
        if columns.len() < COLUMNS || columns[0] != WORD_LEVEL {
            return None;
        }
        let text = columns[11].trim();
        if text.is_empty() {
            return None;
        }

        Some(Self {
            line: (
                columns[1].parse().ok()?,
                columns[2].parse().ok()?,
                columns[3].parse().ok()?,
                columns[4].parse().ok()?,
            ),
            confidence: columns[10].parse().ok()?,
            text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext";

    fn tsv(rows: &[&str]) -> String {
        std::iter::once(HEADER)
            .chain(rows.iter().copied())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn should_group_words_by_line() {
        let output = tsv(&[
            "1\t1\t0\t0\t0\t0\t0\t0\t640\t480\t-1\t",
            "4\t1\t1\t1\t1\t0\t10\t10\t200\t30\t-1\t",
            "5\t1\t1\t1\t1\t1\t10\t10\t90\t30\t90.5\tLait",
            "5\t1\t1\t1\t1\t2\t110\t10\t90\t30\t80.5\tentier",
            "5\t1\t1\t1\t2\t1\t10\t50\t60\t30\t70\t1,15",
        ]);

        let recognition = parse_tsv(&output);

        assert_eq!(recognition.text, "Lait entier\n1,15");
        assert!((recognition.confidence - 0.803_333).abs() < 1e-4);
    }

    #[test]
    fn should_ignore_blank_words_and_negative_confidence() {
        let output = tsv(&[
            "5\t1\t1\t1\t1\t1\t10\t10\t90\t30\t-1\t ",
            "5\t1\t1\t1\t1\t2\t10\t10\t90\t30\t60\tPrix",
        ]);

        let recognition = parse_tsv(&output);

        assert_eq!(recognition.text, "Prix");
        assert!((recognition.confidence - 0.6).abs() < 1e-6);
    }

    #[test]
    fn should_return_empty_recognition_without_words() {
        let recognition = parse_tsv(&tsv(&["1\t1\t0\t0\t0\t0\t0\t0\t640\t480\t-1\t"]));

        assert_eq!(recognition.text, "");
        assert_eq!(recognition.confidence, 0.0);
    }
}
