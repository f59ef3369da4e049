use crate::document::Document;
use crate::errors::WeatherError;
use crate::models::forecast_table::ForecastTable;
use crate::models::warn_info::{WarnInfo, NO_ANNOUNCEMENTS};

/// Selector for the warnings and advisories section
pub const WARNING_SECTION: &str = "div#wrnrpt";

/// Appends the warnings published in the document to the table
///
/// # Arguments
///
/// * 'table' - the table to append to
/// * 'doc' - the parsed page
pub fn apply_warnings(table: &mut ForecastTable, doc: &Document) -> Result<(), WeatherError> {
    let pairs = doc.term_pairs(WARNING_SECTION)?;
    extract_warnings(&pairs, &mut table.warnings);

    Ok(())
}

/// Walks label/value pairs in document order and appends one warning per pair.
/// A "no announcements" label is replaced by the generic none-issued sentinel, any
/// other pair in the same pass is appended as is.
///
/// Pairs coming from `Document::term_pairs` are already trimmed, so a label laid out
/// over several lines in the markup still matches the "no announcements" label.
///
/// # Arguments
///
/// * 'pairs' - label and value pairs from the warnings section
/// * 'warnings' - the list to append to
pub fn extract_warnings(pairs: &[(String, String)], warnings: &mut Vec<WarnInfo>) {
    for (label, value) in pairs {
        if label == NO_ANNOUNCEMENTS {
            warnings.push(WarnInfo::none_issued());
        } else {
            warnings.push(WarnInfo::new(label, value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter().map(|(l, v)| (l.to_string(), v.to_string())).collect()
    }

    #[test]
    fn no_announcements_gives_sentinel() {
        let mut warnings = Vec::new();
        extract_warnings(&pairs(&[("発表なし", "")]), &mut warnings);

        assert_eq!(warnings, vec![WarnInfo::new("警報・注意報", "無し")]);
    }

    #[test]
    fn pairs_are_kept_verbatim_and_in_order() {
        let mut warnings = Vec::new();
        extract_warnings(&pairs(&[("警報", "大雨"), ("注意報", "雷、強風")]), &mut warnings);

        assert_eq!(warnings, vec![
            WarnInfo::new("警報", "大雨"),
            WarnInfo::new("注意報", "雷、強風"),
        ]);
    }

    #[test]
    fn sentinel_does_not_hide_other_pairs() {
        let mut warnings = Vec::new();
        extract_warnings(&pairs(&[("発表なし", ""), ("注意報", "乾燥")]), &mut warnings);

        assert_eq!(warnings, vec![WarnInfo::none_issued(), WarnInfo::new("注意報", "乾燥")]);
    }

    #[test]
    fn indented_no_announcements_gives_sentinel() {
        let doc = Document::parse("<div id=\"wrnrpt\"><dl>\n  <dt>\n    発表なし\n  </dt>\n  <dd> </dd>\n</dl></div>");
        let mut table = ForecastTable::new("横浜");
        apply_warnings(&mut table, &doc).unwrap();

        assert_eq!(table.warnings, vec![WarnInfo::none_issued()]);
    }

    #[test]
    fn absent_section_gives_nothing() {
        let doc = Document::parse("<html><body><p>no warnings here</p></body></html>");
        let mut table = ForecastTable::new("横浜");
        apply_warnings(&mut table, &doc).unwrap();

        assert!(table.warnings.is_empty());
    }

    #[test]
    fn repeated_passes_accumulate() {
        let doc = Document::parse(r#"<div id="wrnrpt"><dl><dt>注意報</dt><dd>雷</dd></dl></div>"#);
        let mut table = ForecastTable::new("横浜");
        apply_warnings(&mut table, &doc).unwrap();
        apply_warnings(&mut table, &doc).unwrap();

        assert_eq!(table.warnings.len(), 2);
    }
}
