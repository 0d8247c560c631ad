// Text extraction from the structured canvas snapshot
use shared_types::CanvasObject;

/// Space-joined, lower-cased text of every non-empty text object
pub fn extract_text_from_objects(objects: &[CanvasObject]) -> String {
    objects
        .iter()
        .filter(|obj| obj.is_text())
        .filter_map(|obj| obj.text.as_deref())
        .filter(|text| !text.is_empty())
        .map(|text| text.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text used by the pattern rules: OCR text followed by object text.
///
/// Empty parts are skipped so a creative without any text yields "".
pub fn combine_text(ocr_text: &str, object_text: &str) -> String {
    [ocr_text.trim(), object_text.trim()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_only_text_objects() {
        let objects = vec![
            CanvasObject::text("a", "Fresh STRAWBERRIES", 32.0),
            CanvasObject::image("b", "strawberries.png"),
            CanvasObject::text("c", "", 32.0),
            CanvasObject::text("d", "Only at Tesco", 24.0),
        ];
        assert_eq!(
            extract_text_from_objects(&objects),
            "fresh strawberries only at tesco"
        );
    }

    #[test]
    fn test_empty_snapshot_has_no_text() {
        assert_eq!(extract_text_from_objects(&[]), "");
    }

    #[test]
    fn test_combine_text_orders_ocr_first() {
        assert_eq!(combine_text("Save NOW", "fresh"), "save now fresh");
    }

    #[test]
    fn test_combine_text_skips_empty_parts() {
        assert_eq!(combine_text("", "fresh"), "fresh");
        assert_eq!(combine_text("  ", ""), "");
    }
}
