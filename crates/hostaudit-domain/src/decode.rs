use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Decode a captured content blob into text for rule inspection.
///
/// Captured content is untrusted input from arbitrary hosts. An absent blob,
/// an unrecognized encoding label, malformed base64, or invalid UTF-8 all
/// degrade to an empty string so a corrupt capture costs a single control,
/// not the run.
pub fn decode_content(blob: Option<&str>, encoding: Option<&str>) -> String {
    let Some(blob) = blob else {
        return String::new();
    };
    match encoding.unwrap_or("base64") {
        "base64" => {
            // Collectors wrap long blobs; the alphabet check must not see
            // that whitespace.
            let compact: String = blob.chars().filter(|c| !c.is_whitespace()).collect();
            STANDARD
                .decode(compact)
                .ok()
                .and_then(|bytes| String::from_utf8(bytes).ok())
                .unwrap_or_default()
        }
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wrapped_base64() {
        // "MaxSessions 10\n" split across lines.
        let blob = "TWF4U2Vzc2lv\nbnMgMTAK";
        assert_eq!(decode_content(Some(blob), None), "MaxSessions 10\n");
    }

    #[test]
    fn absent_blob_is_empty_text() {
        assert_eq!(decode_content(None, None), "");
    }

    #[test]
    fn malformed_base64_is_empty_text() {
        assert_eq!(decode_content(Some("!!not base64!!"), Some("base64")), "");
    }

    #[test]
    fn invalid_utf8_is_empty_text() {
        // 0xFF 0xFE is valid base64 input but not valid UTF-8 output.
        let blob = STANDARD.encode([0xFF, 0xFE]);
        assert_eq!(decode_content(Some(&blob), None), "");
    }

    #[test]
    fn unknown_encoding_is_empty_text() {
        assert_eq!(decode_content(Some("aGVsbG8="), Some("hex")), "");
    }
}
