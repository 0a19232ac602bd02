use chrono::NaiveDateTime;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// EXIFの撮影日時を ISO-8601（秒まで）で返す
pub fn extract_date(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let mut bufreader = BufReader::new(file);
    let exif = exif::Reader::new().read_from_container(&mut bufreader)?;

    // DateTimeOriginal → DateTime の順で探す
    let field = exif
        .get_field(exif::Tag::DateTimeOriginal, exif::In::PRIMARY)
        .or_else(|| exif.get_field(exif::Tag::DateTime, exif::In::PRIMARY))
        .ok_or("No date found in EXIF")?;

    Ok(to_iso8601(&field.display_value().to_string()))
}

/// "2024-05-01 17:30:00" → "2024-05-01T17:30:00"
///
/// 解釈できない値はそのまま返す。
fn to_iso8601(value: &str) -> String {
    NaiveDateTime::parse_from_str(value.trim(), "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S").to_string())
        .unwrap_or_else(|_| value.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_iso8601() {
        assert_eq!(to_iso8601("2024-05-01 17:30:00"), "2024-05-01T17:30:00");
        assert_eq!(to_iso8601(" unknown "), "unknown");
    }

    #[test]
    fn test_extract_date_missing_file() {
        assert!(extract_date(Path::new("/nonexistent/photo.jpg")).is_err());
    }
}
