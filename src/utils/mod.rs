pub mod time_code;

pub use time_code::TimeCode;

/// Lower-cased extension of a file name, if it has one
pub fn file_extension(name: &str) -> Option<String> {
    std::path::Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| ext.to_ascii_lowercase())
}
