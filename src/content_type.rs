use std::path::Path;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Resolve the Content-Type for a file name.
///
/// Looks up the lower-cased extension in the web-asset table first, then
/// falls back to the platform MIME table, then to
/// "application/octet-stream". Extension-based only; the file is never
/// opened, so the result is the same for the same name every time.
pub fn resolve_content_type(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    if let Some(content_type) = ext.as_deref().and_then(web_asset_content_type) {
        return content_type.to_string();
    }

    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_string()
}

/// Static table for the asset types a site deploy actually ships.
fn web_asset_content_type(ext: &str) -> Option<&'static str> {
    let content_type = match ext {
        // Scripts and stylesheets
        "js" => "application/javascript",
        "css" => "text/css",

        // Markup
        "html" | "htm" => "text/html",

        // Fonts
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",
        "eot" => "application/vnd.ms-fontobject",

        // Images
        "svg" => "image/svg+xml",
        "jpeg" | "jpg" => "image/jpeg",
        "png" => "image/png",

        _ => return None,
    };

    Some(content_type)
}
