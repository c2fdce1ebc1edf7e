use std::sync::LazyLock;

use regex::Regex;

/// Image, audio, video, font and stylesheet extensions, followed by end, query or fragment
static STATIC_ASSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\.(?:png|apng|bmp|gif|ico|cur|jpg|jpeg|jfif|pjp|pjpeg|svg|tif|tiff|webp|xbm|3gp|aac|flac|mpg|mpeg|mp3|mp4|m4a|m4v|m4p|oga|ogg|ogv|mov|wav|webm|eot|woff|woff2|ttf|otf|css)(?:\?|#|$)",
    )
    .expect("static asset pattern is valid")
});

/// A literal `=` somewhere after a `?`
static KEY_VALUE_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\?.*=").expect("key=value pattern is valid"));

/// Whether the URL points at a static, non-HTML resource judging by its extension
pub fn is_static_asset(raw: &str) -> bool {
    STATIC_ASSET.is_match(raw)
}

/// Whether the URL carries at least one `key=value` query parameter
pub fn has_key_value_param(raw: &str) -> bool {
    KEY_VALUE_PARAM.is_match(raw)
}
