//! Signature file locations.
//!
//! Generated signatures conventionally live under `app/models/`, one file per
//! class, at the class's underscored path. Nothing here touches the
//! filesystem.

use std::path::PathBuf;

/// Directory every signature path is rooted at.
pub const MODELS_DIR: &str = "app/models";

/// Converts a constant path to its underscored file path form.
///
/// `::` becomes `/`, word boundaries in CamelCase become `_`, `-` becomes
/// `_`, and everything is lowercased. A run of capitals is kept together
/// until the last one that starts a new word.
///
/// ```
/// use rbs_activemodel_gen::paths::underscore;
///
/// assert_eq!(underscore("Admin::HTTPUser"), "admin/http_user");
/// assert_eq!(underscore("OAuth2Token"), "o_auth2_token");
/// ```
pub fn underscore(name: &str) -> String {
    let name = name.strip_prefix("::").unwrap_or(name).replace("::", "/");
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (index, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && index > 0 {
            let prev = chars[index - 1];
            let next_is_lower = chars
                .get(index + 1)
                .is_some_and(|n| n.is_ascii_lowercase());
            let boundary = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower);
            if boundary {
                out.push('_');
            }
        }
        match c {
            '-' => out.push('_'),
            c => out.push(c.to_ascii_lowercase()),
        }
    }
    out
}

/// Where the signature for `qualified_name` would be written.
///
/// ```
/// use std::path::Path;
/// use rbs_activemodel_gen::signature_path;
///
/// assert_eq!(
///     signature_path("Admin::User"),
///     Path::new("app/models/admin/user.rbs")
/// );
/// ```
pub fn signature_path(qualified_name: &str) -> PathBuf {
    let mut path = PathBuf::from(MODELS_DIR);
    path.push(format!("{}.rbs", underscore(qualified_name)));
    path
}
