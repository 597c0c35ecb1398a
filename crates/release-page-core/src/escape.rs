//! Escaping for the two JavaScript string contexts a release page uses.
//!
//! The page embeds most values inside backtick template literals, and the
//! download-file list inside a double-quoted `JSON.parse("...")` argument.
//! The two contexts need different escapes, so they get separate functions.
//!
//! In both, backslashes are escaped first. Doing it later would double the
//! backslashes introduced by the other replacements.

/// Escape text for embedding inside a backtick-delimited template literal.
///
/// Applies, in order: `\` → `\\`, `` ` `` → `` \` ``, `${` → `\${`.
pub fn template_literal(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// Escape JSON text for embedding inside a double-quoted string literal.
///
/// Applies, in order: `\` → `\\`, `"` → `\"`.
pub fn double_quoted(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
