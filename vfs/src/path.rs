//! File-name helpers used during asset resolution.

/// Return the file name component of a path (everything after the last
/// `/` or `\`).
pub fn file_name(path: &str) -> &str {
    match path.rfind(|c: char| c == '/' || c == '\\') {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}

/// Return the lowercase extension of a path, without the leading dot.
///
/// Only the file name component is inspected, so dots in directory names are
/// ignored. Returns an empty string when the file name has no dot.
///
/// ```
/// use meshleaf_vfs::path::lower_case_extension;
///
/// assert_eq!(lower_case_extension("meshes/Arm.DAE"), "dae");
/// assert_eq!(lower_case_extension("meshes/arm.dae.osgb"), "osgb");
/// assert_eq!(lower_case_extension("v1.2/README"), "");
/// ```
pub fn lower_case_extension(path: &str) -> String {
    let name = file_name(path);
    match name.rfind('.') {
        Some(pos) => name[pos + 1..].to_ascii_lowercase(),
        None => String::new(),
    }
}

/// Append a literal suffix to a path (`"arm.dae"` + `".osgb"` → `"arm.dae.osgb"`).
///
/// Unlike [`std::path::Path::with_extension`], the existing extension is kept.
pub fn append_suffix(path: &str, suffix: &str) -> String {
    let mut out = String::with_capacity(path.len() + suffix.len());
    out.push_str(path);
    out.push_str(suffix);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(lower_case_extension("robot/Base.DAE"), "dae");
    }

    #[test]
    fn extension_of_cache_variant() {
        assert_eq!(lower_case_extension("robot/base.dae.osg2"), "osg2");
    }

    #[test]
    fn no_extension() {
        assert_eq!(lower_case_extension("robot/base"), "");
    }

    #[test]
    fn dots_in_directories_are_ignored() {
        assert_eq!(lower_case_extension("robot.v2/base"), "");
        assert_eq!(lower_case_extension("robot.v2\\base.Obj"), "obj");
    }

    #[test]
    fn trailing_dot() {
        assert_eq!(lower_case_extension("base."), "");
    }

    #[test]
    fn file_name_component() {
        assert_eq!(file_name("a/b/c.dae"), "c.dae");
        assert_eq!(file_name("c.dae"), "c.dae");
        assert_eq!(file_name("a\\c.dae"), "c.dae");
    }

    #[test]
    fn suffix_keeps_extension() {
        assert_eq!(append_suffix("arm.dae", ".osgb"), "arm.dae.osgb");
    }
}
