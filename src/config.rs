//! Resolution and format-handling configuration.

/// Cache-variant suffixes probed by default, in priority order: native binary
/// scene format, alternate binary format, legacy text format.
pub const DEFAULT_CACHE_EXTENSIONS: [&str; 3] = [".osgb", ".osg2", ".osg"];

/// Extension of the interchange format that requires `.` as decimal point.
pub const DEFAULT_LOCALE_SENSITIVE_EXTENSION: &str = "dae";

/// Extension of the format that must be read without implicit rotation.
pub const DEFAULT_NO_ROTATION_EXTENSION: &str = "obj";

/// Name prefix the mesh loader gives to parse-error placeholder nodes.
pub const DEFAULT_PLACEHOLDER_PREFIX: &str = "empty";

/// External tool suggested for converting a mesh into a cache variant.
pub const DEFAULT_CONVERSION_TOOL: &str = "osgconv";

/// Name of the read-only property exposing the requested mesh path.
pub const MESH_FILE_PATH_PROPERTY: &str = "Meshfile path";

/// Configuration for asset resolution and format handling.
///
/// Extensions in `locale_sensitive_extensions` and `no_rotation_extensions`
/// are compared against the lowercase extension without the dot. Cache
/// extensions are literal suffixes appended to the requested path.
///
/// # Example
///
/// ```
/// use meshleaf::LeafConfig;
///
/// let config = LeafConfig::default()
///     .with_cache_extensions([".osgb"])
///     .with_no_rotation_extension("stl");
///
/// assert!(config.needs_no_rotation("obj"));
/// assert!(config.needs_no_rotation("stl"));
/// assert_eq!(config.cache_extensions, vec![".osgb".to_owned()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafConfig {
    /// Suffixes probed for a cache variant, first match wins.
    pub cache_extensions: Vec<String>,
    /// Formats whose parser depends on the process numeric locale.
    pub locale_sensitive_extensions: Vec<String>,
    /// Formats loaded with the `noRotation` reader option.
    pub no_rotation_extensions: Vec<String>,
    /// Case-insensitive name prefix of placeholder nodes. Empty disables the check.
    pub placeholder_prefix: String,
    /// Tool named in conversion hints.
    pub conversion_tool: String,
    /// Name under which the mesh path property is registered.
    pub mesh_path_property: String,
}

impl Default for LeafConfig {
    fn default() -> Self {
        Self {
            cache_extensions: DEFAULT_CACHE_EXTENSIONS.iter().map(|s| (*s).to_owned()).collect(),
            locale_sensitive_extensions: vec![DEFAULT_LOCALE_SENSITIVE_EXTENSION.to_owned()],
            no_rotation_extensions: vec![DEFAULT_NO_ROTATION_EXTENSION.to_owned()],
            placeholder_prefix: DEFAULT_PLACEHOLDER_PREFIX.to_owned(),
            conversion_tool: DEFAULT_CONVERSION_TOOL.to_owned(),
            mesh_path_property: MESH_FILE_PATH_PROPERTY.to_owned(),
        }
    }
}

impl LeafConfig {
    /// Replace the probed cache suffixes.
    #[must_use]
    pub fn with_cache_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cache_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Add a locale-sensitive format.
    #[must_use]
    pub fn with_locale_sensitive_extension(mut self, extension: impl Into<String>) -> Self {
        self.locale_sensitive_extensions
            .push(extension.into().to_ascii_lowercase());
        self
    }

    /// Add a format that needs the `noRotation` option.
    #[must_use]
    pub fn with_no_rotation_extension(mut self, extension: impl Into<String>) -> Self {
        self.no_rotation_extensions
            .push(extension.into().to_ascii_lowercase());
        self
    }

    /// Set the placeholder name prefix.
    #[must_use]
    pub fn with_placeholder_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.placeholder_prefix = prefix.into();
        self
    }

    /// Set the conversion tool named in hints.
    #[must_use]
    pub fn with_conversion_tool(mut self, tool: impl Into<String>) -> Self {
        self.conversion_tool = tool.into();
        self
    }

    /// Whether `extension` (lowercase, no dot) is locale-sensitive.
    pub fn is_locale_sensitive(&self, extension: &str) -> bool {
        self.locale_sensitive_extensions.iter().any(|e| e == extension)
    }

    /// Whether `extension` (lowercase, no dot) needs the `noRotation` option.
    pub fn needs_no_rotation(&self, extension: &str) -> bool {
        self.no_rotation_extensions.iter().any(|e| e == extension)
    }

    /// Whether a node name marks a loader parse-error placeholder.
    pub fn is_placeholder_name(&self, name: &str) -> bool {
        let prefix = self.placeholder_prefix.as_str();
        !prefix.is_empty()
            && name
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    }

    /// Command suggesting conversion of `path` into its preferred cache variant.
    pub fn conversion_hint(&self, path: &str) -> String {
        let suffix = self
            .cache_extensions
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_CACHE_EXTENSIONS[0]);
        format!("{} {path} {path}{suffix}", self.conversion_tool)
    }
}
