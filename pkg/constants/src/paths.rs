//! Filesystem path constants.

/// Default input ingress list.
pub const DEFAULT_INPUT_FILE: &str = "ingress.yaml";

/// Default config file path.
pub const DEFAULT_CONFIG_FILE: &str = "avi2ako.yaml";

/// Default root under which the category directories are created.
pub const DEFAULT_OUTPUT_DIR: &str = ".";

pub const HOST_RULES_DIR: &str = "hostrules";
pub const HTTP_RULES_DIR: &str = "httprules";
pub const GSLB_RULES_DIR: &str = "gslbrules";

/// Extension of every written document.
pub const DOCUMENT_EXTENSION: &str = "yaml";
