//! Document schema constants emitted verbatim into generated rules.

// ─── API groups ───────────────────────────────────────────────────────────

/// API group/version for `HostRule` and `HTTPRule` documents.
pub const AKO_API_VERSION: &str = "ako.vmware.com/v1alpha1";

/// API group/version for `GSLBHostRule` documents.
pub const AMKO_API_VERSION: &str = "amko.vmware.com/v1alpha1";

// ─── Kinds ────────────────────────────────────────────────────────────────

pub const HOST_RULE_KIND: &str = "HostRule";
pub const HTTP_RULE_KIND: &str = "HTTPRule";
pub const GSLB_HOST_RULE_KIND: &str = "GSLBHostRule";

// ─── Name suffixes ────────────────────────────────────────────────────────

/// Document name = `<ingress-name>-<suffix>`.
pub const HOST_RULE_SUFFIX: &str = "hostrule";
pub const HTTP_RULE_SUFFIX: &str = "httprule";
pub const GSLB_RULE_SUFFIX: &str = "gslbrule";

// ─── Metadata ─────────────────────────────────────────────────────────────

pub const RELEASE_NAME_ANNOTATION: &str = "meta.helm.sh/release-name";
pub const RELEASE_NAMESPACE_ANNOTATION: &str = "meta.helm.sh/release-namespace";
pub const MANAGED_BY_LABEL: &str = "app.kubernetes.io/managed-by";
pub const MANAGED_BY_VALUE: &str = "Helm";

/// Ingress annotation carrying the JSON-encoded proxy configuration.
pub const DEFAULT_PROXY_ANNOTATION: &str = "avi_proxy";

// ─── Rule bodies ──────────────────────────────────────────────────────────

/// Only edge termination is expressible in a HostRule; re-encrypt belongs to HTTPRule.
pub const TLS_TERMINATION_EDGE: &str = "edge";

/// Certificate references always point at controller-side objects.
pub const SSL_KEY_CERT_TYPE_REF: &str = "ref";
