use pkg_constants::api::{
    AKO_API_VERSION, AMKO_API_VERSION, GSLB_HOST_RULE_KIND, GSLB_RULE_SUFFIX, HOST_RULE_KIND,
    HOST_RULE_SUFFIX, HTTP_RULE_KIND, HTTP_RULE_SUFFIX, MANAGED_BY_LABEL, MANAGED_BY_VALUE,
    RELEASE_NAME_ANNOTATION, RELEASE_NAMESPACE_ANNOTATION,
};
use pkg_constants::paths::{DOCUMENT_EXTENSION, GSLB_RULES_DIR, HOST_RULES_DIR, HTTP_RULES_DIR};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The three families of generated rule documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    Host,
    Http,
    Gslb,
}

impl RuleKind {
    pub const ALL: [RuleKind; 3] = [RuleKind::Host, RuleKind::Http, RuleKind::Gslb];

    /// Suffix appended to the ingress name to form the document name.
    pub fn suffix(&self) -> &'static str {
        match self {
            RuleKind::Host => HOST_RULE_SUFFIX,
            RuleKind::Http => HTTP_RULE_SUFFIX,
            RuleKind::Gslb => GSLB_RULE_SUFFIX,
        }
    }

    /// Output category directory.
    pub fn output_dir(&self) -> &'static str {
        match self {
            RuleKind::Host => HOST_RULES_DIR,
            RuleKind::Http => HTTP_RULES_DIR,
            RuleKind::Gslb => GSLB_RULES_DIR,
        }
    }

    /// Deterministic document name for an ingress.
    pub fn document_name(&self, ingress_name: &str) -> String {
        format!("{}-{}", ingress_name, self.suffix())
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleKind::Host => write!(f, "HostRule"),
            RuleKind::Http => write!(f, "HTTPRule"),
            RuleKind::Gslb => write!(f, "GSLBRule"),
        }
    }
}

/// Metadata shared by every generated document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleMetadata {
    pub name: String,
    pub namespace: String,
    pub annotations: BTreeMap<String, String>,
    pub labels: BTreeMap<String, String>,
}

impl RuleMetadata {
    /// Metadata for the `kind` document derived from ingress `name`/`namespace`.
    pub fn for_ingress(name: &str, namespace: &str, kind: RuleKind) -> Self {
        let annotations = BTreeMap::from([
            (RELEASE_NAME_ANNOTATION.to_string(), name.to_string()),
            (RELEASE_NAMESPACE_ANNOTATION.to_string(), namespace.to_string()),
        ]);
        let labels = BTreeMap::from([(MANAGED_BY_LABEL.to_string(), MANAGED_BY_VALUE.to_string())]);
        Self {
            name: kind.document_name(name),
            namespace: namespace.to_string(),
            annotations,
            labels,
        }
    }
}

// ─── HostRule ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostGslb {
    pub fqdn: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SslKeyCertificate {
    pub name: String,
    #[serde(rename = "type")]
    pub cert_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostTls {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_key_certificate: Option<SslKeyCertificate>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ssl_profile: String,
    pub termination: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpPolicy {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub policy_sets: Vec<String>,
    pub overwrite: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualHost {
    pub fqdn: String,
    pub gslb: HostGslb,
    pub tls: HostTls,
    pub http_policy: HttpPolicy,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub waf_policy: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub application_profile: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub analytics_profile: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error_page_profile: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostRuleSpec {
    pub virtualhost: VirtualHost,
}

/// Host-level TLS/policy rule (`ako.vmware.com/v1alpha1`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostRule {
    pub api_version: String,
    pub kind: String,
    pub metadata: RuleMetadata,
    pub spec: HostRuleSpec,
}

impl HostRule {
    pub fn new(metadata: RuleMetadata, spec: HostRuleSpec) -> Self {
        Self {
            api_version: AKO_API_VERSION.to_string(),
            kind: HOST_RULE_KIND.to_string(),
            metadata,
            spec,
        }
    }
}

// ─── HTTPRule ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerPolicy {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub algorithm: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hash: String,
}

impl LoadBalancerPolicy {
    pub fn is_empty(&self) -> bool {
        self.algorithm.is_empty() && self.hash.is_empty()
    }
}

/// Re-encrypt settings of a path. Never populated by the converter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpPathTls {
    #[serde(default, rename = "type", skip_serializing_if = "String::is_empty")]
    pub tls_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ssl_profile: String,
    #[serde(default, rename = "destinationCA", skip_serializing_if = "String::is_empty")]
    pub destination_ca: String,
}

impl HttpPathTls {
    pub fn is_empty(&self) -> bool {
        self.tls_type.is_empty() && self.ssl_profile.is_empty() && self.destination_ca.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpPath {
    pub target: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub health_monitors: Vec<String>,
    #[serde(default, skip_serializing_if = "LoadBalancerPolicy::is_empty")]
    pub load_balancer_policy: LoadBalancerPolicy,
    #[serde(default, skip_serializing_if = "HttpPathTls::is_empty")]
    pub tls: HttpPathTls,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpRuleSpec {
    pub fqdn: String,
    pub paths: Vec<HttpPath>,
}

/// Per-path load-balancing/health-check rule (`ako.vmware.com/v1alpha1`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpRule {
    pub api_version: String,
    pub kind: String,
    pub metadata: RuleMetadata,
    pub spec: HttpRuleSpec,
}

impl HttpRule {
    pub fn new(metadata: RuleMetadata, spec: HttpRuleSpec) -> Self {
        Self {
            api_version: AKO_API_VERSION.to_string(),
            kind: HTTP_RULE_KIND.to_string(),
            metadata,
            spec,
        }
    }
}

// ─── GSLBHostRule ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitePersistence {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub profile_ref: String,
}

impl SitePersistence {
    pub fn is_empty(&self) -> bool {
        !self.enabled && self.profile_ref.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThirdPartyMember {
    pub site: String,
    pub vip: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrafficSplit {
    pub cluster: String,
    pub weight: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolAlgorithmSettings {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub lb_algorithm: String,
}

impl PoolAlgorithmSettings {
    pub fn is_empty(&self) -> bool {
        self.lb_algorithm.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GslbHostRuleSpec {
    pub fqdn: String,
    #[serde(default, skip_serializing_if = "SitePersistence::is_empty")]
    pub site_persistence: SitePersistence,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub third_party_members: Vec<ThirdPartyMember>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub health_monitor_refs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub traffic_split: Vec<TrafficSplit>,
    /// Zero is a real TTL and is always emitted.
    pub ttl: i64,
    #[serde(default, skip_serializing_if = "PoolAlgorithmSettings::is_empty")]
    pub pool_algorithm_settings: PoolAlgorithmSettings,
}

/// Global-load-balancing rule (`amko.vmware.com/v1alpha1`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GslbHostRule {
    pub api_version: String,
    pub kind: String,
    pub metadata: RuleMetadata,
    pub spec: GslbHostRuleSpec,
}

impl GslbHostRule {
    pub fn new(metadata: RuleMetadata, spec: GslbHostRuleSpec) -> Self {
        Self {
            api_version: AMKO_API_VERSION.to_string(),
            kind: GSLB_HOST_RULE_KIND.to_string(),
            metadata,
            spec,
        }
    }
}

// ─── Any document ─────────────────────────────────────────────────────────

/// A generated document of any kind, as handed to the output writer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RuleDocument {
    Host(HostRule),
    Http(HttpRule),
    Gslb(GslbHostRule),
}

impl RuleDocument {
    pub fn kind(&self) -> RuleKind {
        match self {
            RuleDocument::Host(_) => RuleKind::Host,
            RuleDocument::Http(_) => RuleKind::Http,
            RuleDocument::Gslb(_) => RuleKind::Gslb,
        }
    }

    pub fn metadata(&self) -> &RuleMetadata {
        match self {
            RuleDocument::Host(r) => &r.metadata,
            RuleDocument::Http(r) => &r.metadata,
            RuleDocument::Gslb(r) => &r.metadata,
        }
    }

    /// Output filename: `<document-name><namespace>.yaml`.
    pub fn file_name(&self) -> String {
        let meta = self.metadata();
        format!("{}{}.{}", meta.name, meta.namespace, DOCUMENT_EXTENSION)
    }

    pub fn to_yaml(&self) -> anyhow::Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
