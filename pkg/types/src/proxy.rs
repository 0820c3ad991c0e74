use serde::{Deserialize, Deserializer, Serialize};

/// Read an explicit JSON `null` as the type's default, like an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Listener port of a virtual service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VirtualServicePort {
    #[serde(default, deserialize_with = "null_as_default")]
    pub port: u16,
    #[serde(default, deserialize_with = "null_as_default")]
    pub enable_ssl: bool,
}

/// Virtual-service section of the proxy annotation.
///
/// Every `*_ref` field is a controller object reference of the form
/// `<prefix>=<identifier>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualService {
    #[serde(deserialize_with = "null_as_default")]
    pub fqdn: String,
    #[serde(deserialize_with = "null_as_default")]
    pub application_profile_ref: String,
    #[serde(deserialize_with = "null_as_default")]
    pub services: Vec<VirtualServicePort>,
    #[serde(deserialize_with = "null_as_default")]
    pub ssl_key_and_certificate_refs: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub ssl_profile_ref: String,
    #[serde(deserialize_with = "null_as_default")]
    pub vsvip_ref: String,
    #[serde(deserialize_with = "null_as_default")]
    pub se_group_ref: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tenant_ref: String,
    #[serde(deserialize_with = "null_as_default")]
    pub east_west_placement: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub waf_policy_ref: String,
}

/// Pool section of the proxy annotation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pool {
    #[serde(deserialize_with = "null_as_default")]
    pub health_monitor_refs: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub lb_algorithm: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lb_algorithm_hash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ssl_profile_ref: String,
}

/// GSLB-service section of the proxy annotation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GslbService {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub domain_names: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub health_monitor_refs: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub ttl: i64,
}

/// Decoded JSON proxy configuration embedded in an Ingress annotation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub virtualservice: VirtualService,
    #[serde(deserialize_with = "null_as_default")]
    pub pool: Pool,
    #[serde(deserialize_with = "null_as_default")]
    pub gslbservice: GslbService,
}

impl ProxyConfig {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let config: ProxyConfig = serde_json::from_str(raw)?;
        Ok(config)
    }
}
