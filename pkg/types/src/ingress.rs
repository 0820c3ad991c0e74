use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Path matching type for Ingress rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum PathType {
    #[default]
    Prefix,
    Exact,
    ImplementationSpecific,
}

/// A port given either as a number or as a named port.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntOrString {
    Int(u16),
    String(String),
}

/// `networking.k8s.io/v1` service port reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceBackendPort {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// `networking.k8s.io/v1` service backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngressServiceBackend {
    pub name: String,
    #[serde(default)]
    pub port: ServiceBackendPort,
}

/// Backend service target for an Ingress path.
///
/// Accepts both the legacy `serviceName`/`servicePort` shape and the
/// `service: {name, port}` shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngressBackend {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_port: Option<IntOrString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<IngressServiceBackend>,
}

/// A single path rule within an Ingress HTTP rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngressPath {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub path_type: PathType,
    #[serde(default)]
    pub backend: IngressBackend,
}

/// HTTP rules for a host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngressHTTP {
    #[serde(default)]
    pub paths: Vec<IngressPath>,
}

/// A single host-based Ingress rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngressRule {
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub http: IngressHTTP,
}

/// Ingress specification. Only the routing rules are consumed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngressSpec {
    #[serde(default)]
    pub rules: Vec<IngressRule>,
}

/// Object metadata of an input Ingress.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngressMetadata {
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub annotations: BTreeMap<String, String>,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

/// One entry of an exported Ingress list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingress {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
    pub metadata: IngressMetadata,
    #[serde(default)]
    pub spec: IngressSpec,
}

impl Ingress {
    /// Raw value of annotation `key`, if present.
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.metadata.annotations.get(key).map(String::as_str)
    }
}

/// `kubectl get ingress -o yaml` output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngressList {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub items: Vec<Ingress>,
}

impl IngressList {
    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let list: IngressList = serde_yaml::from_str(content)?;
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST: &str = r#"
apiVersion: v1
items:
- apiVersion: extensions/v1beta1
  kind: Ingress
  metadata:
    name: checkout
    namespace: shop
    annotations:
      avi_proxy: '{"virtualservice": {"fqdn": "checkout.shop.example.com"}}'
    creationTimestamp: "2021-03-01T10:00:00Z"
  spec:
    rules:
    - host: checkout.shop.example.com
      http:
        paths:
        - path: /checkout
          backend:
            serviceName: checkout
            servicePort: 8080
- apiVersion: networking.k8s.io/v1
  kind: Ingress
  metadata:
    name: cart
    namespace: shop
  spec:
    rules:
    - host: cart.shop.example.com
      http:
        paths:
        - path: /
          pathType: Exact
          backend:
            service:
              name: cart
              port:
                name: http
status:
  loadBalancer: {}
"#;

    #[test]
    fn test_parse_ingress_list() {
        let list = IngressList::from_yaml(LIST).unwrap();
        assert_eq!(list.items.len(), 2);

        let checkout = &list.items[0];
        assert_eq!(checkout.metadata.name, "checkout");
        assert_eq!(checkout.metadata.namespace, "shop");
        assert!(checkout.annotation("avi_proxy").unwrap().contains("fqdn"));

        let path = &checkout.spec.rules[0].http.paths[0];
        assert_eq!(path.path, "/checkout");
        assert_eq!(path.path_type, PathType::Prefix);
        assert_eq!(path.backend.service_name.as_deref(), Some("checkout"));
        assert_eq!(path.backend.service_port, Some(IntOrString::Int(8080)));
    }

    #[test]
    fn test_parse_v1_backend() {
        let list = IngressList::from_yaml(LIST).unwrap();
        let cart = &list.items[1];
        assert!(cart.annotation("avi_proxy").is_none());

        let path = &cart.spec.rules[0].http.paths[0];
        assert_eq!(path.path_type, PathType::Exact);
        let service = path.backend.service.as_ref().unwrap();
        assert_eq!(service.name, "cart");
        let port = &service.port;
        assert_eq!(port.name.as_deref(), Some("http"));
        assert!(port.number.is_none());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(IngressList::from_yaml("items: 42").is_err());
    }
}
