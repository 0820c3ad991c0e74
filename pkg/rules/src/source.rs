use anyhow::Context;
use pkg_types::ingress::{Ingress, IngressList, IngressRule};
use pkg_types::proxy::ProxyConfig;

/// One input ingress as seen by the mappers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngressItem {
    pub name: String,
    pub namespace: String,
    pub rules: Vec<IngressRule>,
    /// Raw JSON proxy configuration, if the annotation is present.
    pub raw_proxy: Option<String>,
}

impl IngressItem {
    pub fn from_ingress(ingress: &Ingress, annotation_key: &str) -> Self {
        Self {
            name: ingress.metadata.name.clone(),
            namespace: ingress.metadata.namespace.clone(),
            rules: ingress.spec.rules.clone(),
            raw_proxy: ingress.annotation(annotation_key).map(str::to_string),
        }
    }

    /// Decode the embedded proxy configuration.
    ///
    /// `Ok(None)` when the annotation is absent; a present but malformed
    /// annotation is an error naming the ingress.
    pub fn decode_proxy(&self) -> anyhow::Result<Option<ProxyConfig>> {
        let Some(raw) = self.raw_proxy.as_deref() else {
            return Ok(None);
        };
        let config = ProxyConfig::from_json(raw).with_context(|| {
            format!(
                "couldn't decode proxy annotation for ingress {}/{}",
                self.namespace, self.name
            )
        })?;
        Ok(Some(config))
    }
}

/// Build one item per list entry, in list order.
pub fn items_from_list(list: &IngressList, annotation_key: &str) -> Vec<IngressItem> {
    list.items
        .iter()
        .map(|ingress| IngressItem::from_ingress(ingress, annotation_key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST: &str = r#"
items:
- metadata:
    name: checkout
    namespace: shop
    annotations:
      avi_proxy: '{"gslbservice": {"domain_names": ["checkout.global.example.com"], "ttl": 0}}'
      meta.helm.sh/release-name: checkout
  spec:
    rules:
    - host: checkout.shop.example.com
      http:
        paths:
        - path: /checkout
- metadata:
    name: legacy
    namespace: shop
"#;

    #[test]
    fn test_items_from_list() {
        let list = IngressList::from_yaml(LIST).unwrap();
        let items = items_from_list(&list, "avi_proxy");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "checkout");
        assert_eq!(items[0].namespace, "shop");
        assert_eq!(items[0].rules.len(), 1);
        assert!(items[0].raw_proxy.is_some());
        assert!(items[1].raw_proxy.is_none());
        assert!(items[1].rules.is_empty());
    }

    #[test]
    fn test_custom_annotation_key() {
        let list = IngressList::from_yaml(LIST).unwrap();
        let items = items_from_list(&list, "meta.helm.sh/release-name");
        assert_eq!(items[0].raw_proxy.as_deref(), Some("checkout"));
    }

    #[test]
    fn test_decode_proxy() {
        let list = IngressList::from_yaml(LIST).unwrap();
        let items = items_from_list(&list, "avi_proxy");

        let proxy = items[0].decode_proxy().unwrap().unwrap();
        assert_eq!(
            proxy.gslbservice.domain_names,
            vec!["checkout.global.example.com"]
        );
        assert!(items[1].decode_proxy().unwrap().is_none());
    }

    #[test]
    fn test_decode_error_names_ingress() {
        let item = IngressItem {
            name: "broken".to_string(),
            namespace: "shop".to_string(),
            rules: vec![],
            raw_proxy: Some("{\"virtualservice\":".to_string()),
        };
        let err = item.decode_proxy().unwrap_err();
        assert!(format!("{:#}", err).contains("shop/broken"));
    }
}
