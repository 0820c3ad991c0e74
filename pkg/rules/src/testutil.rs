use crate::source::IngressItem;
use pkg_types::ingress::{IngressHTTP, IngressPath, IngressRule};
use pkg_types::proxy::ProxyConfig;

pub fn make_rule(host: &str, paths: &[&str]) -> IngressRule {
    IngressRule {
        host: host.to_string(),
        http: IngressHTTP {
            paths: paths
                .iter()
                .map(|p| IngressPath {
                    path: p.to_string(),
                    ..Default::default()
                })
                .collect(),
        },
    }
}

pub fn make_item(name: &str, namespace: &str, rules: Vec<IngressRule>) -> IngressItem {
    IngressItem {
        name: name.to_string(),
        namespace: namespace.to_string(),
        rules,
        raw_proxy: None,
    }
}

pub fn make_proxy(fqdn: &str, gslb_domains: &[&str]) -> ProxyConfig {
    let mut proxy = ProxyConfig::default();
    proxy.virtualservice.fqdn = fqdn.to_string();
    proxy.gslbservice.domain_names = gslb_domains.iter().map(|d| d.to_string()).collect();
    proxy
}
