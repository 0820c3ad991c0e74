use crate::outcome::{MappingOutcome, SkipReason};
use crate::reference::extract_identifier;
use crate::source::IngressItem;
use pkg_types::proxy::ProxyConfig;
use pkg_types::rules::{GslbHostRule, GslbHostRuleSpec, RuleKind, RuleMetadata};

/// Derive the global-load-balancing rule for an ingress.
///
/// Only the first GSLB domain name is used. Health-monitor identifiers keep
/// input order, duplicates and empty extractions. Site persistence,
/// third-party members and traffic split are not derivable and stay unset.
pub fn map_gslb_rule(item: &IngressItem, proxy: &ProxyConfig) -> MappingOutcome<GslbHostRule> {
    let gslb = &proxy.gslbservice;
    let Some(fqdn) = gslb.domain_names.first() else {
        return MappingOutcome::Skipped(SkipReason::NoGslbDomain);
    };

    let health_monitor_refs = gslb
        .health_monitor_refs
        .iter()
        .map(|r| extract_identifier(r).to_string())
        .collect();

    MappingOutcome::Emitted(GslbHostRule::new(
        RuleMetadata::for_ingress(&item.name, &item.namespace, RuleKind::Gslb),
        GslbHostRuleSpec {
            fqdn: fqdn.clone(),
            health_monitor_refs,
            ttl: gslb.ttl,
            ..Default::default()
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{make_item, make_proxy};

    #[test]
    fn test_gslb_rule_keeps_zero_ttl() {
        let item = make_item("svc", "default", vec![]);
        let proxy = make_proxy("svc.local", &["svc.example.com"]);

        let rule = map_gslb_rule(&item, &proxy).emitted().unwrap();
        assert_eq!(rule.api_version, "amko.vmware.com/v1alpha1");
        assert_eq!(rule.kind, "GSLBHostRule");
        assert_eq!(rule.metadata.name, "svc-gslbrule");
        assert_eq!(rule.spec.fqdn, "svc.example.com");
        assert_eq!(rule.spec.ttl, 0);

        let yaml = serde_yaml::to_string(&rule).unwrap();
        assert!(yaml.contains("ttl: 0"));
    }

    #[test]
    fn test_health_monitor_refs_preserved_verbatim() {
        let item = make_item("svc", "default", vec![]);
        let mut proxy = make_proxy("svc.local", &["svc.example.com"]);
        proxy.gslbservice.health_monitor_refs = vec![
            "/api/healthmonitor?name=gs-hm".to_string(),
            "no-identifier".to_string(),
            "/api/healthmonitor?name=gs-hm".to_string(),
        ];
        proxy.gslbservice.ttl = 30;

        let rule = map_gslb_rule(&item, &proxy).emitted().unwrap();
        assert_eq!(rule.spec.health_monitor_refs, vec!["gs-hm", "", "gs-hm"]);
        assert_eq!(rule.spec.ttl, 30);
        assert!(rule.spec.site_persistence.is_empty());
        assert!(rule.spec.third_party_members.is_empty());
        assert!(rule.spec.traffic_split.is_empty());
        assert!(rule.spec.pool_algorithm_settings.is_empty());
    }

    #[test]
    fn test_negative_ttl_copied_verbatim() {
        let item = make_item("svc", "default", vec![]);
        let mut proxy = make_proxy("svc.local", &["svc.example.com"]);
        proxy.gslbservice.ttl = -1;
        let rule = map_gslb_rule(&item, &proxy).emitted().unwrap();
        assert_eq!(rule.spec.ttl, -1);
    }

    #[test]
    fn test_only_first_domain_used() {
        let item = make_item("svc", "default", vec![]);
        let proxy = make_proxy("svc.local", &["a.example.com", "b.example.com"]);
        let rule = map_gslb_rule(&item, &proxy).emitted().unwrap();
        assert_eq!(rule.spec.fqdn, "a.example.com");
    }

    #[test]
    fn test_skip_without_domain() {
        let item = make_item("svc", "default", vec![]);
        let outcome = map_gslb_rule(&item, &make_proxy("svc.local", &[]));
        assert_eq!(outcome, MappingOutcome::Skipped(SkipReason::NoGslbDomain));
    }
}
