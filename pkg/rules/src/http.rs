use crate::outcome::{MappingOutcome, SkipReason};
use crate::reference::extract_identifier;
use crate::source::IngressItem;
use pkg_types::proxy::ProxyConfig;
use pkg_types::rules::{
    HttpPath, HttpPathTls, HttpRule, HttpRuleSpec, LoadBalancerPolicy, RuleKind, RuleMetadata,
};

/// Derive the per-path load-balancing/health-check rule for an ingress.
///
/// The routing rule is found by exact match of its host against the
/// virtual-service FQDN, empty strings included; the first matching rule
/// wins. Every path of that rule becomes one path entry sharing the pool's
/// health monitors and load-balancing policy. With no matching host the
/// document carries a single entry with an empty target.
pub fn map_http_rule(item: &IngressItem, proxy: &ProxyConfig) -> MappingOutcome<HttpRule> {
    let fqdn = &proxy.virtualservice.fqdn;

    let targets: Vec<String> = match item.rules.iter().find(|r| r.host == *fqdn) {
        Some(rule) if rule.http.paths.is_empty() => {
            return MappingOutcome::Skipped(SkipReason::NoPaths {
                host: rule.host.clone(),
            });
        }
        Some(rule) => rule.http.paths.iter().map(|p| p.path.clone()).collect(),
        None => vec![String::new()],
    };

    let health_monitors: Vec<String> = proxy
        .pool
        .health_monitor_refs
        .iter()
        .map(|r| extract_identifier(r))
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect();

    let load_balancer_policy = LoadBalancerPolicy {
        algorithm: proxy.pool.lb_algorithm.clone(),
        hash: proxy.pool.lb_algorithm_hash.clone(),
    };

    let paths = targets
        .into_iter()
        .map(|target| HttpPath {
            target,
            health_monitors: health_monitors.clone(),
            load_balancer_policy: load_balancer_policy.clone(),
            // Re-encrypt is not derivable from the annotation.
            tls: HttpPathTls::default(),
        })
        .collect();

    MappingOutcome::Emitted(HttpRule::new(
        RuleMetadata::for_ingress(&item.name, &item.namespace, RuleKind::Http),
        HttpRuleSpec {
            fqdn: fqdn.clone(),
            paths,
        },
    ))
}
