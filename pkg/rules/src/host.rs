use crate::outcome::{MappingOutcome, SkipReason};
use crate::reference::extract_identifier;
use crate::source::IngressItem;
use pkg_constants::api::{SSL_KEY_CERT_TYPE_REF, TLS_TERMINATION_EDGE};
use pkg_types::proxy::ProxyConfig;
use pkg_types::rules::{
    HostGslb, HostRule, HostRuleSpec, HostTls, HttpPolicy, RuleKind, RuleMetadata,
    SslKeyCertificate, VirtualHost,
};

/// Derive the host-level TLS/policy rule for an ingress.
///
/// A HostRule is only emitted when a GSLB FQDN is derivable. Only the first
/// certificate reference is used; the TLS profile is taken only alongside it.
/// HTTP policy sets are expected to exist on the controller already, so the
/// list stays empty.
pub fn map_host_rule(item: &IngressItem, proxy: &ProxyConfig) -> MappingOutcome<HostRule> {
    let Some(gslb_fqdn) = proxy.gslbservice.domain_names.first() else {
        return MappingOutcome::Skipped(SkipReason::NoGslbDomain);
    };

    let vs = &proxy.virtualservice;

    let (ssl_key_certificate, ssl_profile) = match vs.ssl_key_and_certificate_refs.first() {
        Some(cert_ref) => {
            let name = extract_identifier(cert_ref);
            let cert = (!name.is_empty()).then(|| SslKeyCertificate {
                name: name.to_string(),
                cert_type: SSL_KEY_CERT_TYPE_REF.to_string(),
            });
            (cert, extract_identifier(&vs.ssl_profile_ref).to_string())
        }
        None => (None, String::new()),
    };

    let virtualhost = VirtualHost {
        fqdn: vs.fqdn.clone(),
        gslb: HostGslb {
            fqdn: gslb_fqdn.clone(),
        },
        tls: HostTls {
            ssl_key_certificate,
            ssl_profile,
            termination: TLS_TERMINATION_EDGE.to_string(),
        },
        http_policy: HttpPolicy {
            policy_sets: Vec::new(),
            overwrite: false,
        },
        waf_policy: extract_identifier(&vs.waf_policy_ref).to_string(),
        application_profile: extract_identifier(&vs.application_profile_ref).to_string(),
        analytics_profile: String::new(),
        error_page_profile: String::new(),
    };

    MappingOutcome::Emitted(HostRule::new(
        RuleMetadata::for_ingress(&item.name, &item.namespace, RuleKind::Host),
        HostRuleSpec { virtualhost },
    ))
}
