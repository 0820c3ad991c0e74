use crate::gslb::map_gslb_rule;
use crate::host::map_host_rule;
use crate::http::map_http_rule;
use crate::outcome::{MappingOutcome, SkipReason};
use crate::source::IngressItem;
use pkg_types::proxy::ProxyConfig;
use pkg_types::rules::{GslbHostRule, HostRule, HttpRule, RuleDocument, RuleKind};
use tracing::{debug, warn};

/// The three mapper outcomes for one ingress.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRules {
    pub host: MappingOutcome<HostRule>,
    pub http: MappingOutcome<HttpRule>,
    pub gslb: MappingOutcome<GslbHostRule>,
}

impl ItemRules {
    fn skipped(reason: SkipReason) -> Self {
        Self {
            host: MappingOutcome::Skipped(reason.clone()),
            http: MappingOutcome::Skipped(reason.clone()),
            gslb: MappingOutcome::Skipped(reason),
        }
    }

    /// Flatten into (kind, outcome) pairs in Host, HTTP, GSLB order.
    fn into_outcomes(self) -> [(RuleKind, MappingOutcome<RuleDocument>); 3] {
        [
            (RuleKind::Host, self.host.map(RuleDocument::Host)),
            (RuleKind::Http, self.http.map(RuleDocument::Http)),
            (RuleKind::Gslb, self.gslb.map(RuleDocument::Gslb)),
        ]
    }
}

/// Run all three mappers on one ingress and its decoded proxy configuration.
pub fn map_item(item: &IngressItem, proxy: &ProxyConfig) -> ItemRules {
    ItemRules {
        host: map_host_rule(item, proxy),
        http: map_http_rule(item, proxy),
        gslb: map_gslb_rule(item, proxy),
    }
}

/// A mapper that produced no document.
#[derive(Debug, Clone, PartialEq)]
pub struct Skip {
    pub ingress: String,
    pub namespace: String,
    pub kind: RuleKind,
    pub reason: SkipReason,
}

/// Everything derived from one batch of ingresses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversion {
    /// Documents in input order; per ingress Host, HTTP, then GSLB.
    pub documents: Vec<RuleDocument>,
    pub skipped: Vec<Skip>,
}

/// Convert a batch of ingresses, one item at a time.
///
/// A malformed proxy annotation aborts the whole batch. Skips are logged and
/// collected.
pub fn convert(items: &[IngressItem]) -> anyhow::Result<Conversion> {
    let mut conversion = Conversion::default();

    for item in items {
        let rules = match item.decode_proxy()? {
            Some(proxy) => map_item(item, &proxy),
            None => ItemRules::skipped(SkipReason::MissingAnnotation),
        };

        for (kind, outcome) in rules.into_outcomes() {
            match outcome {
                MappingOutcome::Emitted(doc) => {
                    debug!("Derived {} for ingress {}/{}", kind, item.namespace, item.name);
                    conversion.documents.push(doc);
                }
                MappingOutcome::Skipped(reason) => {
                    warn!(
                        "{} for ingress {}/{} skipped: {}",
                        kind, item.namespace, item.name, reason
                    );
                    conversion.skipped.push(Skip {
                        ingress: item.name.clone(),
                        namespace: item.namespace.clone(),
                        kind,
                        reason,
                    });
                }
            }
        }
    }

    Ok(conversion)
}
