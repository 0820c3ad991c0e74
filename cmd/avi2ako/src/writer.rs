use anyhow::Context;
use pkg_metrics::RuleTally;
use pkg_types::rules::{RuleDocument, RuleKind};
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes generated documents as YAML into per-kind category directories.
pub struct OutputWriter {
    root: PathBuf,
}

impl OutputWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn category_dir(&self, kind: RuleKind) -> PathBuf {
        self.root.join(kind.output_dir())
    }

    /// Create the three category directories if they don't exist.
    pub fn prepare(&self) -> anyhow::Result<()> {
        for kind in RuleKind::ALL {
            let dir = self.category_dir(kind);
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("couldn't create {} directory {}", kind, dir.display()))?;
        }
        Ok(())
    }

    /// Serialize and write one document, returning the path written.
    pub fn write(&self, doc: &RuleDocument) -> anyhow::Result<PathBuf> {
        let data = doc
            .to_yaml()
            .with_context(|| format!("couldn't serialize {}", doc.metadata().name))?;
        let path = self.category_dir(doc.kind()).join(doc.file_name());
        std::fs::write(&path, data)
            .with_context(|| format!("couldn't write {}", path.display()))?;
        info!("{}.yaml created", doc.metadata().name);
        Ok(path)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Write every document, recording each successful write in `tally`.
/// The first failure aborts the run.
pub fn write_all(
    writer: &OutputWriter,
    documents: &[RuleDocument],
    tally: &mut RuleTally,
) -> anyhow::Result<()> {
    for doc in documents {
        writer.write(doc)?;
        tally.record(doc.kind());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkg_rules::{IngressItem, convert};
    use pkg_types::ingress::{IngressHTTP, IngressPath, IngressRule};

    fn make_item(name: &str, proxy: &str) -> IngressItem {
        IngressItem {
            name: name.to_string(),
            namespace: "shop".to_string(),
            rules: vec![IngressRule {
                host: format!("{}.shop.example.com", name),
                http: IngressHTTP {
                    paths: vec![IngressPath {
                        path: format!("/{}", name),
                        ..Default::default()
                    }],
                },
            }],
            raw_proxy: Some(proxy.to_string()),
        }
    }

    #[test]
    fn test_prepare_creates_category_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let writer = OutputWriter::new(dir.path());
        writer.prepare().unwrap();
        // Idempotent.
        writer.prepare().unwrap();

        for name in ["hostrules", "httprules", "gslbrules"] {
            assert!(dir.path().join(name).is_dir());
        }
    }

    #[test]
    fn test_write_all_and_tally() {
        let dir = tempfile::tempdir().unwrap();
        let writer = OutputWriter::new(dir.path());
        writer.prepare().unwrap();

        let items = vec![
            make_item(
                "checkout",
                r#"{"virtualservice": {"fqdn": "checkout.shop.example.com"},
                    "gslbservice": {"domain_names": ["checkout.global.example.com"]}}"#,
            ),
            // No GSLB domain: HTTPRule only.
            make_item("cart", r#"{"virtualservice": {"fqdn": "cart.shop.example.com"}}"#),
        ];
        let conversion = convert(&items).unwrap();

        let mut tally = RuleTally::new();
        write_all(&writer, &conversion.documents, &mut tally).unwrap();

        assert_eq!(tally.get(RuleKind::Host), 1);
        assert_eq!(tally.get(RuleKind::Http), 2);
        assert_eq!(tally.get(RuleKind::Gslb), 1);

        assert!(dir.path().join("hostrules/checkout-hostruleshop.yaml").is_file());
        assert!(dir.path().join("httprules/checkout-httpruleshop.yaml").is_file());
        assert!(dir.path().join("httprules/cart-httpruleshop.yaml").is_file());
        assert!(dir.path().join("gslbrules/checkout-gslbruleshop.yaml").is_file());
        assert!(!dir.path().join("hostrules/cart-hostruleshop.yaml").exists());

        let written =
            std::fs::read_to_string(dir.path().join("gslbrules/checkout-gslbruleshop.yaml"))
                .unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&written).unwrap();
        assert_eq!(value["metadata"]["name"].as_str(), Some("checkout-gslbrule"));
        assert_eq!(value["spec"]["fqdn"].as_str(), Some("checkout.global.example.com"));
        assert_eq!(value["spec"]["ttl"].as_u64(), Some(0));
    }

    #[test]
    fn test_write_fails_without_prepare() {
        let dir = tempfile::tempdir().unwrap();
        let writer = OutputWriter::new(dir.path().join("missing"));
        let conversion = convert(&[make_item(
            "checkout",
            r#"{"virtualservice": {"fqdn": "checkout.shop.example.com"}}"#,
        )])
        .unwrap();

        let mut tally = RuleTally::new();
        let err = write_all(&writer, &conversion.documents, &mut tally).unwrap_err();
        assert!(format!("{:#}", err).contains("couldn't write"));
        assert!(format!("{:#}", err).contains("checkout-httpruleshop.yaml"));
        assert_eq!(tally.total(), 0);
    }
}
