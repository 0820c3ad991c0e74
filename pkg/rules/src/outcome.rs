/// Why a mapper produced no document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The ingress carries no proxy-configuration annotation.
    MissingAnnotation,
    /// The GSLB service lists no domain names.
    NoGslbDomain,
    /// The matched routing rule has no paths.
    NoPaths { host: String },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::MissingAnnotation => write!(f, "proxy annotation not found"),
            SkipReason::NoGslbDomain => write!(f, "GSLB domain name not found"),
            SkipReason::NoPaths { host } => write!(f, "no path found for host {}", host),
        }
    }
}

/// Result of one mapper invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum MappingOutcome<T> {
    Emitted(T),
    Skipped(SkipReason),
}

impl<T> MappingOutcome<T> {
    /// The document, if one was produced.
    pub fn emitted(self) -> Option<T> {
        match self {
            MappingOutcome::Emitted(doc) => Some(doc),
            MappingOutcome::Skipped(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> MappingOutcome<U> {
        match self {
            MappingOutcome::Emitted(doc) => MappingOutcome::Emitted(f(doc)),
            MappingOutcome::Skipped(reason) => MappingOutcome::Skipped(reason),
        }
    }
}
