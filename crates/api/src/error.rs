use crate::models::NodeId;

/// Classification of a failed directory lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupErrorKind {
    /// The directory answered, but has no such node.
    NotFound,
    /// The directory answered with a non-success status.
    Status,
    /// The directory could not be reached (offline, timeout, reset).
    Transport,
    /// The directory answered with something that is not a node.
    Decode,
}

impl std::fmt::Display for LookupErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LookupErrorKind::NotFound => "not found",
            LookupErrorKind::Status => "bad status",
            LookupErrorKind::Transport => "transport failure",
            LookupErrorKind::Decode => "malformed response",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("lookup of {id} failed ({kind}): {message}")]
pub struct LookupError {
    pub id: NodeId,
    pub kind: LookupErrorKind,
    pub status: Option<u16>,
    pub message: String,
}

impl LookupError {
    pub fn new(id: NodeId, kind: LookupErrorKind, message: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            status: None,
            message: message.into(),
        }
    }

    pub fn not_found(id: NodeId) -> Self {
        Self::new(id, LookupErrorKind::NotFound, "no such node")
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

pub type LookupResult<T> = std::result::Result<T, LookupError>;

/// Ways a path search can end without a path.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PathError {
    /// Start or goal has no neighbors at all.
    #[error("No ground path between two countries")]
    DegenerateEndpoint { lookups: usize },
    /// The frontier ran dry before the goal showed up.
    #[error("No path")]
    Unreachable { lookups: usize },
    #[error(transparent)]
    LookupFailed(#[from] LookupError),
}

impl PathError {
    /// Directory calls spent before the search gave up, when known.
    pub fn lookups(&self) -> Option<usize> {
        match self {
            PathError::DegenerateEndpoint { lookups } | PathError::Unreachable { lookups } => {
                Some(*lookups)
            }
            PathError::LookupFailed(_) => None,
        }
    }
}

pub type PathResult<T> = std::result::Result<T, PathError>;
