//! Per-call transcode configuration.
//!
//! Everything a transcode needs besides the password travels in one
//! [`TranscodeOptions`] value; there is no process-wide session state.

use crate::consts::{DEFAULT_PBKDF2_ITERATIONS, PBKDF2_MAX_ITER, PBKDF2_MIN_ITER};
use crate::encryptor::SaltPolicy;
use crate::utils::normalize_prefix;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Decides whether a source path takes part in the transcode.
pub type PathFilter = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Maps a source path to the path stored in the output archive.
pub type PathRewrite = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Cooperative cancellation flag, checked between entries.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Clone)]
pub struct TranscodeOptions {
    iterations: u32,
    salt_policy: SaltPolicy,
    path_filter: Option<PathFilter>,
    path_rewrite: Option<PathRewrite>,
    auxiliary: Vec<(String, Vec<u8>)>,
    cancel: Option<CancelToken>,
}

impl Default for TranscodeOptions {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_PBKDF2_ITERATIONS,
            salt_policy: SaltPolicy::default(),
            path_filter: None,
            path_rewrite: None,
            auxiliary: Vec::new(),
            cancel: None,
        }
    }
}

impl TranscodeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// PBKDF2 iteration count, clamped to `PBKDF2_MIN_ITER..=PBKDF2_MAX_ITER`.
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations.clamp(PBKDF2_MIN_ITER, PBKDF2_MAX_ITER);
        self
    }

    #[must_use]
    pub fn with_salt_policy(mut self, policy: SaltPolicy) -> Self {
        self.salt_policy = policy;
        self
    }

    /// Only transcode entries under `prefix`, and store them with the prefix stripped.
    ///
    /// `"site"`, `"site/"` and `"/site/"` are equivalent. Replaces any filter or
    /// rewrite set earlier.
    #[must_use]
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        match normalize_prefix(prefix) {
            Some(prefix) => {
                let prefix: Arc<str> = prefix.into();
                let keep = Arc::clone(&prefix);
                self.path_filter = Some(Arc::new(move |path: &str| path.starts_with(&*keep)));
                self.path_rewrite = Some(Arc::new(move |path: &str| {
                    path.strip_prefix(&*prefix).unwrap_or(path).to_owned()
                }));
            }
            None => {
                self.path_filter = None;
                self.path_rewrite = None;
            }
        }
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        self.path_filter = Some(Arc::new(filter));
        self
    }

    #[must_use]
    pub fn with_rewrite(
        mut self,
        rewrite: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.path_rewrite = Some(Arc::new(rewrite));
        self
    }

    /// Add an unencrypted file to the end of the output archive.
    #[must_use]
    pub fn with_auxiliary(mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.auxiliary.push((path.into(), bytes.into()));
        self
    }

    #[must_use]
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    #[must_use]
    pub const fn salt_policy(&self) -> SaltPolicy {
        self.salt_policy
    }

    #[must_use]
    pub fn auxiliary(&self) -> &[(String, Vec<u8>)] {
        &self.auxiliary
    }

    #[must_use]
    pub fn accepts(&self, path: &str) -> bool {
        self.path_filter.as_ref().is_none_or(|filter| filter(path))
    }

    #[must_use]
    pub fn rewrite(&self, path: &str) -> String {
        match &self.path_rewrite {
            Some(rewrite) => rewrite(path),
            None => path.to_owned(),
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }
}

impl fmt::Debug for TranscodeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranscodeOptions")
            .field("iterations", &self.iterations)
            .field("salt_policy", &self.salt_policy)
            .field("path_filter", &self.path_filter.is_some())
            .field("path_rewrite", &self.path_rewrite.is_some())
            .field("auxiliary", &self.auxiliary.len())
            .field("cancel", &self.cancel)
            .finish()
    }
}
