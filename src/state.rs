use crate::{collect::Removal, prove::Prove, random::Random};

/// Bounds and tallies the shrinking process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shrinks {
    /// Maximum number of hypothesis evaluations spent on shrinking before the
    /// last known counterexample is returned as is.
    ///
    /// Defaults to [`crate::SHRINKS`].
    pub limit: usize,
    /// Number of candidates that still falsified the hypothesis.
    pub accept: usize,
    /// Number of candidates on which the hypothesis held.
    pub reject: usize,
}

/// The state threaded through generation and shrinking.
#[derive(Clone, Debug)]
pub struct State {
    size: usize,
    seed: u64,
    random: Random,
    removal: Removal,
    shrinks: Shrinks,
    truncated: bool,
}

impl Shrinks {
    pub const fn new(limit: usize) -> Self {
        Self {
            limit,
            accept: 0,
            reject: 0,
        }
    }

    #[inline]
    pub const fn spent(&self) -> usize {
        self.accept.saturating_add(self.reject)
    }

    #[inline]
    pub const fn exhausted(&self) -> bool {
        self.spent() >= self.limit
    }
}

impl Default for Shrinks {
    fn default() -> Self {
        Self::new(crate::SHRINKS)
    }
}

impl State {
    pub fn new(seed: u64, limit: usize) -> Self {
        Self {
            size: 0,
            seed,
            random: Random::new(Some(seed)),
            removal: Removal::default(),
            shrinks: Shrinks::new(limit),
            truncated: false,
        }
    }

    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub const fn shrinks(&self) -> Shrinks {
        self.shrinks
    }

    #[inline]
    pub const fn removal(&self) -> Removal {
        self.removal
    }

    /// Whether shrinking was cut short because the budget ran out.
    #[inline]
    pub const fn truncated(&self) -> bool {
        self.truncated
    }

    #[inline]
    pub fn random(&mut self) -> &mut Random {
        &mut self.random
    }

    /// Sets the size that subsequent generation will be bounded by.
    #[inline]
    pub fn resize(&mut self, size: usize) -> &mut Self {
        self.size = size;
        self
    }

    /// Sets how sequence shrinkers pick the element to remove.
    #[inline]
    pub fn remove(&mut self, removal: Removal) -> &mut Self {
        self.removal = removal;
        self
    }

    /// Evaluates `hypothesis` on a shrink candidate.
    ///
    /// - `Some(true)` => the candidate still falsifies the hypothesis.
    /// - `Some(false)` => the hypothesis holds for the candidate.
    /// - `None` => the shrink budget is spent; the hypothesis was not called.
    pub fn falsifies<T: ?Sized, P: Prove, H: FnMut(&T) -> P>(
        &mut self,
        hypothesis: &mut H,
        item: &T,
    ) -> Option<bool> {
        if self.shrinks.exhausted() {
            self.truncated = true;
            return None;
        }
        if hypothesis(item).holds() {
            self.shrinks.reject += 1;
            Some(false)
        } else {
            self.shrinks.accept += 1;
            Some(true)
        }
    }
}
