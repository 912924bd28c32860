use super::pattern::PatternSet;

/// How a line that qualifies through both emission paths is written out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Emit every qualifying line exactly once
    #[default]
    Collapse,
    /// Emit one copy per path that fires: an include hit, and the default path
    Repeat,
}

/// Outcome of checking one line against both pattern sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub include_hit: bool,
    pub exclude_hit: bool,
}

/// Include/exclude line filter
///
/// With [`DuplicatePolicy::Collapse`] a line is emitted when it matches an
/// include pattern, or when it passes by default. The default path is open
/// for a line matching no exclude pattern, unless the filter only has include
/// patterns (then the include set is a whitelist).
#[derive(Debug, Clone, Default)]
pub struct LineFilter {
    include: PatternSet,
    exclude: PatternSet,
    policy: DuplicatePolicy,
}

impl LineFilter {
    pub fn new(include: PatternSet, exclude: PatternSet) -> Self {
        Self {
            include,
            exclude,
            policy: DuplicatePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Check a single line against both pattern sets
    pub fn decide(&self, line: &str) -> Decision {
        Decision {
            include_hit: self.include.matches(line),
            exclude_hit: self.exclude.matches(line),
        }
    }

    /// Number of copies of the line to emit for a decision
    pub fn emit_count(&self, decision: &Decision) -> usize {
        match self.policy {
            DuplicatePolicy::Repeat => {
                usize::from(decision.include_hit) + usize::from(!decision.exclude_hit)
            }
            DuplicatePolicy::Collapse => {
                let default_path = !decision.exclude_hit
                    && (self.include.is_empty() || !self.exclude.is_empty());
                usize::from(decision.include_hit || default_path)
            }
        }
    }

    /// Filter lines, keeping the original order among emitted lines
    pub fn filter<I, S>(&self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut emitted = Vec::new();
        let mut total = 0usize;

        for line in lines {
            let line = line.as_ref();
            total += 1;

            let decision = self.decide(line);
            for _ in 0..self.emit_count(&decision) {
                emitted.push(line.to_string());
            }
        }

        tracing::debug!(
            total,
            emitted = emitted.len(),
            include = ?self.include.as_strs(),
            exclude = ?self.exclude.as_strs(),
            policy = ?self.policy,
            "Filtered log lines"
        );

        emitted
    }
}
