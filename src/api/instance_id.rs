/// Generator of per-instance element ids (`prefix-1`, `prefix-2`, ...).
///
/// Clip paths and label paths reference each other by id inside one SVG
/// document, so every series instance needs its own. The caller owns the
/// generator and threads it through series construction; there is no
/// process-wide counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceIds {
    prefix: String,
    issued: u64,
}

impl InstanceIds {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            issued: 0,
        }
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.issued
    }

    pub fn next_id(&mut self) -> String {
        self.issued += 1;
        format!("{}-{}", self.prefix, self.issued)
    }
}

impl Default for InstanceIds {
    fn default() -> Self {
        Self::new("chart")
    }
}

#[cfg(test)]
mod tests {
    use super::InstanceIds;

    #[test]
    fn ids_are_sequential_per_generator() {
        let mut ids = InstanceIds::new("clipPath");
        assert_eq!(ids.next_id(), "clipPath-1");
        assert_eq!(ids.next_id(), "clipPath-2");

        let mut other = InstanceIds::new("clipPath");
        assert_eq!(other.next_id(), "clipPath-1");
        assert_eq!(ids.issued(), 2);
    }
}
