//! Reporting of packages whose version could not be determined.

use std::fmt;

use tscaffold_core::dependency::Section;

/// All packages left without a version after resolution.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UnresolvedReport {
    pub entries: Vec<UnresolvedVersion>,
}

/// A package that has neither an explicit version nor a registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedVersion {
    pub section: Section,
    pub name: String,
}

impl UnresolvedReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: UnresolvedVersion) {
        self.entries.push(entry);
    }

    pub fn extend(&mut self, other: UnresolvedReport) {
        self.entries.extend(other.entries);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Names of the unresolved packages, in report order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }
}

impl fmt::Display for UnresolvedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "All versions resolved.");
        }
        writeln!(f, "Packages without a known version ({}):", self.entries.len())?;
        for e in &self.entries {
            writeln!(f, "  {e}")?;
        }
        Ok(())
    }
}

impl fmt::Display for UnresolvedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report() {
        let report = UnresolvedReport::new();
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);
        assert_eq!(report.to_string(), "All versions resolved.");
    }

    #[test]
    fn report_with_entries() {
        let mut report = UnresolvedReport::new();
        report.add(UnresolvedVersion {
            section: Section::DevDependencies,
            name: "left-pad".to_string(),
        });
        assert!(!report.is_empty());
        assert_eq!(report.names(), vec!["left-pad"]);
        let s = report.to_string();
        assert!(s.contains("Packages without a known version (1)"));
        assert!(s.contains("left-pad (devDependencies)"));
    }
}
