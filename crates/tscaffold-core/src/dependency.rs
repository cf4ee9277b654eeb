use indexmap::IndexMap;
use serde::Deserialize;
use std::fmt;

/// Ordered `name -> version` map for one `package.json` dependency section.
///
/// Insertion order is preserved; replacing a version keeps the original
/// position of the entry.
pub type DependencyMap = IndexMap<String, String>;

/// One of the three dependency groupings of a `package.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Dependencies,
    DevDependencies,
    PeerDependencies,
}

impl Section {
    /// All sections in the order they appear in a `package.json`.
    pub const ALL: [Section; 3] = [
        Section::Dependencies,
        Section::DevDependencies,
        Section::PeerDependencies,
    ];

    /// The `package.json` key of this section.
    pub fn key(self) -> &'static str {
        match self {
            Section::Dependencies => "dependencies",
            Section::DevDependencies => "devDependencies",
            Section::PeerDependencies => "peerDependencies",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A reference to an npm package with an optional version constraint.
///
/// Deserializes from either a bare name (`"eslint"`) or a table
/// (`{ package = "eslint", version = "^9.0.0" }`). An empty version string
/// is treated the same as no version.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawPackageRef")]
pub struct PackageRef {
    pub name: String,
    pub version: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPackageRef {
    Name(String),
    Detailed {
        package: String,
        #[serde(default)]
        version: Option<String>,
    },
}

impl From<RawPackageRef> for PackageRef {
    fn from(raw: RawPackageRef) -> Self {
        match raw {
            RawPackageRef::Name(name) => Self::new(name),
            RawPackageRef::Detailed { package, version } => Self {
                name: package,
                version: version.filter(|v| !v.is_empty()),
            },
        }
    }
}

impl PackageRef {
    /// A reference without a version; the version is filled in later.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
        }
    }

    /// A reference pinned to an explicit version.
    pub fn with_version(name: impl Into<String>, version: impl Into<String>) -> Self {
        let version = version.into();
        Self {
            name: name.into(),
            version: (!version.is_empty()).then_some(version),
        }
    }

    /// The version as stored in a working map: empty when unknown.
    pub fn version_or_empty(&self) -> &str {
        self.version.as_deref().unwrap_or("")
    }
}

/// A single override rule for one dependency section.
///
/// `Conditioned` is tried first during deserialization, so a table carrying
/// `option` and `packages` is always a group, never a plain package.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OverrideEntry {
    /// Applied only when `option` is among the selected options.
    Conditioned {
        option: String,
        packages: Vec<PackageRef>,
    },
    /// Always applied.
    Plain(PackageRef),
}

/// Template-declared dependency overrides, per section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyOverrides {
    #[serde(default)]
    pub dependencies: Vec<OverrideEntry>,
    #[serde(default)]
    pub dev_dependencies: Vec<OverrideEntry>,
    #[serde(default)]
    pub peer_dependencies: Vec<OverrideEntry>,
}

impl DependencyOverrides {
    /// Override rules for one section.
    pub fn section(&self, section: Section) -> &[OverrideEntry] {
        match section {
            Section::Dependencies => &self.dependencies,
            Section::DevDependencies => &self.dev_dependencies,
            Section::PeerDependencies => &self.peer_dependencies,
        }
    }

    /// Returns `true` if no section carries any rule.
    pub fn is_empty(&self) -> bool {
        Section::ALL.iter().all(|s| self.section(*s).is_empty())
    }
}

/// The three dependency maps of a `package.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    pub dependencies: DependencyMap,
    pub dev_dependencies: DependencyMap,
    pub peer_dependencies: DependencyMap,
}

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, section: Section) -> &DependencyMap {
        match section {
            Section::Dependencies => &self.dependencies,
            Section::DevDependencies => &self.dev_dependencies,
            Section::PeerDependencies => &self.peer_dependencies,
        }
    }

    pub fn get_mut(&mut self, section: Section) -> &mut DependencyMap {
        match section {
            Section::Dependencies => &mut self.dependencies,
            Section::DevDependencies => &mut self.dev_dependencies,
            Section::PeerDependencies => &mut self.peer_dependencies,
        }
    }

    /// Builder-style helper that inserts one entry into `section`.
    pub fn with(
        mut self,
        section: Section,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        self.get_mut(section).insert(name.into(), version.into());
        self
    }

    /// Total number of entries across all sections.
    pub fn len(&self) -> usize {
        Section::ALL.iter().map(|s| self.get(*s).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
