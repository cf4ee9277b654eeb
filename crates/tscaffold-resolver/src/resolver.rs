//! Per-section dependency merge: base manifest, option defaults, unconditional
//! overrides, option-conditioned overrides, then registry version fill.

use indexmap::map::Entry;

use tscaffold_core::defaults::{DefaultDependencies, DefaultTable};
use tscaffold_core::dependency::{
    DependencyMap, DependencyOverrides, DependencySet, OverrideEntry, PackageRef, Section,
};
use tscaffold_core::version_registry::VersionRegistry;

use crate::unresolved::{UnresolvedReport, UnresolvedVersion};

/// Maximum nesting of `withOption` tables followed during default expansion.
pub const MAX_EXPANSION_DEPTH: usize = 8;

/// The output of dependency resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub dependencies: DependencySet,
    pub unresolved: UnresolvedReport,
}

/// Merges dependency sources using a default table and a version registry.
#[derive(Debug, Clone, Copy)]
pub struct DependencyResolver<'a> {
    defaults: &'a DefaultTable,
    registry: &'a VersionRegistry,
}

impl<'a> DependencyResolver<'a> {
    pub fn new(defaults: &'a DefaultTable, registry: &'a VersionRegistry) -> Self {
        Self { defaults, registry }
    }
}

impl DependencyResolver<'static> {
    /// A resolver over the built-in default table and version registry.
    pub fn builtin() -> Self {
        Self::new(DefaultTable::builtin(), VersionRegistry::builtin())
    }
}

impl DependencyResolver<'_> {
    /// Resolve all three sections.
    ///
    /// `options` is the ordered list of selected options; the order decides
    /// which conditioned override wins when several target the same package.
    pub fn resolve(
        &self,
        options: &[String],
        base: &DependencySet,
        overrides: Option<&DependencyOverrides>,
    ) -> Resolution {
        let mut resolution = Resolution::default();
        for section in Section::ALL {
            let (map, unresolved) =
                self.resolve_section(section, options, base.get(section), overrides);
            *resolution.dependencies.get_mut(section) = map;
            resolution.unresolved.extend(unresolved);
        }
        resolution
    }

    /// Resolve a single section. Sections never influence each other.
    pub fn resolve_section(
        &self,
        section: Section,
        options: &[String],
        base: &DependencyMap,
        overrides: Option<&DependencyOverrides>,
    ) -> (DependencyMap, UnresolvedReport) {
        let mut map = base.clone();

        let mut path = Vec::new();
        for option in options {
            if let Some(node) = self.defaults.get(option) {
                path.push(option.as_str());
                expand_defaults(node, section, options, &mut path, &mut map);
                path.pop();
            }
        }

        if let Some(overrides) = overrides.filter(|o| !o.is_empty()) {
            let rules = overrides.section(section);
            for rule in rules {
                if let OverrideEntry::Plain(package) = rule {
                    apply_override(&mut map, package);
                }
            }
            for option in options {
                for rule in rules {
                    if let OverrideEntry::Conditioned {
                        option: condition,
                        packages,
                    } = rule
                    {
                        if condition == option {
                            for package in packages {
                                apply_override(&mut map, package);
                            }
                        }
                    }
                }
            }
        }

        let unresolved = self.fill_versions(section, &mut map);
        (map, unresolved)
    }

    fn fill_versions(&self, section: Section, map: &mut DependencyMap) -> UnresolvedReport {
        let mut report = UnresolvedReport::new();
        for (name, version) in map.iter_mut() {
            if !version.is_empty() {
                continue;
            }
            match self.registry.get(name) {
                Some(latest) => *version = latest.to_string(),
                None => {
                    tracing::warn!("no version known for '{name}' in {section}");
                    report.add(UnresolvedVersion {
                        section,
                        name: name.clone(),
                    });
                }
            }
        }
        report
    }
}

/// Append the packages of `node` (and of its selected `withOption` children)
/// that are not in `map` yet, with an empty version.
fn expand_defaults<'o>(
    node: &DefaultDependencies,
    section: Section,
    options: &'o [String],
    path: &mut Vec<&'o str>,
    map: &mut DependencyMap,
) {
    for name in node.packages(section) {
        if !map.contains_key(name) {
            map.insert(name.clone(), String::new());
        }
    }

    if node.with_option.is_empty() {
        return;
    }
    if path.len() >= MAX_EXPANSION_DEPTH {
        tracing::warn!(
            "default dependency expansion stopped at depth {} ({})",
            path.len(),
            path.join(" -> ")
        );
        return;
    }
    for option in options {
        let Some(nested) = node.with_option.get(option) else {
            continue;
        };
        if path.contains(&option.as_str()) {
            tracing::warn!(
                "skipping withOption '{option}' already on expansion path {}",
                path.join(" -> ")
            );
            continue;
        }
        path.push(option);
        expand_defaults(nested, section, options, path, map);
        path.pop();
    }
}

/// Add or replace one package. A reference without a version leaves an empty
/// version, to be filled from the registry.
fn apply_override(map: &mut DependencyMap, package: &PackageRef) {
    let version = package.version_or_empty().to_string();
    match map.entry(package.name.clone()) {
        Entry::Occupied(mut entry) => {
            tracing::debug!("override {} {} -> {version:?}", package.name, entry.get());
            entry.insert(version);
        }
        Entry::Vacant(entry) => {
            entry.insert(version);
        }
    }
}
