//! Manifest migration.
//!
//! Converts a legacy manifest into the standard form: namespaced package
//! name, bumped versions, alias tables converted to dependency maps,
//! inventory-driven dependency injection, fixed engine declarations. The
//! input is never mutated; migration produces a fresh manifest.

use std::collections::BTreeMap;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::core::alias::AliasTable;
use crate::core::location::LegacyLocation;
use crate::core::manifest::{Manifest, SpmSection};
use crate::ops::inventory::SourceInventory;
use crate::util::diagnostic::{suggestions, Diagnostic};
use crate::util::version::bump_minor;

/// Fixed dependency versions injected during migration.
const JQUERY_VERSION: &str = "1.7.2";
const HANDLEBARS_VERSION: &str = "1.3.0";
const EXPECT_JS_VERSION: &str = "0.3.1";
const SINON_VERSION: &str = "1.6.0";

/// Runtime-loader engine declarations for migrated packages.
const ENGINES: &[(&str, &str)] = &[("seajs", "2.2.1"), ("seajs-text", "1.1.0")];

/// Build argument excluding jquery from the bundle.
const IGNORE_JQUERY: &str = "--ignore jquery";

/// Policy knobs for the observed migration variants.
#[derive(Debug, Clone)]
pub struct MigrationPolicy {
    /// Minor-bump the package version and derived dependency versions.
    pub bump_versions: bool,

    /// Route dev aliases into `dependencies` instead of
    /// `devDependencies`, using the merged alias table.
    pub merge_dev_aliases: bool,
}

impl Default for MigrationPolicy {
    fn default() -> Self {
        MigrationPolicy {
            bump_versions: true,
            merge_dev_aliases: false,
        }
    }
}

/// Error during manifest migration.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum MigrateError {
    /// The manifest lacks the legacy `family` marker field.
    #[error("`{name}` is not an spm 2.x package (missing `family` field)")]
    #[diagnostic(code(ferry::migrate::not_legacy))]
    NotLegacyPackage { name: String },

    #[error("`{name}` declares no output entry files")]
    #[diagnostic(code(ferry::migrate::no_output))]
    NoOutputDeclared { name: String },

    #[error("alias `{alias}` location `{location}` has no version segment")]
    #[diagnostic(code(ferry::migrate::missing_version))]
    MissingVersion { alias: String, location: String },

    #[error("cannot bump invalid version `{version}`")]
    #[diagnostic(code(ferry::migrate::invalid_version))]
    InvalidVersion { version: String },
}

impl MigrateError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            MigrateError::NotLegacyPackage { name } => {
                Diagnostic::error(format!("`{}` is not an spm 2.x package", name))
                    .with_context("migration requires the legacy `family` field in package.json")
                    .with_suggestion(suggestions::NOT_LEGACY)
            }

            MigrateError::NoOutputDeclared { name } => {
                Diagnostic::error(format!("`{}` declares no output entry files", name))
                    .with_suggestion(suggestions::NO_OUTPUT)
            }

            MigrateError::MissingVersion { alias, location } => {
                Diagnostic::error(format!("alias `{}` cannot be migrated", alias))
                    .with_context(format!("its location `{}` has no version segment", location))
                    .with_suggestion(suggestions::BAD_LOCATION)
            }

            MigrateError::InvalidVersion { version } => {
                Diagnostic::error(format!("cannot bump invalid version `{}`", version))
                    .with_suggestion(suggestions::BAD_LOCATION)
            }
        }
    }
}

/// Migrate a legacy manifest.
///
/// Fails when the manifest lacks the legacy marker field; the whole
/// migration run aborts.
pub fn migrate_manifest(
    manifest: &Manifest,
    inventory: &SourceInventory,
    policy: &MigrationPolicy,
) -> Result<Manifest, MigrateError> {
    let family = manifest
        .family
        .as_deref()
        .ok_or_else(|| MigrateError::NotLegacyPackage {
            name: manifest.name.clone(),
        })?;

    let name = format!("{}-{}", family, manifest.name);

    let version = if policy.bump_versions {
        bump_minor(&manifest.version).ok_or_else(|| MigrateError::InvalidVersion {
            version: manifest.version.clone(),
        })?
    } else {
        manifest.version.clone()
    };

    // Only the first declared output becomes the entry point.
    let entry = manifest
        .spm
        .output
        .first()
        .ok_or_else(|| MigrateError::NoOutputDeclared {
            name: manifest.name.clone(),
        })?;
    let main = format!("src/{}", entry);

    let mut dependencies;
    let mut dev_dependencies;
    if policy.merge_dev_aliases {
        let merged = AliasTable::from_manifest(manifest);
        dependencies = convert_aliases(merged.iter(), policy)?;
        dev_dependencies = BTreeMap::new();
    } else {
        dependencies = convert_aliases(
            manifest.spm.alias.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            policy,
        )?;
        dev_dependencies = match manifest.spm.dev_alias {
            Some(ref dev) => {
                convert_aliases(dev.iter().map(|(k, v)| (k.as_str(), v.as_str())), policy)?
            }
            None => BTreeMap::new(),
        };
    }

    // Templating packages depend on the runtime even when no alias says so.
    if !dependencies.contains_key("handlebars-runtime") && inventory.contains_ext("handlebars") {
        dependencies.insert(
            "handlebars-runtime".to_string(),
            HANDLEBARS_VERSION.to_string(),
        );
    }

    dev_dependencies.insert("expect.js".to_string(), EXPECT_JS_VERSION.to_string());
    if inventory.contains("sinon") {
        dev_dependencies.insert("sinon".to_string(), SINON_VERSION.to_string());
    }

    let build_args = if inventory.contains("$") {
        Some(IGNORE_JQUERY.to_string())
    } else {
        manifest.spm.build_args.clone()
    };

    let engines = ENGINES
        .iter()
        .map(|(name, version)| (name.to_string(), version.to_string()))
        .collect();

    Ok(Manifest {
        name,
        family: None,
        version,
        tests: None,
        spm: SpmSection {
            alias: BTreeMap::new(),
            dev_alias: None,
            output: Vec::new(),
            main: Some(main),
            dependencies: Some(dependencies),
            dev_dependencies: Some(dev_dependencies),
            engines: Some(engines),
            build_args,
            extra: manifest.spm.extra.clone(),
        },
        extra: manifest.extra.clone(),
    })
}

/// Convert alias entries into a dependency version map.
fn convert_aliases<'a>(
    entries: impl Iterator<Item = (&'a str, &'a str)>,
    policy: &MigrationPolicy,
) -> Result<BTreeMap<String, String>, MigrateError> {
    let mut deps = BTreeMap::new();

    for (alias, raw) in entries {
        if alias == "$" && raw == "$" {
            deps.insert("jquery".to_string(), JQUERY_VERSION.to_string());
            continue;
        }

        let location = LegacyLocation::parse(raw);

        if location.is_handlebars_runtime() {
            deps.insert(
                "handlebars-runtime".to_string(),
                HANDLEBARS_VERSION.to_string(),
            );
            continue;
        }

        let name = location.canonical_name();
        if name == "handlebars" {
            deps.insert("handlebars".to_string(), HANDLEBARS_VERSION.to_string());
            continue;
        }

        let version = location
            .version()
            .ok_or_else(|| MigrateError::MissingVersion {
                alias: alias.to_string(),
                location: raw.to_string(),
            })?;
        let version = if policy.bump_versions {
            bump_minor(version).ok_or_else(|| MigrateError::InvalidVersion {
                version: version.to_string(),
            })?
        } else {
            version.to_string()
        };

        deps.insert(name, version);
    }

    Ok(deps)
}
