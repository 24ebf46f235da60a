//! Layer boundary lint for the exercise tracker backend.
//!
//! The backend keeps its business rules in `domain` and talks to the outside
//! world through `inbound` (HTTP) and `outbound` (storage) adapters. This
//! crate parses every source file under those three roots with `syn` and
//! reports imports that cross a boundary:
//!
//! - `domain` may not reach into either adapter layer, nor name web or
//!   database crates.
//! - `inbound` may not reach into `outbound` or name database crates.
//! - `outbound` may not reach into `inbound` or name web crates.
//!
//! Run it with `cargo run -p architecture-lint` from anywhere in the
//! workspace.

use std::collections::BTreeSet;
use std::fs;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use syn::punctuated::Punctuated;
use syn::visit::Visit;

/// Name the backend library is imported under from integration code.
const BACKEND_CRATE: &str = "exercise_tracker";

const WEB_CRATES: &[&str] = &[
    "actix",
    "actix_cors",
    "actix_files",
    "actix_http",
    "actix_service",
    "actix_web",
    "utoipa",
    "utoipa_swagger_ui",
];

const DATABASE_CRATES: &[&str] = &[
    "bb8",
    "diesel",
    "diesel_async",
    "diesel_migrations",
    "pg_embedded_setup_unpriv",
    "postgres",
];

/// One import that crosses a layer boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Offending file, relative to `backend/src`.
    pub file: Utf8PathBuf,
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.file, self.message)
    }
}

/// Failures reported by [`lint_backend_sources`] and [`lint_sources`].
#[derive(Debug, thiserror::Error)]
pub enum ArchitectureLintError {
    #[error("could not read backend sources: {0}")]
    Io(#[from] io::Error),
    #[error("cannot lint {file}: {message}")]
    Parse { file: Utf8PathBuf, message: String },
    #[error("{}", render_violations(.0))]
    Violations(Vec<Violation>),
}

fn render_violations(violations: &[Violation]) -> String {
    let mut rendered = String::from("layer boundary violations:");
    for violation in violations {
        rendered.push_str("\n- ");
        rendered.push_str(&violation.to_string());
    }
    rendered
}

/// A source file queued for linting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintSource {
    /// Path relative to `backend/src`; its first component picks the layer.
    pub file: Utf8PathBuf,
    pub contents: String,
}

impl LintSource {
    /// Build a source from a relative path and its text.
    pub fn new(file: impl Into<Utf8PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            contents: contents.into(),
        }
    }
}

/// Lint `backend_dir/src/{domain,inbound,outbound}`.
///
/// # Errors
///
/// Returns [`ArchitectureLintError::Violations`] listing every offending
/// import, or an I/O or parse error when the tree cannot be read.
pub fn lint_backend_sources(backend_dir: &Utf8Path) -> Result<(), ArchitectureLintError> {
    let src_dir = backend_dir.join("src");
    let mut sources = Vec::new();
    for layer in Layer::ALL {
        let dir = src_dir.join(layer.root());
        if dir.is_dir() {
            collect_sources(&src_dir, &dir, &mut sources)?;
        }
    }
    lint_sources(&sources)
}

/// Lint in-memory sources.
///
/// # Errors
///
/// Fails when a path sits outside the three layers, a file does not parse,
/// or any boundary is crossed.
pub fn lint_sources(sources: &[LintSource]) -> Result<(), ArchitectureLintError> {
    let mut violations = Vec::new();
    for source in sources {
        let layer = Layer::of(&source.file).ok_or_else(|| ArchitectureLintError::Parse {
            file: source.file.clone(),
            message: "path is outside domain, inbound and outbound".to_owned(),
        })?;
        let parsed =
            syn::parse_file(&source.contents).map_err(|err| ArchitectureLintError::Parse {
                file: source.file.clone(),
                message: err.to_string(),
            })?;
        violations.extend(layer.check(&source.file, &parsed));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ArchitectureLintError::Violations(violations))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Domain,
    Inbound,
    Outbound,
}

impl Layer {
    const ALL: [Self; 3] = [Self::Domain, Self::Inbound, Self::Outbound];

    const fn root(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
        }
    }

    fn of(relative: &Utf8Path) -> Option<Self> {
        let first = relative.components().next()?.as_str();
        Self::ALL.into_iter().find(|layer| layer.root() == first)
    }

    const fn forbidden_layers(self) -> &'static [Self] {
        match self {
            Self::Domain => &[Self::Inbound, Self::Outbound],
            Self::Inbound => &[Self::Outbound],
            Self::Outbound => &[Self::Inbound],
        }
    }

    fn forbids_crate(self, name: &str) -> bool {
        match self {
            Self::Domain => WEB_CRATES.contains(&name) || DATABASE_CRATES.contains(&name),
            Self::Inbound => DATABASE_CRATES.contains(&name),
            Self::Outbound => WEB_CRATES.contains(&name),
        }
    }

    fn check(self, file: &Utf8Path, parsed: &syn::File) -> Vec<Violation> {
        let mut collector = PathCollector::default();
        collector.visit_file(parsed);

        let mut messages = BTreeSet::new();
        for segments in &collector.paths {
            match classify(segments) {
                Some(Target::Module(root)) => {
                    if let Some(layer) = self
                        .forbidden_layers()
                        .iter()
                        .find(|layer| layer.root() == root)
                    {
                        messages.insert(format!(
                            "{} code must not import crate::{}",
                            self.root(),
                            layer.root()
                        ));
                    }
                }
                Some(Target::Crate(name)) if self.forbids_crate(name) => {
                    messages.insert(format!(
                        "{} code must not use the `{name}` crate",
                        self.root()
                    ));
                }
                Some(Target::Crate(_)) | None => {}
            }
        }

        messages
            .into_iter()
            .map(|message| Violation {
                file: file.to_owned(),
                message,
            })
            .collect()
    }
}

enum Target<'a> {
    Module(&'a str),
    Crate(&'a str),
}

fn is_relative(segment: &str) -> bool {
    matches!(segment, "crate" | "self" | "super")
}

/// Resolve a path to the backend module or external crate it names.
fn classify(segments: &[String]) -> Option<Target<'_>> {
    let first = segments.first()?.as_str();
    if Layer::ALL.iter().any(|layer| layer.root() == first) {
        return Some(Target::Module(first));
    }
    if is_relative(first) {
        return segments
            .iter()
            .map(String::as_str)
            .find(|segment| !is_relative(segment))
            .map(Target::Module);
    }
    if first == BACKEND_CRATE {
        return segments.get(1).map(|segment| Target::Module(segment.as_str()));
    }
    Some(Target::Crate(first))
}

#[derive(Default)]
struct PathCollector {
    paths: BTreeSet<Vec<String>>,
}

impl PathCollector {
    fn record_use_tree(&mut self, tree: &syn::UseTree, mut prefix: Vec<String>) {
        match tree {
            syn::UseTree::Path(path) => {
                prefix.push(path.ident.to_string());
                self.record_use_tree(&path.tree, prefix);
            }
            syn::UseTree::Name(name) => {
                prefix.push(name.ident.to_string());
                self.paths.insert(prefix);
            }
            syn::UseTree::Rename(rename) => {
                prefix.push(rename.ident.to_string());
                self.paths.insert(prefix);
            }
            syn::UseTree::Glob(_) => {
                prefix.push("*".to_owned());
                self.paths.insert(prefix);
            }
            syn::UseTree::Group(group) => {
                for item in &group.items {
                    self.record_use_tree(item, prefix.clone());
                }
            }
        }
    }
}

impl<'ast> Visit<'ast> for PathCollector {
    fn visit_path(&mut self, node: &'ast syn::Path) {
        let segments: Vec<String> = node
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect();
        if !segments.is_empty() {
            self.paths.insert(segments);
        }
        syn::visit::visit_path(self, node);
    }

    fn visit_item_use(&mut self, node: &'ast syn::ItemUse) {
        self.record_use_tree(&node.tree, Vec::new());
    }

    // `derive(...)` arguments stay as raw tokens in the syntax tree.
    fn visit_attribute(&mut self, node: &'ast syn::Attribute) {
        if node.path().is_ident("derive") {
            if let Ok(derives) = node.parse_args_with(
                Punctuated::<syn::Path, syn::Token![,]>::parse_terminated,
            ) {
                for path in &derives {
                    self.visit_path(path);
                }
            }
        }
        syn::visit::visit_attribute(self, node);
    }
}

fn collect_sources(
    src_root: &Utf8Path,
    dir: &Utf8Path,
    sources: &mut Vec<LintSource>,
) -> Result<(), ArchitectureLintError> {
    for entry in dir.read_dir_utf8()? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            collect_sources(src_root, path, sources)?;
            continue;
        }
        if path.extension() != Some("rs") {
            continue;
        }

        let relative = path
            .strip_prefix(src_root)
            .map_err(|err| ArchitectureLintError::Parse {
                file: path.to_owned(),
                message: err.to_string(),
            })?;
        sources.push(LintSource::new(relative, fs::read_to_string(path)?));
    }
    Ok(())
}
