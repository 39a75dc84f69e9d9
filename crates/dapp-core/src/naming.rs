//! Project name validation using npm package naming rules

/// Longest name npm accepts, including any `@scope/` prefix
pub const MAX_NAME_LENGTH: usize = 214;

/// Names that cannot be used for a new package
const BLOCKED_NAMES: &[&str] = &["node_modules", "favicon.ico"];

/// Node.js core modules; a package with one of these names would shadow it
const CORE_MODULE_NAMES: &[&str] = &[
    "assert", "buffer", "child_process", "cluster", "crypto", "dgram", "dns", "events", "fs",
    "http", "http2", "https", "net", "os", "path", "process", "querystring", "readline", "stream",
    "string_decoder", "timers", "tls", "tty", "url", "util", "v8", "vm", "worker_threads", "zlib",
];

/// Characters npm rejects even though they survive URI encoding
const SPECIAL_CHARS: &[char] = &['~', '\'', '!', '(', ')', '*'];

/// Result of validating a project name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameValidation {
    /// Every rule the name breaks, in rule order
    pub problems: Vec<String>,
}

impl NameValidation {
    pub fn is_valid(&self) -> bool {
        self.problems.is_empty()
    }

    /// First problem, suitable for inline prompt feedback
    pub fn first_problem(&self) -> Option<&str> {
        self.problems.first().map(String::as_str)
    }
}

/// Validate `name` as a package name for a new project.
///
/// All violations are collected. Scoped names (`@scope/pkg`) have the
/// character rules applied to each segment separately.
pub fn validate_project_name(name: &str) -> NameValidation {
    let mut problems = Vec::new();

    if name.trim().is_empty() {
        problems.push("name length must be greater than zero".to_string());
        return NameValidation { problems };
    }

    if name.trim() != name {
        problems.push("name cannot contain leading or trailing spaces".to_string());
    }

    let segments: Vec<&str> = match split_scoped(name) {
        Some((scope, package)) => vec![scope, package],
        None => vec![name],
    };

    for segment in &segments {
        if segment.starts_with('.') {
            problems.push("name cannot start with a period".to_string());
        }
        if segment.starts_with('_') {
            problems.push("name cannot start with an underscore".to_string());
        }
    }

    let lowered = name.to_lowercase();
    if BLOCKED_NAMES.contains(&lowered.as_str()) {
        problems.push(format!("{} is not a valid package name", name));
    }
    if CORE_MODULE_NAMES.contains(&lowered.as_str()) {
        problems.push(format!("{} is a core module name", name));
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        problems.push(format!(
            "name can no longer contain more than {} characters",
            MAX_NAME_LENGTH
        ));
    }

    if lowered != name {
        problems.push("name can no longer contain capital letters".to_string());
    }

    let package = segments.last().copied().unwrap_or(name);
    if package.contains(SPECIAL_CHARS) {
        problems.push("name can no longer contain special characters (\"~'!()*\")".to_string());
    }

    if !segments.iter().all(|s| is_url_safe(s)) {
        problems.push("name can only contain URL-friendly characters".to_string());
    }

    NameValidation { problems }
}

/// Split `@scope/package` into its two segments
fn split_scoped(name: &str) -> Option<(&str, &str)> {
    let rest = name.strip_prefix('@')?;
    let (scope, package) = rest.split_once('/')?;
    if scope.is_empty() || package.is_empty() || package.contains('/') {
        return None;
    }
    Some((scope, package))
}

/// True when URI component encoding would leave `segment` unchanged
fn is_url_safe(segment: &str) -> bool {
    segment.chars().all(|c| {
        c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '!' | '~' | '*' | '\'' | '(' | ')')
    })
}
