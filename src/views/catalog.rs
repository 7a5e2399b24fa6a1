//! Tool registry and the authoritative route table built from it.

use serde::Serialize;

use super::loader::LoaderKind;
use super::pages;
use crate::config::BasePath;
use crate::router::{HOME_PATH, Route, RouteTable, RouteTableError};

pub const HOME_NAME: &str = "home";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Format,
    Generate,
    Encode,
    Inspect,
    Docker,
    Info,
}

impl Category {
    pub const ALL: [Self; 6] = [Self::Format, Self::Generate, Self::Encode, Self::Inspect, Self::Docker, Self::Info];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Format => "Formatters",
            Self::Generate => "Generators",
            Self::Encode => "Encoders & Decoders",
            Self::Inspect => "Inspectors & Testers",
            Self::Docker => "Docker",
            Self::Info => "Info",
        }
    }
}

/// Static description of one tool page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSpec {
    pub name: &'static str,
    pub path: &'static str,
    /// View component identifier; names the `<component>.html` fragment.
    pub component: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub category: Category,
}

const fn tool(
    path: &'static str,
    name: &'static str,
    component: &'static str,
    title: &'static str,
    summary: &'static str,
    category: Category,
) -> ToolSpec {
    ToolSpec { name, path, component, title, summary, category }
}

/// Every deferred route, in registration order.
pub const TOOLS: &[ToolSpec] = &[
    tool(
        "/json-formatter",
        "json-formatter",
        "JsonFormatterView",
        "JSON Formatter",
        "Pretty-print, minify and validate JSON documents.",
        Category::Format,
    ),
    tool(
        "/xml-formatter",
        "xml-formatter",
        "XmlFormatterView",
        "XML Formatter",
        "Indent and validate XML markup.",
        Category::Format,
    ),
    tool(
        "/diff-checker",
        "diff-checker",
        "DiffCheckerView",
        "Diff Checker",
        "Compare two texts line by line.",
        Category::Inspect,
    ),
    tool(
        "/hash-generator",
        "hash-generator",
        "HashGeneratorView",
        "Hash Generator",
        "Compute MD5, SHA-1 and SHA-2 digests of text.",
        Category::Generate,
    ),
    tool(
        "/password-generator",
        "password-generator",
        "PasswordGeneratorView",
        "Password Generator",
        "Generate random passwords with configurable character sets.",
        Category::Generate,
    ),
    tool(
        "/stack-trace",
        "stack-trace",
        "StackTraceAnalyzerView",
        "Stack Trace Analyzer",
        "Highlight frames and causes in pasted stack traces.",
        Category::Inspect,
    ),
    tool(
        "/yaml-properties",
        "yaml-properties",
        "YamlPropertiesView",
        "YAML / Properties Converter",
        "Convert between YAML and .properties files.",
        Category::Format,
    ),
    tool(
        "/case-converter",
        "case-converter",
        "CaseConverterView",
        "Case Converter",
        "Switch text between camelCase, snake_case, kebab-case and more.",
        Category::Format,
    ),
    tool(
        "/qr-generator",
        "qr-generator",
        "QrGeneratorView",
        "QR Code Generator",
        "Render text or URLs as QR codes.",
        Category::Generate,
    ),
    tool(
        "/markdown-preview",
        "markdown-preview",
        "MarkdownPreviewView",
        "Markdown Preview",
        "Render Markdown side by side with its source.",
        Category::Format,
    ),
    tool(
        "/http-request",
        "http-request",
        "HttpRequestView",
        "HTTP Request",
        "Compose and send HTTP requests.",
        Category::Inspect,
    ),
    tool(
        "/base64",
        "base64",
        "Base64View",
        "Base64 Encoder / Decoder",
        "Encode and decode Base64 text.",
        Category::Encode,
    ),
    tool(
        "/url-encoder",
        "url-encoder",
        "UrlEncoderView",
        "URL Encoder / Decoder",
        "Percent-encode and decode URL components.",
        Category::Encode,
    ),
    tool(
        "/sql-formatter",
        "sql-formatter",
        "SqlFormatterView",
        "SQL Formatter",
        "Indent and uppercase SQL statements.",
        Category::Format,
    ),
    tool(
        "/in-clause",
        "in-clause",
        "InClauseView",
        "SQL IN Clause Builder",
        "Turn a list of values into a quoted SQL IN clause.",
        Category::Format,
    ),
    tool(
        "/jwt-decoder",
        "jwt-decoder",
        "JwtDecoderView",
        "JWT Decoder",
        "Decode JWT headers and claims.",
        Category::Encode,
    ),
    tool(
        "/uuid-generator",
        "uuid-generator",
        "UuidGeneratorView",
        "UUID Generator",
        "Generate random UUIDs in bulk.",
        Category::Generate,
    ),
    tool(
        "/regex-tester",
        "regex-tester",
        "RegexTesterView",
        "Regex Tester",
        "Test regular expressions against sample text.",
        Category::Inspect,
    ),
    tool(
        "/cron-expression",
        "cron-expression",
        "CronExpressionView",
        "Cron Expression",
        "Explain cron expressions and list upcoming runs.",
        Category::Inspect,
    ),
    tool(
        "/timestamp",
        "timestamp",
        "TimestampView",
        "Timestamp Converter",
        "Convert between Unix timestamps and dates.",
        Category::Encode,
    ),
    tool(
        "/docker-compose-converter",
        "docker-compose-converter",
        "DockerComposeConverterView",
        "Docker Compose Converter",
        "Convert Compose files between schema versions.",
        Category::Docker,
    ),
    tool(
        "/docker-command-builder",
        "docker-command-builder",
        "DockerCommandBuilderView",
        "Docker Command Builder",
        "Assemble docker CLI commands from a form.",
        Category::Docker,
    ),
    tool(
        "/dockerfile-generator",
        "dockerfile-generator",
        "DockerfileGeneratorView",
        "Dockerfile Generator",
        "Generate Dockerfiles for common stacks.",
        Category::Docker,
    ),
    tool(
        "/docker-compose-validator",
        "docker-compose-validator",
        "DockerComposeValidatorView",
        "Docker Compose Validator",
        "Check Compose files for structural mistakes.",
        Category::Docker,
    ),
    tool(
        "/docker-run-to-compose",
        "docker-run-to-compose",
        "DockerRunToComposeView",
        "Docker Run to Compose",
        "Translate docker run commands into Compose services.",
        Category::Docker,
    ),
    tool("/about", "about", "AboutView", "About", "What this site is and how it works.", Category::Info),
];

/// Look up a tool by route name.
#[must_use]
pub fn find(name: &str) -> Option<&'static ToolSpec> {
    TOOLS.iter().find(|tool| tool.name == name)
}

/// Tools in one category, in registration order.
pub fn in_category(category: Category) -> impl Iterator<Item = &'static ToolSpec> {
    TOOLS.iter().filter(move |tool| tool.category == category)
}

/// Build the route table: home bound eagerly, every tool deferred through
/// `loaders`.
///
/// # Errors
///
/// Propagates table validation errors.
pub fn route_table(loaders: &LoaderKind, base: &BasePath) -> Result<RouteTable, RouteTableError> {
    let mut routes = Vec::with_capacity(TOOLS.len() + 1);
    routes.push(Route::eager(HOME_PATH, HOME_NAME, pages::home(base)));
    routes.extend(TOOLS.iter().map(|tool| Route::deferred(tool.path, tool.name, loaders.loader_for(tool))));
    RouteTable::new(routes)
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
