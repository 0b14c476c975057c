use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::cli::OutlineArgs;

pub fn show(args: OutlineArgs) -> anyhow::Result<()> {
    let outline = load(args.outline.as_deref())?;
    let yaml = serde_yaml::to_string(&outline).context("serialize outline yaml")?;
    print!("{yaml}");
    Ok(())
}

/// Loads the outline at `path` (or the built-in one) and validates it.
pub fn load(path: Option<&str>) -> anyhow::Result<Outline> {
    let outline = match path {
        Some(path) => Outline::from_yaml_path(Path::new(path))?,
        None => Outline::builtin(),
    };
    outline.validate().context("validate outline")?;
    Ok(outline)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Directory slug, e.g. `1-fundamentals`.
    pub part: String,
    pub title: String,
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Directory slug, e.g. `1-getting-started`.
    pub chapter: String,
    pub title: String,
    pub lessons: Vec<String>,
}

/// A lesson name paired with its 1-based position in the chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lesson<'a> {
    pub position: usize,
    pub name: &'a str,
}

impl Lesson<'_> {
    pub fn slug(&self) -> String {
        format!("{}-{}", self.position, self.name)
    }

    pub fn title(&self) -> String {
        lesson_title(self.name)
    }
}

impl Chapter {
    pub fn lessons(&self) -> impl Iterator<Item = Lesson<'_>> {
        self.lessons
            .iter()
            .enumerate()
            .map(|(idx, name)| Lesson {
                position: idx + 1,
                name: name.as_str(),
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutlineSummary {
    pub parts: usize,
    pub chapters: usize,
    pub lessons: usize,
}

impl fmt::Display for OutlineSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total parts: {}", self.parts)?;
        writeln!(f, "Total chapters: {}", self.chapters)?;
        write!(f, "Total lessons: {}", self.lessons)
    }
}

impl Outline {
    pub fn from_yaml_path(path: &Path) -> anyhow::Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("read outline: {}", path.display()))?;
        serde_yaml::from_str(&yaml).with_context(|| format!("parse outline: {}", path.display()))
    }

    /// Totals straight from the definition, regardless of what exists on disk.
    pub fn summary(&self) -> OutlineSummary {
        OutlineSummary {
            parts: self.parts.len(),
            chapters: self.parts.iter().map(|p| p.chapters.len()).sum(),
            lessons: self
                .parts
                .iter()
                .flat_map(|p| &p.chapters)
                .map(|c| c.lessons.len())
                .sum(),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.parts.is_empty() {
            anyhow::bail!("outline has no parts");
        }

        let mut part_slugs = HashSet::new();
        for part in &self.parts {
            validate_segment(&part.part).with_context(|| format!("part slug {:?}", part.part))?;
            if part.title.trim().is_empty() {
                anyhow::bail!("part {} has an empty title", part.part);
            }
            if !part_slugs.insert(part.part.as_str()) {
                anyhow::bail!("duplicate part slug: {}", part.part);
            }

            let mut chapter_slugs = HashSet::new();
            for chapter in &part.chapters {
                validate_segment(&chapter.chapter).with_context(|| {
                    format!("chapter slug {:?} in part {}", chapter.chapter, part.part)
                })?;
                if chapter.title.trim().is_empty() {
                    anyhow::bail!(
                        "chapter {}/{} has an empty title",
                        part.part,
                        chapter.chapter
                    );
                }
                if !chapter_slugs.insert(chapter.chapter.as_str()) {
                    anyhow::bail!(
                        "duplicate chapter slug in part {}: {}",
                        part.part,
                        chapter.chapter
                    );
                }

                let mut lesson_names = HashSet::new();
                for name in &chapter.lessons {
                    validate_segment(name).with_context(|| {
                        format!(
                            "lesson name {name:?} in chapter {}/{}",
                            part.part, chapter.chapter
                        )
                    })?;
                    if !lesson_names.insert(name.as_str()) {
                        anyhow::bail!(
                            "duplicate lesson in chapter {}/{}: {name}",
                            part.part,
                            chapter.chapter
                        );
                    }
                }
            }
        }

        Ok(())
    }

    /// The Node.js tutorial table the site ships with.
    pub fn builtin() -> Self {
        Self {
            parts: vec![
                part(
                    "1-fundamentals",
                    "Part 1: Node.js Fundamentals",
                    vec![
                        chapter(
                            "1-getting-started",
                            "Chapter 1: Getting Started",
                            &[
                                "welcome",
                                "globals",
                                "process",
                                "environment-variables",
                                "command-line-options",
                            ],
                        ),
                        chapter(
                            "2-essential-builtins",
                            "Chapter 2: Essential Built-ins",
                            &["console", "timers", "errors", "buffer", "utilities"],
                        ),
                        chapter(
                            "3-paths-and-urls",
                            "Chapter 3: Working with Paths & URLs",
                            &["path", "url", "query-strings", "punycode"],
                        ),
                    ],
                ),
                part(
                    "2-module-system",
                    "Part 2: Module System & Package Management",
                    vec![
                        chapter(
                            "1-understanding-modules",
                            "Chapter 1: Understanding Modules",
                            &["commonjs-modules", "ecmascript-modules", "node-module-api"],
                        ),
                        chapter(
                            "2-building-packages",
                            "Chapter 2: Building Packages",
                            &["packages", "typescript-support"],
                        ),
                    ],
                ),
                part(
                    "3-filesystem-and-data",
                    "Part 3: File System & Data",
                    vec![
                        chapter(
                            "1-file-operations",
                            "Chapter 1: File Operations",
                            &[
                                "filesystem-basics",
                                "reading-writing-files",
                                "file-streams",
                                "working-with-directories",
                            ],
                        ),
                        chapter(
                            "2-data-encoding",
                            "Chapter 2: Data Encoding & Compression",
                            &["string-decoder", "zlib-compression", "buffer-in-depth"],
                        ),
                        chapter("3-database", "Chapter 3: Database Integration", &["sqlite"]),
                    ],
                ),
                part(
                    "4-web-and-network",
                    "Part 4: Web & Network Programming",
                    vec![
                        chapter(
                            "1-http-fundamentals",
                            "Chapter 1: HTTP Fundamentals",
                            &[
                                "building-http-servers",
                                "http-clients",
                                "request-response-handling",
                                "routing-basics",
                            ],
                        ),
                        chapter(
                            "2-advanced-http",
                            "Chapter 2: Advanced HTTP",
                            &["https", "http2", "web-streams-api"],
                        ),
                        chapter(
                            "3-network-protocols",
                            "Chapter 3: Network Protocols",
                            &["net-tcp", "udp-datagram", "dns", "tls-ssl"],
                        ),
                    ],
                ),
                part(
                    "5-async-programming",
                    "Part 5: Asynchronous Programming",
                    vec![
                        chapter(
                            "1-async-patterns",
                            "Chapter 1: Async Patterns",
                            &[
                                "callbacks-promises-async-await",
                                "events-eventemitter",
                                "stream-fundamentals",
                            ],
                        ),
                        chapter(
                            "2-advanced-async",
                            "Chapter 2: Advanced Async",
                            &["async-hooks", "asynchronous-context-tracking"],
                        ),
                        chapter(
                            "3-stream-mastery",
                            "Chapter 3: Stream Mastery",
                            &[
                                "readable-writable-transform",
                                "piping-backpressure",
                                "stream-best-practices",
                            ],
                        ),
                    ],
                ),
                part(
                    "6-security-and-crypto",
                    "Part 6: Security & Cryptography",
                    vec![
                        chapter(
                            "1-encryption-hashing",
                            "Chapter 1: Encryption & Hashing",
                            &["crypto-basics", "hashing-algorithms", "encryption-decryption"],
                        ),
                        chapter(
                            "2-web-standards",
                            "Chapter 2: Web Standards",
                            &["web-crypto-api", "permissions"],
                        ),
                    ],
                ),
                part(
                    "7-testing-and-debugging",
                    "Part 7: Testing & Debugging",
                    vec![
                        chapter(
                            "1-testing",
                            "Chapter 1: Testing",
                            &[
                                "test-runner-basics",
                                "writing-tests",
                                "assertion-testing",
                                "test-coverage",
                            ],
                        ),
                        chapter(
                            "2-debugging-tools",
                            "Chapter 2: Debugging Tools",
                            &["debugger", "inspector", "repl", "diagnostics-channel"],
                        ),
                    ],
                ),
                part(
                    "8-performance-and-production",
                    "Part 8: Performance & Production",
                    vec![
                        chapter(
                            "1-monitoring",
                            "Chapter 1: Monitoring",
                            &["performance-hooks", "trace-events", "report-generation"],
                        ),
                        chapter(
                            "2-scaling-applications",
                            "Chapter 2: Scaling Applications",
                            &["child-processes", "worker-threads", "cluster"],
                        ),
                    ],
                ),
                part(
                    "9-advanced-io-and-system",
                    "Part 9: Advanced I/O & System",
                    vec![
                        chapter(
                            "1-interactive-io",
                            "Chapter 1: Interactive I/O",
                            &["readline", "tty"],
                        ),
                        chapter(
                            "2-system-information",
                            "Chapter 2: System Information",
                            &["os-module", "internationalization"],
                        ),
                    ],
                ),
                part(
                    "10-native-and-advanced",
                    "Part 10: Native & Advanced Topics",
                    vec![
                        chapter(
                            "1-native-addons",
                            "Chapter 1: Native Addons",
                            &["cpp-addons-basics", "node-api", "cpp-embedder-api"],
                        ),
                        chapter(
                            "2-runtime-internals",
                            "Chapter 2: Runtime Internals",
                            &["v8-engine", "vm-virtual-machine", "wasi"],
                        ),
                        chapter(
                            "3-advanced-deployment",
                            "Chapter 3: Advanced Deployment",
                            &[
                                "single-executable-applications",
                                "domain-deprecated",
                                "deprecated-apis",
                            ],
                        ),
                    ],
                ),
            ],
        }
    }
}

fn part(slug: &str, title: &str, chapters: Vec<Chapter>) -> Part {
    Part {
        part: slug.to_owned(),
        title: title.to_owned(),
        chapters,
    }
}

fn chapter(slug: &str, title: &str, lessons: &[&str]) -> Chapter {
    Chapter {
        chapter: slug.to_owned(),
        title: title.to_owned(),
        lessons: lessons.iter().map(|&l| l.to_owned()).collect(),
    }
}

/// `command-line-options` -> `Command Line Options`. No acronym handling.
pub fn lesson_title(name: &str) -> String {
    name.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn validate_segment(segment: &str) -> anyhow::Result<()> {
    if segment.trim().is_empty() {
        anyhow::bail!("must not be empty");
    }
    if segment == "." || segment == ".." {
        anyhow::bail!("must not be `.` or `..`");
    }
    if segment.contains(['/', '\\', '\0']) {
        anyhow::bail!("must not contain path separators or NUL");
    }
    Ok(())
}
