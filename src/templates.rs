use anyhow::Context as _;
use serde::Serialize;

pub const META_FILE: &str = "meta.md";
pub const CONTENT_FILE: &str = "content.md";
pub const FILES_DIR: &str = "_files";
pub const EXAMPLE_FILE: &str = "index.js";
pub const PACKAGE_FILE: &str = "package.json";

const PACKAGE_VERSION: &str = "1.0.0";

pub fn part_meta(title: &str) -> String {
    meta("part", title)
}

pub fn chapter_meta(title: &str) -> String {
    meta("chapter", title)
}

fn meta(kind: &str, title: &str) -> String {
    format!("---\ntype: {kind}\ntitle: \"{title}\"\n---\n")
}

pub fn lesson_content(title: &str) -> String {
    let mut md = String::new();
    md.push_str("---\n");
    md.push_str("type: lesson\n");
    md.push_str(&format!("title: {title}\n"));
    md.push_str(&format!("focus: /{EXAMPLE_FILE}\n"));
    md.push_str("---\n\n");
    md.push_str(&format!("# {title}\n\n"));
    md.push_str(&format!(
        "> This lesson covers the Node.js **{title}** API.\n\n"
    ));
    md.push_str("Content coming soon...\n\n");
    md.push_str("## Quick Example\n\n");
    md.push_str("Check the code editor for a working example!\n");
    md
}

pub fn lesson_example(title: &str) -> String {
    format!("// {title} example\nconsole.log('Learning {title}!');\n\n// Add your code here\n")
}

#[derive(Debug, Serialize)]
struct PackageDescriptor<'a> {
    name: String,
    #[serde(rename = "type")]
    module_type: &'a str,
    version: &'a str,
}

pub fn package_descriptor(part_slug: &str) -> anyhow::Result<String> {
    let descriptor = PackageDescriptor {
        name: format!("nodejs-{part_slug}"),
        module_type: "module",
        version: PACKAGE_VERSION,
    };
    let mut json =
        serde_json::to_string_pretty(&descriptor).context("serialize package descriptor")?;
    json.push('\n');
    Ok(json)
}
