use std::fs::OpenOptions;
use std::io::{ErrorKind, Write as _};
use std::path::Path;

use anyhow::Context as _;

use crate::cli::GenerateArgs;
use crate::config::ScaffoldConfig;
use crate::outline::{Lesson, Outline, OutlineSummary, Part};
use crate::templates;

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let outline = crate::outline::load(args.outline.as_deref())?;
    let config = ScaffoldConfig::resolve(Path::new(&args.root))?;

    let report = generate(&outline, &config)?;

    println!("✅ Tutorial structure created successfully!");
    println!("{}", report.summary);
    Ok(())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateReport {
    /// Totals from the outline itself, skipped lessons included.
    pub summary: OutlineSummary,
    pub lessons_created: usize,
    pub lessons_skipped: usize,
}

/// Materializes `outline` under `config.root`.
///
/// Part and chapter `meta.md` files are rewritten on every run. A lesson whose
/// directory already exists is left untouched, so hand-edited lessons survive
/// re-runs. The first filesystem error aborts the run; whatever was written
/// before it stays on disk.
pub fn generate(outline: &Outline, config: &ScaffoldConfig) -> anyhow::Result<GenerateReport> {
    let mut report = GenerateReport {
        summary: outline.summary(),
        ..GenerateReport::default()
    };

    for part in &outline.parts {
        let part_dir = config.root.join(&part.part);
        tracing::info!(part = %part.part, dir = %part_dir.display(), "scaffold part");

        std::fs::create_dir_all(&part_dir)
            .with_context(|| format!("create part dir: {}", part_dir.display()))?;
        write_file(
            &part_dir.join(templates::META_FILE),
            &templates::part_meta(&part.title),
        )?;

        for chapter in &part.chapters {
            let chapter_dir = part_dir.join(&chapter.chapter);
            tracing::debug!(chapter = %chapter.chapter, "scaffold chapter");

            std::fs::create_dir_all(&chapter_dir)
                .with_context(|| format!("create chapter dir: {}", chapter_dir.display()))?;
            write_file(
                &chapter_dir.join(templates::META_FILE),
                &templates::chapter_meta(&chapter.title),
            )?;

            for lesson in chapter.lessons() {
                if scaffold_lesson(part, &chapter_dir, lesson)? {
                    report.lessons_created += 1;
                } else {
                    report.lessons_skipped += 1;
                }
            }
        }
    }

    tracing::info!(
        lessons_created = report.lessons_created,
        lessons_skipped = report.lessons_skipped,
        "scaffold finished"
    );

    Ok(report)
}

/// Returns `false` when the lesson directory was already there.
fn scaffold_lesson(part: &Part, chapter_dir: &Path, lesson: Lesson<'_>) -> anyhow::Result<bool> {
    let lesson_dir = chapter_dir.join(lesson.slug());

    // Non-recursive create doubles as the existence check, so a concurrent run
    // that got here first reads as a skip rather than an error.
    match std::fs::create_dir(&lesson_dir) {
        Ok(()) => {}
        Err(err) if err.kind() == ErrorKind::AlreadyExists => {
            if !lesson_dir.is_dir() {
                anyhow::bail!(
                    "lesson path exists but is not a directory: {}",
                    lesson_dir.display()
                );
            }
            tracing::info!(lesson = %lesson_dir.display(), "lesson exists; skipping");
            return Ok(false);
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("create lesson dir: {}", lesson_dir.display()));
        }
    }

    let files_dir = lesson_dir.join(templates::FILES_DIR);
    std::fs::create_dir(&files_dir)
        .with_context(|| format!("create lesson files dir: {}", files_dir.display()))?;

    let title = lesson.title();
    create_file(
        &lesson_dir.join(templates::CONTENT_FILE),
        &templates::lesson_content(&title),
    )?;
    create_file(
        &files_dir.join(templates::EXAMPLE_FILE),
        &templates::lesson_example(&title),
    )?;
    create_file(
        &files_dir.join(templates::PACKAGE_FILE),
        &templates::package_descriptor(&part.part)?,
    )?;

    tracing::debug!(lesson = %lesson_dir.display(), %title, "lesson created");
    Ok(true)
}

fn write_file(path: &Path, contents: &str) -> anyhow::Result<()> {
    std::fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}

fn create_file(path: &Path, contents: &str) -> anyhow::Result<()> {
    let mut file = OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(path)
        .with_context(|| format!("create {}", path.display()))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
