pub mod config;
pub mod ir;
pub mod kcs;
pub mod task;

use std::path::Path;

/// Write `content` to `output`, or to stdout when no path is given.
pub(crate) fn write_output(output: Option<&Path>, content: &str) -> std::io::Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, content)
        }
        None => {
            print!("{content}");
            if !content.ends_with('\n') {
                println!();
            }
            Ok(())
        }
    }
}

/// Read text from `--file`, `--text`, or fail if neither was given.
pub(crate) fn read_input(
    file: Option<&Path>,
    text: Option<String>,
) -> Result<(String, Option<String>), Box<dyn std::error::Error>> {
    match (file, text) {
        (Some(path), _) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned());
            Ok((content, name))
        }
        (None, Some(text)) => Ok((text, None)),
        (None, None) => Err("either --file or --text is required".into()),
    }
}
