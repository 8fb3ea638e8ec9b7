use std::path::{Path, PathBuf};

use anyhow::Context;
use walkdir::WalkDir;

/// File name suffixes treated as shader source, compared case-insensitively.
const SHADER_SUFFIXES: [&str; 3] = [".glsl", ".frag", ".vert"];

pub fn is_shader_source(file_name: &str) -> bool {
    let lowered = file_name.to_ascii_lowercase();
    SHADER_SUFFIXES
        .iter()
        .any(|suffix| lowered.ends_with(suffix))
}

/// Re-exports shader text as a JS string-valued module. The text is embedded
/// verbatim; a backtick or `${` in the shader breaks the emitted literal.
pub fn wrap_module(source: &str) -> String {
    format!("export default `{source}`;\n")
}

/// Wraps a single shader file and writes the module next to it as
/// `<path>.js`, returning the written path.
pub fn jsify_file(path: &Path) -> anyhow::Result<PathBuf> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("could not read shader: {}", path.display()))?;
    let source = String::from_utf8(bytes)
        .with_context(|| format!("shader is not valid UTF-8: {}", path.display()))?;

    let mut out_path = path.as_os_str().to_owned();
    out_path.push(".js");
    let out_path = PathBuf::from(out_path);

    std::fs::write(&out_path, wrap_module(&source))
        .with_context(|| format!("could not write module: {}", out_path.display()))?;

    Ok(out_path)
}

/// Walks `root` in file-name order and wraps every shader source file found,
/// printing each written path. Stops at the first error; modules already
/// written stay on disk.
pub fn jsify_tree(root: &Path) -> anyhow::Result<usize> {
    let mut wrapped = 0;
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("could not walk source tree: {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !is_shader_source(&entry.file_name().to_string_lossy()) {
            log::debug!("skipping {}", entry.path().display());
            continue;
        }

        let out_path = jsify_file(entry.path())?;
        println!("{}", out_path.display());
        wrapped += 1;
    }

    Ok(wrapped)
}
