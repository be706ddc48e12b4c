use std::path::Path;

use anyhow::{bail, Context, Result};

/// Refuse to write generated output over the request file it came from.
///
/// An output path that does not exist yet cannot be the request file, which
/// must already exist to be read. Existing paths are compared after symlinks
/// and `..` are resolved.
pub fn ensure_output_not_same(output: &Path, input: &Path) -> Result<()> {
    if input == Path::new("-") || !output.exists() {
        return Ok(());
    }

    let out_real = output
        .canonicalize()
        .with_context(|| format!("failed to resolve output path {}", output.display()))?;
    let in_real = input
        .canonicalize()
        .with_context(|| format!("failed to resolve request path {}", input.display()))?;
    if out_real == in_real {
        bail!(
            "refusing to overwrite request file: output {} matches input {}",
            output.display(),
            input.display()
        );
    }
    Ok(())
}
