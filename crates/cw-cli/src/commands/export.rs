use std::path::Path;

use cw_session::SessionConfig;

pub fn run(
    config: SessionConfig,
    script: Option<&str>,
    format: &str,
    output: Option<&Path>,
) -> Result<(), String> {
    let mut session = super::scripted_session(config, script)?;
    let content = session
        .process(&format!("export {format}"))
        .map_err(|e| e.to_string())?;

    match output {
        Some(path) => {
            std::fs::write(path, &content)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            println!("  Exported journal to {}", path.display());
        }
        None => print!("{content}"),
    }

    Ok(())
}
