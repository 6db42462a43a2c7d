use anyhow::Result;
use gitclone_term::{Output, OutputError};
use libgitclone::CloneError;
use std::{result::Result as StdResult, sync::Arc};

/// Convert output-layer failures into domain errors.
pub fn map_output_error(err: OutputError) -> CloneError {
    match err {
        OutputError::Io(source) => CloneError::IoError(source),
    }
}

/// Emit an output result, mapping errors into `CloneError`.
pub fn emit(result: StdResult<(), OutputError>) -> Result<()> {
    result.map_err(map_output_error)?;
    Ok(())
}

/// Report a top-level failure and return the process exit code for it.
pub fn report_failure(output: &Arc<dyn Output>, err: &anyhow::Error) -> i32 {
    let exit_code = match err.downcast_ref::<CloneError>() {
        Some(clone_err) => clone_err.exit_code(),
        None => 1,
    };

    if let Err(display_err) = output.fail(&format!("{err:#}")) {
        eprintln!("Failed to report error via output handler: {display_err:#}");
    }
    if let Err(finish_err) = output.finish() {
        eprintln!("Failed to flush output handler: {finish_err:#}");
    }

    exit_code
}
