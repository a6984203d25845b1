//! Placeholder markdown documents shown in place of module content.

use crate::error::ContentError;

/// Document shown for a module number outside the course.
#[must_use]
pub fn not_found_document(number: u32) -> String {
    format!(
        "# Module {number}\n\nContent not found for this module. Please check that the file exists."
    )
}

/// Document shown when fetching a known module's content fails.
#[must_use]
pub fn load_error_document(number: u32) -> String {
    format!(
        "# Error Loading Module {number}\n\nThere was an error loading the content for this module. Please try again later."
    )
}

#[must_use]
pub fn placeholder_for(err: &ContentError) -> String {
    match err {
        ContentError::UnknownModule(number) => not_found_document(*number),
        ContentError::FetchFailure { module, .. } => load_error_document(*module),
    }
}
