use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored catway carries a category outside of `long`/`short`.
    ///
    /// Only possible if the database was edited by hand. Results in a 500 Internal
    /// Server Error with a generic message returned to client.
    #[error("Catway {id} has unknown stored category '{value}'")]
    UnknownCatwayCategory {
        /// ID of the catway row
        id: i32,
        /// The stored value
        value: String,
    },
}
