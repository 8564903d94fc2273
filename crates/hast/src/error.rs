use thiserror::Error;

#[derive(Error, Debug)]
pub enum HastError {
    #[error("XML parsing error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("JSON tree error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a root or element node at the top of the tree, found '{0}'")]
    UnexpectedTopLevel(&'static str),
}
