use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitbarsError>;

#[derive(Error, Debug)]
pub enum GitbarsError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Git discover error: {0}")]
    GitDiscover(#[from] Box<gix::discover::Error>),
    #[error("Commit error: {0}")]
    Commit(#[from] Box<gix::object::commit::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Object find with conversion error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
    #[error("Diff tree to tree error: {0}")]
    DiffTreeToTree(#[from] Box<gix::repository::diff_tree_to_tree::Error>),
}

// gix errors are large; keep them boxed inside the enum.
impl From<gix::discover::Error> for GitbarsError {
    fn from(err: gix::discover::Error) -> Self {
        GitbarsError::GitDiscover(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for GitbarsError {
    fn from(err: gix::object::commit::Error) -> Self {
        GitbarsError::Commit(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for GitbarsError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        GitbarsError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for GitbarsError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        GitbarsError::HeadPeel(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for GitbarsError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        GitbarsError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for GitbarsError {
    fn from(err: gix::objs::decode::Error) -> Self {
        GitbarsError::ObjectDecode(Box::new(err))
    }
}

impl From<gix::repository::diff_tree_to_tree::Error> for GitbarsError {
    fn from(err: gix::repository::diff_tree_to_tree::Error) -> Self {
        GitbarsError::DiffTreeToTree(Box::new(err))
    }
}
