pub use error::EngineError;
pub use shares::{AllocatedShare, ShareWeight};
pub use split::{SplitMethod, distribute, validate_fixed};

mod error;
mod shares;
mod split;

type ResultEngine<T> = Result<T, EngineError>;
