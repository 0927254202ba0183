pub mod artifact;
pub mod block;
pub mod conversion;
pub mod definition;
pub mod id;
pub mod path;
pub mod stroke;

pub use artifact::*;
pub use block::*;
pub use conversion::*;
pub use definition::*;
pub use id::*;
pub use path::*;
pub use stroke::*;
