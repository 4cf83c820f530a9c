pub mod ast;
pub mod config;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;
pub mod scalar;
pub mod serializer;

pub use ast::{Node, Scalar, Value};
pub use config::{ComponentKind, DataFile};
pub use error::CfgError;
pub use parser::{parse_document, Parser};
pub use serializer::serialize;
