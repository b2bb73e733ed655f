pub mod engine;
pub mod fanout;
pub mod inviter;
pub mod normalizer;
pub mod reader;
pub mod resolver;
pub mod validator;
