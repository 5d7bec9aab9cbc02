pub mod dispatcher;

pub use dispatcher::{Dispatcher, SampleMapper};
