mod errors;
mod logging;
mod testing;

pub use errors::SharedError;
pub use logging::{init_logging, init_test_logging};
pub use testing::{request_with_headers, response_with_headers};
