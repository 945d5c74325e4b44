pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, PlanFormatArg};
pub use handlers::{handle_detect, ERROR_STATUS_CODE, FAIL_STATUS_CODE, PASS_STATUS_CODE};
