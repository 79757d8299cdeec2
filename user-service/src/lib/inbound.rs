use std::any::Any;

pub mod grpc;
pub mod http;

/// Client-facing text for every internal failure; details stay in the logs.
pub(crate) const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Best-effort text of a caught panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic type")
}
