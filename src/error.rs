/// Error returned when an empty function wrapper is invoked.
///
/// # Example
///
/// ```
/// # use tfn::{EmptyCall, LTFn};
/// let f: LTFn<fn(u32) -> u32> = LTFn::empty();
///
/// assert_eq!(f.call(1), Err(EmptyCall));
/// assert_eq!(EmptyCall.to_string(), "bad function call");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, thiserror::Error)]
#[error("bad function call")]
pub struct EmptyCall;
