//! [`Handler`] abstractions.

/// Executable handler.
///
/// Everything behind a [`Handler`] in this workspace is in-memory, so the
/// execution is synchronous and runs to completion.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    ///
    /// # Errors
    ///
    /// Errors with [`Handler::Err`] if the execution fails.
    fn execute(&self, args: Args) -> Result<Self::Ok, Self::Err>;
}
