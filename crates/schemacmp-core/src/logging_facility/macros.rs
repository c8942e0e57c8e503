//! Canonical logging macros
//!
//! Every operation boundary is logged with the same field layout
//! (`component`, `op`, `event`), so log consumers and tests can match on
//! operation names without parsing messages. Extra fields go after the
//! required ones, using ordinary `tracing` field syntax. Callers need no
//! direct dependency on `tracing` or `schemacmp-core-types`.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_event {
    ($level:ident, $op:expr, $event:ident $(, $($field:tt)*)?) => {
        $crate::__macro_support::tracing::$level!(
            component = module_path!(),
            op = $op,
            event = $crate::__macro_support::schema::$event
            $(, $($field)*)?
        )
    };
}

/// Log the start of an operation
///
/// ```
/// # use schemacmp_core::log_op_start;
/// log_op_start!("load_schema");
/// log_op_start!("load_schema", side = "local");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(info, $op, EVENT_START $(, $($field)*)?)
    };
}

/// Log the successful end of an operation; `duration_ms` is required
///
/// ```
/// # use schemacmp_core::log_op_end;
/// log_op_end!("compare_elements", duration_ms = 3u64);
/// log_op_end!("compare_elements", duration_ms = 3u64, differences_found = false);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(info, $op, EVENT_END, duration_ms = $duration $(, $($field)*)?)
    };
}

/// Log an operation that ended in an error
///
/// Accepts anything convertible into [`crate::errors::ExError`] and records
/// its kind and stable code.
///
/// ```
/// # use schemacmp_core::log_op_error;
/// use schemacmp_core::errors::{ExError, ExErrorKind};
///
/// let err = ExError::new(ExErrorKind::MissingFile);
/// log_op_error!("load_schema", err, duration_ms = 0u64);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__log_op_event!(
            error,
            $op,
            EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code()
            $(, $($field)*)?
        )
    }};
}
