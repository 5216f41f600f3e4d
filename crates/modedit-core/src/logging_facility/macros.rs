//! Canonical logging macros
//!
//! Every operation logs `component`, `op` and `event` so start, end and
//! failure lines for one operation can be correlated.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use modedit_core::log_op_start;
/// log_op_start!("write_records");
/// log_op_start!("write_records", file_path = "/tmp/modes.json");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = modedit_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = modedit_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use modedit_core::log_op_end;
/// log_op_end!("write_records", duration_ms = 42);
/// log_op_end!("write_records", duration_ms = 42, record_count = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = modedit_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = modedit_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log a degraded step inside an operation that still goes on
///
/// # Example
///
/// ```
/// # use modedit_core::log_op_warn;
/// log_op_warn!("write_records", "backup failed", file_path = "/tmp/modes.json");
/// ```
#[macro_export]
macro_rules! log_op_warn {
    ($op:expr, $msg:expr) => {
        tracing::warn!(
            component = module_path!(),
            op = $op,
            "{}",
            $msg
        );
    };
    ($op:expr, $msg:expr, $($field:tt)*) => {
        tracing::warn!(
            component = module_path!(),
            op = $op,
            $($field)*,
            "{}",
            $msg
        );
    };
}

/// Log an operation error
///
/// # Example
///
/// ```
/// # use modedit_core::log_op_error;
/// # use modedit_core::errors::{ExError, ExErrorKind};
/// let err = ExError::new(ExErrorKind::NotFound).with_message("Modes file not found");
/// log_op_error!("read_records", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = modedit_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            err_message = ex_err.message(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = modedit_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            err_message = ex_err.message(),
            $($field)*
        );
    }};
}
