//! Execution of model-generated code inside an embedded Python interpreter.
//!
//! The generated code runs with full interpreter privileges; there is no
//! sandboxing and no resource limit. Faults never escape this module: callers
//! always get a `(code, error_text)` pair, with an empty error on success.

use pyo3::ffi::c_str;
use pyo3::prelude::*;
use pyo3::types::PyModule;
use std::ffi::CString;
use std::sync::OnceLock;

use crate::error::Error;
use fxgen_core::extract::extract_script;

static CAPTURE_MODULE: OnceLock<Py<PyModule>> = OnceLock::new();

fn capture_module(py: Python<'_>) -> PyResult<Py<PyModule>> {
    if let Some(module) = CAPTURE_MODULE.get() {
        return Ok(module.clone_ref(py));
    }

    let code = CString::new(include_str!("../../python/capture.py"))?;
    let module = PyModule::from_code(py, code.as_c_str(), c_str!("capture.py"), c_str!("capture"))?;
    Ok(CAPTURE_MODULE.get_or_init(|| module.unbind()).clone_ref(py))
}

/// Execute a code string and capture the value of its trailing bare
/// expression, if any.
///
/// The code is parsed into a syntax tree; when the final top-level statement
/// is a bare expression it is rewritten to assign the reserved `_result`
/// name, then the tree is compiled and executed in a fresh, isolated
/// namespace. Any fault raised by the code (including its embedded test
/// assertions) is returned as [`Error::Execution`] carrying the message and
/// full traceback text.
pub fn run(code: &str) -> Result<Option<String>, Error> {
    Python::attach(|py| {
        let module = capture_module(py).map_err(|e| failure(py, e))?;
        let value = module
            .bind(py)
            .call_method1("run", (code,))
            .map_err(|e| failure(py, e))?;

        if value.is_none() {
            Ok(None)
        } else {
            value
                .repr()
                .map(|repr| Some(repr.to_string()))
                .map_err(|e| failure(py, e))
        }
    })
}

fn failure(py: Python<'_>, err: PyErr) -> Error {
    let traceback = err
        .traceback(py)
        .and_then(|tb| tb.format().ok())
        .unwrap_or_default();

    Error::Execution {
        message: err.to_string(),
        traceback,
    }
}

/// Extract the fenced code from a model reply and execute it.
///
/// Returns the `(code, error_text)` pair the repair loop feeds on;
/// `error_text` is empty when execution raised no fault. A reply without a
/// fenced block yields the extraction sentinel as "code", which predictably
/// fails to parse and feeds the loop like any other error.
pub fn execute_script(reply: &str) -> (String, String) {
    let code = extract_script(reply);
    let error = match run(&code) {
        Ok(_) => String::new(),
        Err(fault) => fault.to_string(),
    };

    (code, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxgen_core::extract::NO_SOLUTION;

    #[test]
    fn test_trailing_expression_is_captured() {
        assert_eq!(run("1 + 1").unwrap(), Some("2".to_string()));
    }

    #[test]
    fn test_preceding_statements_run_before_capture() {
        assert_eq!(run("x = 2\nx * 3").unwrap(), Some("6".to_string()));
    }

    #[test]
    fn test_no_trailing_expression_yields_no_value() {
        assert_eq!(run("x = 1").unwrap(), None);
        assert_eq!(run("").unwrap(), None);
    }

    #[test]
    fn test_fault_is_contained_and_reported() {
        let fault = run("raise ValueError('boom')").unwrap_err();
        let text = fault.to_string();
        assert!(text.contains("boom"));
        assert!(text.contains("Traceback"));
    }

    #[test]
    fn test_assertion_failures_are_faults() {
        let fault = run("def test():\n    assert 1 == 2\n\ntest()").unwrap_err();
        assert!(fault.to_string().contains("AssertionError"));
    }

    #[test]
    fn test_namespaces_are_isolated_between_runs() {
        run("leaked = 42").unwrap();
        assert!(run("leaked").is_err());
    }

    #[test]
    fn test_execute_script_success() {
        let (code, error) = execute_script("```python\nx = 1\n```");
        assert_eq!(code, "x = 1\n");
        assert!(error.is_empty());
    }

    #[test]
    fn test_execute_script_reports_faults() {
        let (code, error) = execute_script("```python\nundefined_name\n```");
        assert_eq!(code, "undefined_name\n");
        assert!(error.contains("NameError"));
    }

    #[test]
    fn test_execute_script_without_code_block() {
        // The sentinel is not valid Python, so it fails execution and feeds
        // the repair loop.
        let (code, error) = execute_script("Sorry, no code this time.");
        assert_eq!(code, NO_SOLUTION);
        assert!(!error.is_empty());
    }
}
