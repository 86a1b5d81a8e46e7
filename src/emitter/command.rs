//! Command handler emission.
//!
//! Reserved names (`quit`, `clear`) get fixed auto-generated bodies and ignore
//! the spec's documentation and argument fields entirely. Every other command
//! gets a generic stub: the argument list embedded verbatim in the signature,
//! the documentation as the docstring, and either an exception-guarded no-op
//! or a bare `pass` as the body.
//!
//! Each emitter returns the handler as a vector of source lines, indented for
//! placement inside the generated class. A declined reserved command is the
//! driver's concern; nothing here decides whether to emit.

use crate::types::CommandSpec;

/// Fixed handler for the reserved `quit` command: terminates the process.
pub fn emit_quit_handler() -> Vec<String> {
    vec![
        "    def do_quit(self, arg):".to_string(),
        "        \"\"\"Quit the console.\"\"\"".to_string(),
        "        quit()".to_string(),
    ]
}

/// Fixed handler for the reserved `clear` command: tries the Windows clear
/// command and falls back to the POSIX one.
pub fn emit_clear_handler() -> Vec<String> {
    vec![
        "    def do_clear(self, arg):".to_string(),
        "        \"\"\"Clear the console.\"\"\"".to_string(),
        "        try:".to_string(),
        "            os.system('cls')".to_string(),
        "        except OSError:".to_string(),
        "            os.system('clear')".to_string(),
    ]
}

/// Generic handler stub for a non-reserved command.
///
/// With `exceptions` the body is a guarded no-op whose handler prints the
/// caught error, in red when `red_errors` is set. Without it the body is a
/// bare `pass`.
pub fn emit_generic_handler(spec: &CommandSpec, exceptions: bool, red_errors: bool) -> Vec<String> {
    let params = if spec.arg_spec.trim().is_empty() {
        "self".to_string()
    } else {
        format!("self, {}", spec.arg_spec)
    };

    let mut lines = vec![
        format!("    def do_{}({}):", spec.name, params),
        format!("        \"\"\"{}\"\"\"", spec.documentation),
    ];

    if exceptions {
        lines.push("        try:".to_string());
        lines.push("            pass".to_string());
        lines.push("        except Exception as e:".to_string());
        if red_errors {
            lines.push("            print(f\"{Fore.RED}{e}\")".to_string());
        } else {
            lines.push("            print(e)".to_string());
        }
    } else {
        lines.push("        pass".to_string());
    }

    lines
}
