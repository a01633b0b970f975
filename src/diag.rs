/* Structured diagnostics.
 *
 * The generation core raises (key, args) pairs and never formats user-facing
 * text itself; rendering happens here against an explicit message catalog
 * handed to the reporter at construction time. No process-wide lookup table.
 */

use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub key: &'static str,
    pub args: Vec<String>,
}

impl Diagnostic {
    pub fn new(key: &'static str, args: Vec<String>) -> Self {
        Self { key, args }
    }
}

pub struct MessageCatalog {
    messages: IndexMap<&'static str, &'static str>,
}

impl MessageCatalog {
    /// The built-in English catalog.
    pub fn built_in() -> Self {
        let mut messages = IndexMap::new();
        messages.insert("jni.sigerror", "signature computation failed for {0}: {1}");
        messages.insert("jni.unknown.type", "unknown type in class {0}: {1}");
        messages.insert(
            "jniclass.missing.namespace",
            "class {0} does not define a namespace",
        );
        messages.insert(
            "tried.to.define.non.static",
            "tried to fold a constant for non-static field {0}",
        );
        Self { messages }
    }

    /// Render a diagnostic, substituting `{0}`, `{1}`, ... with its args.
    pub fn render(&self, diag: &Diagnostic) -> String {
        let template = self.messages.get(diag.key).copied().unwrap_or(diag.key);
        let mut text = template.to_string();
        for (i, arg) in diag.args.iter().enumerate() {
            text = text.replace(&format!("{{{}}}", i), arg);
        }
        text
    }
}

/* Collects class-scoped errors during a batch run. Errors here do not abort
 * the batch; the caller decides the exit status from the count. */
pub struct Reporter {
    catalog: MessageCatalog,
    errors: Vec<Diagnostic>,
}

impl Reporter {
    pub fn new(catalog: MessageCatalog) -> Self {
        Self {
            catalog,
            errors: Vec::new(),
        }
    }

    pub fn error(&mut self, diag: Diagnostic) {
        eprintln!("error: {}", self.catalog.render(&diag));
        self.errors.push(diag);
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }
}
