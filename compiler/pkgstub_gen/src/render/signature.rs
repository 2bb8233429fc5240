//! Method signatures and headers.
//!
//! ```text
//! sig {override.params(x: Integer).returns(String)}
//! def call(x); end
//! ```
//!
//! Both the `sig` and the `def` fall back to one entry per line once they
//! get too wide; the `sig` also does once it has too many parameters.

use super::Renderer;
use pkgstub_ir::{MethodRef, Name};
use pkgstub_types::{MethodFlags, SymbolTable, Type, TypeConstraint};

/// Widest single-line `sig` or `def`.
pub const MAX_PRETTY_WIDTH: usize = 80;

/// Most parameters a single-line `sig` may list.
pub const MAX_PRETTY_SIG_ARGS: usize = 4;

/// Default value written for optional parameters.
const PLACEHOLDER_DEFAULT: &str = "T.let(T.unsafe(nil), T.untyped)";

/// The receiver a method is viewed through.
///
/// Stubs declare members where they are defined, so rendering uses the
/// empty view. A parameterized receiver instantiates the owner's type
/// members, its self type, and any outstanding method-level bindings.
#[derive(Clone, Debug, Default)]
pub struct MethodView<'v> {
    pub receiver: Option<Type>,
    pub constraint: Option<&'v TypeConstraint>,
}

impl<'v> MethodView<'v> {
    pub fn new(receiver: Option<Type>, constraint: Option<&'v TypeConstraint>) -> Self {
        MethodView {
            receiver,
            constraint,
        }
    }

    /// `declared`, a type in the signature of `method`, as seen through
    /// this view. Missing types become `T.untyped`.
    pub fn result_type(&self, table: &SymbolTable, declared: Option<&Type>, method: MethodRef) -> Type {
        let mut ty = declared.cloned().unwrap_or(Type::Untyped);
        if let Some(receiver) = &self.receiver {
            if let Type::Applied { class, args } = receiver {
                ty = table.as_seen_from(&ty, table.method(method).owner, *class, args);
            }
            ty = SymbolTable::replace_self_type(&ty, receiver);
        }
        if let Some(constraint) = self.constraint {
            ty = SymbolTable::instantiate(&ty, constraint);
        }
        ty
    }
}

impl Renderer<'_> {
    /// The `sig` for `method`, single-line when it fits.
    pub(super) fn pretty_sig(&mut self, method: MethodRef, view: &MethodView<'_>) -> String {
        let table = self.table;
        let data = table.method(method);

        let result = view.result_type(table, data.result_type.as_ref(), method);
        self.enqueue_type(&result);
        let returns = if result.is_void() {
            "void".to_owned()
        } else {
            format!("returns({})", table.show(&result))
        };

        let sig_call = if data.flags.contains(MethodFlags::FINAL) {
            "sig(:final)"
        } else {
            "sig"
        };
        let flags: Vec<&str> = [
            (MethodFlags::ABSTRACT, "abstract"),
            (MethodFlags::OVERRIDABLE, "overridable"),
            (MethodFlags::OVERRIDE, "override"),
        ]
        .into_iter()
        .filter(|(flag, _)| data.flags.contains(*flag))
        .map(|(_, text)| text)
        .collect();
        let type_params: Vec<String> = data
            .type_params
            .iter()
            .map(|&name| format!(":{}", table.name_text(name)))
            .collect();
        let mut params = Vec::with_capacity(data.params.len());
        for param in data.params.iter().filter(|param| !param.is_synthetic_block()) {
            let ty = view.result_type(table, param.ty.as_ref(), method);
            params.push(format!("{}: {}", table.name_text(param.name), self.show_type(&ty)));
        }

        let mut prefix = String::new();
        for flag in &flags {
            prefix.push_str(flag);
            prefix.push('.');
        }
        if !type_params.is_empty() {
            prefix.push_str(&format!("type_parameters({}).", type_params.join(", ")));
        }
        let params_inline = if params.is_empty() {
            String::new()
        } else {
            format!("params({}).", params.join(", "))
        };
        let oneline = format!("{sig_call} {{{prefix}{params_inline}{returns}}}");
        if oneline.len() <= MAX_PRETTY_WIDTH && params.len() <= MAX_PRETTY_SIG_ARGS {
            return oneline;
        }

        let mut body = String::new();
        for flag in &flags {
            body.push_str(flag);
            body.push_str("\n  .");
        }
        if !type_params.is_empty() {
            body.push_str(&format!("type_parameters({})\n  .", type_params.join(", ")));
        }
        if !params.is_empty() {
            body.push_str(&format!("params(\n    {}\n  )\n  .", params.join(",\n    ")));
        }
        format!("{sig_call} do\n  {body}{returns}\nend")
    }

    /// The `def` header for `method`, without the trailing `; end`.
    pub(super) fn pretty_def(&self, method: MethodRef) -> String {
        let table = self.table;
        let data = table.method(method);

        let visibility = if data.is_private() {
            "private "
        } else if data.is_protected() {
            "protected "
        } else {
            ""
        };
        let receiver = if table.class(data.owner).is_companion() {
            "self."
        } else {
            ""
        };
        let name = table.name_text(data.name);

        let args: Vec<String> = data
            .params
            .iter()
            .filter(|param| !param.is_synthetic_block())
            .map(|param| {
                let name = table.name_text(param.name);
                if param.is_repeated() {
                    let marker = if param.is_keyword() { "**" } else { "*" };
                    format!("{marker}{name}")
                } else if param.is_keyword() {
                    if param.has_default() {
                        format!("{name}: {PLACEHOLDER_DEFAULT}")
                    } else {
                        format!("{name}:")
                    }
                } else if param.is_block() {
                    format!("&{name}")
                } else if param.has_default() {
                    format!("{name} = {PLACEHOLDER_DEFAULT}")
                } else {
                    name.to_owned()
                }
            })
            .collect();

        if args.is_empty() {
            return format!("{visibility}def {receiver}{name}");
        }
        let oneline = format!("{visibility}def {receiver}{name}({})", args.join(", "));
        if oneline.len() <= MAX_PRETTY_WIDTH {
            return oneline;
        }
        format!(
            "{visibility}def {receiver}{name}(\n  {}\n)",
            args.join(",\n  ")
        )
    }

    /// A method declared inline in its namespace body: signature (if any)
    /// and an empty body. Private methods are recorded but not written.
    pub(super) fn emit_method(&mut self, method: MethodRef, view: &MethodView<'_>) {
        let table = self.table;
        let data = table.method(method);
        if data.name == Name::STATIC_INIT {
            return;
        }
        if !self.state.mark_emitted(method.into()) {
            return;
        }
        if data.is_private() {
            return;
        }
        for ty in data.params.iter().filter_map(|param| param.ty.as_ref()) {
            self.enqueue_type(ty);
        }
        if data.has_sig() {
            let sig = self.pretty_sig(method, view);
            self.out.println(&sig);
        }
        let def = self.pretty_def(method);
        self.out.println(&format!("{def}; end"));
    }
}
